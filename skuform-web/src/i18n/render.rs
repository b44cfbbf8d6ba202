use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else {
        "other"
    }
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let count = args
                .and_then(|m| m.get("count"))
                .and_then(|c| c.parse::<f64>().ok());
            let category = count.map_or("other", plural_category);
            map.get(category)
                .or_else(|| map.get("other"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}");
            let ph2 = format!("{{{k}}}");
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
/// A `count` argument selects the `one`/`other` plural form.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_selection_defaults() {
        let mut map = serde_json::Map::new();
        map.insert("one".into(), Value::String("one option".into()));
        map.insert("other".into(), Value::String("{count} options".into()));
        let value = Value::Object(map);
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(render_value(&value, Some(&args)).unwrap(), "one option");
        args.insert("count", "3");
        assert_eq!(render_value(&value, Some(&args)).unwrap(), "3 options");
    }

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Remove {value}! {{value}}!".into());
        let mut args = BTreeMap::new();
        args.insert("value", "Red");
        let resolved = render_value(&value, Some(&args)).unwrap();
        assert_eq!(resolved, "Remove Red! Red!");
    }

    #[test]
    fn missing_key_returns_key() {
        crate::i18n::set_lang("en");
        assert_eq!(t("does.not.exist"), "does.not.exist");
    }

    #[test]
    fn spanish_falls_back_per_key() {
        crate::i18n::set_lang("es");
        assert_eq!(t("variant.add"), "Añadir");
        crate::i18n::set_lang("en");
        assert_eq!(t("variant.exists"), "This variant already exists.");
    }
}
