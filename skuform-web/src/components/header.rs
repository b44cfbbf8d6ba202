use crate::dom;
use crate::i18n::{locales, set_lang, t};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(lang) = dom::select_value(&e) {
                set_lang(&lang);
                cb.emit(lang);
            }
        })
    };
    html! {
        <header role="banner">
            <div class="header-content">
                <div class="header-left">
                    <h1>{ t("app.title") }</h1>
                    <p class="subtitle">{ t("app.subtitle") }</p>
                </div>
                <nav aria-label={t("nav.language")} class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                </nav>
            </div>
        </header>
    }
}
