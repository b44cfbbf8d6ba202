
use crate::app::SubmitStatus;
use crate::i18n::{t, tr};
use skuform_core::{FormIssue, GroupKind};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub issues: Vec<FormIssue>,
    pub status: SubmitStatus,
    pub on_submit: Callback<()>,
}

fn group_label(group: GroupKind) -> String {
    t(&format!("group.{}.label", group.key()))
}

/// Localized sentence for one issue.
#[must_use]
pub fn issue_message(issue: &FormIssue) -> String {
    let (group, position, name) = match issue {
        FormIssue::UnsetOption { group, position }
        | FormIssue::AwaitingName { group, position }
        | FormIssue::MissingFieldName { group, position }
        | FormIssue::InvalidCharacterLimit {
            group, position, ..
        } => (*group, Some(position + 1), None),
        FormIssue::NoVariants { group, name } => (*group, None, Some(name.as_str())),
    };
    let group = group_label(group);
    let position = position.map(|p| p.to_string());
    let mut args = BTreeMap::new();
    args.insert("group", group.as_str());
    if let Some(position) = position.as_deref() {
        args.insert("position", position);
    }
    if let Some(name) = name {
        args.insert("name", name);
    }
    tr(&format!("issue.{}", issue.key()), Some(&args))
}

fn status_line(status: &SubmitStatus) -> Html {
    match status {
        SubmitStatus::Idle => html! {},
        SubmitStatus::Submitted(ack) => {
            let count = (ack.regular + ack.personalized).to_string();
            let mut args = BTreeMap::new();
            args.insert("count", count.as_str());
            html! { <p class="status done" role="status">{ tr("submit.done", Some(&args)) }</p> }
        }
        SubmitStatus::Dirty => html! { <p class="status dirty" role="status">{ t("submit.dirty") }</p> },
        SubmitStatus::Failed(error) => {
            let mut args = BTreeMap::new();
            args.insert("error", error.as_str());
            html! { <p class="status failed" role="alert">{ tr("submit.failed", Some(&args)) }</p> }
        }
    }
}

#[function_component(SubmitBar)]
pub fn submit_bar(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_submit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <footer class="submit-bar">
            if !p.issues.is_empty() {
                <div class="issues">
                    <h3>{ t("submit.issues_title") }</h3>
                    <ul>
                        { for p.issues.iter().map(|issue| html! {
                            <li class={classes!("issue", issue.key())}>{ issue_message(issue) }</li>
                        }) }
                    </ul>
                </div>
            }
            { status_line(&p.status) }
            <button type="button" class="submit-button" {onclick}>{ t("submit.button") }</button>
        </footer>
    }
}
