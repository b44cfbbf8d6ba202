use std::rc::Rc;

use skuform_core::{
    Ack, ConfigSource, Editor, EditorConfig, FormAction, GroupKind, SubmitHandler, VariationForm,
};
use yew::Reducible;

/// Messages the editor page dispatches against its form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMsg {
    Edit(GroupKind, FormAction),
    Submitted(Ack),
    SubmitFailed(String),
}

/// What the submit bar reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Nothing submitted yet.
    Idle,
    /// The last submit matches what is on screen.
    Submitted(Ack),
    /// The form changed after the last submit.
    Dirty,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub form: VariationForm,
    pub last_ack: Option<Ack>,
    pub last_error: Option<String>,
}

impl FormState {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            form: VariationForm::new(config),
            last_ack: None,
            last_error: None,
        }
    }

    /// Start from the editor's configuration, or the defaults if it fails to load.
    #[must_use]
    pub fn boot<C: ConfigSource, S: SubmitHandler>(editor: &Editor<C, S>) -> Self {
        let form = editor.create_form().unwrap_or_else(|err| {
            log::error!("editor config unavailable ({err}); using defaults");
            VariationForm::default()
        });
        Self {
            form,
            last_ack: None,
            last_error: None,
        }
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        if let Some(error) = &self.last_error {
            return SubmitStatus::Failed(error.clone());
        }
        match self.last_ack {
            None => SubmitStatus::Idle,
            Some(ack) if ack.fingerprint == self.form.fingerprint() => SubmitStatus::Submitted(ack),
            Some(_) => SubmitStatus::Dirty,
        }
    }
}

impl Reducible for FormState {
    type Action = FormMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormMsg::Edit(kind, action) => {
                if let Err(err) = next.form.apply(kind, action) {
                    log::warn!("{kind} group rejected edit: {err}");
                    return self;
                }
            }
            FormMsg::Submitted(ack) => {
                next.last_ack = Some(ack);
                next.last_error = None;
            }
            FormMsg::SubmitFailed(error) => {
                log::error!("submit failed: {error}");
                next.last_error = Some(error);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skuform_core::{FormEvent, OptionChoice};

    fn reduce(state: Rc<FormState>, msg: FormMsg) -> Rc<FormState> {
        state.reduce(msg)
    }

    #[test]
    fn edits_flow_through_the_form() {
        let state = Rc::new(FormState::new(EditorConfig::default_config()));
        let state = reduce(state, FormMsg::Edit(GroupKind::Regular, FormAction::AppendOption));
        let id = state.form.group(GroupKind::Regular).options()[0].id;
        let state = reduce(
            state,
            FormMsg::Edit(
                GroupKind::Regular,
                FormAction::ChooseType {
                    id,
                    choice: OptionChoice::Preset("Color".into()),
                },
            ),
        );
        assert_eq!(state.form.group(GroupKind::Regular).options()[0].name, "Color");
    }

    #[test]
    fn rejected_edit_keeps_the_same_state() {
        let state = Rc::new(FormState::new(EditorConfig::default_config()));
        let mut form = state.form.clone();
        let Ok(FormEvent::Appended(id)) = form.apply(GroupKind::Regular, FormAction::AppendOption)
        else {
            panic!("append failed");
        };
        let next = reduce(
            Rc::clone(&state),
            FormMsg::Edit(GroupKind::Regular, FormAction::RemoveOption { id }),
        );
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn boot_uses_bundled_config() {
        let editor = Editor::new(crate::config::StaticConfigSource, crate::submit::ConsoleSubmitter);
        let state = FormState::boot(&editor);
        assert_eq!(state.form.config().max_character_limit, Some(255));
        assert_eq!(state.status(), SubmitStatus::Idle);
    }

    #[test]
    fn status_tracks_submitted_fingerprint() {
        let state = Rc::new(FormState::new(EditorConfig::default_config()));
        assert_eq!(state.status(), SubmitStatus::Idle);

        let ack = Ack::for_tree(&state.form.tree());
        let state = reduce(state, FormMsg::Submitted(ack));
        assert_eq!(state.status(), SubmitStatus::Submitted(ack));

        let state = reduce(state, FormMsg::Edit(GroupKind::Personalized, FormAction::AppendOption));
        assert_eq!(state.status(), SubmitStatus::Dirty);

        let state = reduce(state, FormMsg::SubmitFailed("offline".into()));
        assert_eq!(state.status(), SubmitStatus::Failed("offline".into()));
    }
}
