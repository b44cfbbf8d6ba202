use std::rc::Rc;

use skuform_core::{Editor, FormAction, GroupKind};
use yew::prelude::*;

use crate::components::header::Header;
use crate::components::ui::option_group_panel::OptionGroupPanel;
use crate::components::ui::submit_bar::SubmitBar;
use crate::config::StaticConfigSource;
use crate::i18n;
use crate::submit::ConsoleSubmitter;

pub mod state;

pub use state::{FormMsg, FormState, SubmitStatus};

type WebEditor = Editor<StaticConfigSource, ConsoleSubmitter>;

#[function_component(App)]
pub fn app() -> Html {
    let editor: Rc<WebEditor> = use_memo((), |_| Editor::new(StaticConfigSource, ConsoleSubmitter));
    let state = {
        let editor = Rc::clone(&editor);
        use_reducer(move || FormState::boot(&editor))
    };
    let current_lang = use_state(i18n::current_lang);

    let on_lang_change = {
        let current_lang = current_lang.clone();
        Callback::from(move |lang: String| current_lang.set(lang))
    };
    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(kind, action): (GroupKind, FormAction)| {
            dispatcher.dispatch(FormMsg::Edit(kind, action));
        })
    };
    let on_submit = {
        let state = state.clone();
        let editor = Rc::clone(&editor);
        Callback::from(move |()| match editor.submit(&state.form) {
            Ok(ack) => state.dispatch(FormMsg::Submitted(ack)),
            Err(err) => state.dispatch(FormMsg::SubmitFailed(err.to_string())),
        })
    };

    let config = state.form.config().clone();
    html! {
        <>
            <Header current_lang={(*current_lang).clone()} on_lang_change={on_lang_change} />
            <main id="main" class="editor">
                { for GroupKind::ALL.into_iter().map(|kind| html! {
                    <OptionGroupPanel
                        key={kind.key()}
                        group={state.form.group(kind).clone()}
                        config={config.clone()}
                        on_edit={on_edit.clone()}
                    />
                }) }
                <SubmitBar issues={state.form.issues()} status={state.status()} on_submit={on_submit} />
            </main>
        </>
    }
}

