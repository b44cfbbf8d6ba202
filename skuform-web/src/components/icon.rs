use yew::prelude::*;

/// Glyphs used by the row toolbar and variant tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Add,
    Copy,
    Move,
    DeleteTag,
}

impl Icon {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Copy => "⧉",
            Self::Move => "↑",
            Self::DeleteTag => "×",
        }
    }

    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Add => "icon icon-add",
            Self::Copy => "icon icon-copy",
            Self::Move => "icon icon-move",
            Self::DeleteTag => "icon icon-delete-tag",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub icon: Icon,
    /// Accessible label; the glyph itself is hidden from assistive tech.
    pub label: AttrValue,
    pub on_click: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(IconButton)]
pub fn icon_button(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <button type="button" class="icon-button" aria-label={p.label.clone()} title={p.label.clone()} disabled={p.disabled} {onclick}>
            <span class={p.icon.class()} aria-hidden="true">{ p.icon.glyph() }</span>
        </button>
    }
}
