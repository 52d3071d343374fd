//! Shared control, data-display, and overlay primitives.

use leptos::ev::{Event, FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::variant::{
    merge_class, AvatarSize, AvatarVariant, BadgeVariant, ButtonSize, ButtonVariant,
    ComponentKind, FieldVariant, StyleDescriptor,
};
use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod overlays;

pub use controls::{
    resolve_selection, Button, ButtonInteraction, FieldMessage, OptionItem, SelectField, TextArea,
    TextField,
};
pub use data_display::{Avatar, AvatarContent, Badge, EmptyState};
pub use overlays::{Modal, ModalLayout, OverlayState};

/// Caller-supplied attribute list forwarded onto a primitive's root element.
pub type PassThrough = Vec<(&'static str, Attribute)>;

/// Merges a primitive's own attributes with caller pass-through attributes.
///
/// Caller entries replace same-named primitive entries (names compare ASCII
/// case-insensitively); everything else is kept in order, caller last.
pub(crate) fn merge_attributes<V>(
    own: Vec<(&'static str, V)>,
    caller: Vec<(&'static str, V)>,
) -> Vec<(&'static str, V)> {
    let mut merged: Vec<_> = own
        .into_iter()
        .filter(|(name, _)| {
            !caller
                .iter()
                .any(|(caller_name, _)| caller_name.eq_ignore_ascii_case(name))
        })
        .collect();
    merged.extend(caller);
    merged
}

fn descriptor_attributes(descriptor: &StyleDescriptor) -> PassThrough {
    descriptor
        .data_attributes()
        .into_iter()
        .map(|(name, value)| (name, value.into_attribute()))
        .collect()
}

/// Treats empty strings as absent so optional slots are either fully present or omitted.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Server-rendered markup for a primitive tree.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}

/// Text content of rendered markup with every tag and comment removed.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn text_content(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text
}
