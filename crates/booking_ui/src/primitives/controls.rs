use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Interaction state of a button after folding `loading` into `disabled`.
pub struct ButtonInteraction {
    /// Interaction is suppressed.
    pub disabled: bool,
    /// Busy indicator is shown.
    pub busy: bool,
}

impl ButtonInteraction {
    /// Loading implies disabled; disabled does not imply loading.
    pub fn resolve(loading: bool, disabled: bool) -> Self {
        Self {
            disabled: disabled || loading,
            busy: loading,
        }
    }

    /// Token for `data-ui-state`.
    pub fn state_token(self) -> &'static str {
        if self.busy {
            "loading"
        } else if self.disabled {
            "disabled"
        } else {
            "idle"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The single message line shown beneath a text field.
pub enum FieldMessage {
    /// Validation error; puts the field in its error state.
    Error(String),
    /// Neutral helper copy.
    Helper(String),
}

impl FieldMessage {
    /// Picks the message to show. A non-empty error always suppresses the helper.
    pub fn select(error: Option<String>, helper: Option<String>) -> Option<Self> {
        non_empty(error)
            .map(Self::Error)
            .or_else(|| non_empty(helper).map(Self::Helper))
    }

    /// Whether the message puts the field in its error state.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Message copy.
    pub fn text(&self) -> &str {
        match self {
            Self::Error(text) | Self::Helper(text) => text,
        }
    }

    fn slot(&self) -> &'static str {
        match self {
            Self::Error(_) => "error",
            Self::Helper(_) => "helper",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// One selectable choice of a [`SelectField`].
pub struct OptionItem {
    /// Submitted key. Expected to be unique within one select.
    pub value: String,
    /// Display text.
    pub label: String,
}

impl OptionItem {
    /// Builds an option from a key and its display text.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Finds the option for a selected value. Duplicate values resolve to the last match.
pub fn resolve_selection<'a>(options: &'a [OptionItem], value: &str) -> Option<&'a OptionItem> {
    options.iter().rev().find(|option| option.value == value)
}

#[component]
/// Shared button primitive with variant, size, and loading states.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: PassThrough,
    children: Children,
) -> impl IntoView {
    let descriptor = StyleDescriptor::button(variant, size);
    let interaction =
        Signal::derive(move || ButtonInteraction::resolve(loading.get(), disabled.get()));

    let mut own = descriptor_attributes(&descriptor);
    own.push((
        "data-ui-state",
        (move || interaction.get().state_token()).into_attribute(),
    ));
    own.push((
        "data-ui-selected",
        (move || bool_token(selected.get())).into_attribute(),
    ));
    own.push((
        "aria-busy",
        (move || bool_token(interaction.get().busy)).into_attribute(),
    ));
    let attrs = merge_attributes(own, attrs);

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=descriptor.compose_class(layout_class)
            id=id
            aria-label=aria_label
            disabled=move || interaction.get().disabled
            on:click=move |ev| {
                if interaction.get_untracked().disabled {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            {..attrs}
        >
            {move || {
                interaction
                    .get()
                    .busy
                    .then(|| {
                        view! {
                            <span data-ui-slot="spinner" aria-hidden="true">
                                <Icon icon=IconName::Spinner />
                            </span>
                        }
                    })
            }}
            {leading_icon.map(|icon| view! { <Icon icon /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon /> })}
        </button>
    }
}

#[component]
/// Label and message frame shared by the text-entry primitives.
fn FieldFrame(
    kind: ComponentKind,
    #[prop(default = None)] control_id: Option<String>,
    #[prop(default = None)] label: Option<String>,
    message: Signal<Option<FieldMessage>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-field-group"
            data-ui-primitive="true"
            data-ui-kind="field-group"
            data-ui-control=kind.token()
            data-ui-state=move || {
                if message.with(|message| message.as_ref().is_some_and(FieldMessage::is_error)) {
                    "error"
                } else {
                    "idle"
                }
            }
        >
            {label.map(|label| view! { <label for=control_id data-ui-slot="label">{label}</label> })}
            {children()}
            {move || {
                message
                    .get()
                    .map(|message| {
                        view! {
                            <span
                                data-ui-slot=message.slot()
                                role=message.is_error().then_some("alert")
                            >
                                {message.text().to_string()}
                            </span>
                        }
                    })
            }}
        </div>
    }
}

fn field_attributes(
    descriptor: &StyleDescriptor,
    message: Signal<Option<FieldMessage>>,
    disabled: MaybeSignal<bool>,
    caller: PassThrough,
) -> PassThrough {
    let invalid =
        move || message.with(|message| message.as_ref().is_some_and(FieldMessage::is_error));
    let mut own = descriptor_attributes(descriptor);
    own.push((
        "data-ui-state",
        (move || if invalid() { "error" } else { "idle" }).into_attribute(),
    ));
    own.push(("aria-invalid", (move || bool_token(invalid())).into_attribute()));
    own.push((
        "data-ui-disabled",
        (move || bool_token(disabled.get())).into_attribute(),
    ));
    merge_attributes(own, caller)
}

#[component]
/// Shared single-line text input with optional label, error, and helper copy.
pub fn TextField(
    #[prop(default = FieldVariant::Default)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] helper: MaybeSignal<Option<String>>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(attrs)] attrs: PassThrough,
) -> impl IntoView {
    let descriptor = StyleDescriptor::field(ComponentKind::Input, variant);
    let message = Signal::derive(move || FieldMessage::select(error.get(), helper.get()));
    let attrs = field_attributes(&descriptor, message, disabled, attrs);

    view! {
        <FieldFrame
            kind=ComponentKind::Input
            control_id=id.clone()
            label=non_empty(label)
            message
        >
            <input
                class=descriptor.compose_class(layout_class)
                id=id
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(ev);
                    }
                }
                on:keydown=move |ev| {
                    if let Some(on_keydown) = on_keydown.as_ref() {
                        on_keydown.call(ev);
                    }
                }
                on:blur=move |ev| {
                    if let Some(on_blur) = on_blur.as_ref() {
                        on_blur.call(ev);
                    }
                }
                {..attrs}
            />
        </FieldFrame>
    }
}

#[component]
/// Shared multiline text area with the same label and message contract as [`TextField`].
pub fn TextArea(
    #[prop(default = FieldVariant::Default)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] helper: MaybeSignal<Option<String>>,
    #[prop(optional)] rows: Option<u16>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(attrs)] attrs: PassThrough,
) -> impl IntoView {
    let descriptor = StyleDescriptor::field(ComponentKind::Textarea, variant);
    let message = Signal::derive(move || FieldMessage::select(error.get(), helper.get()));
    let attrs = field_attributes(&descriptor, message, disabled, attrs);

    view! {
        <FieldFrame
            kind=ComponentKind::Textarea
            control_id=id.clone()
            label=non_empty(label)
            message
        >
            <textarea
                class=descriptor.compose_class(layout_class)
                id=id
                placeholder=placeholder
                rows=rows.unwrap_or(4)
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(ev);
                    }
                }
                on:keydown=move |ev| {
                    if let Some(on_keydown) = on_keydown.as_ref() {
                        on_keydown.call(ev);
                    }
                }
                {..attrs}
            ></textarea>
        </FieldFrame>
    }
}

#[component]
/// Shared option selector. An empty option list renders a selector with no choices.
///
/// `value` is the controlled selection. The placeholder, when supplied, is
/// selected while `value` is empty.
pub fn SelectField(
    #[prop(into)] options: MaybeSignal<Vec<OptionItem>>,
    #[prop(default = FieldVariant::Default)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_select: Option<Callback<OptionItem>>,
    #[prop(attrs)] attrs: PassThrough,
) -> impl IntoView {
    let descriptor = StyleDescriptor::field(ComponentKind::Select, variant);
    let options = Signal::derive(move || options.get());
    let value = Signal::derive(move || value.get());
    let message = Signal::derive(|| None::<FieldMessage>);
    let attrs = field_attributes(&descriptor, message, disabled, attrs);
    let placeholder = non_empty(placeholder);

    view! {
        <FieldFrame
            kind=ComponentKind::Select
            control_id=id.clone()
            label=non_empty(label)
            message
        >
            <select
                class=descriptor.compose_class(layout_class)
                id=id
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| {
                    let selected = event_target_value(&ev);
                    if let Some(on_select) = on_select.as_ref() {
                        let option = options
                            .with_untracked(|options| resolve_selection(options, &selected).cloned());
                        if let Some(option) = option {
                            on_select.call(option);
                        }
                    }
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(selected);
                    }
                }
                {..attrs}
            >
                {placeholder
                    .map(|placeholder| {
                        view! {
                            <option
                                value=""
                                disabled=true
                                selected=move || value.with(String::is_empty)
                                data-ui-slot="placeholder"
                            >
                                {placeholder}
                            </option>
                        }
                    })}
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let selected_value = option.value.clone();
                            view! {
                                <option
                                    value=option.value
                                    selected=move || value.with(|value| *value == selected_value)
                                >
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </FieldFrame>
    }
}
