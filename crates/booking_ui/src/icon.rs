//! Centralized icon catalog for the booking primitives.
//!
//! Components reference icons by semantic name only; the SVG bodies live here
//! so no component embeds raw markup. Paths are drawn on a 24px grid.

use leptos::*;

use crate::variant::{StyleToken, TokenAxis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Browse/search talent.
    Search,
    /// Join as talent.
    PersonAdd,
    /// Favorites.
    Heart,
    /// Messages.
    Chat,
    /// Admin console.
    Shield,
    /// Notifications bell.
    Alert,
    /// Sign in.
    SignIn,
    /// Busy indicator.
    Spinner,
    /// Empty list placeholder.
    Inbox,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::PersonAdd => "person-add",
            Self::Heart => "heart",
            Self::Chat => "chat",
            Self::Shield => "shield",
            Self::Alert => "alert",
            Self::SignIn => "sign-in",
            Self::Spinner => "spinner",
            Self::Inbox => "inbox",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Search => {
                r#"<path d="M10 2.75a7.25 7.25 0 0 1 5.63 11.82l4.9 4.9a.75.75 0 0 1-.98 1.13l-.08-.07-4.9-4.9A7.25 7.25 0 1 1 10 2.75Zm0 1.5a5.75 5.75 0 1 0 0 11.5 5.75 5.75 0 0 0 0-11.5Z"/>"#
            }
            Self::PersonAdd => {
                r#"<path d="M17.5 12a5.5 5.5 0 1 1 0 11 5.5 5.5 0 0 1 0-11Zm0 2a.5.5 0 0 0-.5.5V17h-2.5a.5.5 0 0 0 0 1H17v2.5a.5.5 0 0 0 1 0V18h2.5a.5.5 0 0 0 0-1H18v-2.5a.5.5 0 0 0-.5-.5ZM11.02 14a6.47 6.47 0 0 0-.5 1.5H5.25a.75.75 0 0 0-.75.75v.58c0 .54.19 1.06.54 1.47 1.25 1.46 3.22 2.2 5.96 2.2.24 0 .48 0 .7-.02.35.52.77.99 1.25 1.4-.62.08-1.27.12-1.95.12-3.15 0-5.53-.9-7.1-2.73A3.75 3.75 0 0 1 3 16.83v-.58A2.25 2.25 0 0 1 5.25 14h5.77ZM11 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7Z"/>"#
            }
            Self::Heart => {
                r#"<path d="m12.82 5.58-.82.82-.83-.83a4.98 4.98 0 0 0-7.04 7.04l7.34 7.34c.3.3.77.3 1.06 0l7.35-7.34a4.98 4.98 0 0 0-7.06-7.03Zm6 5.97L12 18.37l-6.82-6.82a3.48 3.48 0 0 1 4.93-4.92l1.36 1.36c.3.3.78.3 1.07 0l1.35-1.36a3.48 3.48 0 0 1 4.93 4.92Z"/>"#
            }
            Self::Chat => {
                r#"<path d="M12 2a10 10 0 1 1-4.64 18.86l-4.3 1.12a.85.85 0 0 1-1.04-1.03l1.12-4.3A10 10 0 0 1 12 2Zm0 1.5a8.5 8.5 0 0 0-7.43 12.64l.15.27-.97 3.84 3.84-.97.27.15A8.5 8.5 0 1 0 12 3.5ZM8.75 13h4.5a.75.75 0 0 1 .1 1.5h-4.6a.75.75 0 0 1-.1-1.5h4.6-4.5Zm0-3.5h6.5a.75.75 0 0 1 .1 1.5h-6.6a.75.75 0 0 1-.1-1.5h6.6-6.5Z"/>"#
            }
            Self::Shield => {
                r#"<path d="M3 5.75c0-.41.34-.75.75-.75 2.66 0 5.26-.94 7.8-2.85.27-.2.63-.2.9 0C14.99 4.06 17.59 5 20.25 5c.41 0 .75.34.75.75V11c0 5-2.96 8.68-8.73 10.95a.75.75 0 0 1-.54 0C5.96 19.68 3 16 3 11V5.75Zm1.5.73V11c0 4.26 2.45 7.37 7.5 9.44 5.05-2.07 7.5-5.18 7.5-9.44V6.48a14.36 14.36 0 0 1-7.5-2.8 14.36 14.36 0 0 1-7.5 2.8Z"/>"#
            }
            Self::Alert => {
                r#"<path d="M12 1.99a7.25 7.25 0 0 1 7.25 7v4.4l1.38 3.16a1.25 1.25 0 0 1-1.15 1.75H15a3 3 0 0 1-6 .18v-.18H4.52a1.25 1.25 0 0 1-1.15-1.75l1.38-3.16V9.24A7.25 7.25 0 0 1 12 2Zm1.5 16.31h-3a1.5 1.5 0 0 0 3 .15v-.15ZM12 3.5a5.75 5.75 0 0 0-5.75 5.56v4.5L4.9 16.8h14.2l-1.35-3.25V9.05A5.75 5.75 0 0 0 12 3.5Z"/>"#
            }
            Self::SignIn => {
                r#"<path d="M17.75 3A3.25 3.25 0 0 1 21 6.25v11.5A3.25 3.25 0 0 1 17.75 21h-5a.75.75 0 0 1 0-1.5h5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75h-5a.75.75 0 0 1 0-1.5h5Zm-6.03 4.22 4.25 4.25c.3.3.3.77 0 1.06l-4.25 4.25a.75.75 0 0 1-1.06-1.06l2.97-2.97H3.75a.75.75 0 0 1 0-1.5h9.88l-2.97-2.97a.75.75 0 0 1 1.06-1.06Z"/>"#
            }
            Self::Spinner => {
                r#"<path d="M12 3.5a8.5 8.5 0 1 0 8.5 8.5.75.75 0 0 1 1.5 0A10 10 0 1 1 12 2a.75.75 0 0 1 0 1.5Z"/>"#
            }
            Self::Inbox => {
                r#"<path d="M6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25C3 4.45 4.46 3 6.25 3ZM4.5 14.5v3.25c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V14.5h-3.83a3.75 3.75 0 0 1-7.34 0H4.5Zm1.75-10c-.97 0-1.75.78-1.75 1.75V13h4.25c.41 0 .75.34.75.75a2.25 2.25 0 0 0 4.5 0c0-.41.34-.75.75-.75h4.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Icon scale, keyed to where the icon sits.
pub enum IconSize {
    /// 16px, inside buttons and navigation triggers.
    #[default]
    Inline,
    /// 32px, empty-state illustrations.
    Illustration,
}

impl IconSize {
    fn px(self) -> &'static str {
        match self {
            Self::Inline => "16",
            Self::Illustration => "32",
        }
    }
}

impl StyleToken for IconSize {
    const FAMILY: &'static str = "icon";
    const AXIS: TokenAxis = TokenAxis::Size;
    const ALL: &'static [Self] = &[Self::Inline, Self::Illustration];

    fn token(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Illustration => "illustration",
        }
    }
}

#[component]
/// Inline SVG for a catalog icon. Icons are decorative; the surrounding
/// control carries the accessible name.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    view! {
        <svg
            class=format!("ui-icon ui-icon--{}", size.token())
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size.px()
            height=size.px()
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
