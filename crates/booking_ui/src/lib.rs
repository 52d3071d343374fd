//! Shared UI primitive library for the talent-booking front end.
//!
//! The crate owns the variant-resolution contract, reusable Leptos
//! primitives, and the stable class and `data-ui-*` hooks consumed by the
//! stylesheet layer. Pages compose these primitives and pass state down as
//! props and callbacks; no primitive owns application state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
pub mod variant;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    resolve_selection, Avatar, AvatarContent, Badge, Button, ButtonInteraction, EmptyState,
    FieldMessage, Modal, ModalLayout, OptionItem, OverlayState, PassThrough, SelectField, TextArea,
    TextField,
};
pub use variant::{
    resolve, AvatarSize, AvatarVariant, BadgeVariant, ButtonSize, ButtonVariant, ComponentKind,
    FieldVariant, StyleDescriptor, StyleToken, TokenAxis, UnknownToken,
};

/// Convenience imports for page crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        Avatar, AvatarSize, AvatarVariant, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant,
        EmptyState, FieldVariant, Icon, IconName, IconSize, Modal, OptionItem, SelectField,
        StyleToken, TextArea, TextField,
    };
}
