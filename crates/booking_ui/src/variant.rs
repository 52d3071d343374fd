//! Variant resolution shared by every primitive.
//!
//! A primitive asks for a `(kind, variant, size)` triple and receives a
//! [`StyleDescriptor`]: the class list and `data-ui-*` hooks the stylesheet
//! layer keys on. Concrete visual values never live here.
//!
//! Resolution is total. Unknown variant or size tokens fall back to the
//! kind's default treatment and log a warning instead of failing the render.

use std::fmt;

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Primitive families that share the variant contract.
pub enum ComponentKind {
    /// Action button.
    Button,
    /// Single-line text input.
    Input,
    /// Inline status badge.
    Badge,
    /// User avatar.
    Avatar,
    /// Option selector.
    Select,
    /// Multiline text input.
    Textarea,
}

impl ComponentKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Button,
        Self::Input,
        Self::Badge,
        Self::Avatar,
        Self::Select,
        Self::Textarea,
    ];

    /// Stable token used for `data-ui-kind`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Badge => "badge",
            Self::Avatar => "avatar",
            Self::Select => "select",
            Self::Textarea => "textarea",
        }
    }

    /// Whether the kind carries a size axis.
    pub const fn is_sized(self) -> bool {
        matches!(self, Self::Button | Self::Avatar)
    }

    const fn base_class(self) -> &'static str {
        match self {
            Self::Button => "ui-button",
            Self::Input => "ui-input",
            Self::Badge => "ui-badge",
            Self::Avatar => "ui-avatar",
            Self::Select => "ui-select",
            Self::Textarea => "ui-textarea",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Axis of a style token.
pub enum TokenAxis {
    /// Stylistic alternative.
    Variant,
    /// Sizing step.
    Size,
}

impl fmt::Display for TokenAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Variant => "variant",
            Self::Size => "size",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {family} {axis} `{token}`")]
/// Raised by strict token parsing when a token is outside the closed set.
pub struct UnknownToken {
    /// Token family, e.g. `button` or `field`.
    pub family: &'static str,
    /// Axis the token was parsed for.
    pub axis: TokenAxis,
    /// The rejected raw token.
    pub token: String,
}

/// Closed set of style tokens along one axis of one primitive family.
pub trait StyleToken: Copy + Default + Eq + 'static {
    /// Family name used in diagnostics.
    const FAMILY: &'static str;
    /// Axis the tokens describe.
    const AXIS: TokenAxis;
    /// Every member of the set.
    const ALL: &'static [Self];

    /// Stable token used for class names and `data-ui-*` hooks.
    fn token(self) -> &'static str;

    /// Strict parse. Matching ignores ASCII case and surrounding whitespace.
    fn parse(raw: &str) -> Result<Self, UnknownToken> {
        let needle = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.token().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownToken {
                family: Self::FAMILY,
                axis: Self::AXIS,
                token: raw.to_string(),
            })
    }

    /// Lenient parse. Absent tokens take the default; unknown tokens are
    /// logged and replaced by the default.
    fn parse_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        Self::parse(raw).unwrap_or_else(|err| {
            let fallback = Self::default();
            logging::warn!("{err}, using `{}`", fallback.token());
            fallback
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button treatments.
pub enum ButtonVariant {
    /// Emphasized call to action.
    #[default]
    Primary,
    /// Secondary action.
    Secondary,
    /// Outlined, transparent fill.
    Outline,
    /// Glowing highlight treatment.
    Neon,
    /// Destructive action.
    Danger,
    /// Confirming action.
    Success,
}

impl StyleToken for ButtonVariant {
    const FAMILY: &'static str = "button";
    const AXIS: TokenAxis = TokenAxis::Variant;
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Neon,
        Self::Danger,
        Self::Success,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Neon => "neon",
            Self::Danger => "danger",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button sizing steps.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl StyleToken for ButtonSize {
    const FAMILY: &'static str = "button";
    const AXIS: TokenAxis = TokenAxis::Size;
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Treatments shared by input, select, and textarea fields.
pub enum FieldVariant {
    /// Bordered field.
    #[default]
    Default,
    /// Filled background, no border.
    Filled,
    /// Borderless field that only shows an underline on focus.
    Ghost,
}

impl StyleToken for FieldVariant {
    const FAMILY: &'static str = "field";
    const AXIS: TokenAxis = TokenAxis::Variant;
    const ALL: &'static [Self] = &[Self::Default, Self::Filled, Self::Ghost];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Filled => "filled",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Badge treatments.
pub enum BadgeVariant {
    /// Neutral badge.
    #[default]
    Default,
    /// Brand color.
    Primary,
    /// Muted brand color.
    Secondary,
    /// Positive status.
    Success,
    /// Attention status.
    Warning,
    /// Negative status or unread count.
    Danger,
    /// Glowing highlight treatment.
    Neon,
    /// Outlined badge.
    Outline,
}

impl StyleToken for BadgeVariant {
    const FAMILY: &'static str = "badge";
    const AXIS: TokenAxis = TokenAxis::Variant;
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Neon,
        Self::Outline,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Neon => "neon",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Avatar treatments.
pub enum AvatarVariant {
    /// Plain circle.
    #[default]
    Default,
    /// Circle with an accent ring.
    Ring,
}

impl StyleToken for AvatarVariant {
    const FAMILY: &'static str = "avatar";
    const AXIS: TokenAxis = TokenAxis::Variant;
    const ALL: &'static [Self] = &[Self::Default, Self::Ring];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ring => "ring",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Avatar sizing steps.
pub enum AvatarSize {
    /// 24px.
    Sm,
    /// 40px.
    #[default]
    Md,
    /// 56px.
    Lg,
    /// 96px profile header.
    Xl,
}

impl StyleToken for AvatarSize {
    const FAMILY: &'static str = "avatar";
    const AXIS: TokenAxis = TokenAxis::Size;
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg, Self::Xl];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Resolved visual treatment for one rendered primitive.
pub struct StyleDescriptor {
    kind: ComponentKind,
    variant: &'static str,
    size: Option<&'static str>,
}

impl StyleDescriptor {
    /// Button treatment.
    pub fn button(variant: ButtonVariant, size: ButtonSize) -> Self {
        Self {
            kind: ComponentKind::Button,
            variant: variant.token(),
            size: Some(size.token()),
        }
    }

    /// Field treatment for an input, select, or textarea.
    pub fn field(kind: ComponentKind, variant: FieldVariant) -> Self {
        Self {
            kind,
            variant: variant.token(),
            size: None,
        }
    }

    /// Badge treatment. Badges have no size axis.
    pub fn badge(variant: BadgeVariant) -> Self {
        Self {
            kind: ComponentKind::Badge,
            variant: variant.token(),
            size: None,
        }
    }

    /// Avatar treatment.
    pub fn avatar(variant: AvatarVariant, size: AvatarSize) -> Self {
        Self {
            kind: ComponentKind::Avatar,
            variant: variant.token(),
            size: Some(size.token()),
        }
    }

    /// Primitive family the descriptor was resolved for.
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Resolved variant token.
    pub fn variant(&self) -> &'static str {
        self.variant
    }

    /// Resolved size token, `None` for unsized kinds.
    pub fn size(&self) -> Option<&'static str> {
        self.size
    }

    /// Class list for the resolved treatment alone.
    pub fn class_name(&self) -> String {
        let base = self.kind.base_class();
        match self.size {
            Some(size) => format!("{base} {base}--{} {base}--{size}", self.variant),
            None => format!("{base} {base}--{}", self.variant),
        }
    }

    /// Class list with caller classes appended.
    pub fn compose_class(&self, extra: Option<&str>) -> String {
        merge_class(&self.class_name(), extra)
    }

    /// `data-ui-*` hooks describing the treatment.
    pub fn data_attributes(&self) -> Vec<(&'static str, &'static str)> {
        let mut attrs = vec![
            ("data-ui-primitive", "true"),
            ("data-ui-kind", self.kind.token()),
            ("data-ui-variant", self.variant),
        ];
        if let Some(size) = self.size {
            attrs.push(("data-ui-size", size));
        }
        attrs
    }
}

/// Resolves a loosely-typed `(kind, variant, size)` triple.
///
/// Omitted tokens take the kind's default; unknown tokens are logged and
/// replaced by the default. Size is ignored for kinds without a size axis.
pub fn resolve(kind: ComponentKind, variant: Option<&str>, size: Option<&str>) -> StyleDescriptor {
    match kind {
        ComponentKind::Button => StyleDescriptor::button(
            ButtonVariant::parse_or_default(variant),
            ButtonSize::parse_or_default(size),
        ),
        ComponentKind::Input | ComponentKind::Select | ComponentKind::Textarea => {
            StyleDescriptor::field(kind, FieldVariant::parse_or_default(variant))
        }
        ComponentKind::Badge => StyleDescriptor::badge(BadgeVariant::parse_or_default(variant)),
        ComponentKind::Avatar => StyleDescriptor::avatar(
            AvatarVariant::parse_or_default(variant),
            AvatarSize::parse_or_default(size),
        ),
    }
}

/// Appends caller classes to a base class list, skipping duplicates.
pub(crate) fn merge_class(base: &str, extra: Option<&str>) -> String {
    let mut merged = base.to_string();
    let Some(extra) = extra else {
        return merged;
    };
    for class in extra.split_whitespace() {
        if !merged.split_whitespace().any(|existing| existing == class) {
            merged.push(' ');
            merged.push_str(class);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn declared_triples() -> Vec<(ComponentKind, &'static str, Option<&'static str>)> {
        let mut triples = Vec::new();
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                triples.push((ComponentKind::Button, variant.token(), Some(size.token())));
            }
        }
        for kind in [ComponentKind::Input, ComponentKind::Select, ComponentKind::Textarea] {
            for variant in FieldVariant::ALL {
                triples.push((kind, variant.token(), None));
            }
        }
        for variant in BadgeVariant::ALL {
            triples.push((ComponentKind::Badge, variant.token(), None));
        }
        for variant in AvatarVariant::ALL {
            for size in AvatarSize::ALL {
                triples.push((ComponentKind::Avatar, variant.token(), Some(size.token())));
            }
        }
        triples
    }

    #[test]
    fn every_declared_triple_resolves_to_its_own_tokens() {
        for (kind, variant, size) in declared_triples() {
            let descriptor = resolve(kind, Some(variant), size);
            assert_eq!(descriptor.kind(), kind);
            assert_eq!(descriptor.variant(), variant);
            assert_eq!(descriptor.size(), size);
            assert!(!descriptor.class_name().is_empty());
        }
    }

    #[test]
    fn unknown_variant_resolves_to_kind_default() {
        for kind in ComponentKind::ALL {
            assert_eq!(
                resolve(kind, Some("sparkly"), None),
                resolve(kind, None, None),
                "{kind}"
            );
        }
    }

    #[test]
    fn defaults_match_documented_treatments() {
        let button = resolve(ComponentKind::Button, None, None);
        assert_eq!(button.variant(), "primary");
        assert_eq!(button.size(), Some("md"));

        let badge = resolve(ComponentKind::Badge, None, None);
        assert_eq!(badge.variant(), "default");
        assert_eq!(badge.size(), None);

        let avatar = resolve(ComponentKind::Avatar, None, None);
        assert_eq!(avatar.size(), Some("md"));
    }

    #[test]
    fn unknown_size_falls_back_without_touching_variant() {
        let descriptor = resolve(ComponentKind::Button, Some("danger"), Some("huge"));
        assert_eq!(descriptor, StyleDescriptor::button(ButtonVariant::Danger, ButtonSize::Md));
    }

    #[test]
    fn size_is_ignored_for_unsized_kinds() {
        assert_eq!(
            resolve(ComponentKind::Badge, Some("success"), Some("lg")),
            StyleDescriptor::badge(BadgeVariant::Success)
        );
        assert!(!ComponentKind::Badge.is_sized());
        assert!(ComponentKind::Avatar.is_sized());
    }

    #[test]
    fn string_and_typed_paths_agree() {
        assert_eq!(
            resolve(ComponentKind::Avatar, Some(" RING "), Some("Xl")),
            StyleDescriptor::avatar(AvatarVariant::Ring, AvatarSize::Xl)
        );
        assert_eq!(
            resolve(ComponentKind::Textarea, Some("ghost"), None),
            StyleDescriptor::field(ComponentKind::Textarea, FieldVariant::Ghost)
        );
    }

    #[test]
    fn strict_parse_rejects_unknown_tokens() {
        let err = ButtonVariant::parse("glitter").expect_err("unknown variant");
        assert_eq!(err.family, "button");
        assert_eq!(err.axis, TokenAxis::Variant);
        assert_eq!(err.to_string(), "unknown button variant `glitter`");

        let err = AvatarSize::parse("xxl").expect_err("unknown size");
        assert_eq!(err.to_string(), "unknown avatar size `xxl`");
    }

    #[test]
    fn lenient_parse_falls_back_to_default() {
        assert_eq!(BadgeVariant::parse_or_default(None), BadgeVariant::Default);
        assert_eq!(BadgeVariant::parse_or_default(Some("Neon")), BadgeVariant::Neon);
        assert_eq!(ButtonSize::parse_or_default(Some("giant")), ButtonSize::Md);
    }

    #[test]
    fn class_name_lists_base_variant_and_size() {
        assert_eq!(
            StyleDescriptor::button(ButtonVariant::Neon, ButtonSize::Lg).class_name(),
            "ui-button ui-button--neon ui-button--lg"
        );
        assert_eq!(
            StyleDescriptor::badge(BadgeVariant::Warning).class_name(),
            "ui-badge ui-badge--warning"
        );
    }

    #[test]
    fn caller_classes_are_appended_once() {
        let descriptor = StyleDescriptor::badge(BadgeVariant::Default);
        assert_eq!(
            descriptor.compose_class(Some("nav-count  ui-badge nav-count")),
            "ui-badge ui-badge--default nav-count"
        );
        assert_eq!(descriptor.compose_class(None), descriptor.class_name());
    }

    #[test]
    fn data_attributes_only_carry_size_when_sized() {
        assert_eq!(
            StyleDescriptor::field(ComponentKind::Select, FieldVariant::Filled).data_attributes(),
            vec![
                ("data-ui-primitive", "true"),
                ("data-ui-kind", "select"),
                ("data-ui-variant", "filled"),
            ]
        );
        assert_eq!(
            StyleDescriptor::avatar(AvatarVariant::Default, AvatarSize::Sm)
                .data_attributes()
                .last()
                .copied(),
            Some(("data-ui-size", "sm"))
        );
    }

    #[test]
    fn resolution_is_stable_across_calls() {
        for (kind, variant, size) in declared_triples() {
            let first = resolve(kind, Some(variant), size);
            let second = resolve(kind, Some(variant), size);
            assert_eq!(first.class_name(), second.class_name());
            assert_eq!(first, second);
        }
    }
}
