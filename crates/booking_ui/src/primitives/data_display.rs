use super::*;

const AVATAR_PLACEHOLDER: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq)]
/// What an [`Avatar`] renders inside its frame.
pub enum AvatarContent {
    /// Remote image.
    Image {
        /// Image URL.
        src: String,
        /// Alternate text, empty when none was supplied.
        alt: String,
    },
    /// Single-glyph fallback derived from the alternate text.
    Fallback {
        /// Uppercased first character of `alt`, or `?`.
        glyph: String,
    },
}

impl AvatarContent {
    /// A non-empty `src` always wins. Otherwise the glyph is the first
    /// character of `alt`, uppercased, or `?` when `alt` is empty or absent.
    pub fn resolve(src: Option<&str>, alt: Option<&str>) -> Self {
        match src.filter(|src| !src.is_empty()) {
            Some(src) => Self::Image {
                src: src.to_string(),
                alt: alt.unwrap_or_default().to_string(),
            },
            None => Self::Fallback {
                glyph: alt
                    .and_then(|alt| alt.chars().next())
                    .map(|first| first.to_uppercase().collect::<String>())
                    .unwrap_or_else(|| AVATAR_PLACEHOLDER.to_string()),
            },
        }
    }
}

#[component]
/// Inline status or count badge.
///
/// `attr:*` pass-through reaches the root element; `on:*` handlers do not,
/// so listen on a wrapping element instead.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(attrs)] attrs: PassThrough,
    children: Children,
) -> impl IntoView {
    let descriptor = StyleDescriptor::badge(variant);
    let attrs = merge_attributes(descriptor_attributes(&descriptor), attrs);

    view! {
        <span class=descriptor.compose_class(layout_class) {..attrs}>
            {children()}
        </span>
    }
}

#[component]
/// User avatar with an initial-glyph fallback when no image is available.
///
/// `attr:*` pass-through reaches the root element; `on:*` handlers do not,
/// so listen on a wrapping element instead.
pub fn Avatar(
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional, into)] alt: Option<String>,
    #[prop(default = AvatarSize::Md)] size: AvatarSize,
    #[prop(default = AvatarVariant::Default)] variant: AvatarVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(attrs)] attrs: PassThrough,
) -> impl IntoView {
    let descriptor = StyleDescriptor::avatar(variant, size);
    let attrs = merge_attributes(descriptor_attributes(&descriptor), attrs);
    let content = AvatarContent::resolve(src.as_deref(), alt.as_deref());
    let label = non_empty(alt);

    let body = match content {
        AvatarContent::Image { src, alt } => {
            view! { <img data-ui-slot="image" src=src alt=alt loading="lazy" /> }.into_view()
        }
        AvatarContent::Fallback { glyph } => {
            view! { <span data-ui-slot="fallback" aria-hidden="true">{glyph}</span> }.into_view()
        }
    };

    view! {
        <span class=descriptor.compose_class(layout_class) role="img" aria-label={label} {..attrs}>
            {body}
        </span>
    }
}

#[component]
/// Placeholder block for lists with no data.
///
/// Absent optional slots are omitted entirely; an absent title still renders
/// an empty heading.
///
/// `attr:*` pass-through reaches the root element; `on:*` handlers do not,
/// so listen inside the `action` slot instead.
pub fn EmptyState(
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] action: Option<ViewFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(attrs)] attrs: PassThrough,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
            {..attrs}
        >
            {icon
                .map(|icon| {
                    view! {
                        <span data-ui-slot="icon">
                            <Icon icon size=IconSize::Illustration />
                        </span>
                    }
                })}
            <h3 data-ui-slot="title">{title.unwrap_or_default()}</h3>
            {non_empty(description)
                .map(|description| view! { <p data-ui-slot="description">{description}</p> })}
            {action.map(|action| view! { <div data-ui-slot="action">{action.run()}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn glyph(src: Option<&str>, alt: Option<&str>) -> Option<String> {
        match AvatarContent::resolve(src, alt) {
            AvatarContent::Fallback { glyph } => Some(glyph),
            AvatarContent::Image { .. } => None,
        }
    }

    #[test]
    fn fallback_glyph_is_uppercased_first_character() {
        assert_eq!(glyph(None, Some("sally")), Some("S".to_string()));
        assert_eq!(glyph(None, Some("Émile Dubois")), Some("É".to_string()));
    }

    #[test]
    fn fallback_glyph_is_placeholder_without_alt() {
        assert_eq!(glyph(None, Some("")), Some("?".to_string()));
        assert_eq!(glyph(None, None), Some("?".to_string()));
    }

    #[test]
    fn empty_src_counts_as_absent() {
        assert_eq!(glyph(Some(""), Some("kai")), Some("K".to_string()));
    }

    #[test]
    fn image_wins_regardless_of_alt() {
        assert_eq!(
            AvatarContent::resolve(Some("/img/sally.jpg"), None),
            AvatarContent::Image {
                src: "/img/sally.jpg".to_string(),
                alt: String::new(),
            }
        );
        assert_eq!(
            AvatarContent::resolve(Some("/img/sally.jpg"), Some("sally")),
            AvatarContent::Image {
                src: "/img/sally.jpg".to_string(),
                alt: "sally".to_string(),
            }
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn badge_forwards_caller_attributes_with_precedence() {
        let html = render(|| {
            view! {
                <Badge variant=BadgeVariant::Danger attr:data-ui-variant="count" attr:data-testid="unread">
                    "4"
                </Badge>
            }
        });
        assert!(html.contains(r#"data-ui-variant="count""#), "{html}");
        assert!(!html.contains(r#"data-ui-variant="danger""#), "{html}");
        assert!(html.contains(r#"data-testid="unread""#), "{html}");
        assert!(html.contains("ui-badge--danger"), "{html}");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn avatar_renders_fallback_glyph_without_image() {
        let html = render(|| view! { <Avatar alt="sally" /> });
        assert!(!html.contains("<img"), "{html}");
        assert_eq!(text_content(&html).trim(), "S");
        assert!(html.contains(r#"aria-label="sally""#), "{html}");

        let image = render(|| view! { <Avatar src="/img/sally.jpg" alt="sally" /> });
        assert!(image.contains(r#"src="/img/sally.jpg""#), "{image}");
    }

    #[test]
    fn resolution_is_stable_across_calls() {
        assert_eq!(
            AvatarContent::resolve(None, Some("marco")),
            AvatarContent::resolve(None, Some("marco"))
        );
    }
}
