use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visibility of a caller-controlled overlay.
pub enum OverlayState {
    /// Nothing rendered, no listeners attached.
    Closed,
    /// Backdrop and content frame rendered.
    Open,
}

impl OverlayState {
    /// Maps the caller's `is_open` flag.
    pub fn from_open(is_open: bool) -> Self {
        if is_open {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Whether the overlay renders anything.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Bands present in an open modal's content frame.
pub struct ModalLayout {
    /// Title band copy, omitted when absent.
    pub title: Option<String>,
    /// Footer band presence.
    pub footer: bool,
}

impl ModalLayout {
    /// Layout for the current state; `None` while closed.
    pub fn project(state: OverlayState, title: Option<&str>, has_footer: bool) -> Option<Self> {
        state.is_open().then(|| Self {
            title: title.filter(|title| !title.is_empty()).map(str::to_string),
            footer: has_footer,
        })
    }
}

/// Close requests issued by an open modal. The modal never closes itself.
#[derive(Clone, Copy)]
struct Dismiss(Callback<()>);

impl Dismiss {
    fn backdrop_click(self) {
        self.0.call(());
    }

    /// Requests closure for the dismiss key; returns whether a request was made.
    fn key(self, key: &str) -> bool {
        let dismiss = matches!(key, "Escape" | "Esc");
        if dismiss {
            self.0.call(());
        }
        dismiss
    }
}

#[component]
/// Caller-controlled modal dialog with a dismissible backdrop.
///
/// Closed modals render nothing. Open modals render one backdrop and one
/// content frame; clicking the backdrop or pressing Escape calls `on_close`.
///
/// `attr:*` pass-through reaches the outer wrapper; `on:*` handlers do not,
/// so attach listeners inside `children` or `footer`.
pub fn Modal(
    #[prop(into)] is_open: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(attrs)] attrs: PassThrough,
    children: ChildrenFn,
) -> impl IntoView {
    let dismiss = Dismiss(on_close);
    let state = create_memo(move |_| OverlayState::from_open(is_open.get()));

    move || {
        let layout = ModalLayout::project(state.get(), title.as_deref(), footer.is_some())?;

        let key_listener = window_event_listener(ev::keydown, move |ev| {
            if dismiss.key(&ev.key()) {
                ev.prevent_default();
            }
        });
        on_cleanup(move || key_listener.remove());

        let footer = footer.clone().filter(|_| layout.footer);
        let children = children.clone();
        let attrs = attrs.clone();
        let aria_label = aria_label.clone().or_else(|| layout.title.clone());

        Some(untrack(move || {
            view! {
                <div
                    class=merge_class("ui-modal", layout_class)
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    {..attrs}
                >
                    <div
                        data-ui-slot="backdrop"
                        aria-hidden="true"
                        on:click=move |_| dismiss.backdrop_click()
                    ></div>
                    <div data-ui-slot="frame" role="dialog" aria-modal="true" aria-label=aria_label>
                        {layout
                            .title
                            .map(|title| {
                                view! {
                                    <header data-ui-slot="title">
                                        <h2>{title}</h2>
                                    </header>
                                }
                            })}
                        <div data-ui-slot="body">{children()}</div>
                        {footer
                            .map(|footer| view! { <footer data-ui-slot="footer">{footer.run()}</footer> })}
                    </div>
                </div>
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    fn counting_dismiss() -> (Dismiss, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let on_close = Callback::new(move |()| counter.set(counter.get() + 1));
        (Dismiss(on_close), calls)
    }

    #[test]
    fn closed_modal_has_no_layout() {
        assert_eq!(
            ModalLayout::project(OverlayState::from_open(false), Some("Book Sally"), true),
            None
        );
    }

    #[test]
    fn open_modal_keeps_only_supplied_bands() {
        let state = OverlayState::from_open(true);
        assert_eq!(
            ModalLayout::project(state, Some("Book Sally"), true),
            Some(ModalLayout {
                title: Some("Book Sally".to_string()),
                footer: true,
            })
        );
        assert_eq!(
            ModalLayout::project(state, None, false),
            Some(ModalLayout {
                title: None,
                footer: false,
            })
        );
        assert_eq!(
            ModalLayout::project(state, Some(""), false).and_then(|layout| layout.title),
            None
        );
    }

    #[test]
    fn backdrop_click_requests_close_once_per_click() {
        let runtime = create_runtime();
        let (dismiss, calls) = counting_dismiss();

        dismiss.backdrop_click();
        assert_eq!(calls.get(), 1);
        dismiss.backdrop_click();
        assert_eq!(calls.get(), 2);

        runtime.dispose();
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn closed_modal_renders_nothing() {
        let html = render(|| {
            view! {
                <Modal is_open=false on_close=Callback::new(|()| ()) title="Book Sally">
                    <p>"Pick a date"</p>
                </Modal>
            }
        });
        assert!(!html.contains("backdrop"), "{html}");
        assert!(!html.contains("dialog"), "{html}");
        assert!(!html.contains("Pick a date"), "{html}");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn open_modal_renders_one_backdrop_and_one_frame() {
        let html = render(|| {
            view! {
                <Modal is_open=true on_close=Callback::new(|()| ()) title="Book Sally">
                    <p>"Pick a date"</p>
                </Modal>
            }
        });
        assert_eq!(html.matches(r#"data-ui-slot="backdrop""#).count(), 1, "{html}");
        assert_eq!(html.matches(r#"data-ui-slot="frame""#).count(), 1, "{html}");
        assert!(html.contains(r#"data-ui-slot="title""#), "{html}");
        assert!(!html.contains(r#"data-ui-slot="footer""#), "{html}");
        let text = text_content(&html);
        assert!(text.contains("Book Sally"), "{html}");
        assert!(text.contains("Pick a date"), "{html}");
    }

    #[test]
    fn only_escape_requests_close() {
        let runtime = create_runtime();
        let (dismiss, calls) = counting_dismiss();

        assert!(!dismiss.key("Enter"));
        assert!(!dismiss.key("a"));
        assert_eq!(calls.get(), 0);
        assert!(dismiss.key("Escape"));
        assert_eq!(calls.get(), 1);

        runtime.dispose();
    }
}
