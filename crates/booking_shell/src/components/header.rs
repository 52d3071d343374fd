use super::*;

/// Accessible name for a trigger, including its badge count when shown.
fn trigger_label(entry: &NavEntry) -> String {
    match entry.badge {
        Some(count) => format!("{} ({count})", entry.descriptor.label),
        None => entry.descriptor.label.to_string(),
    }
}

#[component]
/// Top navigation bar with view-switch triggers and counter badges.
///
/// Counters and the admin flag come from the page. A badge renders only for
/// a counter above zero; the admin trigger renders only when `is_admin` is
/// set and does not itself authorize anything.
pub fn NavigationHeader(
    on_navigate: Callback<NavDestination>,
    #[prop(optional, into)] fav_count: MaybeSignal<u32>,
    #[prop(optional, into)] unread: MaybeSignal<u32>,
    #[prop(optional, into)] is_admin: MaybeSignal<bool>,
    #[prop(optional, into)] active: MaybeSignal<Option<NavDestination>>,
    #[prop(optional, into)] brand: Option<String>,
) -> impl IntoView {
    let state = Signal::derive(move || HeaderState {
        fav_count: fav_count.get(),
        unread: unread.get(),
        is_admin: is_admin.get(),
    });
    let entries = create_memo(move |_| project_header(&state.get(), active.get()));

    view! {
        <header class="ui-nav-header" data-ui-primitive="true" data-ui-kind="nav-header">
            {brand.map(|brand| view! { <span data-ui-slot="brand">{brand}</span> })}
            <nav data-ui-slot="actions" aria-label="Primary">
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| view! { <NavTrigger entry on_navigate /> })
                        .collect_view()
                }}
            </nav>
        </header>
    }
}

#[component]
fn NavTrigger(entry: NavEntry, on_navigate: Callback<NavDestination>) -> impl IntoView {
    let label = trigger_label(&entry);
    let NavEntry {
        descriptor,
        badge,
        selected,
    } = entry;
    let destination = descriptor.destination;

    view! {
        <Button
            variant=descriptor.variant
            size=ButtonSize::Sm
            layout_class="ui-nav-trigger"
            aria_label=label
            selected=selected
            leading_icon=descriptor.icon
            on_click=Callback::new(move |_| on_navigate.call(destination))
            attr:data-nav=destination.token()
            attr:aria-current=selected.then_some("page")
        >
            <span data-ui-slot="nav-label">{descriptor.label}</span>
            {badge
                .map(|count| {
                    view! {
                        <Badge variant=BadgeVariant::Danger layout_class="ui-nav-badge">
                            {count}
                        </Badge>
                    }
                })}
        </Button>
    }
}
