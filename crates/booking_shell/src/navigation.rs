//! Navigation registry and header state projection.

use booking_ui::{ButtonVariant, IconName};

use crate::model::{HeaderCounter, HeaderState, NavDestination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static description of one header trigger.
pub struct NavDescriptor {
    /// View the trigger asks the page to switch to.
    pub destination: NavDestination,
    /// Visible trigger copy.
    pub label: &'static str,
    /// Leading icon.
    pub icon: IconName,
    /// Button treatment for the trigger.
    pub variant: ButtonVariant,
    /// Counter shown as a badge on this trigger.
    pub counter: Option<HeaderCounter>,
    /// Only rendered for admins.
    pub admin_only: bool,
}

const NAV_REGISTRY: [NavDescriptor; 7] = [
    NavDescriptor {
        destination: NavDestination::Home,
        label: "Browse Talent",
        icon: IconName::Search,
        variant: ButtonVariant::Outline,
        counter: None,
        admin_only: false,
    },
    NavDescriptor {
        destination: NavDestination::Join,
        label: "Join as Talent",
        icon: IconName::PersonAdd,
        variant: ButtonVariant::Neon,
        counter: None,
        admin_only: false,
    },
    NavDescriptor {
        destination: NavDestination::Favourites,
        label: "Favourites",
        icon: IconName::Heart,
        variant: ButtonVariant::Outline,
        counter: Some(HeaderCounter::Favourites),
        admin_only: false,
    },
    NavDescriptor {
        destination: NavDestination::Messages,
        label: "Messages",
        icon: IconName::Chat,
        variant: ButtonVariant::Outline,
        counter: None,
        admin_only: false,
    },
    NavDescriptor {
        destination: NavDestination::Admin,
        label: "Admin",
        icon: IconName::Shield,
        variant: ButtonVariant::Secondary,
        counter: None,
        admin_only: true,
    },
    NavDescriptor {
        destination: NavDestination::Notifications,
        label: "Notifications",
        icon: IconName::Alert,
        variant: ButtonVariant::Outline,
        counter: Some(HeaderCounter::Unread),
        admin_only: false,
    },
    NavDescriptor {
        destination: NavDestination::SignIn,
        label: "Sign In",
        icon: IconName::SignIn,
        variant: ButtonVariant::Primary,
        counter: None,
        admin_only: false,
    },
];

/// Every header trigger, in render order.
pub fn nav_registry() -> &'static [NavDescriptor] {
    &NAV_REGISTRY
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One rendered header trigger.
pub struct NavEntry {
    /// Registry entry the trigger renders from.
    pub descriptor: &'static NavDescriptor,
    /// Badge count; `None` suppresses the badge.
    pub badge: Option<u32>,
    /// Trigger targets the page's current view.
    pub selected: bool,
}

/// Badge count for a counter value. Zero never renders a badge.
pub fn badge_count(count: u32) -> Option<u32> {
    (count > 0).then_some(count)
}

/// Projects header state onto the triggers to render, in registry order.
pub fn project_header(state: &HeaderState, active: Option<NavDestination>) -> Vec<NavEntry> {
    nav_registry()
        .iter()
        .filter(|descriptor| !descriptor.admin_only || state.is_admin)
        .map(|descriptor| NavEntry {
            descriptor,
            badge: descriptor
                .counter
                .and_then(|counter| badge_count(state.count(counter))),
            selected: active == Some(descriptor.destination),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn badge_for(entries: &[NavEntry], destination: NavDestination) -> Option<u32> {
        entries
            .iter()
            .find(|entry| entry.descriptor.destination == destination)
            .and_then(|entry| entry.badge)
    }

    fn destinations(entries: &[NavEntry]) -> Vec<NavDestination> {
        entries
            .iter()
            .map(|entry| entry.descriptor.destination)
            .collect()
    }

    #[test]
    fn registry_covers_every_destination_once() {
        assert_eq!(
            nav_registry()
                .iter()
                .map(|descriptor| descriptor.destination)
                .collect::<Vec<_>>(),
            NavDestination::ALL.to_vec()
        );
    }

    #[test]
    fn zero_counters_render_no_badges() {
        let entries = project_header(&HeaderState::default(), None);
        assert!(entries.iter().all(|entry| entry.badge.is_none()));
    }

    #[test]
    fn positive_favourites_count_renders_badge() {
        let state = HeaderState {
            fav_count: 3,
            ..HeaderState::default()
        };
        let entries = project_header(&state, None);
        assert_eq!(badge_for(&entries, NavDestination::Favourites), Some(3));
        assert_eq!(badge_for(&entries, NavDestination::Notifications), None);
    }

    #[test]
    fn unread_count_badges_notifications() {
        let state = HeaderState {
            unread: 12,
            ..HeaderState::default()
        };
        let entries = project_header(&state, None);
        assert_eq!(badge_for(&entries, NavDestination::Notifications), Some(12));
        assert_eq!(badge_for(&entries, NavDestination::Messages), None);
    }

    #[test]
    fn admin_trigger_requires_admin_flag() {
        let guest = project_header(&HeaderState::default(), None);
        assert_eq!(
            destinations(&guest),
            vec![
                NavDestination::Home,
                NavDestination::Join,
                NavDestination::Favourites,
                NavDestination::Messages,
                NavDestination::Notifications,
                NavDestination::SignIn,
            ]
        );

        let admin = HeaderState {
            is_admin: true,
            ..HeaderState::default()
        };
        assert_eq!(destinations(&project_header(&admin, None)), NavDestination::ALL.to_vec());
    }

    #[test]
    fn active_destination_is_selected_alone() {
        let entries = project_header(&HeaderState::default(), Some(NavDestination::Messages));
        let selected: Vec<_> = entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.descriptor.destination)
            .collect();
        assert_eq!(selected, vec![NavDestination::Messages]);
    }

    #[test]
    fn projection_is_stable_across_calls() {
        let state = HeaderState {
            fav_count: 1,
            unread: 4,
            is_admin: true,
        };
        assert_eq!(
            project_header(&state, Some(NavDestination::Home)),
            project_header(&state, Some(NavDestination::Home))
        );
    }

    #[test]
    fn badge_count_hides_zero() {
        assert_eq!(badge_count(0), None);
        assert_eq!(badge_count(1), Some(1));
    }
}
