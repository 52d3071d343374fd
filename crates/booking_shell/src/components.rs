//! Header composition over the shared primitive set.

mod header;

use booking_ui::{Badge, BadgeVariant, Button, ButtonSize};
use leptos::*;

use crate::{
    model::{HeaderState, NavDestination},
    navigation::{project_header, NavEntry},
};

pub use header::NavigationHeader;
