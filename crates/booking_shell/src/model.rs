//! Destinations, counters, and page-supplied header state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures while reading header inputs supplied by a page.
pub enum HeaderError {
    /// A destination token outside the navigation registry.
    #[error("unknown navigation destination `{0}`")]
    UnknownDestination(String),
    /// A header state payload that does not match the expected shape.
    #[error("invalid header state payload: {0}")]
    InvalidState(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Views the header can ask the surrounding page to switch to.
pub enum NavDestination {
    /// Talent browse view.
    Home,
    /// Talent sign-up view.
    Join,
    /// Saved talent.
    Favourites,
    /// Conversations.
    Messages,
    /// Admin console.
    Admin,
    /// Notification inbox.
    Notifications,
    /// Sign-in view.
    SignIn,
}

impl NavDestination {
    /// Every destination, in header order.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Join,
        Self::Favourites,
        Self::Messages,
        Self::Admin,
        Self::Notifications,
        Self::SignIn,
    ];

    /// Token handed to the page's dispatch.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Join => "join",
            Self::Favourites => "favourites",
            Self::Messages => "messages",
            Self::Admin => "admin",
            Self::Notifications => "notifications",
            Self::SignIn => "signin",
        }
    }
}

impl FromStr for NavDestination {
    type Err = HeaderError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|destination| destination.token() == raw)
            .ok_or_else(|| HeaderError::UnknownDestination(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// External counters projected onto navigation badges.
pub enum HeaderCounter {
    /// Saved talent count.
    Favourites,
    /// Unread notification count.
    Unread,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Header inputs owned by the surrounding page.
///
/// Absent counters deserialize to zero, so "not provided" and "explicitly
/// zero" both suppress the badge.
pub struct HeaderState {
    /// Saved talent count.
    pub fav_count: u32,
    /// Unread notification count.
    pub unread: u32,
    /// Reveals the admin trigger. Presentation only, not an authorization check.
    pub is_admin: bool,
}

impl HeaderState {
    /// Hydrates header state from a page payload such as `{"favCount": 3}`.
    pub fn from_json(raw: &str) -> Result<Self, HeaderError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Current value of a counter.
    pub fn count(&self, counter: HeaderCounter) -> u32 {
        match counter {
            HeaderCounter::Favourites => self.fav_count,
            HeaderCounter::Unread => self.unread,
        }
    }
}
