//! Route handlers.

pub mod health;
pub mod matches;
pub mod standings;

/// Treat `?key=` the same as an absent key.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
