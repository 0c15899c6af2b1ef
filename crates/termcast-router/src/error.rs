//! Error types for table construction and URL generation.
//!
//! A failed lookup is not an error: `RouteTable::resolve` returns `None`
//! for unmatched requests, the expected outcome the layer above renders as
//! a 404. The types here cover genuine defects: a misconfigured table
//! caught at startup, or a bad `url_for` call.

use thiserror::Error;

/// Startup-time configuration defect. The table refuses to build rather
/// than let a silently shadowed alias make `url_for` non-deterministic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Two routes were registered under the same alias.
    #[error("route alias `{0}` is registered more than once")]
    DuplicateAlias(String),
}

/// URL generation failure from [`RouteTable::url_for`].
///
/// These indicate a programming error (misspelled alias, missing
/// parameter), not a runtime condition. Callers generating links on a
/// request path should log and degrade; development code should treat them
/// as fatal.
///
/// [`RouteTable::url_for`]: crate::RouteTable::url_for
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    /// No route was registered under the requested alias.
    #[error("no route is registered under alias `{0}`")]
    UnknownAlias(String),

    /// A named segment in the pattern had no supplied value and no default.
    #[error("route `{route}` requires a value for parameter `{param}`")]
    MissingParameter {
        /// Alias (or pattern, for unnamed routes) of the offending route.
        route: String,
        /// Name of the unfilled segment.
        param: String,
    },
}
