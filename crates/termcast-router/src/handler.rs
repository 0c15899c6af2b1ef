//! Handler references.
//!
//! The route table never calls a controller; it only needs a stable
//! identity for the code that will service a match. A [`HandlerRef`] is
//! that identity: a (resource, action) pair such as `asciicasts#show`.

use std::fmt;

/// Identifies the controller action a route dispatches to.
///
/// # Examples
///
/// ```
/// use termcast_router::HandlerRef;
///
/// let handler = HandlerRef::new("asciicasts", "show");
/// assert_eq!(handler.resource(), "asciicasts");
/// assert_eq!(handler.action(), "show");
/// assert_eq!(handler.to_string(), "asciicasts#show");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerRef {
    resource: String,
    action: String,
}

impl HandlerRef {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    /// Controller/resource half of the identity, e.g. `asciicasts`.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Action half of the identity, e.g. `show`.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns the same action namespaced under a scope, `api.asciicasts`
    /// style. Used by scoped registration; the action name is untouched.
    pub fn scoped(&self, namespace: &str) -> Self {
        Self {
            resource: format!("{}.{}", namespace, self.resource),
            action: self.action.clone(),
        }
    }
}

impl fmt::Display for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.resource, self.action)
    }
}
