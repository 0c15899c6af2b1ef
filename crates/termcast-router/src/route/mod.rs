//! Route entries and per-route matching.

pub mod pattern;
pub mod resource;

use std::collections::HashMap;

use crate::error::UrlError;
use crate::handler::HandlerRef;
use crate::method::Method;
use pattern::{parse_pattern, Segment};

/// One entry in the route table.
///
/// A route is parsed once at registration time; matching and URL
/// generation both work from the pre-parsed segments.
///
/// # Examples
///
/// ```
/// use termcast_router::{HandlerRef, Route};
///
/// let route = Route::get("/browse/:category", HandlerRef::new("asciicasts", "index"))
///     .with_name("category");
///
/// let params = route.matches("/browse/comedy").unwrap();
/// assert_eq!(params.get("category"), Some(&"comedy".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    method: Method,
    pattern: String,
    segments: Vec<Segment>,
    handler: HandlerRef,
    name: Option<String>,
    defaults: HashMap<String, String>,
}

impl Route {
    /// Creates a route for an arbitrary method.
    pub fn new(method: Method, pattern: impl Into<String>, handler: HandlerRef) -> Self {
        let pattern = pattern.into();
        let segments = parse_pattern(&pattern);
        Self {
            method,
            pattern,
            segments,
            handler,
            name: None,
            defaults: HashMap::new(),
        }
    }

    /// Creates a `GET` route. Nearly every hand-declared entry is a `GET`.
    pub fn get(pattern: impl Into<String>, handler: HandlerRef) -> Self {
        Self::new(Method::Get, pattern, handler)
    }

    pub fn post(pattern: impl Into<String>, handler: HandlerRef) -> Self {
        Self::new(Method::Post, pattern, handler)
    }

    pub fn put(pattern: impl Into<String>, handler: HandlerRef) -> Self {
        Self::new(Method::Put, pattern, handler)
    }

    pub fn patch(pattern: impl Into<String>, handler: HandlerRef) -> Self {
        Self::new(Method::Patch, pattern, handler)
    }

    pub fn delete(pattern: impl Into<String>, handler: HandlerRef) -> Self {
        Self::new(Method::Delete, pattern, handler)
    }

    /// Names this route so `url_for` can rebuild its path without
    /// hardcoding the pattern.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Injects a static parameter value applied when the path supplies
    /// none, e.g. a fixed `page` for `/about`.
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Namespaces the handler resource, `api.asciicasts` style. Used by
    /// scoped registration.
    pub(crate) fn scoped(mut self, namespace: &str) -> Self {
        self.handler = self.handler.scoped(namespace);
        self
    }

    /// Rebuilds this route under a path prefix, keeping name and defaults.
    /// Used by scoped registration.
    pub(crate) fn prefixed(self, prefix: &str) -> Self {
        let joined = format!("{}{}", prefix.trim_end_matches('/'), self.pattern);
        let mut route = Route::new(self.method, joined, self.handler);
        route.name = self.name;
        route.defaults = self.defaults;
        route
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The pattern as declared, e.g. `/browse/:category`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }

    /// Alias for URL generation, if one was declared.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Names of the parameters this route binds from the path.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }

    /// Structurally aligns a canonical path against this route's pattern.
    ///
    /// Returns the bound parameters on success, with defaults merged in
    /// for keys the path did not supply. The path is assumed canonical;
    /// the table normalizes before calling.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts.iter().copied()) {
            if let Some((name, value)) = segment.bind(part)? {
                params.insert(name.to_string(), value.to_string());
            }
        }

        // Path bindings win over declared defaults.
        for (key, value) in &self.defaults {
            params.entry(key.clone()).or_insert_with(|| value.clone());
        }

        Some(params)
    }

    /// Reconstructs a concrete path from parameter values (the inverse of
    /// [`matches`](Self::matches)).
    ///
    /// Defaults count as supplied values, so a route like `/docs` with a
    /// fixed `page` needs no arguments. A required segment with neither a
    /// supplied value nor a default fails with
    /// [`UrlError::MissingParameter`].
    pub fn url(&self, params: &HashMap<String, String>) -> Result<String, UrlError> {
        let mut rendered = Vec::with_capacity(self.segments.len());

        for segment in &self.segments {
            match segment {
                Segment::Static(text) => rendered.push(text.clone()),
                Segment::Param(name) => rendered.push(self.lookup(name, params)?),
                Segment::Prefixed { prefix, name } => {
                    rendered.push(format!("{}{}", prefix, self.lookup(name, params)?));
                }
            }
        }

        if rendered.is_empty() {
            Ok("/".to_string())
        } else {
            Ok(format!("/{}", rendered.join("/")))
        }
    }

    fn lookup(&self, name: &str, params: &HashMap<String, String>) -> Result<String, UrlError> {
        params
            .get(name)
            .or_else(|| self.defaults.get(name))
            .cloned()
            .ok_or_else(|| UrlError::MissingParameter {
                route: self
                    .name
                    .clone()
                    .unwrap_or_else(|| self.pattern.clone()),
                param: name.to_string(),
            })
    }
}
