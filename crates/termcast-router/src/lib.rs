//! # termcast-router
//!
//! A declaration-ordered HTTP route table with support for:
//! - Static routes (`/browse`)
//! - Named parameters (`/browse/:category`)
//! - Literal-prefixed parameters (`/~:nickname`)
//! - Named aliases for URL generation (`url_for("about")`)
//! - Static parameter defaults (`/docs` with a fixed `page`)
//! - Conventional resource expansion (index/show/create/update/destroy)
//!
//! ## Matching model
//!
//! Routes are matched top to bottom in declaration order and the first
//! structural match wins. There is no specificity scoring: a literal path
//! that could also satisfy a parameterized pattern must simply be declared
//! first. Resource expansion is a registration-time macro step, so the
//! matcher only ever walks concrete entries.
//!
//! ## Lifecycle
//!
//! The table is built once at process start through
//! [`RouteTableBuilder`] and is immutable afterwards. Every field is
//! read-only post-construction, so a [`RouteTable`] can be shared across
//! request-handling tasks without locking.
//!
//! ## Example
//!
//! ```
//! use termcast_router::{HandlerRef, Method, Route, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .route(Route::get("/browse", HandlerRef::new("asciicasts", "index")).with_name("browse"))
//!     .route(Route::get("/browse/:category", HandlerRef::new("asciicasts", "index")).with_name("category"))
//!     .build()
//!     .unwrap();
//!
//! let m = table.resolve(Method::Get, "/browse/comedy").unwrap();
//! assert_eq!(m.route().handler().to_string(), "asciicasts#index");
//! assert_eq!(m.params().get("category"), Some(&"comedy".to_string()));
//!
//! let url = table.url_for_pairs("category", &[("category", "comedy")]).unwrap();
//! assert_eq!(url, "/browse/comedy");
//! ```

use std::collections::HashMap;

mod error;
mod handler;
mod method;
pub mod path;
pub mod route;

pub use error::{ConfigError, UrlError};
pub use handler::HandlerRef;
pub use method::{Method, UnknownMethod};
pub use route::pattern::{classify_segment, parse_pattern, Segment};
pub use route::Route;

use path::normalize_path;

/// Result of a successful [`RouteTable::resolve`].
///
/// Borrows the matched route from the table; the bound parameters
/// (path bindings plus any route defaults) are owned.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    route: &'a Route,
    params: HashMap<String, String>,
}

impl<'a> RouteMatch<'a> {
    /// The route that matched.
    pub fn route(&self) -> &'a Route {
        self.route
    }

    /// Parameters bound from the path, with route defaults merged in.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Consumes the match, handing back the owned parameter map.
    pub fn into_params(self) -> HashMap<String, String> {
        self.params
    }
}

/// Registration API for [`RouteTable`].
///
/// Consuming builder in the usual chaining style; `build()` validates the
/// configuration and freezes declaration order. Registration is a
/// startup-only, single-threaded affair.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    /// Registers a single route. Order of registration is order of
    /// matching precedence.
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Registers the root route (`GET /`) under the conventional `root`
    /// alias.
    pub fn root(self, handler: HandlerRef) -> Self {
        self.route(Route::get("/", handler).with_name("root"))
    }

    /// Declares a plural resource, expanding it into the conventional
    /// index/show/create/update/destroy entries plus `GET` member
    /// extensions nested under the instance path.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcast_router::{Method, RouteTable};
    ///
    /// let table = RouteTable::builder()
    ///     .resources("a", "asciicasts", &["raw", "example"])
    ///     .build()
    ///     .unwrap();
    ///
    /// let m = table.resolve(Method::Get, "/a/42/raw").unwrap();
    /// assert_eq!(m.route().handler().to_string(), "asciicasts#raw");
    /// ```
    pub fn resources(mut self, path: &str, resource: &str, members: &[&str]) -> Self {
        self.routes
            .extend(route::resource::plural(path, resource, members));
        self
    }

    /// Declares a singular resource (no `:id` segment): show, create,
    /// update, and destroy on the mount path itself.
    pub fn resource(mut self, path: &str, resource: &str) -> Self {
        self.routes
            .extend(route::resource::singular(path, resource));
        self
    }

    /// Registers a namespaced group of routes. The namespace is prepended
    /// to every nested pattern, and nested handler resources are
    /// qualified as `namespace.resource`.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcast_router::{Method, RouteTable};
    ///
    /// let table = RouteTable::builder()
    ///     .scope("api", |api| api.resources("asciicasts", "asciicasts", &[]))
    ///     .build()
    ///     .unwrap();
    ///
    /// let m = table.resolve(Method::Get, "/api/asciicasts/7").unwrap();
    /// assert_eq!(m.route().handler().to_string(), "api.asciicasts#show");
    /// ```
    pub fn scope<F>(mut self, namespace: &str, f: F) -> Self
    where
        F: FnOnce(RouteTableBuilder) -> RouteTableBuilder,
    {
        let namespace = namespace.trim_matches('/');
        let prefix = format!("/{}", namespace);
        let nested = f(RouteTableBuilder::default());

        self.routes.extend(
            nested
                .routes
                .into_iter()
                .map(|route| route.scoped(namespace).prefixed(&prefix)),
        );
        self
    }

    /// Validates the registrations and freezes the table.
    ///
    /// Fails fast on a duplicate alias: silent shadowing would make
    /// `url_for` non-deterministic, so a misdeclared table never serves a
    /// request.
    pub fn build(self) -> Result<RouteTable, ConfigError> {
        let mut aliases = HashMap::new();

        for (index, route) in self.routes.iter().enumerate() {
            if let Some(name) = route.name() {
                if aliases.insert(name.to_string(), index).is_some() {
                    return Err(ConfigError::DuplicateAlias(name.to_string()));
                }
            }
        }

        Ok(RouteTable {
            routes: self.routes,
            aliases,
        })
    }
}

/// Immutable, declaration-ordered route table.
///
/// Built once at startup via [`RouteTable::builder`], then queried
/// concurrently by any number of request handlers. No field is mutated
/// after construction.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    aliases: HashMap<String, usize>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Finds the first route matching the request, in declaration order.
    ///
    /// The path is normalized first (trailing slash, duplicate slashes),
    /// then aligned against each entry until one binds. `None` is the
    /// expected outcome for unrouted paths, not a failure; the caller
    /// renders it as a 404.
    pub fn resolve(&self, method: Method, path: &str) -> Option<RouteMatch<'_>> {
        let normalized = normalize_path(path);

        let found = self.routes.iter().find_map(|route| {
            if route.method() != method {
                return None;
            }
            route
                .matches(&normalized)
                .map(|params| RouteMatch { route, params })
        });

        match &found {
            Some(m) => {
                tracing::debug!(%method, path, handler = %m.route.handler(), "route matched")
            }
            None => tracing::debug!(%method, path, "no route matched"),
        }

        found
    }

    /// Rebuilds a concrete path for a named route.
    ///
    /// The inverse of [`resolve`](Self::resolve): given an alias and
    /// parameter values, produces the path without hardcoding the
    /// pattern. Fails with [`UrlError::UnknownAlias`] for an unregistered
    /// alias and [`UrlError::MissingParameter`] when a required segment
    /// has neither a supplied value nor a default.
    pub fn url_for(
        &self,
        alias: &str,
        params: &HashMap<String, String>,
    ) -> Result<String, UrlError> {
        let index = self
            .aliases
            .get(alias)
            .ok_or_else(|| UrlError::UnknownAlias(alias.to_string()))?;

        self.routes[*index].url(params)
    }

    /// Convenience form of [`url_for`](Self::url_for) taking parameter
    /// pairs instead of a pre-built map.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcast_router::{HandlerRef, Route, RouteTable};
    ///
    /// let table = RouteTable::builder()
    ///     .route(Route::get("/docs/:page", HandlerRef::new("docs", "show")).with_name("docs"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let url = table.url_for_pairs("docs", &[("page", "faq")]).unwrap();
    /// assert_eq!(url, "/docs/faq");
    /// ```
    pub fn url_for_pairs(&self, alias: &str, params: &[(&str, &str)]) -> Result<String, UrlError> {
        let map: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.url_for(alias, &map)
    }

    /// Looks a route up by its alias.
    pub fn route_by_name(&self, alias: &str) -> Option<&Route> {
        self.aliases.get(alias).map(|&index| &self.routes[index])
    }

    /// All registered routes, in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
