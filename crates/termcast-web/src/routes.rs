//! The site's route table.
//!
//! One declaration per URL the site answers, registered top to bottom in
//! precedence order. Literal paths that share a shape with a later
//! parameterized entry (`/browse` vs `/browse/:category`,
//! `/auth/browser_id/callback` vs `/auth/:provider/callback`) must stay
//! above it.

use termcast_router::{ConfigError, HandlerRef, Route, RouteTable};

/// Builds the full route table for the site.
///
/// Called once at startup; the returned table is immutable and shared by
/// every request handler. Fails only on a configuration defect such as a
/// duplicate alias.
pub fn draw() -> Result<RouteTable, ConfigError> {
    RouteTable::builder()
        .route(Route::get("/browse", HandlerRef::new("asciicasts", "index")).with_name("browse"))
        .route(
            Route::get("/browse/:category", HandlerRef::new("asciicasts", "index"))
                .with_name("category"),
        )
        .resources("a", "asciicasts", &["raw", "example"])
        .route(Route::get("/~:nickname", HandlerRef::new("users", "show")).with_name("profile"))
        .route(
            Route::get("/docs", HandlerRef::new("docs", "show"))
                .with_default("page", "getting-started")
                .with_name("docs_index"),
        )
        .route(Route::get("/docs/:page", HandlerRef::new("docs", "show")).with_name("docs"))
        .route(Route::get(
            "/auth/browser_id/callback",
            HandlerRef::new("sessions", "create"),
        ))
        .route(Route::get(
            "/auth/:provider/callback",
            HandlerRef::new("account_merges", "create"),
        ))
        .route(Route::get("/auth/failure", HandlerRef::new("sessions", "failure")))
        .route(Route::get("/login", HandlerRef::new("sessions", "new")))
        .route(Route::get("/logout", HandlerRef::new("sessions", "destroy")))
        .route(Route::get(
            "/connect/:user_token",
            HandlerRef::new("user_tokens", "create"),
        ))
        .resource("user", "user")
        .scope("api", |api| api.resources("asciicasts", "asciicasts", &[]))
        .root(HandlerRef::new("home", "show"))
        .route(
            Route::get("/about", HandlerRef::new("pages", "show"))
                .with_default("page", "about")
                .with_name("about"),
        )
        .route(
            Route::get("/privacy", HandlerRef::new("pages", "show"))
                .with_default("page", "privacy")
                .with_name("privacy"),
        )
        .route(
            Route::get("/tos", HandlerRef::new("pages", "show"))
                .with_default("page", "tos")
                .with_name("tos"),
        )
        .route(
            Route::get("/contributing", HandlerRef::new("pages", "show"))
                .with_default("page", "contributing")
                .with_name("contributing"),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_builds() {
        let table = draw().unwrap();
        assert!(!table.is_empty());
    }

    #[test]
    fn every_alias_is_reachable() {
        let table = draw().unwrap();
        for alias in [
            "browse",
            "category",
            "profile",
            "docs_index",
            "docs",
            "root",
            "about",
            "privacy",
            "tos",
            "contributing",
        ] {
            assert!(table.route_by_name(alias).is_some(), "missing alias {alias}");
        }
    }
}
