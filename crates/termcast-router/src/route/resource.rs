//! Conventional resource expansion.
//!
//! One resource declaration expands into the fixed, conventional set of
//! routes at registration time. The matcher never sees the convention;
//! it only sees the concrete entries produced here.

use crate::handler::HandlerRef;
use crate::method::Method;
use crate::route::Route;

/// Expands a plural resource into its conventional routes.
///
/// For a resource `asciicasts` mounted at `/a`:
///
/// | Method | Path      | Action  |
/// |--------|-----------|---------|
/// | GET    | /a        | index   |
/// | GET    | /a/:id/…  | members |
/// | GET    | /a/:id    | show    |
/// | POST   | /a        | create  |
/// | PUT    | /a/:id    | update  |
/// | PATCH  | /a/:id    | update  |
/// | DELETE | /a/:id    | destroy |
///
/// Member extensions are additional `GET` actions nested under the
/// instance path (`/a/:id/raw`). They are emitted before `show` so a
/// later change to the member syntax can never be shadowed by the `:id`
/// entry.
pub fn plural(path: &str, resource: &str, members: &[&str]) -> Vec<Route> {
    let collection = mount_point(path);
    let member = format!("{}/:id", collection);

    let mut routes = Vec::with_capacity(6 + members.len());
    routes.push(Route::get(&collection, HandlerRef::new(resource, "index")));

    for action in members {
        routes.push(Route::get(
            format!("{}/{}", member, action),
            HandlerRef::new(resource, *action),
        ));
    }

    routes.push(Route::get(&member, HandlerRef::new(resource, "show")));
    routes.push(Route::post(&collection, HandlerRef::new(resource, "create")));
    routes.push(Route::put(&member, HandlerRef::new(resource, "update")));
    routes.push(Route::patch(&member, HandlerRef::new(resource, "update")));
    routes.push(Route::delete(&member, HandlerRef::new(resource, "destroy")));
    routes
}

/// Expands a singular resource (one instance per requester, no `:id`).
///
/// Exposes show/create/update/destroy on the mount path itself. The
/// form-rendering actions (new/edit) are deliberately not generated; see
/// DESIGN.md.
pub fn singular(path: &str, resource: &str) -> Vec<Route> {
    let mount = mount_point(path);

    vec![
        Route::get(&mount, HandlerRef::new(resource, "show")),
        Route::post(&mount, HandlerRef::new(resource, "create")),
        Route::put(&mount, HandlerRef::new(resource, "update")),
        Route::patch(&mount, HandlerRef::new(resource, "update")),
        Route::delete(&mount, HandlerRef::new(resource, "destroy")),
    ]
}

/// Accepts `a`, `/a`, or `/a/` as a mount path.
fn mount_point(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}
