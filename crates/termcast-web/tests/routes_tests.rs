//! Resolution tests for the site's route table.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use termcast_router::{Method, UrlError};
use termcast_web::routes::draw;

#[rstest]
#[case::browse("/browse", "asciicasts#index", &[])]
#[case::category("/browse/comedy", "asciicasts#index", &[("category", "comedy")])]
#[case::asciicast_index("/a", "asciicasts#index", &[])]
#[case::asciicast_show("/a/42", "asciicasts#show", &[("id", "42")])]
#[case::asciicast_raw("/a/42/raw", "asciicasts#raw", &[("id", "42")])]
#[case::asciicast_example("/a/42/example", "asciicasts#example", &[("id", "42")])]
#[case::profile("/~bob", "users#show", &[("nickname", "bob")])]
#[case::docs_index("/docs", "docs#show", &[("page", "getting-started")])]
#[case::docs_page("/docs/faq", "docs#show", &[("page", "faq")])]
#[case::browser_id("/auth/browser_id/callback", "sessions#create", &[])]
#[case::provider("/auth/twitter/callback", "account_merges#create", &[("provider", "twitter")])]
#[case::auth_failure("/auth/failure", "sessions#failure", &[])]
#[case::login("/login", "sessions#new", &[])]
#[case::logout("/logout", "sessions#destroy", &[])]
#[case::connect("/connect/tok123", "user_tokens#create", &[("user_token", "tok123")])]
#[case::user("/user", "user#show", &[])]
#[case::api_index("/api/asciicasts", "api.asciicasts#index", &[])]
#[case::api_show("/api/asciicasts/7", "api.asciicasts#show", &[("id", "7")])]
#[case::root("/", "home#show", &[])]
#[case::about("/about", "pages#show", &[("page", "about")])]
#[case::privacy("/privacy", "pages#show", &[("page", "privacy")])]
#[case::tos("/tos", "pages#show", &[("page", "tos")])]
#[case::contributing("/contributing", "pages#show", &[("page", "contributing")])]
fn get_requests_resolve(
    #[case] path: &str,
    #[case] handler: &str,
    #[case] params: &[(&str, &str)],
) {
    let table = draw().unwrap();
    let matched = table
        .resolve(Method::Get, path)
        .unwrap_or_else(|| panic!("{path} did not resolve"));

    assert_eq!(matched.route().handler().to_string(), handler);
    for (key, value) in params {
        assert_eq!(
            matched.params().get(*key).map(String::as_str),
            Some(*value),
            "param {key} for {path}"
        );
    }
}

#[rstest]
#[case("/nonexistent")]
#[case("/browse/comedy/extra")]
#[case("/a/42/unknown")]
#[case("/api/users")]
fn unrouted_paths_return_none(#[case] path: &str) {
    let table = draw().unwrap();
    assert!(table.resolve(Method::Get, path).is_none());
}

#[test]
fn literal_routes_precede_parameterized_ones() {
    let table = draw().unwrap();

    // `/browse` must hit the literal entry even though `/browse/:category`
    // exists further down, and the browser_id callback must not be eaten
    // by the `:provider` pattern.
    let m = table.resolve(Method::Get, "/browse").unwrap();
    assert!(m.params().is_empty());

    let m = table
        .resolve(Method::Get, "/auth/browser_id/callback")
        .unwrap();
    assert_eq!(m.route().handler().to_string(), "sessions#create");
}

#[test]
fn non_get_verbs_come_from_resource_expansion() {
    let table = draw().unwrap();

    assert_eq!(
        table
            .resolve(Method::Post, "/a")
            .unwrap()
            .route()
            .handler()
            .to_string(),
        "asciicasts#create"
    );
    assert_eq!(
        table
            .resolve(Method::Put, "/user")
            .unwrap()
            .route()
            .handler()
            .to_string(),
        "user#update"
    );
    assert_eq!(
        table
            .resolve(Method::Delete, "/api/asciicasts/7")
            .unwrap()
            .route()
            .handler()
            .to_string(),
        "api.asciicasts#destroy"
    );

    // The hand-declared browsing routes stay GET-only.
    assert!(table.resolve(Method::Post, "/browse").is_none());
}

#[test]
fn url_for_round_trips_aliases() {
    let table = draw().unwrap();

    assert_eq!(table.url_for("about", &HashMap::new()).unwrap(), "/about");
    assert_eq!(table.url_for("root", &HashMap::new()).unwrap(), "/");
    assert_eq!(table.url_for("docs_index", &HashMap::new()).unwrap(), "/docs");
    assert_eq!(
        table
            .url_for_pairs("category", &[("category", "comedy")])
            .unwrap(),
        "/browse/comedy"
    );
    assert_eq!(
        table.url_for_pairs("profile", &[("nickname", "bob")]).unwrap(),
        "/~bob"
    );
}

#[test]
fn url_for_errors_are_distinguished() {
    let table = draw().unwrap();

    assert!(matches!(
        table.url_for("category", &HashMap::new()),
        Err(UrlError::MissingParameter { .. })
    ));
    assert!(matches!(
        table.url_for("not_an_alias", &HashMap::new()),
        Err(UrlError::UnknownAlias(_))
    ));
}
