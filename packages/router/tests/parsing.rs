use std::rc::Rc;

use pretty_assertions::assert_eq;
use wanderlust_history::MemoryHistory;
use wanderlust_router::prelude::*;

struct Page(&'static str);

impl Component for Page {
    fn name(&self) -> &'static str {
        self.0
    }

    fn render(&self, _: &RouteLocation) -> String {
        unimplemented!()
    }
}

fn router(paths: &[(&'static str, &'static str)]) -> Router {
    let routes = paths
        .iter()
        .map(|(path, name)| Route::new(*path, *name, Rc::new(Page(*name)) as View));

    create_router(RouterOptions::new(Rc::new(MemoryHistory::default())).routes(routes)).unwrap()
}

fn name_of(router: &Router, path: &str) -> Option<String> {
    router.resolve(path).unwrap().name
}

// Make sure trailing '/'s work correctly
#[test]
fn trailing_slashes_parse() {
    let router = router(&[("/", "Root"), ("/test/", "Test"), ("/:id/test/", "Dynamic")]);

    assert_eq!(name_of(&router, "/").as_deref(), Some("Root"));
    assert_eq!(name_of(&router, "/test/").as_deref(), Some("Test"));
    assert_eq!(name_of(&router, "/test").as_deref(), Some("Test"));

    let dynamic = router.resolve("/123/test/").unwrap();
    assert_eq!(dynamic.name.as_deref(), Some("Dynamic"));
    assert_eq!(dynamic.param("id"), Some("123"));
    assert_eq!(
        router.resolve("/123/test").unwrap().param("id"),
        Some("123")
    );
}

#[test]
fn without_trailing_slashes_parse() {
    let router = router(&[("/", "Root"), ("/test", "Test"), ("/:id/test", "Dynamic")]);

    assert_eq!(name_of(&router, "/test/").as_deref(), Some("Test"));
    assert_eq!(name_of(&router, "/test").as_deref(), Some("Test"));
    assert_eq!(name_of(&router, "/123/test/").as_deref(), Some("Dynamic"));
    assert_eq!(name_of(&router, "/123/test").as_deref(), Some("Dynamic"));
}

#[test]
fn first_matching_route_wins() {
    let router = router(&[("/", "Root"), ("/about", "About"), ("/:id", "Dynamic")]);

    assert_eq!(name_of(&router, "/about").as_deref(), Some("About"));
    assert_eq!(name_of(&router, "/panama").as_deref(), Some("Dynamic"));

    let shadowed = crate::router(&[("/:id", "Dynamic"), ("/about", "About")]);
    assert_eq!(name_of(&shadowed, "/about").as_deref(), Some("Dynamic"));
}

#[test]
fn query_and_hash_are_kept_apart() {
    let router = router(&[("/", "Root"), ("/:id", "Dynamic")]);
    let location = router.resolve("/brazil?tab=food#top").unwrap();

    assert_eq!(location.path, "/brazil");
    assert_eq!(location.query.as_deref(), Some("tab=food"));
    assert_eq!(location.hash.as_deref(), Some("top"));
    assert_eq!(location.full_path, "/brazil?tab=food#top");
    assert_eq!(location.param("id"), Some("brazil"));
}

#[test]
fn empty_query_and_hash_are_dropped() {
    let router = router(&[("/", "Root")]);
    let location = router.resolve("/?#").unwrap();

    assert_eq!(location.full_path, "/");
    assert_eq!(location.name.as_deref(), Some("Root"));
}

#[test]
fn relative_paths_are_made_absolute() {
    let router = router(&[("/", "Root"), ("/:id", "Dynamic")]);
    assert_eq!(router.resolve("jamaica").unwrap().path, "/jamaica");
}

#[test]
fn unmatched_paths_resolve_without_route() {
    let router = router(&[("/", "Root"), ("/:id", "Dynamic")]);
    let location = router.resolve("/a/b").unwrap();

    assert!(!location.is_matched());
    assert_eq!(location.name, None);
    assert!(location.params.is_empty());
    assert_eq!(location.full_path, "/a/b");
}

#[test]
fn named_targets_build_paths() {
    let router = router(&[("/", "Root"), ("/:id", "Dynamic")]);

    let location = router
        .resolve(NavigationTarget::named("Dynamic").param("id", "hawaii"))
        .unwrap();
    assert_eq!(location.full_path, "/hawaii");
    assert_eq!(location.param("id"), Some("hawaii"));

    let location = router
        .resolve(NavigationTarget::named("Dynamic").param("id", "new york").query("tab=food"))
        .unwrap();
    assert_eq!(location.full_path, "/new%20york?tab=food");
    assert_eq!(location.param("id"), Some("new york"));
}

#[test]
fn named_targets_drop_unknown_params() {
    let router = router(&[("/", "Root")]);
    let location = router
        .resolve(NavigationTarget::named("Root").param("id", "brazil"))
        .unwrap();

    assert_eq!(location.full_path, "/");
    assert!(location.params.is_empty());
}

#[test]
fn named_target_failures() {
    let router = router(&[("/", "Root"), ("/:id", "Dynamic")]);

    assert_eq!(
        router.resolve(NavigationTarget::named("Missing")),
        Err(NavigationFailure::UnknownRoute(String::from("Missing")))
    );
    assert_eq!(
        router.resolve(NavigationTarget::named("Dynamic")),
        Err(NavigationFailure::MissingParam {
            name: String::from("Dynamic"),
            param: String::from("id"),
        })
    );
}

#[test]
fn invalid_route_tables_are_rejected() {
    let history = || Rc::new(MemoryHistory::default());
    let page = || Rc::new(Page("Page")) as View;

    let duplicate = create_router(
        RouterOptions::new(history())
            .route(Route::new("/", "Page", page()))
            .route(Route::new("/:id", "Page", page())),
    );
    assert_eq!(
        duplicate.err(),
        Some(RouterError::DuplicateRouteName(String::from("Page")))
    );

    let relative = create_router(RouterOptions::new(history()).route(Route::new("page", "Page", page())));
    assert!(matches!(relative.err(), Some(RouterError::InvalidPath { .. })));
}
