use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    rc::Rc,
};

use tracing::{debug, warn};
use wanderlust_history::History;

use crate::{
    components::Link,
    error::{NavigationFailure, RouterError},
    navigation::NavigationTarget,
    route_definition::{PathPattern, Route, RouteRecord, View},
    router_cfg::RouterOptions,
    state::RouteLocation,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavigationMode {
    Push,
    Replace,
    /// Adopt the location the history already is at.
    Sync,
}

#[derive(Clone, Copy, Debug)]
enum Traversal {
    Back,
    Forward,
}

struct RouterInner {
    history: Rc<dyn History>,
    records: Vec<RouteRecord>,
    link_active_class: String,
    link_exact_active_class: String,
    current: RefCell<RouteLocation>,
    /// Incremented by every navigation, so a navigation can tell whether it was superseded.
    pending: Cell<u64>,
    /// Set when the history reports a change the router has not adopted yet.
    outdated: Cell<bool>,
}

/// Build a [`Router`] from a route table.
///
/// Fails if a route path is malformed or two routes share a name.
///
/// ```rust
/// # use wanderlust_router::prelude::*;
/// # use wanderlust_history::MemoryHistory;
/// # use std::rc::Rc;
/// # struct Home;
/// # impl Component for Home {
/// #     fn name(&self) -> &'static str { "Home" }
/// #     fn render(&self, _: &RouteLocation) -> String { String::new() }
/// # }
/// let router = create_router(
///     RouterOptions::new(Rc::new(MemoryHistory::default()))
///         .route(Route::new("/", "Home", Rc::new(Home) as View)),
/// )
/// .unwrap();
///
/// assert!(router.has_route("Home"));
/// ```
pub fn create_router(options: RouterOptions) -> Result<Router, RouterError> {
    let RouterOptions {
        history,
        routes,
        link_active_class,
        link_exact_active_class,
    } = options;

    let mut names = HashSet::new();
    let mut records = Vec::with_capacity(routes.len());
    for route in routes {
        if !names.insert(route.name.clone()) {
            return Err(RouterError::DuplicateRouteName(route.name));
        }
        let pattern = PathPattern::parse(&route.path)?;
        records.push(RouteRecord { route, pattern });
    }

    debug!(routes = records.len(), "router created");

    let router = Router {
        inner: Rc::new(RouterInner {
            history,
            records,
            link_active_class,
            link_exact_active_class,
            current: RefCell::new(RouteLocation::start()),
            pending: Cell::new(0),
            outdated: Cell::new(false),
        }),
    };
    router.listen();

    Ok(router)
}

/// The router: resolves locations against its routes and navigates through its history.
///
/// Cloning a [`Router`] is cheap; all clones share the same state.
#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

impl Router {
    /// Subscribe to changes the history receives from outside the router.
    ///
    /// The callback only holds a weak reference, since the history is owned by the router.
    fn listen(&self) {
        let inner = Rc::downgrade(&self.inner);
        self.inner.history.updater(Rc::new(move || {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            debug!("history changed outside the router");
            inner.outdated.set(true);

            #[cfg(feature = "web")]
            {
                let router = Router { inner };
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(failure) = router.sync().await {
                        warn!("failed to follow the history: {failure}");
                    }
                });
            }
        }));
    }

    /// Returns [`true`] if the history changed outside the router and [`Router::sync`] has not
    /// adopted that change yet.
    ///
    /// With the `web` feature, the router syncs by itself. Elsewhere, whoever drives the router
    /// should check this and call [`Router::sync`].
    pub fn is_outdated(&self) -> bool {
        self.inner.outdated.get()
    }

    /// The routes of this router, in match order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.inner.records.iter().map(|r| &r.route)
    }

    /// Returns [`true`] if a route called `name` exists.
    pub fn has_route(&self, name: &str) -> bool {
        self.inner.records.iter().any(|r| r.route.name == name)
    }

    /// The history this router navigates through.
    pub fn history(&self) -> Rc<dyn History> {
        self.inner.history.clone()
    }

    /// The class applied to links whose target is active.
    pub fn link_active_class(&self) -> &str {
        &self.inner.link_active_class
    }

    /// The class applied to links whose target is exactly the current location.
    pub fn link_exact_active_class(&self) -> &str {
        &self.inner.link_exact_active_class
    }

    /// The location the router is currently at.
    pub fn current_route(&self) -> RouteLocation {
        self.inner.current.borrow().clone()
    }

    /// The view for the current location.
    ///
    /// [`None`] if no route matched the current location. A lazily loaded view is always available
    /// here, because the navigation to its route loaded it.
    pub fn current_view(&self) -> Option<View> {
        let index = self.inner.current.borrow().matched?;
        self.inner.records[index].route.component.get()
    }

    /// Render the view for the current location. Unmatched locations render nothing.
    pub fn render(&self) -> String {
        let current = self.current_route();
        self.current_view()
            .map(|view| view.render(&current))
            .unwrap_or_default()
    }

    /// Resolve `target` to a location without navigating.
    ///
    /// Paths that no route matches resolve to an unmatched location. Named targets fail if the name
    /// is unknown or a parameter is missing.
    pub fn resolve(
        &self,
        target: impl Into<NavigationTarget>,
    ) -> Result<RouteLocation, NavigationFailure> {
        match target.into() {
            NavigationTarget::Path(path) => Ok(self.resolve_path(&path)),
            NavigationTarget::Named {
                name,
                params,
                query,
            } => {
                let (index, record) = self
                    .inner
                    .records
                    .iter()
                    .enumerate()
                    .find(|(_, r)| r.route.name == name)
                    .ok_or_else(|| NavigationFailure::UnknownRoute(name.clone()))?;

                for key in params.iter().map(|(k, _)| k) {
                    if !record.pattern.param_names().any(|p| p == key) {
                        warn!(r#"route "{name}" has no parameter "{key}", ignoring it"#);
                    }
                }

                let path = record.pattern.build(&name, &params)?;
                let params = record
                    .pattern
                    .param_names()
                    .filter_map(|key| params.get(key).map(|value| (key, value)))
                    .collect();

                Ok(RouteLocation::new(
                    &path,
                    query,
                    None,
                    Some(name),
                    params,
                    Some(index),
                ))
            }
        }
    }

    fn resolve_path(&self, path: &str) -> RouteLocation {
        let (path, hash) = match path.split_once('#') {
            Some((path, hash)) => (path, non_empty(hash)),
            None => (path, None),
        };
        let (path, query) = match path.split_once('?') {
            Some((path, query)) => (path, non_empty(query)),
            None => (path, None),
        };
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        for (index, record) in self.inner.records.iter().enumerate() {
            if let Some(params) = record.pattern.matches(&path) {
                return RouteLocation::new(
                    &path,
                    query,
                    hash,
                    Some(record.route.name.clone()),
                    params,
                    Some(index),
                );
            }
        }

        debug!(path = %path, "no route matched");
        RouteLocation::unmatched(&path, query, hash)
    }

    /// The `href` for a link to `target`, including the history's prefix.
    pub fn href(&self, target: impl Into<NavigationTarget>) -> Result<String, NavigationFailure> {
        let location = self.resolve(target)?;
        Ok(match self.inner.history.current_prefix() {
            Some(prefix) => format!("{}{}", prefix.trim_end_matches('/'), location.full_path),
            None => location.full_path,
        })
    }

    /// Navigate to `target`, adding a new entry to the history.
    ///
    /// If the matched route's view is loaded lazily and not loaded yet, it is loaded before the
    /// navigation completes. When loading fails, the navigation is aborted and the router stays
    /// where it was.
    pub async fn push(
        &self,
        target: impl Into<NavigationTarget>,
    ) -> Result<RouteLocation, NavigationFailure> {
        self.navigate(target.into(), NavigationMode::Push).await
    }

    /// Navigate to `target`, replacing the current history entry.
    pub async fn replace(
        &self,
        target: impl Into<NavigationTarget>,
    ) -> Result<RouteLocation, NavigationFailure> {
        self.navigate(target.into(), NavigationMode::Replace).await
    }

    /// Perform the initial navigation to wherever the history currently is.
    ///
    /// Call this once after creating the router, before rendering.
    pub async fn start(&self) -> Result<RouteLocation, NavigationFailure> {
        self.adopt_history().await
    }

    /// Adopt the location of the history after it changed without the router's involvement, for
    /// example through the browsers back button.
    ///
    /// If the view of the new location fails to load, the history entry is replaced with the
    /// location the router stays at.
    pub async fn sync(&self) -> Result<RouteLocation, NavigationFailure> {
        let result = self.adopt_history().await;
        if let Err(NavigationFailure::LoadFailed { .. }) = &result {
            let current = self.inner.current.borrow().full_path.clone();
            debug!(path = %current, "restoring history after failed sync");
            self.inner.history.replace(current);
        }
        result
    }

    /// Go back one entry in the history and adopt the resulting location.
    ///
    /// If the view of that location fails to load, the history goes forward again.
    pub async fn back(&self) -> Result<RouteLocation, NavigationFailure> {
        self.traverse(Traversal::Back).await
    }

    /// Go forward one entry in the history and adopt the resulting location.
    ///
    /// If the view of that location fails to load, the history goes back again.
    pub async fn forward(&self) -> Result<RouteLocation, NavigationFailure> {
        self.traverse(Traversal::Forward).await
    }

    async fn adopt_history(&self) -> Result<RouteLocation, NavigationFailure> {
        self.inner.outdated.set(false);
        let path = self.inner.history.current_route();
        self.navigate(NavigationTarget::Path(path), NavigationMode::Sync)
            .await
    }

    async fn traverse(&self, traversal: Traversal) -> Result<RouteLocation, NavigationFailure> {
        let history = &self.inner.history;
        let moved = match traversal {
            Traversal::Back => history.can_go_back(),
            Traversal::Forward => history.can_go_forward(),
        };
        match traversal {
            Traversal::Back => history.go_back(),
            Traversal::Forward => history.go_forward(),
        }

        let result = self.adopt_history().await;
        if moved && matches!(result, Err(NavigationFailure::LoadFailed { .. })) {
            debug!(?traversal, "undoing history traversal after failed load");
            match traversal {
                Traversal::Back => history.go_forward(),
                Traversal::Forward => history.go_back(),
            }
        }
        result
    }

    async fn navigate(
        &self,
        target: NavigationTarget,
        mode: NavigationMode,
    ) -> Result<RouteLocation, NavigationFailure> {
        let to = self.resolve(target)?;

        if mode != NavigationMode::Sync && self.inner.current.borrow().full_path == to.full_path {
            debug!(path = %to.full_path, "navigation to the current location ignored");
            return Err(NavigationFailure::Duplicated(to.full_path));
        }

        let id = self.inner.pending.get().wrapping_add(1);
        self.inner.pending.set(id);

        if let Some(index) = to.matched {
            let route = &self.inner.records[index].route;
            if let Err(source) = route.component.resolve().await {
                warn!(route = %route.name, "failed to load view: {source}");
                return Err(NavigationFailure::LoadFailed {
                    name: route.name.clone(),
                    source,
                });
            }
        }

        if self.inner.pending.get() != id {
            debug!(path = %to.full_path, "navigation superseded");
            return Err(NavigationFailure::Cancelled(to.full_path));
        }

        match mode {
            NavigationMode::Push => self.inner.history.push(to.full_path.clone()),
            NavigationMode::Replace => self.inner.history.replace(to.full_path.clone()),
            NavigationMode::Sync => {}
        }

        debug!(path = %to.full_path, route = ?to.name, "navigated");
        *self.inner.current.borrow_mut() = to.clone();
        Ok(to)
    }

    /// Returns [`true`] if `target` resolves to the matched route of the current location, with the
    /// same parameters.
    pub fn is_active(&self, target: impl Into<NavigationTarget>) -> bool {
        let Ok(location) = self.resolve(target) else {
            return false;
        };
        let current = self.inner.current.borrow();
        location.matched.is_some()
            && location.matched == current.matched
            && location.params == current.params
    }

    /// Returns [`true`] if `target` resolves to the very route the current location matched, with
    /// the same parameters. Query and hash are not compared.
    ///
    /// Routes don't nest, so the matched route is always the deepest one and this agrees with
    /// [`Router::is_active`].
    pub fn is_exact_active(&self, target: impl Into<NavigationTarget>) -> bool {
        self.is_active(target)
    }

    /// The classes a link to `target` gets, or [`None`] if it is not active.
    pub fn link_class(&self, target: impl Into<NavigationTarget>) -> Option<String> {
        let target = target.into();
        if !self.is_active(&target) {
            return None;
        }

        let mut classes = vec![self.inner.link_active_class.as_str()];
        if self.is_exact_active(&target) {
            classes.push(self.inner.link_exact_active_class.as_str());
        }
        let class = classes
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        (!class.is_empty()).then_some(class)
    }

    /// A link to `target`, labelled `label`, styled for the current location.
    ///
    /// Targets that cannot be resolved produce a link without `href`.
    pub fn link(&self, target: impl Into<NavigationTarget>, label: impl Into<String>) -> Link {
        let target = target.into();
        let href = match self.href(&target) {
            Ok(href) => Some(href),
            Err(err) => {
                warn!("cannot link to {target:?}: {err}");
                None
            }
        };

        Link {
            href,
            class: self.link_class(&target),
            label: label.into(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
