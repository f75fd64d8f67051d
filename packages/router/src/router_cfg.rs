use std::rc::Rc;

use wanderlust_history::History;

use crate::route_definition::Route;

/// The class applied to links whose target is active, unless configured otherwise.
pub const DEFAULT_LINK_ACTIVE_CLASS: &str = "router-link-active";

/// The class applied to links whose target is exactly the current location, unless configured
/// otherwise.
pub const DEFAULT_LINK_EXACT_ACTIVE_CLASS: &str = "router-link-exact-active";

/// Everything [`create_router`](crate::create_router) needs to build a router.
///
/// Follows the builder pattern, so you can use it like this:
/// ```rust
/// # use wanderlust_router::prelude::*;
/// # use wanderlust_history::web_history;
/// let options = RouterOptions::new(web_history()).link_active_class("app-active-link");
/// ```
pub struct RouterOptions {
    pub(crate) history: Rc<dyn History>,
    pub(crate) routes: Vec<Route>,
    pub(crate) link_active_class: String,
    pub(crate) link_exact_active_class: String,
}

impl RouterOptions {
    /// Options for a router without routes, navigating through `history`.
    pub fn new(history: Rc<dyn History>) -> Self {
        Self {
            history,
            routes: Vec::new(),
            link_active_class: DEFAULT_LINK_ACTIVE_CLASS.to_string(),
            link_exact_active_class: DEFAULT_LINK_EXACT_ACTIVE_CLASS.to_string(),
        }
    }

    /// Append a route. Routes are matched in the order they were added.
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Append several routes.
    pub fn routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
        self.routes.extend(routes);
        self
    }

    /// The class applied to links whose target is active.
    ///
    /// Defaults to [`DEFAULT_LINK_ACTIVE_CLASS`].
    pub fn link_active_class(self, class: impl Into<String>) -> Self {
        Self {
            link_active_class: class.into(),
            ..self
        }
    }

    /// The class applied to links whose target is exactly the current location.
    ///
    /// Defaults to [`DEFAULT_LINK_EXACT_ACTIVE_CLASS`].
    pub fn link_exact_active_class(self, class: impl Into<String>) -> Self {
        Self {
            link_exact_active_class: class.into(),
            ..self
        }
    }
}
