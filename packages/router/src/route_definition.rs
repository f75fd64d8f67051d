//! Data types for defining what view to render for which path.

mod component;
pub use component::*;

mod segment;
pub use segment::*;

/// A mapping from a path pattern to a view and a unique name.
///
/// ```rust
/// # use wanderlust_router::prelude::*;
/// # use std::rc::Rc;
/// # struct Home;
/// # impl Component for Home {
/// #     fn name(&self) -> &'static str { "Home" }
/// #     fn render(&self, _: &RouteLocation) -> String { String::new() }
/// # }
/// let route = Route::new("/", "Home", Rc::new(Home) as View);
/// assert_eq!(route.name(), "Home");
/// assert!(!route.component().is_deferred());
/// ```
#[derive(Clone, Debug)]
pub struct Route {
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) component: RouteComponent,
}

impl Route {
    /// Create a new route. The path is validated when the router is created.
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        component: impl Into<RouteComponent>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component: component.into(),
        }
    }

    /// The path pattern of this route.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The unique name of this route.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view of this route.
    pub fn component(&self) -> &RouteComponent {
        &self.component
    }
}

/// A [`Route`] with its parsed path, as the router keeps it.
#[derive(Debug)]
pub(crate) struct RouteRecord {
    pub(crate) route: Route,
    pub(crate) pattern: PathPattern,
}
