use std::{fmt::Debug, rc::Rc};

use async_once_cell::OnceCell;
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::{error::LoadError, state::RouteLocation};

/// Something the router can render for a matched location.
pub trait Component {
    /// A short name, used in logs.
    fn name(&self) -> &'static str;

    /// Render the view for `route` to HTML.
    fn render(&self, route: &RouteLocation) -> String;
}

/// A shared handle to a [`Component`].
pub type View = Rc<dyn Component>;

type Loader = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<View, LoadError>>>;

/// A view that is resolved on first use and cached afterwards.
///
/// Clones share the cache, so the loader runs at most once per successful resolution no matter
/// which clone is resolved. A failed load is not cached; the next resolution calls the loader again.
#[derive(Clone)]
pub struct LazyView {
    loader: Loader,
    cell: Rc<OnceCell<View>>,
}

impl LazyView {
    /// Create a [`LazyView`] from an async loader.
    ///
    /// ```rust
    /// # use wanderlust_router::prelude::*;
    /// # use std::rc::Rc;
    /// struct About;
    ///
    /// impl Component for About {
    ///     fn name(&self) -> &'static str {
    ///         "About"
    ///     }
    ///
    ///     fn render(&self, _: &RouteLocation) -> String {
    ///         String::from("<h1>About</h1>")
    ///     }
    /// }
    ///
    /// let view = LazyView::new(|| async { Ok(Rc::new(About) as View) });
    /// assert!(!view.is_resolved());
    /// ```
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: std::future::Future<Output = Result<View, LoadError>> + 'static,
    {
        Self {
            loader: Rc::new(move || -> LocalBoxFuture<'static, Result<View, LoadError>> {
                Box::pin(loader())
            }),
            cell: Rc::new(OnceCell::new()),
        }
    }

    /// Returns [`true`] once the view was loaded successfully.
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The view, if it was loaded already.
    pub fn get(&self) -> Option<View> {
        self.cell.get().cloned()
    }

    /// Resolve the view, running the loader if there is no cached view yet.
    ///
    /// Concurrent resolutions share a single run of the loader.
    pub async fn resolve(&self) -> Result<View, LoadError> {
        if let Some(view) = self.cell.get() {
            return Ok(view.clone());
        }

        let loader = self.loader.clone();
        let view = self
            .cell
            .get_or_try_init(async move {
                debug!("loading lazy view");
                loader().await
            })
            .await?;

        Ok(view.clone())
    }
}

impl Debug for LazyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyView")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// The view of a route: either ready to render, or loaded on first navigation.
#[derive(Clone)]
pub enum RouteComponent {
    /// An eagerly resolved view.
    Ready(View),
    /// A view resolved when the route is first navigated to.
    Deferred(LazyView),
}

impl RouteComponent {
    /// Returns [`true`] if the view is loaded lazily.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// The view, if it is available without loading.
    pub fn get(&self) -> Option<View> {
        match self {
            Self::Ready(view) => Some(view.clone()),
            Self::Deferred(lazy) => lazy.get(),
        }
    }

    /// Get the view, loading it first if necessary.
    pub async fn resolve(&self) -> Result<View, LoadError> {
        match self {
            Self::Ready(view) => Ok(view.clone()),
            Self::Deferred(lazy) => lazy.resolve().await,
        }
    }
}

// [`View`] doesn't implement [`Debug`]
impl Debug for RouteComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(view) => f.debug_tuple("Ready").field(&view.name()).finish(),
            Self::Deferred(lazy) => f.debug_tuple("Deferred").field(lazy).finish(),
        }
    }
}

impl From<View> for RouteComponent {
    fn from(view: View) -> Self {
        Self::Ready(view)
    }
}

impl From<LazyView> for RouteComponent {
    fn from(lazy: LazyView) -> Self {
        Self::Deferred(lazy)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use pretty_assertions::assert_eq;

    struct TestComponent;

    impl Component for TestComponent {
        fn name(&self) -> &'static str {
            "Test"
        }

        fn render(&self, _: &RouteLocation) -> String {
            String::from("test")
        }
    }

    fn counting(loads: Rc<Cell<usize>>, fail_first: bool) -> LazyView {
        LazyView::new(move || {
            let loads = loads.clone();
            async move {
                loads.set(loads.get() + 1);
                if fail_first && loads.get() == 1 {
                    return Err(LoadError::new("chunk missing"));
                }
                Ok(Rc::new(TestComponent) as View)
            }
        })
    }

    #[tokio::test]
    async fn lazy_view_loads_once() {
        let loads = Rc::new(Cell::new(0));
        let lazy = counting(loads.clone(), false);
        assert!(!lazy.is_resolved());
        assert!(lazy.get().is_none());

        lazy.resolve().await.unwrap();
        lazy.resolve().await.unwrap();
        lazy.clone().resolve().await.unwrap();

        assert_eq!(loads.get(), 1);
        assert!(lazy.is_resolved());
    }

    #[tokio::test]
    async fn concurrent_resolutions_share_one_load() {
        let loads = Rc::new(Cell::new(0));
        let lazy = counting(loads.clone(), false);

        let (a, b) = futures_util::future::join(lazy.resolve(), lazy.resolve()).await;
        assert!(a.is_ok() && b.is_ok());
        assert_eq!(loads.get(), 1);
    }

    #[tokio::test]
    async fn failed_loads_are_not_cached() {
        let loads = Rc::new(Cell::new(0));
        let lazy = counting(loads.clone(), true);

        assert_eq!(
            lazy.resolve().await.err(),
            Some(LoadError::new("chunk missing"))
        );
        assert!(!lazy.is_resolved());

        assert!(lazy.resolve().await.is_ok());
        assert_eq!(loads.get(), 2);
    }

    #[tokio::test]
    async fn ready_component_resolves_without_loading() {
        let component = RouteComponent::from(Rc::new(TestComponent) as View);
        assert!(!component.is_deferred());
        assert!(component.get().is_some());
        assert_eq!(component.resolve().await.unwrap().name(), "Test");
    }
}
