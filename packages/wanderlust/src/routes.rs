//! The route table of the app.

use std::rc::Rc;

use wanderlust_history::{web_history, History};
use wanderlust_router::prelude::*;

use crate::views::{destination_show, Home};

/// The class applied to navigation links whose target is the current route.
pub const ACTIVE_LINK_CLASS: &str = "app-active-link";

/// The name of the landing page route.
pub const HOME: &str = "Home";

/// The name of the route showing a single destination.
pub const DESTINATION_SHOW: &str = "destination.show";

/// The routes of the app, in match order.
///
/// `/` comes first so the dynamic `/:id` never shadows it.
pub fn routes() -> Vec<Route> {
    vec![
        Route::new("/", HOME, Rc::new(Home) as View),
        Route::new(
            "/:id",
            DESTINATION_SHOW,
            LazyView::new(destination_show::load),
        ),
    ]
}

/// Build the app's router, navigating through the browser history.
pub fn router() -> Result<Router, RouterError> {
    router_with_history(web_history())
}

/// Build the app's router on top of `history`.
pub fn router_with_history(history: Rc<dyn History>) -> Result<Router, RouterError> {
    create_router(
        RouterOptions::new(history)
            .routes(routes())
            .link_active_class(ACTIVE_LINK_CLASS),
    )
}
