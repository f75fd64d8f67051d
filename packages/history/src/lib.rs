//! History integration for the wanderlust router.
//!
//! The router never talks to a browser (or any other navigation backend) directly. It relies on a
//! [`History`] to store the current location, and possibly a history (i.e. a browsers back button)
//! and future (i.e. a browsers forward button).

use std::rc::Rc;

mod memory;
pub use memory::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;

/// An integration with some kind of navigation history.
///
/// Depending on your use case, your implementation may deviate from the described procedure. This
/// is fine, as long as `current_route` matches the described format.
///
/// The described behaviors are designed to mimic a web browser, which most users should already
/// know. Deviations might confuse them.
pub trait History {
    /// Get the path of the current URL, including its query and hash.
    ///
    /// **Must start** with `/`. **Must _not_ contain** the prefix.
    ///
    /// ```rust
    /// # use wanderlust_history::{History, MemoryHistory};
    /// let history = MemoryHistory::default();
    /// assert_eq!(history.current_route(), "/");
    ///
    /// history.push(String::from("/path"));
    /// assert_eq!(history.current_route(), "/path");
    /// ```
    #[must_use]
    fn current_route(&self) -> String;

    /// Get the current path prefix of the URL.
    ///
    /// Not all [`History`]s need a prefix feature. It is meant for environments where the app is not
    /// running on `/`. The [`History`] is responsible for removing the prefix from the router-internal
    /// path, and also for adding it back in during navigation. This functions value is only used for
    /// creating `href`s.
    fn current_prefix(&self) -> Option<String> {
        None
    }

    /// Check whether there is a previous page to navigate back to.
    ///
    /// If a [`History`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_back(&self) -> bool {
        true
    }

    /// Go back to a previous page.
    ///
    /// If a [`History`] cannot go to a previous page, it should do nothing. This method might be
    /// called, even if `can_go_back` returns [`false`].
    fn go_back(&self);

    /// Check whether there is a future page to navigate forward to.
    ///
    /// If a [`History`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_forward(&self) -> bool {
        true
    }

    /// Go forward to a future page.
    ///
    /// If a [`History`] cannot go to a future page, it should do nothing. This method might be
    /// called, even if `can_go_forward` returns [`false`].
    fn go_forward(&self);

    /// Go to another page.
    ///
    /// This should do three things:
    /// 1. Make `route` the current location.
    /// 2. Add the previous location to the navigation history.
    /// 3. Clear the navigation future.
    fn push(&self, route: String);

    /// Replace the current page with another one.
    ///
    /// In contrast to the `push` function, the navigation history and future stay untouched.
    fn replace(&self, route: String);

    /// Provide the [`History`] with an update callback.
    ///
    /// Some [`History`]s may receive URL updates from outside the router (the browsers back button,
    /// for example). When such updates are received, they should call `callback`, so the router can
    /// re-resolve the current location.
    #[allow(unused_variables)]
    fn updater(&self, callback: Rc<dyn Fn()>) {}
}

/// Create the history used for browser-native navigation.
///
/// URLs produced by this history never contain a fragment marker. With the `web` feature enabled
/// this is a [`WebHistory`]; everywhere else there is no browser to talk to, so the navigation is
/// kept in a [`MemoryHistory`] starting at `/`.
pub fn web_history() -> Rc<dyn History> {
    #[cfg(feature = "web")]
    let history = Rc::new(WebHistory::default());
    #[cfg(not(feature = "web"))]
    let history = Rc::new(MemoryHistory::default());

    history
}

/// Like [`web_history`], but for apps that are served below `prefix` instead of `/`.
pub fn web_history_with_prefix(prefix: impl ToString) -> Rc<dyn History> {
    #[cfg(feature = "web")]
    let history = Rc::new(WebHistory::new(Some(prefix.to_string())));
    #[cfg(not(feature = "web"))]
    let history = Rc::new(MemoryHistory::default().with_prefix(prefix));

    history
}
