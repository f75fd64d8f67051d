use std::{cell::RefCell, rc::Rc};

use gloo_events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::History;

/// A [`History`] that uses the [History API] and [Location API] to integrate with the browser.
///
/// URLs are plain paths (`/brazil`), never fragments (`/#/brazil`).
///
/// [History API]: https://developer.mozilla.org/en-US/docs/Web/API/History_API
/// [Location API]: https://developer.mozilla.org/en-US/docs/Web/API/Location
///
/// # Prefix
/// This [`History`] supports a prefix, which allows its use for web apps not located at the root of
/// their domain.
///
/// When fetching the current path, the prefix will be removed from the start of it, if it is
/// present. When navigating somewhere, the path provided by the router will be prefixed with
/// prefix.
///
/// It is up to the application developer to ensure the prefix ends at a `/`. Otherwise, the first
/// navigation from within the app will add one.
pub struct WebHistory {
    history: web_sys::History,
    listener: RefCell<Option<EventListener>>,
    prefix: Option<String>,
    window: Window,
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new(None)
    }
}

impl WebHistory {
    /// Create a new [`WebHistory`], optionally mounted below `prefix`.
    pub fn new(prefix: Option<String>) -> Self {
        let window = web_sys::window().expect("access to `window`");
        let history = window.history().expect("`window` has access to `history`");

        Self {
            history,
            listener: RefCell::new(None),
            prefix,
            window,
        }
    }

    fn full_path(&self, route: &str) -> String {
        match &self.prefix {
            None => route.to_string(),
            Some(prefix) => format!("{prefix}{route}"),
        }
    }
}

/// Turn the parts of a browser location into the path the router sees: prefix removed, search
/// and hash (both with their leading marker, or empty) kept.
fn router_path(pathname: &str, prefix: Option<&str>, search: &str, hash: &str) -> String {
    let path = prefix
        .and_then(|prefix| pathname.strip_prefix(prefix))
        .unwrap_or(pathname);

    if path.starts_with('/') {
        format!("{path}{search}{hash}")
    } else {
        format!("/{path}{search}{hash}")
    }
}

fn log_failure(action: &str, err: JsValue) {
    tracing::error!("failed to {action}: {err:?}");
}

impl History for WebHistory {
    fn current_route(&self) -> String {
        let location = self.window.location();
        let path = location.pathname().unwrap_or_else(|_| String::from("/"));

        router_path(
            &path,
            self.prefix.as_deref(),
            &location.search().unwrap_or_default(),
            &location.hash().unwrap_or_default(),
        )
    }

    fn current_prefix(&self) -> Option<String> {
        self.prefix.clone()
    }

    fn go_back(&self) {
        if let Err(err) = self.history.back() {
            log_failure("go back", err);
        }
    }

    fn go_forward(&self) {
        if let Err(err) = self.history.forward() {
            log_failure("go forward", err);
        }
    }

    fn push(&self, route: String) {
        let url = self.full_path(&route);
        if let Err(err) = self
            .history
            .push_state_with_url(&JsValue::NULL, "", Some(&url))
        {
            log_failure("push state", err);
        }
    }

    fn replace(&self, route: String) {
        let url = self.full_path(&route);
        if let Err(err) = self
            .history
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        {
            log_failure("replace state", err);
        }
    }

    fn updater(&self, callback: Rc<dyn Fn()>) {
        // recreate event listener
        let listener = EventListener::new(&self.window, "popstate", move |_| callback());
        *self.listener.borrow_mut() = Some(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::router_path;
    use pretty_assertions::assert_eq;

    #[test]
    fn router_path_keeps_search_and_hash() {
        assert_eq!(router_path("/brazil", None, "", ""), "/brazil");
        assert_eq!(router_path("/brazil", None, "?tab=food", "#top"), "/brazil?tab=food#top");
        assert_eq!(router_path("/brazil", None, "", "#top"), "/brazil#top");
    }

    #[test]
    fn router_path_strips_prefix() {
        assert_eq!(router_path("/travel/panama", Some("/travel"), "", ""), "/panama");
        assert_eq!(router_path("/travel/panama", Some("/travel/"), "", "#top"), "/panama#top");
        assert_eq!(router_path("/travel", Some("/travel"), "", ""), "/");
        assert_eq!(router_path("/other", Some("/travel"), "", ""), "/other");
    }
}
