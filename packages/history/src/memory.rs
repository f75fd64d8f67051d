use std::cell::RefCell;

use crate::History;

/// The entries of a [`MemoryHistory`]: the one being shown, and the ones either side of it.
#[derive(Debug)]
struct Entries {
    current: String,
    /// Oldest first, so the previous entry is at the end.
    back: Vec<String>,
    /// Furthest first, so the next entry is at the end.
    forward: Vec<String>,
}

impl Entries {
    /// Make `to` current, moving the old current entry onto `from`'s opposite stack.
    fn step(&mut self, backwards: bool) {
        let (from, to) = if backwards {
            (&mut self.back, &mut self.forward)
        } else {
            (&mut self.forward, &mut self.back)
        };

        if let Some(next) = from.pop() {
            to.push(std::mem::replace(&mut self.current, next));
        }
    }
}

/// A [`History`] kept entirely in memory.
///
/// The command line shell and the tests run on this one, since there is no browser around to
/// navigate. Paths are stored as given, only a missing leading `/` is added.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Entries>,
    prefix: Option<String>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_initial_path("/")
    }
}

impl MemoryHistory {
    /// A history with a single entry, `path`.
    ///
    /// ```rust
    /// # use wanderlust_history::{History, MemoryHistory};
    /// let history = MemoryHistory::with_initial_path("/brazil");
    /// assert_eq!(history.current_route(), "/brazil");
    /// assert!(!history.can_go_back());
    /// ```
    pub fn with_initial_path(path: impl ToString) -> Self {
        Self {
            entries: RefCell::new(Entries {
                current: rooted(path.to_string()),
                back: Vec::new(),
                forward: Vec::new(),
            }),
            prefix: None,
        }
    }

    /// Pretend the app is served below `prefix`. Only `href`s see it.
    ///
    /// ```rust
    /// # use wanderlust_history::*;
    /// let history = MemoryHistory::default().with_prefix("/travel");
    /// assert_eq!(history.current_prefix().as_deref(), Some("/travel"));
    /// ```
    pub fn with_prefix(self, prefix: impl ToString) -> Self {
        Self {
            prefix: Some(prefix.to_string()),
            ..self
        }
    }
}

fn rooted(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

impl History for MemoryHistory {
    fn current_route(&self) -> String {
        self.entries.borrow().current.clone()
    }

    fn current_prefix(&self) -> Option<String> {
        self.prefix.clone()
    }

    fn can_go_back(&self) -> bool {
        !self.entries.borrow().back.is_empty()
    }

    fn go_back(&self) {
        self.entries.borrow_mut().step(true);
    }

    fn can_go_forward(&self) -> bool {
        !self.entries.borrow().forward.is_empty()
    }

    fn go_forward(&self) {
        self.entries.borrow_mut().step(false);
    }

    fn push(&self, route: String) {
        let route = rooted(route);
        let mut entries = self.entries.borrow_mut();
        if entries.current == route {
            return;
        }

        let previous = std::mem::replace(&mut entries.current, route);
        entries.back.push(previous);
        entries.forward.clear();
    }

    fn replace(&self, route: String) {
        self.entries.borrow_mut().current = rooted(route);
    }
}
