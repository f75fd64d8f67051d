//! Errors raised while building a router or navigating with it.

/// A route table that cannot be turned into a [`Router`](crate::Router).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// Two routes share a name, so named navigation would be ambiguous.
    #[error(r#"two routes are named "{0}""#)]
    DuplicateRouteName(String),

    /// The path pattern of a route is malformed.
    #[error(r#"invalid route path "{path}": {reason}"#)]
    InvalidPath {
        /// The offending pattern.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A path pattern captures the same parameter more than once.
    #[error(r#"route path "{path}" declares parameter "{param}" more than once"#)]
    DuplicateParam {
        /// The offending pattern.
        path: String,
        /// The repeated parameter name.
        param: String,
    },
}

/// Why a navigation did not happen.
///
/// Failed navigations leave the current location and the history untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationFailure {
    /// The target is the location the router is already at.
    #[error(r#"already at "{0}""#)]
    Duplicated(String),

    /// Another navigation started before this one finished.
    #[error(r#"navigation to "{0}" was superseded by a newer navigation"#)]
    Cancelled(String),

    /// Named navigation to a name no route carries.
    #[error(r#"no route named "{0}""#)]
    UnknownRoute(String),

    /// Named navigation without a value for a parameter of the route path.
    #[error(r#"route "{name}" requires parameter "{param}""#)]
    MissingParam {
        /// The route navigated to.
        name: String,
        /// The parameter without value.
        param: String,
    },

    /// The lazily loaded view of the matched route could not be resolved.
    #[error("failed to load the view of route \"{name}\": {source}")]
    LoadFailed {
        /// The route navigated to.
        name: String,
        /// The loader's error.
        source: LoadError,
    },
}

/// A lazily loaded view failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct LoadError(String);

impl LoadError {
    /// Create a [`LoadError`] with a human readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The message this error was created with.
    pub fn message(&self) -> &str {
        &self.0
    }
}
