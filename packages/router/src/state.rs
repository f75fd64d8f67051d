//! The state a router is in: where it is and what it captured on the way.

use std::{collections::BTreeMap, fmt::Display};

/// The values captured by the dynamic segments of a route path, keyed by parameter name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty set of parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    ///
    /// ```rust
    /// # use wanderlust_router::prelude::*;
    /// let params = Params::new().with("id", "brazil");
    /// assert_eq!(params.get("id"), Some("brazil"));
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Get the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate over all parameters, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns [`true`] if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// A location the router resolved a [`NavigationTarget`](crate::navigation::NavigationTarget) to.
///
/// Unmatched locations are valid locations: they carry no route name and render nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteLocation {
    /// The path, including query and hash, exactly as it is pushed to the history.
    pub full_path: String,
    /// The path without query and hash.
    pub path: String,
    /// The query, without the leading `?`.
    pub query: Option<String>,
    /// The hash, without the leading `#`.
    pub hash: Option<String>,
    /// The name of the matched route.
    pub name: Option<String>,
    /// The parameters captured by the matched route.
    pub params: Params,
    pub(crate) matched: Option<usize>,
}

impl RouteLocation {
    /// The location a router is at before its initial navigation.
    pub(crate) fn start() -> Self {
        Self::unmatched("/", None, None)
    }

    pub(crate) fn unmatched(path: &str, query: Option<String>, hash: Option<String>) -> Self {
        Self::new(path, query, hash, None, Params::new(), None)
    }

    pub(crate) fn new(
        path: &str,
        query: Option<String>,
        hash: Option<String>,
        name: Option<String>,
        params: Params,
        matched: Option<usize>,
    ) -> Self {
        let mut full_path = path.to_string();
        if let Some(query) = &query {
            full_path = format!("{full_path}?{query}");
        }
        if let Some(hash) = &hash {
            full_path = format!("{full_path}#{hash}");
        }

        Self {
            full_path,
            path: path.to_string(),
            query,
            hash,
            name,
            params,
            matched,
        }
    }

    /// Returns [`true`] if a route matched this location.
    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }

    /// Get a captured parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }
}
