//! Types relating to navigation.

use std::fmt::Display;

use crate::state::Params;

/// A target for the router to navigate to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Navigate to the specified path. May contain a query and a hash.
    Path(String),
    /// Navigate to the route with the corresponding name.
    Named {
        /// The name of the target route.
        name: String,
        /// The values inserted into the dynamic segments of the route path.
        params: Params,
        /// A query appended to the constructed path, without the leading `?`.
        query: Option<String>,
    },
}

impl NavigationTarget {
    /// Target the route called `name`.
    ///
    /// ```rust
    /// # use wanderlust_router::prelude::*;
    /// let target = NavigationTarget::named("destination.show").param("id", "brazil");
    /// ```
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            params: Params::new(),
            query: None,
        }
    }

    /// Add a parameter to a named target. Does nothing for path targets.
    pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        if let Self::Named { params, .. } = &mut self {
            params.insert(key, value);
        }
        self
    }

    /// Set the query of a named target. Does nothing for path targets.
    pub fn query(mut self, value: impl Into<String>) -> Self {
        if let Self::Named { query, .. } = &mut self {
            let value = value.into();
            let value = value.strip_prefix('?').unwrap_or(&value).to_string();
            *query = (!value.is_empty()).then_some(value);
        }
        self
    }
}

impl From<&str> for NavigationTarget {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<&NavigationTarget> for NavigationTarget {
    fn from(target: &NavigationTarget) -> Self {
        target.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_builder() {
        let target = NavigationTarget::named("destination.show")
            .param("id", "brazil")
            .query("?tab=food");

        assert_eq!(
            target,
            NavigationTarget::Named {
                name: String::from("destination.show"),
                params: Params::new().with("id", "brazil"),
                query: Some(String::from("tab=food")),
            }
        );
    }

    #[test]
    fn path_targets_ignore_params() {
        let target = NavigationTarget::from("/brazil").param("id", "panama");
        assert_eq!(target, NavigationTarget::Path(String::from("/brazil")));
    }
}
