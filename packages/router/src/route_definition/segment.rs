use std::collections::HashSet;

use tracing::trace;
use urlencoding::{decode, encode};

use crate::{
    error::{NavigationFailure, RouterError},
    state::Params,
};

/// A single segment of a route path.
///
/// A segment refers to the value between two `/` in the path. For example `/blog/1` contains two
/// segments: `["blog", "1"]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteSegment {
    /// Matches exactly this (decoded) value.
    Static(String),
    /// Matches any single non-empty segment and captures it under this name.
    Dynamic(String),
}

/// A parsed route path like `/` or `/:id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<RouteSegment>,
}

impl PathPattern {
    /// Parse a route path.
    ///
    /// The path must start with `/`. Dynamic segments are written as `:name`, where `name` consists
    /// of alphanumeric characters and `_`. A single trailing `/` is ignored.
    pub fn parse(path: &str) -> Result<Self, RouterError> {
        let invalid = |reason| RouterError::InvalidPath {
            path: path.to_string(),
            reason,
        };

        if !path.starts_with('/') {
            return Err(invalid("must start with `/`"));
        }

        let mut seen = HashSet::new();
        let mut segments = Vec::new();
        for segment in split_path(path) {
            if segment.is_empty() {
                return Err(invalid("contains an empty segment"));
            }

            match segment.strip_prefix(':') {
                Some(name) => {
                    if name.is_empty() {
                        return Err(invalid("parameter without name"));
                    }
                    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                        return Err(invalid("parameter names may only contain alphanumerics and `_`"));
                    }
                    if !seen.insert(name) {
                        return Err(RouterError::DuplicateParam {
                            path: path.to_string(),
                            param: name.to_string(),
                        });
                    }
                    segments.push(RouteSegment::Dynamic(name.to_string()));
                }
                None => segments.push(RouteSegment::Static(segment.to_string())),
            }
        }

        Ok(Self {
            raw: path.to_string(),
            segments,
        })
    }

    /// The path this pattern was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The segments of this pattern.
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// The names of all parameters this pattern captures, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            RouteSegment::Dynamic(name) => Some(name.as_str()),
            RouteSegment::Static(_) => None,
        })
    }

    /// Match a path (without query and hash) against this pattern.
    ///
    /// Returns the captured parameters if the path matches. Paths with a different number of
    /// segments never match.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts = split_path(path);
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            let value = decode_segment(part);
            match segment {
                RouteSegment::Static(expected) => {
                    if *expected != value {
                        return None;
                    }
                }
                RouteSegment::Dynamic(name) => {
                    if value.is_empty() {
                        return None;
                    }
                    params.insert(name.as_str(), value);
                }
            }
        }

        trace!(pattern = %self.raw, path, "path matched");
        Some(params)
    }

    /// Build a path for this pattern, inserting (and encoding) the values of `params`.
    ///
    /// `name` is only used to report a missing parameter.
    pub fn build(&self, name: &str, params: &Params) -> Result<String, NavigationFailure> {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                RouteSegment::Static(value) => path.push_str(value),
                RouteSegment::Dynamic(key) => match params.get(key) {
                    Some(value) if !value.is_empty() => path.push_str(&encode(value)),
                    _ => {
                        return Err(NavigationFailure::MissingParam {
                            name: name.to_string(),
                            param: key.clone(),
                        })
                    }
                },
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

/// Split a path into its segments, ignoring the leading and a single trailing `/`.
///
/// `/` has no segments at all.
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    if rest.is_empty() {
        return Vec::new();
    }

    let rest = rest.strip_suffix('/').unwrap_or(rest);
    rest.split('/').collect()
}

fn decode_segment(segment: &str) -> String {
    match decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_paths() {
        assert!(split_path("/").is_empty());
        assert_eq!(split_path("/abc"), vec!["abc"]);
        assert_eq!(split_path("/abc/"), vec!["abc"]);
        assert_eq!(split_path("/a/b"), vec!["a", "b"]);
        assert_eq!(split_path("//"), vec![""]);
    }

    #[test]
    fn parse_root() {
        let pattern = PathPattern::parse("/").unwrap();
        assert!(pattern.segments().is_empty());
        assert_eq!(pattern.as_str(), "/");
    }

    #[test]
    fn parse_dynamic() {
        let pattern = PathPattern::parse("/:id").unwrap();
        assert_eq!(
            pattern.segments(),
            &[RouteSegment::Dynamic(String::from("id"))]
        );
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn parse_mixed() {
        let pattern = PathPattern::parse("/destination/:slug/experience/:experience").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                RouteSegment::Static(String::from("destination")),
                RouteSegment::Dynamic(String::from("slug")),
                RouteSegment::Static(String::from("experience")),
                RouteSegment::Dynamic(String::from("experience")),
            ]
        );
    }

    #[test]
    fn parse_rejects_relative_path() {
        assert!(matches!(
            PathPattern::parse("about"),
            Err(RouterError::InvalidPath { .. })
        ));
    }

    #[test]
    fn parse_rejects_empty_segments_and_names() {
        assert!(PathPattern::parse("/a//b").is_err());
        assert!(PathPattern::parse("/:").is_err());
        assert!(PathPattern::parse("/:a-b").is_err());
    }

    #[test]
    fn parse_rejects_duplicate_params() {
        assert_eq!(
            PathPattern::parse("/:id/:id"),
            Err(RouterError::DuplicateParam {
                path: String::from("/:id/:id"),
                param: String::from("id"),
            })
        );
    }

    #[test]
    fn root_matches_only_root() {
        let pattern = PathPattern::parse("/").unwrap();
        assert_eq!(pattern.matches("/"), Some(Params::new()));
        assert_eq!(pattern.matches("/abc"), None);
        assert_eq!(pattern.matches("//"), None);
    }

    #[test]
    fn dynamic_matches_single_segment() {
        let pattern = PathPattern::parse("/:id").unwrap();
        assert_eq!(
            pattern.matches("/abc123"),
            Some(Params::new().with("id", "abc123"))
        );
        assert_eq!(
            pattern.matches("/abc123/"),
            Some(Params::new().with("id", "abc123"))
        );
        assert_eq!(pattern.matches("/"), None);
        assert_eq!(pattern.matches("/a/b"), None);
        assert_eq!(pattern.matches("//"), None);
    }

    #[test]
    fn dynamic_values_are_decoded() {
        let pattern = PathPattern::parse("/:id").unwrap();
        assert_eq!(
            pattern.matches("/new%20york"),
            Some(Params::new().with("id", "new york"))
        );
    }

    #[test]
    fn static_segments_match_literally() {
        let pattern = PathPattern::parse("/about").unwrap();
        assert!(pattern.matches("/about").is_some());
        assert!(pattern.matches("/About").is_none());
    }

    #[test]
    fn build_encodes_params() {
        let pattern = PathPattern::parse("/:id").unwrap();
        assert_eq!(
            pattern.build("destination.show", &Params::new().with("id", "new york")),
            Ok(String::from("/new%20york"))
        );
    }

    #[test]
    fn build_root() {
        let pattern = PathPattern::parse("/").unwrap();
        assert_eq!(pattern.build("Home", &Params::new()), Ok(String::from("/")));
    }

    #[test]
    fn build_requires_params() {
        let pattern = PathPattern::parse("/:id").unwrap();
        assert_eq!(
            pattern.build("destination.show", &Params::new()),
            Err(NavigationFailure::MissingParam {
                name: String::from("destination.show"),
                param: String::from("id"),
            })
        );
    }
}
