use std::fmt::{self, Display, Write};

use askama_escape::{escape, Html};

/// An `<a>` element pointing at a route, styled for the current location.
///
/// Created through [`Router::link`](crate::Router::link).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// The href, [`None`] if the target could not be resolved.
    pub href: Option<String>,
    /// The active classes, [`None`] if the target is not active.
    pub class: Option<String>,
    /// The text of the link.
    pub label: String,
}

impl Link {
    /// Returns [`true`] if the link carries an active class.
    pub fn is_active(&self) -> bool {
        self.class.is_some()
    }

    /// Render the link to HTML.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<a")?;
        if let Some(href) = &self.href {
            // hrefs are percent-encoded paths; only a quote could end the attribute early
            write!(f, " href=\"{}\"", href.replace('"', "%22"))?;
        }
        if let Some(class) = &self.class {
            write!(f, " class=\"{}\"", escape(class, Html))?;
        }
        f.write_char('>')?;
        write!(f, "{}", escape(&self.label, Html))?;
        f.write_str("</a>")
    }
}
