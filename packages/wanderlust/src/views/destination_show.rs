//! The page of a single destination.
//!
//! This view is loaded lazily: the catalogue it renders from is only parsed the first time a
//! destination is navigated to.

use std::{fmt::Write, rc::Rc};

use askama_escape::{escape, Html};
use tracing::debug;
use wanderlust_router::prelude::*;

use crate::destinations::Catalogue;

/// Shows the destination whose slug (or id) is the `id` route parameter.
pub struct DestinationShow {
    catalogue: Catalogue,
}

impl DestinationShow {
    pub fn new(catalogue: Catalogue) -> Self {
        Self { catalogue }
    }
}

/// Load the view. Used as the lazy loader of the `destination.show` route.
pub async fn load() -> Result<View, LoadError> {
    let catalogue = Catalogue::bundled()
        .map_err(|err| LoadError::new(format!("invalid destination catalogue: {err}")))?;
    debug!(destinations = catalogue.len(), "destination view loaded");
    Ok(Rc::new(DestinationShow::new(catalogue)) as View)
}

impl Component for DestinationShow {
    fn name(&self) -> &'static str {
        "DestinationShow"
    }

    fn render(&self, route: &RouteLocation) -> String {
        let id = route.param("id").unwrap_or_default();
        let mut html = String::new();

        let Some(destination) = self.catalogue.find(id) else {
            // writing to a String cannot fail
            let _ = write!(
                html,
                "<section class=\"destination\"><h1>Destination not found</h1>\
                 <p>There is no destination called \"{}\".</p></section>",
                escape(id, Html)
            );
            return html;
        };

        let _ = write!(
            html,
            "<section class=\"destination\"><h1>{}</h1><div class=\"destination-details\">\
             <img src=\"/images/{}\" alt=\"{}\"><p>{}</p></div>",
            escape(&destination.name, Html),
            escape(&destination.image, Html),
            escape(&destination.name, Html),
            escape(&destination.description, Html),
        );

        if !destination.experiences.is_empty() {
            html.push_str("<section class=\"experiences\"><h2>Top experiences</h2>");
            for experience in &destination.experiences {
                let _ = write!(
                    html,
                    "<div class=\"card\"><h3>{}</h3><p>{}</p></div>",
                    escape(&experience.name, Html),
                    escape(&experience.description, Html),
                );
            }
            html.push_str("</section>");
        }

        html.push_str("</section>");
        html
    }
}
