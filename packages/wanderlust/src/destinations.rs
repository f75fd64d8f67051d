//! The destination catalogue bundled with the app.

use serde::Deserialize;

const BUNDLED: &str = include_str!("../assets/destinations.json");

/// Something to do at a destination.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub name: String,
    pub slug: String,
    pub image: String,
    pub description: String,
}

/// A place to travel to.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

/// All known destinations.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Catalogue {
    destinations: Vec<Destination>,
}

impl Catalogue {
    /// The catalogue shipped with the app.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::parse(BUNDLED)
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look a destination up by slug, or by id if `key` is numeric.
    pub fn find(&self, key: &str) -> Option<&Destination> {
        let id = key.parse::<u32>().ok();
        self.destinations
            .iter()
            .find(|d| d.slug == key || Some(d.id) == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
