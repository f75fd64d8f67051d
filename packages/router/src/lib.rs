#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod error;
pub mod navigation;
pub mod route_definition;
pub mod state;

/// Components rendered around the routed views.
pub mod components {
    mod link;
    pub use link::*;
}

mod router;
pub use router::*;

mod router_cfg;
pub use router_cfg::*;

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::error::*;
    pub use crate::navigation::*;
    pub use crate::route_definition::*;
    pub use crate::router::*;
    pub use crate::router_cfg::*;
    pub use crate::state::*;
}
