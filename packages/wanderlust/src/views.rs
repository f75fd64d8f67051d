//! The views rendered by the app's routes.

pub mod destination_show;
mod home;

pub use destination_show::DestinationShow;
pub use home::Home;
