use wanderlust_router::prelude::*;

/// The landing page.
pub struct Home;

impl Component for Home {
    fn name(&self) -> &'static str {
        "Home"
    }

    fn render(&self, _: &RouteLocation) -> String {
        String::from(
            "<div class=\"home\"><h1>All Destinations</h1>\
             <p>Pick a destination from the menu to plan your next trip.</p></div>",
        )
    }
}
