use anyhow::Context;
use clap::Parser;
use wanderlust::{
    destinations::Catalogue,
    routes::{self, DESTINATION_SHOW, HOME},
};
use wanderlust_router::prelude::*;

mod logging;

/// Mount the wanderlust router, navigate and print what the app would render.
#[derive(Parser, Debug)]
#[command(name = "wanderlust", version)]
struct Args {
    /// Paths to navigate to, in order.
    paths: Vec<String>,

    /// Navigate to the route with this name after the paths.
    #[arg(long)]
    name: Option<String>,

    /// A `key=value` parameter for `--name`. May be repeated.
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected `key=value`, got `{raw}`")),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let router = routes::router().context("failed to build the router")?;
    let catalogue = Catalogue::bundled().context("failed to read the destination catalogue")?;

    router
        .start()
        .await
        .context("initial navigation failed")?;
    print_page(&router, &catalogue);

    let mut targets: Vec<NavigationTarget> = args.paths.into_iter().map(Into::into).collect();
    if let Some(name) = args.name {
        let target = args
            .params
            .into_iter()
            .fold(NavigationTarget::named(name), |target, (key, value)| {
                target.param(key, value)
            });
        targets.push(target);
    }

    for target in targets {
        if router.is_outdated() {
            if let Err(failure) = router.sync().await {
                tracing::warn!("failed to follow the history: {failure}");
            }
        }

        match router.push(target).await {
            Ok(_) => print_page(&router, &catalogue),
            Err(failure) => tracing::warn!("navigation failed: {failure}"),
        }
    }

    Ok(())
}

/// Print the navigation bar and the current view.
fn print_page(router: &Router, catalogue: &Catalogue) {
    let current = router.current_route();

    let mut nav = vec![router.link(NavigationTarget::named(HOME), "Home")];
    nav.extend(catalogue.iter().map(|destination| {
        router.link(
            NavigationTarget::named(DESTINATION_SHOW).param("id", &destination.slug),
            destination.name.as_str(),
        )
    }));

    println!("== {}", current.full_path);
    println!(
        "<nav>{}</nav>",
        nav.iter().map(Link::render).collect::<Vec<_>>().join("")
    );

    if current.is_matched() {
        println!("{}", router.render());
    } else {
        tracing::info!(path = %current.full_path, "no route matches, nothing to render");
    }
}
