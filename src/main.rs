use anyhow::{Context, Result};
use skycast::{
    render_dashboard, Dashboard, LocationResolver, SkycastConfig, WeatherPipeline, WttrClient,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command line options
#[derive(Debug, Default)]
struct Options {
    /// Show the five-day forecast strip
    forecast: bool,
    /// Skip location resolution and serve the built-in view
    no_location: bool,
}

fn parse_args() -> Result<Options> {
    let mut options = Options::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--forecast" | "-f" => options.forecast = true,
            "--no-location" => options.no_location = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }
    Ok(options)
}

fn print_usage() {
    println!("skycast {}", skycast::VERSION);
    println!();
    println!("Usage: skycast [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -f, --forecast     show the five-day forecast");
    println!("      --no-location  skip location lookup and show the built-in view");
    println!("  -h, --help         print this help");
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = parse_args()?;
    let config = SkycastConfig::from_env().context("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(version = skycast::VERSION, "starting skycast");

    let resolver = LocationResolver::new(&config).context("building location client")?;
    let client = WttrClient::new(&config).context("building weather client")?;
    let pipeline = WeatherPipeline::new(client);

    let mut dashboard = Dashboard::new();
    if options.forecast {
        dashboard.toggle_forecast();
    }

    if options.no_location {
        // Drive the refresh by hand so no lookup is attempted.
        let seq = dashboard.begin_refresh();
        let view = pipeline.fetch_view(None).await;
        dashboard.complete_refresh(seq, view);
    } else {
        dashboard.refresh(&resolver, &pipeline).await;
    }

    if let Some(view) = dashboard.view() {
        print!("{}", render_dashboard(view, dashboard.show_forecast()));
    }

    Ok(())
}
