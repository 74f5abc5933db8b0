use anyhow::{Context, Result};
use clap::Parser;
use formicary_lib::app::App;
use formicary_lib::model::config::AppConfig;
use formicary_lib::model::metrics::init_logging;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path; defaults are used when it does not exist
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Tick budget; 0 runs until every food source is spent
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// World seed, overriding the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging("info");

    let mut config = if Path::new(&args.config).exists() {
        AppConfig::load(&args.config)
            .with_context(|| format!("Failed to load config from {}", args.config))?
    } else {
        tracing::info!(path = %args.config, "No config file, using defaults");
        AppConfig::default()
    };
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }

    let mut app = App::new(config).context("Failed to build the world")?;
    let budget = (args.ticks > 0).then_some(args.ticks);
    let report = app.run(budget);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to encode report")?
        );
    } else {
        println!("{}", report.render());
    }
    Ok(())
}
