use ascii_etch::{pipeline, BrightnessStrategy, EtchConfig, EtchError};
use clap::Parser;
use log::info;

/// Convert the bundled image to grayscale ASCII art in `output.txt`.
#[derive(Parser, Debug)]
#[command(name = "ascii-etch", version, about)]
struct Args {
    /// Brightness strategy selector: "avg", "hsl", or anything else for
    /// the default luminosity formula
    strategy: Option<String>,
}

fn main() -> Result<(), EtchError> {
    env_logger::init();

    let args = Args::parse();
    let strategy = BrightnessStrategy::from_selector(args.strategy.as_deref());
    info!("selected brightness strategy {strategy:?}");

    let config = EtchConfig {
        strategy,
        ..Default::default()
    };
    pipeline::run(&config)
}
