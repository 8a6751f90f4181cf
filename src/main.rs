use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};

use backdrop_compositor::{
    composition::{Compositor, RunOutcome},
    config::Config,
};

#[derive(Parser)]
#[command(
    name = "backdrop-compositor",
    version,
    about = "Center every image in a folder on a solid-color backdrop",
    long_about = "Backdrop-Compositor reads the PNG and JPEG images in ./input_images, scales each one to a fixed height, centers it on a 5000x3750 backdrop and writes the result to ./output_images as PNG."
)]
struct Cli {
    /// Print the built-in configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = Config::default();

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    info!("Starting Backdrop-Compositor v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Canvas: {}x{} {:?}, overlay height: {}",
        config.canvas.width, config.canvas.height, config.canvas.color, config.overlay.target_height
    );

    let compositor = Compositor::new(config)?;

    match compositor.run() {
        Ok(RunOutcome::Completed { written }) => {
            info!("Composition complete! {} images written", written.len());
        }
        Ok(RunOutcome::InputDirCreated { .. }) | Ok(RunOutcome::NoInputs { .. }) => {}
        Err(e) => {
            error!("❌ An error occurred: {}", e.user_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
