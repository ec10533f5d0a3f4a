use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mandelbrot_animator::{MandelbrotConfig, MandelbrotController, Palette};

/// Render a progressive-detail Mandelbrot animation as a looping GIF.
#[derive(Parser, Debug)]
#[command(name = "mandelbrot_animator", version)]
struct Cli {
    /// Width of the sampled grid, in pixels.
    #[arg(long, required_unless_present = "list_palettes")]
    width: Option<u32>,

    /// Height of the sampled grid, in pixels.
    #[arg(long, required_unless_present = "list_palettes")]
    height: Option<u32>,

    /// Iteration cap of the final frame and brightness reference for all frames.
    #[arg(long, required_unless_present = "list_palettes")]
    max_iterations: Option<u32>,

    /// Palette name, e.g. viridis, magma_r, Greys.
    #[arg(long, default_value = "viridis")]
    colour: String,

    /// Add the explanation panel beside the animation.
    #[arg(long, default_value_t = false)]
    explain: bool,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory, overriding the config.
    #[arg(long)]
    resource_dir: Option<PathBuf>,

    /// Print the accepted palette names and exit.
    #[arg(long, default_value_t = false)]
    list_palettes: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_palettes {
        for name in Palette::advertised_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => MandelbrotConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => MandelbrotConfig::default(),
    };
    if let Some(dir) = cli.resource_dir {
        config = config.with_resource_dir(dir);
    }

    let (Some(width), Some(height), Some(max_iterations)) =
        (cli.width, cli.height, cli.max_iterations)
    else {
        anyhow::bail!("--width, --height and --max-iterations are required");
    };

    let controller = MandelbrotController::new(config);
    let request = controller
        .request(width, height, max_iterations, &cli.colour, cli.explain)
        .context("validate request")?;
    let path = controller
        .handle(&request)
        .with_context(|| format!("render {width}x{height} animation"))?;

    println!("{}", path.display());
    Ok(())
}
