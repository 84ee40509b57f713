use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graylab::arithmetic::pixel_arithmetic;
use graylab::demos::{demo_figures, COLORMAP_DEMO_IMAGE};
use graylab::difference::{difference_from_store, DifferenceReport};
use graylab::figures::{FigureRenderer, RenderedFigure};
use graylab::models::{AppConfig, CURATED_PAIRS, PLOT_REFERENCE};
use graylab::narrate::narrate;
use graylab::region::region_report;
use graylab::store::ImageStore;

#[derive(Parser)]
#[command(name = "graylab")]
#[command(about = "Grayscale image differencing, explained step by step")]
struct Cli {
    /// Config file path; falls back to GRAYLAB_CONFIG, then ./graylab.yaml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available images with metadata and curated pair suggestions
    List,
    /// Compute the absolute difference between two images
    Diff {
        /// First image filename
        image1: String,

        /// Second image filename (resampled to the first's shape if needed)
        image2: String,
    },
    /// Render an image next to its 256-bin intensity histogram
    Histogram {
        /// Image filename
        image: String,

        /// Output PNG file path
        #[arg(short, long, default_value = "histogram.png")]
        output: PathBuf,
    },
    /// Render the 2x4 comparison grid for an image pair
    Compare {
        /// First image filename
        image1: String,

        /// Second image filename
        image2: String,

        /// Output PNG file path
        #[arg(short, long, default_value = "comparison.png")]
        output: PathBuf,
    },
    /// Render pixel intensities around a point as a 3-D surface
    Surface {
        /// Image filename
        image: String,

        /// Region center column
        #[arg(short, long, default_value_t = 0)]
        x: usize,

        /// Region center row
        #[arg(short, long, default_value_t = 0)]
        y: usize,

        /// Half-size of the square region (full side is 2 * half + 1)
        #[arg(long, default_value_t = 32)]
        half_size: usize,

        /// Output PNG file path
        #[arg(short, long, default_value = "surface.png")]
        output: PathBuf,
    },
    /// Show the same image quantized to 8, 4, 2, and 1 bits
    BitDepth {
        /// Image filename
        image: String,

        /// Write the gallery figure to this PNG instead of printing JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Walk through the difference pipeline one step at a time
    Steps {
        /// First image filename
        image1: String,

        /// Second image filename
        image2: String,
    },
    /// Demonstrate uint8 arithmetic on two pixel values
    Arithmetic {
        /// First pixel value (0-255)
        value1: u8,

        /// Second pixel value (0-255)
        value2: u8,
    },
    /// Print raw pixel values around a point
    Region {
        /// Image filename
        image: String,

        /// Center column
        #[arg(short, long, default_value_t = 0)]
        x: usize,

        /// Center row
        #[arg(short, long, default_value_t = 0)]
        y: usize,

        /// Half-size of the square window
        #[arg(long, default_value_t = 5)]
        half_size: usize,
    },
    /// Render the plotting capability demo figures
    Demos {
        /// Directory the demo PNGs are written into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the plotting command reference
    Reference,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graylab=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(cli.config.as_deref());
    let store = ImageStore::from_config(&config);

    match cli.command {
        Some(Commands::List) => run_list_command(&store),
        Some(Commands::Diff { image1, image2 }) => run_diff_command(&store, &image1, &image2),
        Some(Commands::Histogram { image, output }) => {
            run_histogram_command(&store, &image, &output)
        }
        Some(Commands::Compare {
            image1,
            image2,
            output,
        }) => run_compare_command(&store, &image1, &image2, &output),
        Some(Commands::Surface {
            image,
            x,
            y,
            half_size,
            output,
        }) => run_surface_command(&store, &image, x, y, half_size, &output),
        Some(Commands::BitDepth { image, output }) => {
            run_bit_depth_command(&store, &image, output.as_deref())
        }
        Some(Commands::Steps { image1, image2 }) => run_steps_command(&store, &image1, &image2),
        Some(Commands::Arithmetic { value1, value2 }) => run_arithmetic_command(value1, value2),
        Some(Commands::Region {
            image,
            x,
            y,
            half_size,
        }) => run_region_command(&store, &image, x, y, half_size),
        Some(Commands::Demos { out_dir }) => run_demos_command(&store, &out_dir),
        Some(Commands::Reference) => run_reference_command(),
        None => {
            run_status_command(&config, &store);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write_figure(figure: &RenderedFigure, output: &Path) -> anyhow::Result<()> {
    std::fs::write(output, &figure.png)?;
    println!("Rendered {} ({} bytes)", output.display(), figure.png.len());
    Ok(())
}

/// List images and curated pairs as JSON
fn run_list_command(store: &ImageStore) -> anyhow::Result<()> {
    let images = store.list_available();
    print_json(&serde_json::json!({
        "images": images,
        "count": images.len(),
        "recommended_pairs": CURATED_PAIRS,
    }))
}

/// Print the full difference report for two images
fn run_diff_command(store: &ImageStore, image1: &str, image2: &str) -> anyhow::Result<()> {
    let outcome = difference_from_store(store, image1, image2)?;
    print_json(&DifferenceReport::from_outcome(&outcome)?)
}

fn run_histogram_command(store: &ImageStore, image: &str, output: &Path) -> anyhow::Result<()> {
    let figure = FigureRenderer::new().histogram(store, image)?;
    write_figure(&figure, output)
}

fn run_compare_command(
    store: &ImageStore,
    image1: &str,
    image2: &str,
    output: &Path,
) -> anyhow::Result<()> {
    let figure = FigureRenderer::new().comparison(store, image1, image2)?;
    write_figure(&figure, output)
}

fn run_surface_command(
    store: &ImageStore,
    image: &str,
    x: usize,
    y: usize,
    half_size: usize,
    output: &Path,
) -> anyhow::Result<()> {
    let figure = FigureRenderer::new().surface(store, image, x, y, half_size)?;
    write_figure(&figure, output)
}

/// Write the gallery PNG when an output path is given, otherwise print the
/// JSON report with the per-depth images
fn run_bit_depth_command(
    store: &ImageStore,
    image: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let (figure, report) = FigureRenderer::new().bit_depth(store, image)?;
    match output {
        Some(path) => write_figure(&figure, path),
        None => print_json(&report),
    }
}

fn run_steps_command(store: &ImageStore, image1: &str, image2: &str) -> anyhow::Result<()> {
    let steps = narrate(store, image1, image2)?;
    print_json(&serde_json::json!({ "steps": steps }))
}

fn run_arithmetic_command(value1: u8, value2: u8) -> anyhow::Result<()> {
    print_json(&pixel_arithmetic(value1, value2))
}

fn run_region_command(
    store: &ImageStore,
    image: &str,
    x: usize,
    y: usize,
    half_size: usize,
) -> anyhow::Result<()> {
    print_json(&region_report(store, image, x, y, half_size)?)
}

/// Render all demo figures into a directory
fn run_demos_command(store: &ImageStore, out_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)?;
    let demos = demo_figures(&FigureRenderer::new(), store)?;
    write_figure(&demos.subplot_layouts, &out_dir.join("subplot_layouts.png"))?;
    match &demos.colormaps {
        Some(figure) => write_figure(figure, &out_dir.join("colormaps.png"))?,
        None => println!(
            "Skipped colormaps.png ({COLORMAP_DEMO_IMAGE} is not in the image directory)"
        ),
    }
    write_figure(
        &demos.figure_customization,
        &out_dir.join("figure_customization.png"),
    )
}

fn run_reference_command() -> anyhow::Result<()> {
    print_json(&serde_json::json!({ "categories": PLOT_REFERENCE }))
}

/// Display status and configuration information
fn run_status_command(config: &AppConfig, store: &ImageStore) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("GRAYLAB_CONFIG").ok();
    let images_dir = std::env::var("IMAGES_DIR").ok();

    println!("graylab v{VERSION} - grayscale image differencing, explained");
    println!("Course companion for digital image processing basics\n");

    println!("Environment Variables:");
    println!(
        "  GRAYLAB_CONFIG = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  IMAGES_DIR     = {}",
        images_dir.as_deref().unwrap_or("(not set)")
    );

    fn plural(n: usize) -> &'static str {
        if n == 1 {
            "image"
        } else {
            "images"
        }
    }

    println!("\nImage Directory:");
    let count = store.list_available().len();
    println!(
        "  {} ({} {})",
        config.images_dir.display(),
        count,
        plural(count)
    );

    println!("\nCommands:");
    println!("  graylab list        List images and curated pairs");
    println!("  graylab diff        Absolute difference of two images (JSON)");
    println!("  graylab histogram   Image next to its intensity histogram (PNG)");
    println!("  graylab compare     2x4 comparison grid for an image pair (PNG)");
    println!("  graylab surface     3-D intensity surface around a point (PNG)");
    println!("  graylab bit-depth   Bit depth quantization gallery (PNG or JSON)");
    println!("  graylab steps       Pipeline walkthrough, step by step (JSON)");
    println!("  graylab arithmetic  uint8 arithmetic on two pixel values (JSON)");
    println!("  graylab region      Raw pixel values around a point (JSON)");
    println!("  graylab demos       Plotting capability demo figures (PNG)");
    println!("  graylab reference   Plotting command reference (JSON)");
    println!("\nRun 'graylab --help' for more details.");
}
