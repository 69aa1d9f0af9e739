//! # WebP Image Converter - Main Entry Point
//!
//! Command line front end for the batch conversion library.
//!
//! ## Responsibilities:
//! - Parsing command line arguments with `clap`
//! - Initializing the logging system with `tracing`
//! - Filtering the selected files down to supported image formats
//! - Building the configuration and driving the batch runner
//!
//! ## Execution flow:
//! 1. Parse CLI arguments (files, output folder, quality, resize options)
//! 2. Configure logging (INFO or DEBUG depending on the verbose flag)
//! 3. Create the output directory if missing
//! 4. Load the saved configuration if `--config` is given, apply explicit
//!    flags on top, and validate the result
//! 5. Run the batch in the background and report progress
//!
//! ## Usage example:
//! ```bash
//! webp-converter photo1.jpg photo2.png -o ./converted --quality 85 --reduce 30
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use webp_image_converter::file_manager::FileManager;
use webp_image_converter::{
    BatchRunner, ConsoleReporter, ConversionConfig, JsonMessage, JsonReporter, PresetSize,
    ProgressReporter, ResizeMode, TaskStatus,
};

#[derive(Parser)]
#[command(name = "webp-converter")]
#[command(about = "Convert images to lossy WebP with optional resizing")]
struct Args {
    /// Image files to convert
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output directory for converted files
    #[arg(short, long)]
    output: PathBuf,

    /// WebP quality (10-100, default 80)
    #[arg(short, long)]
    quality: Option<u8>,

    /// Percentage size reduction (0-70, 0 = keep original size)
    #[arg(short, long)]
    reduce: Option<u8>,

    /// JSON configuration file to load (explicit flags take precedence)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fit images within preset dimensions, e.g. --fit 1200x800
    /// (overrides --reduce)
    #[arg(long)]
    fit: Option<String>,

    /// Emit machine-readable JSON progress on stdout
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (stderr, so --json output on stdout stays clean)
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Create output directory if missing
    if !args.output.exists() {
        std::fs::create_dir_all(&args.output)?;
        info!("Created output directory: {}", args.output.display());
    }

    // Start from the saved configuration (validated on load), then let
    // explicit flags override it
    let mut config = match args.config {
        Some(ref path) => ConversionConfig::from_file(path).await?,
        None => ConversionConfig::default(),
    };
    if let Some(quality) = args.quality {
        config.quality = quality;
    }
    if let Some(ref size) = args.fit {
        config.resize_mode = ResizeMode::PresetFit;
        config.preset_target = size.parse::<PresetSize>()?;
    } else if let Some(reduce) = args.reduce {
        config.resize_mode = ResizeMode::Percentage;
        config.percentage_reduction = reduce;
    }
    config.output_folder = args.output.clone();
    config.validate()?;

    let mut runner = BatchRunner::new(config);
    for path in &args.files {
        if !FileManager::is_supported_image(path) {
            warn!("Skipping unsupported file: {}", path.display());
            continue;
        }
        runner.add_task(path.clone());
    }

    let total = runner.tasks().len();
    if total == 0 {
        if args.json {
            JsonMessage::Error { message: "no supported image files selected".into() }.emit();
        }
        return Err(anyhow::anyhow!("No supported image files selected"));
    }

    if args.json {
        JsonMessage::start(total, runner.config()).emit();
    } else {
        for task in runner.tasks() {
            info!("Queued {} ({})", task.display_name, task.format_source_size());
        }
    }

    let reporter: Arc<dyn ProgressReporter> = if args.json {
        Arc::new(JsonReporter)
    } else {
        Arc::new(ConsoleReporter::new(total as u64))
    };

    let (runner, summary) = match runner.run_in_background(reporter).await {
        Ok(outcome) => outcome,
        Err(e) => {
            // Protocol supervisors need a terminal event even when the
            // batch never ran
            if args.json {
                JsonMessage::Error { message: e.to_string() }.emit();
            }
            return Err(e.into());
        }
    };

    if !args.json {
        info!("{}", summary.format_summary());
        for task in runner.tasks() {
            if let TaskStatus::Failed { ref reason } = task.status {
                warn!("{}: {}", task.display_name, reason);
            }
        }
    }

    Ok(())
}
