mod demos;

use anyhow::{bail, Context};
use artistry_canvas::{GifOptions, Sketch, SketchConfig};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Seed used by the logo demo unless overridden.
const LOGO_SEED: u64 = 55;

/// artistry: render the bundled creative-coding sketches to image files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with the initial sketch settings (canvas size, colors, modes)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log every drawing command
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the noise-textured logo to a PNG file
    Logo {
        /// Path to output PNG file to be created
        #[arg(short, long, default_value = "logo.png")]
        output: PathBuf,

        /// Noise seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Open the result in the system image viewer
        #[arg(long)]
        show: bool,
    },
    /// Render a rotating square to a looping GIF file
    Spin {
        /// Path to output GIF file to be created
        #[arg(short, long, default_value = "spin.gif")]
        output: PathBuf,

        /// Number of frames
        #[arg(long, default_value_t = 36)]
        frames: u32,

        /// Frames per second
        #[arg(long, default_value_t = 30)]
        fps: u32,

        /// Frame width (defaults to the config width)
        #[arg(long)]
        width: Option<u32>,

        /// Frame height (defaults to the config height)
        #[arg(long)]
        height: Option<u32>,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SketchConfig> {
    let Some(path) = path else {
        return Ok(SketchConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: SketchConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file as JSON: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Logo { output, seed, show } => {
            let seed = seed.or(config.noise_seed).unwrap_or(LOGO_SEED);
            let mut sketch = Sketch::with_config(&config)?;
            demos::logo(&mut sketch, seed)?;
            sketch
                .save(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            if show {
                sketch.show().context("Failed to open image viewer")?;
            }
            println!("Wrote {}", output.display());
        }
        Commands::Spin {
            output,
            frames,
            fps,
            width,
            height,
        } => {
            if frames == 0 || fps == 0 {
                bail!("--frames and --fps must be positive");
            }
            let options = GifOptions {
                width: width.unwrap_or(config.width),
                height: height.unwrap_or(config.height),
                frames,
                frame_rate: fps,
            };
            log::info!("rendering {} frames at {}x{}", frames, options.width, options.height);
            let sketch = Sketch::with_config(&config)?;
            sketch
                .save_gif(&output, &options, |s, frame| demos::spin(s, frame, frames))
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Wrote {}", output.display());
        }
    }
    Ok(())
}
