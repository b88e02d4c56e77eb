//! Spinning scene demo
//!
//! Renders a sphere orbiting a tumbling torus into the terminal. Settings come
//! from an optional TOML/RON file and can be overridden on the command line.
//! Logs go to stderr; redirect them (`2>log.txt`) to keep the frame clean.

mod config;
mod scene;

use ascii_engine::config::{Config, ConfigError};
use ascii_engine::foundation::logging;
use ascii_engine::{RenderError, Renderer};
use clap::Parser;
use config::DemoConfig;
use scene::Scene;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spinning_scene", about = "Renders an animated sphere and torus as ASCII art")]
struct Args {
    /// Configuration file (.toml or .ron)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Target frame rate, overrides the configuration
    #[arg(long, value_name = "FPS")]
    fps: Option<f64>,

    /// Number of frames to render, overrides the configuration
    #[arg(short, long, value_name = "COUNT")]
    steps: Option<usize>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Write the default configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    write_default_config: Option<PathBuf>,
}

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

fn main() {
    let args = Args::parse();
    logging::init_with_level(&args.log_level);

    if let Err(e) = try_main(args) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn try_main(args: Args) -> Result<(), DemoError> {
    if let Some(path) = &args.write_default_config {
        DemoConfig::default().save_to_file(&path.to_string_lossy())?;
        log::info!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = load_config(&args)?;
    run(&config, std::io::stdout())?;
    Ok(())
}

fn load_config(args: &Args) -> Result<DemoConfig, DemoError> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            DemoConfig::load_from_file(&path.to_string_lossy())?
        }
        None => DemoConfig::default(),
    };

    if let Some(fps) = args.fps {
        config.renderer.target_fps = fps;
    }
    if let Some(steps) = args.steps {
        config.steps = steps;
    }

    config.validate()?;
    Ok(config)
}

/// Render `config.steps` frames of the scene into `sink`
fn run<W: Write>(config: &DemoConfig, sink: W) -> Result<W, RenderError> {
    let mut scene = Scene::new(&config.scene, config.renderer.target_fps)?;
    let mut renderer = Renderer::from_config(&config.renderer, sink)?;

    for step in 0..config.steps {
        let stats = renderer.render_frame(scene.light(), &scene.placements())?;
        log::trace!("Frame {step}: {} of {} points drawn", stats.drawn, stats.points);
        scene.advance();
    }

    let synchronizer = renderer.frame_synchronizer();
    log::info!(
        "Rendered {} frames, {} over the {:?} budget",
        synchronizer.frame_count(),
        synchronizer.overrun_count(),
        synchronizer.period()
    );

    Ok(renderer.into_sink())
}
