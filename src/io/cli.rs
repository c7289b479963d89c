//! Command-line interface wiring the loader, engine, and renderers together

use crate::algorithm::engine::{Engine, Mode};
use crate::algorithm::observer::StepObserver;
use crate::io::configuration::DEFAULT_FRAME_DELAY_MS;
use crate::io::error::Result;
use crate::io::loader::Pattern;
use crate::io::progress::ProgressObserver;
use crate::io::render::{AnimatedRenderer, Renderer};
use crate::spatial::grid::Grid;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Collapse a tile grid from an example pattern"
)]
/// Command-line arguments for the generator
pub struct Cli {
    /// Input JSON pattern file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Animate generation in the terminal
    #[arg(short, long)]
    pub animate: bool,

    /// Use the faster, contradiction-prone flood algorithm
    #[arg(short, long)]
    pub fast: bool,

    /// Override the output width from the pattern file
    #[arg(short = 'x', long)]
    pub width: Option<usize>,

    /// Override the output height from the pattern file
    #[arg(short = 'y', long)]
    pub height: Option<usize>,

    /// Seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Milliseconds between animation frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub delay: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// The observer a run attaches, chosen from the CLI flags
enum RunObserver {
    /// Repaint the terminal after every collapse
    Animated(AnimatedRenderer),
    /// Advance a progress bar after every collapse
    Progress(ProgressObserver),
    /// No per-step output
    Headless,
}

impl RunObserver {
    fn for_cli(cli: &Cli, labels: Vec<String>, width: usize, height: usize) -> Self {
        if cli.animate {
            Self::Animated(AnimatedRenderer::new(
                labels,
                Duration::from_millis(cli.delay),
            ))
        } else if cli.quiet {
            Self::Headless
        } else {
            Self::Progress(ProgressObserver::new(width, height))
        }
    }

    fn finish(&self) {
        if let Self::Progress(progress) = self {
            progress.finish();
        }
    }
}

impl StepObserver for RunObserver {
    fn on_collapse(&mut self, grid: &Grid) {
        match self {
            Self::Animated(renderer) => renderer.on_collapse(grid),
            Self::Progress(progress) => progress.on_collapse(grid),
            Self::Headless => {}
        }
    }
}

/// Run one generation according to the CLI arguments
///
/// # Errors
///
/// Propagates pattern loading failures and contradictions; on contradiction
/// the partial grid is printed before the error is returned.
// Printing the result is this function's purpose
#[allow(clippy::print_stdout)]
pub fn run(cli: &Cli) -> Result<()> {
    let pattern = Pattern::load(&cli.file)?;
    let width = cli.width.unwrap_or(pattern.width);
    let height = cli.height.unwrap_or(pattern.height);
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mode = if cli.fast { Mode::Fast } else { Mode::Robust };

    let renderer = Renderer::new(pattern.labels.clone());
    let mut observer = RunObserver::for_cli(cli, pattern.labels.clone(), width, height);

    let mut engine = Engine::new(&pattern.tileset, width, height, StdRng::seed_from_u64(seed));
    engine.set_observer(&mut observer);
    let generation = engine.generate(mode);
    let grid = engine.into_grid();
    observer.finish();

    match generation {
        Ok(()) => {
            if !cli.animate {
                renderer.print(&grid);
            }
            Ok(())
        }
        Err(error) => {
            renderer.print(&grid);
            if cli.fast {
                println!("hint: try disabling fast mode");
            }
            Err(error)
        }
    }
}
