//! Terminal Snake runner (default binary).
//!
//! Parses the command line, sets up file logging, and runs the game in the
//! terminal's alternate screen using crossterm and a framebuffer renderer.

use anyhow::Result;
use clap::Parser;
use tracing::error;

use tui_snake::cli::Args;
use tui_snake::logging;
use tui_snake::runner;
use tui_snake::term::TerminalRenderer;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.to_config()?;
    let seed = args.seed();
    logging::init(&args.log_file, &args.log_level)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = runner::run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Ok(summary) => {
            println!(
                "Score {}  High {}  Level {}  (seed {})",
                summary.score, summary.high_score, summary.level, seed
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "game loop failed");
            Err(e)
        }
    }
}
