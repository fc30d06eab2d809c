mod walkthrough;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// remove colors from the output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Fail three calls deep and print the captured trace
    Traceback {
        /// how frames are rendered
        #[arg(long, value_enum, default_value_t = Style::Default)]
        format: Style,
    },

    /// Insert, look up and remove elements of a set
    Set,
}

/// Rendering of the frames of a trace.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Style {
    /// `function()` then `file:line` on an indented line
    Default,

    /// `at function (file:line)`
    Compact,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    info!("Starting {} {}", NAME, VERSION);

    if args.no_color {
        colored::control::set_override(false);
    }

    match args.command {
        Command::Traceback { format } => walkthrough::traceback(format),
        Command::Set => walkthrough::set()?,
    }

    info!("Exiting {}", NAME);

    Ok(())
}
