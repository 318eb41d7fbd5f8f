//! Go++ class lowering CLI
//!
//! Reads syntax trees serialized as JSON, lowers their classes and writes
//! the result back out. Verbosity maps onto `log` levels; `RUST_LOG`
//! overrides it when set.

mod commands;

use clap::{Parser, Subcommand};
use gopp_syntax::logging;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gopp")]
#[command(about = "Go++ syntax tree tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lower the classes of a serialized file
    Lower {
        /// Input tree (.json)
        file: PathBuf,
        /// Output tree; standard output when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Keep class declarations instead of splitting them into an
        /// interface and a storage struct
        #[arg(long)]
        no_expand: bool,
        /// Print each class after its bases are inserted (to stderr when the
        /// tree goes to standard output)
        #[arg(long)]
        dump: bool,
    },

    /// Print the struct, interface and class types of a serialized file
    Dump {
        /// Input tree (.json)
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if std::env::var_os("RUST_LOG").is_some() {
        logging::init_from_env(level);
    } else if cli.verbose == 0 {
        logging::init();
    } else {
        logging::init_with_level(level);
    }

    match cli.command {
        Commands::Lower {
            file,
            output,
            no_expand,
            dump,
        } => commands::lower::execute(file, output, no_expand, dump),
        Commands::Dump { file } => commands::dump::execute(file),
    }
}
