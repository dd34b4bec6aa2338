//! LayerKV CLI
//!
//! Command-line shell for the LayerKV transactional store.
//!
//! # Commands
//!
//! - `shell` - Interactive session on stdin
//! - `exec` - Run a command script from a file
//! - `version` - Show version information

mod session;

use clap::{Parser, Subcommand};
use session::{Response, Session};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// LayerKV command-line shell.
#[derive(Parser)]
#[command(name = "layerkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session on stdin
    Shell,

    /// Run a command script from a file
    Exec {
        /// Path to the script, one command per line
        script: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Shell => run_shell()?,
        Commands::Exec { script } => run_script(&script)?,
        Commands::Version => {
            println!("LayerKV CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("LayerKV Core v{}", layerkv_core::VERSION);
        }
    }

    Ok(())
}

/// Runs an interactive session until EOF or an exit command.
fn run_shell() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.eval(&line) {
            Response::Line(text) => writeln!(stdout, "{text}")?,
            Response::Silent => {}
            Response::Exit => break,
        }
    }

    Ok(())
}

/// Runs a script file, printing one response per command.
fn run_script(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("cannot read script {}: {err}", path.display()))?;

    let mut session = Session::new();
    for line in contents.lines() {
        match session.eval(line) {
            Response::Line(text) => println!("{text}"),
            Response::Silent => {}
            Response::Exit => break,
        }
    }

    Ok(())
}
