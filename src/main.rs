use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::Path;
use tubeplay::model::VideoLibrary;
use tubeplay::{Shell, VideoPlayer};

#[derive(Parser, Debug)]
#[command(name = "tubeplay")]
#[command(about = "Interactive in-memory video player shell", long_about = None)]
struct Args {
    /// Path to a catalog file, one video per line: Title|id|url|tag1,tag2
    /// (built-in sample catalog when omitted)
    #[arg(short = 'l', long)]
    library: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the catalog path and load the library
    let library = match &args.library {
        Some(path) => {
            let path = shellexpand::tilde(path);
            VideoLibrary::load(Path::new(path.as_ref()))
                .with_context(|| format!("Failed to load catalog from {}", path))?
        }
        None => {
            log::debug!("No catalog file given, using the built-in sample catalog");
            VideoLibrary::builtin()
        }
    };
    log::info!("Library loaded: {} videos", library.len());

    let player = VideoPlayer::new(library);
    let mut shell = Shell::new(player, rand::thread_rng());

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell.run(stdin.lock(), stdout.lock())
}
