//! Room adventure
//!
//! Main entry point: builds a fresh room graph, saves it under
//! `<prefix>.rooms.<pid>`, reads it back and runs the game on the console.

mod rundir;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use adv_core::{
    ConfigError, GameConfig, GameRng, GraphError, NavigationEngine, Outcome, generate_rooms,
};
use adv_save::{SaveError, read_rooms, write_rooms};

/// Name of the rc file looked up in the home directory
const RC_FILE: &str = ".adventurerc";

/// Find your way from the start room to the end room
#[derive(Parser, Debug)]
#[command(name = "adventure")]
#[command(author, version, about = "Room adventure - find the END ROOM!", long_about = None)]
struct Args {
    /// Number of rooms to generate
    #[arg(short = 'n', long = "rooms")]
    rooms: Option<usize>,

    /// Moves allowed before the game is lost
    #[arg(short = 'm', long = "max-path")]
    max_path: Option<usize>,

    /// RNG seed, to replay the same graph
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Config file (default: ~/.adventurerc, if present)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Where to create the room directory
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    out_dir: PathBuf,

    /// Play an existing room directory instead of generating one
    #[arg(short = 'p', long = "play", conflicts_with_all = ["rooms", "seed"])]
    play: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("could not create room directory in {}: {source}", parent.display())]
    RunDir {
        parent: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console error: {0}")]
    Console(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so game text on stdout stays clean. `RUST_LOG` wins over
/// the verbosity flag.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<Outcome, AppError> {
    let config = load_config(args)?;

    let (dir, expected) = match &args.play {
        Some(dir) => (dir.clone(), None),
        None => (generate_and_save(&config, args)?, Some(config.room_count)),
    };

    let loaded = read_rooms(&dir, expected)?;
    let mut nav = NavigationEngine::new(&loaded.store, config.max_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = nav.play(stdin.lock(), stdout.lock())?;

    info!(?outcome, steps = nav.path().len(), dir = %dir.display(), "game over");
    Ok(outcome)
}

/// Defaults, then the rc file, then command-line flags
fn load_config(args: &Args) -> Result<GameConfig, ConfigError> {
    let rc = args.config.clone().or_else(|| {
        dirs::home_dir()
            .map(|home| home.join(RC_FILE))
            .filter(|path| path.is_file())
    });

    let mut config = match rc {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            GameConfig::load_from_file(&path)?
        }
        None => GameConfig::default(),
    };

    if let Some(rooms) = args.rooms {
        config.room_count = rooms;
    }
    if let Some(max_path) = args.max_path {
        config.max_path = max_path;
    }
    Ok(config)
}

/// Generate a graph and write it to a new run directory. The generated
/// rooms are dropped here; play uses the copy read back from disk.
fn generate_and_save(config: &GameConfig, args: &Args) -> Result<PathBuf, AppError> {
    let mut rng = args.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    info!(seed = rng.seed(), rooms = config.room_count, "generating rooms");

    let store = generate_rooms(config, &mut rng)?;

    let dir = rundir::create_run_dir(&args.out_dir, &config.dir_prefix).map_err(|source| {
        AppError::RunDir {
            parent: args.out_dir.clone(),
            source,
        }
    })?;
    write_rooms(&store, &dir)?;
    info!(dir = %dir.display(), "rooms saved");

    Ok(dir)
}
