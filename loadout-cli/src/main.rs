use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod console;

use console::{Console, Reply};

#[derive(Debug, Parser)]
#[command(name = "loadout", version, about = "Random budget-aware loadout generator")]
struct Args {
    /// Seed for reproducible rolls. Overrides the seed in the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Print loadouts as JSON instead of the text report.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    no_banner: bool,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Console command to run once (`loadout`, `agent:jett`, `3000`, ...).
    /// Without one the interactive console starts.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Reports go to stdout, diagnostics to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let cfg = match config::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: could not load config: {err}");
            std::process::exit(1);
        }
    };

    let rng = match args.seed.or(cfg.seed) {
        Some(seed) => {
            info!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut console = Console::new(rng, args.json);

    if !args.command.is_empty() {
        let line = args.command.join(" ");
        match console.respond(&line) {
            Reply::Text(text) => println!("{text}"),
            Reply::Clear => {}
            Reply::Error(err) => {
                eprintln!("ERROR: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    let banner = cfg.show_banner && !args.no_banner;
    let stdin = io::stdin();
    if let Err(err) = console.run(stdin.lock(), io::stdout(), &cfg.prompt, banner) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
