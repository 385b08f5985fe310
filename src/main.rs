//! Binary entrypoint for Castle Escape.
//!
//! Runs one interactive game on stdin/stdout. Logs go to stderr, or to a log
//! file when one is configured; in that case stderr only gets a copy when it
//! is redirected away from the terminal. Stdout carries just the game.
//!
//! See the library crate docs for module-level details: `castle_escape::`.
use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use castle_escape::castle::Session;
use castle_escape::config::Config;

#[derive(Parser)]
#[command(name = "castle_escape")]
#[command(about = "Find the Golden Crown and escape the abandoned castle")]
#[command(version)]
struct Cli {
    /// Configuration file path (optional; defaults apply when missing)
    #[arg(short, long, default_value = "castle.toml")]
    config: String,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Character name (skips the name prompt)
    #[arg(short, long)]
    name: Option<String>,

    /// Seed for ambient events (overrides config)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)?;
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    init_logging(&config, cli.verbose);
    info!("Starting Castle Escape v{}", env!("CARGO_PKG_VERSION"));
    if log::log_enabled!(log::Level::Debug) {
        match config.to_toml() {
            Ok(text) => debug!("effective config:\n{}", text),
            Err(e) => debug!("config: {:?} ({})", config, e),
        }
    }

    let echo = !atty::is(atty::Stream::Stdin);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock()).with_echo(echo);
    let outcome = session.run(&config.game, cli.name.as_deref())?;

    info!(
        "Castle Escape exiting: status={:?} score={}",
        outcome.status,
        outcome.player.score()
    );
    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity can only raise the configured level
    let base_level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level.max(config.logging.level_filter()));

    // With a log file, keep the terminal for the game and only mirror to
    // stderr when it has been redirected.
    let console = !atty::is(atty::Stream::Stderr);

    let file = config.logging.file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    match file {
        Some(f) => {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }

                if console {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        None => {
            builder.format(|fmt, record| {
                writeln!(
                    fmt,
                    "{} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                    record.level(),
                    record.args()
                )
            });
        }
    }
    let _ = builder.try_init();
}
