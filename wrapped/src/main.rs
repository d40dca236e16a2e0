//! Listening stats CLI.
//!
//! Keeps minutes listened per artist and per song in a CSV file
//! (`data/music_stats.csv` by default) and prints a top-N summary.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wrapped::core::summary::render_summary;
use wrapped::core::types::{PlayEvent, PlayOutcome};
use wrapped::exit_codes;
use wrapped::io::config::DEFAULT_CONFIG_FILE;
use wrapped::io::init::{InitOptions, WrappedPaths, init_wrapped};
use wrapped::io::store::CsvRowStore;
use wrapped::logging;
use wrapped::menu::run_menu;
use wrapped::session::{export_stats, import_stats, load_stats, record_play_event};

#[derive(Parser)]
#[command(
    name = "wrapped",
    version,
    about = "Track minutes listened and your top artists and songs"
)]
struct Cli {
    /// Path to the config file.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config and an empty stats file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print total minutes and the top artists and songs.
    Show,
    /// Record one play and save the updated stats.
    Play {
        song: String,
        artist: String,
        minutes: u64,
    },
    /// Replace the stored stats with the row in another CSV file.
    Import { file: PathBuf },
    /// Write the stored stats to another CSV file.
    Export { file: PathBuf },
    /// Interactive menu (import, export, add play, quit).
    Menu,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Show => cmd_show(&cli.config),
        Command::Play {
            song,
            artist,
            minutes,
        } => cmd_play(&cli.config, PlayEvent::new(song, artist, minutes)),
        Command::Import { file } => cmd_import(&cli.config, &file),
        Command::Export { file } => cmd_export(&cli.config, &file),
        Command::Menu => cmd_menu(&cli.config),
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    let paths = init_wrapped(config_path, &InitOptions { force })?;
    println!("config: {}", paths.config_path.display());
    println!("stats: {}", paths.data_path.display());
    Ok(exit_codes::OK)
}

fn cmd_show(config_path: &Path) -> Result<i32> {
    let (paths, cfg) = WrappedPaths::load(config_path)?;
    let store = CsvRowStore::new(&paths.data_path);
    let state = load_stats(&store, cfg.top_n)
        .with_context(|| format!("load stats {}", paths.data_path.display()))?;
    print!("{}", render_summary(&state));
    Ok(exit_codes::OK)
}

fn cmd_play(config_path: &Path, event: PlayEvent) -> Result<i32> {
    let (paths, cfg) = WrappedPaths::load(config_path)?;
    let mut store = CsvRowStore::new(&paths.data_path);
    let (outcome, _) = record_play_event(&mut store, &event, cfg.top_n)
        .with_context(|| format!("record play in {}", paths.data_path.display()))?;
    match outcome {
        PlayOutcome::Recorded => {
            println!(
                "Recorded play for '{}' by {} (+{} min)",
                event.song.trim(),
                event.artist.trim(),
                event.minutes
            );
            Ok(exit_codes::OK)
        }
        PlayOutcome::Ignored => {
            eprintln!("No event captured.");
            Ok(exit_codes::IGNORED)
        }
    }
}

fn cmd_import(config_path: &Path, file: &Path) -> Result<i32> {
    let (paths, cfg) = WrappedPaths::load(config_path)?;
    let source = CsvRowStore::new(file);
    let mut target = CsvRowStore::new(&paths.data_path);
    import_stats(&source, &mut target, cfg.top_n)
        .with_context(|| format!("import stats from {}", file.display()))?;
    println!("Imported stats from {}", file.display());
    Ok(exit_codes::OK)
}

fn cmd_export(config_path: &Path, file: &Path) -> Result<i32> {
    let (paths, cfg) = WrappedPaths::load(config_path)?;
    let source = CsvRowStore::new(&paths.data_path);
    let mut target = CsvRowStore::new(file);
    export_stats(&source, &mut target, cfg.top_n)
        .with_context(|| format!("export stats to {}", file.display()))?;
    println!("Exported stats to {}", file.display());
    Ok(exit_codes::OK)
}

fn cmd_menu(config_path: &Path) -> Result<i32> {
    let (paths, cfg) = WrappedPaths::load(config_path)?;
    let mut store = CsvRowStore::new(&paths.data_path);
    let label = paths.data_path.display().to_string();
    let stdin = io::stdin();
    run_menu(&mut store, &label, cfg.top_n, stdin.lock(), io::stdout())?;
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init() {
        let cli = Cli::parse_from(["wrapped", "init"]);
        assert!(matches!(cli.command, Command::Init { force: false }));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["wrapped", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn parse_play_with_config() {
        let cli = Cli::parse_from([
            "wrapped",
            "play",
            "Around the World",
            "Daft Punk",
            "7",
            "--config",
            "alt.toml",
        ]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        match cli.command {
            Command::Play {
                song,
                artist,
                minutes,
            } => {
                assert_eq!(song, "Around the World");
                assert_eq!(artist, "Daft Punk");
                assert_eq!(minutes, 7);
            }
            _ => panic!("expected play command"),
        }
    }

    #[test]
    fn play_rejects_non_numeric_minutes() {
        let result = Cli::try_parse_from(["wrapped", "play", "s", "a", "lots"]);
        assert!(result.is_err());
    }
}
