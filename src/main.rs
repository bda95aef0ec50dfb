//! rust-othello command line.
//!
//! - `agent`: play one game against an external manager over stdin/stdout
//! - `play`: run a match between two in-process players
//! - `best-move`: search a single position
//! - `init-config`: print the default configuration

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};

use rust_othello::core::{Board, Color, GameRng};
use rust_othello::eval::EvaluatorKind;
use rust_othello::game::Match;
use rust_othello::players::{GreedyPlayer, Player, RandomPlayer, SearchPlayer};
use rust_othello::protocol::Session;
use rust_othello::search::{Algorithm, SearchConfig, Searcher};
use rust_othello::AgentConfig;

/// Othello agent with minimax, alpha-beta pruning and state caching.
///
/// Examples:
///   rust-othello agent
///   rust-othello play --dark search:4:ab:c:o --light random --seed 7
///   rust-othello best-move --board "[[0,0,0,0],[0,2,1,0],[0,1,2,0],[0,0,0,0]]" --color 1
///   rust-othello init-config > othello.toml
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Speak the game manager protocol on stdin/stdout
    Agent {
        /// Path to configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Name announced to the manager
        #[arg(long)]
        name: Option<String>,
    },

    /// Play a match between two players
    Play {
        /// Dark player: search[:depth[:ab|mm[:c][:o][:h]]], random or greedy
        #[arg(long, default_value = "search")]
        dark: String,

        /// Light player, same syntax as --dark
        #[arg(long, default_value = "random")]
        light: String,

        /// Board side
        #[arg(long, default_value_t = 8)]
        size: usize,

        /// Seed for random players
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Base search settings for search players
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the game record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search one position and print the chosen move
    BestMove {
        /// Board literal, a list of rows of 0 (empty), 1 (dark), 2 (light)
        #[arg(long)]
        board: String,

        /// Color to move: 1 (dark) or 2 (light)
        #[arg(long, value_parser = parse_color)]
        color: Color,

        #[command(flatten)]
        search: SearchArgs,

        /// Print the search result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration as TOML
    InitConfig,
}

/// Search overrides; flags win over the configuration file.
#[derive(Args, Debug)]
struct SearchArgs {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Depth limit (-1 for unlimited)
    #[arg(long, allow_hyphen_values = true)]
    depth: Option<i64>,

    /// minimax or alphabeta
    #[arg(long)]
    algorithm: Option<Algorithm>,

    /// utility or heuristic
    #[arg(long)]
    evaluator: Option<EvaluatorKind>,

    /// Enable state caching
    #[arg(long)]
    caching: bool,

    /// Enable node ordering
    #[arg(long)]
    ordering: bool,
}

impl SearchArgs {
    fn resolve(&self) -> Result<SearchConfig> {
        let mut config = load_config(self.config.as_ref())?.search;
        if let Some(depth) = self.depth {
            config.depth_limit = rust_othello::search::depth_limit_from_wire(depth)?;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(evaluator) = self.evaluator {
            config.evaluator = evaluator;
        }
        config.caching |= self.caching;
        config.ordering |= self.ordering;
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("arguments: {cli:?}");

    match cli.command {
        Command::Agent { config, name } => run_agent(config, name),
        Command::Play {
            dark,
            light,
            size,
            seed,
            config,
            json,
        } => run_match(&dark, &light, size, seed, config, json),
        Command::BestMove {
            board,
            color,
            search,
            json,
        } => run_best_move(&board, color, &search, json),
        Command::InitConfig => {
            print!("{}", AgentConfig::default_toml()?);
            Ok(())
        }
    }
}

/// Log to stderr; stdout belongs to the protocol and command output.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<AgentConfig> {
    match path {
        Some(path) => {
            AgentConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))
        }
        None => Ok(AgentConfig::default()),
    }
}

fn run_agent(config: Option<PathBuf>, name: Option<String>) -> Result<()> {
    let config = load_config(config.as_ref())?;
    let name = name.unwrap_or(config.agent.name);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Session::new(stdin.lock(), stdout.lock())
        .with_name(name)
        .with_config(config.search)
        .run()
        .context("agent session failed")?;

    info!(
        "session over: {} moves as {}{}",
        summary.moves,
        summary.color,
        summary
            .final_score
            .map(|(dark, light)| format!(", final score {dark}-{light}"))
            .unwrap_or_default()
    );
    Ok(())
}

fn run_match(dark: &str, light: &str, size: usize, seed: u64, config: Option<PathBuf>, json: bool) -> Result<()> {
    let base = load_config(config.as_ref())?.search;
    let mut rng = GameRng::new(seed);
    let dark = build_player(dark, &base, &mut rng).with_context(|| format!("bad dark player {dark:?}"))?;
    let light = build_player(light, &base, &mut rng).with_context(|| format!("bad light player {light:?}"))?;

    let record = Match::new(dark, light).with_size(size).play().context("match failed")?;

    if json {
        let stdout = BufWriter::new(io::stdout().lock());
        serde_json::to_writer_pretty(stdout, &record).context("failed to write game record")?;
        println!();
    } else {
        let board = Board::from_rows(&record.final_board)?;
        println!("{board}");
        println!(
            "{} (dark) {} - {} {} (light): {}",
            record.dark, record.final_score.0, record.final_score.1, record.light, record.result
        );
    }
    Ok(())
}

fn run_best_move(literal: &str, color: Color, args: &SearchArgs, json: bool) -> Result<()> {
    let board = Board::from_literal(literal).context("failed to parse board")?;
    let mut searcher = Searcher::new(args.resolve()?)?;
    let result = searcher.search(&board, color);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    match result.best_move {
        Some(mv) => println!("{mv}"),
        None => println!("pass"),
    }
    println!("value {}", result.value);
    println!("{}", result.stats);
    Ok(())
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    match s {
        "1" | "dark" => Ok(Color::Dark),
        "2" | "light" => Ok(Color::Light),
        other => Err(format!("expected 1 (dark) or 2 (light), got {other:?}")),
    }
}

/// Build a player from `search[:depth[:ab|mm[:c][:o][:h]]]`, `random` or
/// `greedy`. Depth `inf` or `-1` searches to the end of the game.
fn build_player(spec: &str, base: &SearchConfig, rng: &mut GameRng) -> Result<Box<dyn Player>> {
    let mut parts = spec.split(':');
    match parts.next().unwrap_or_default() {
        "random" if parts.next().is_none() => Ok(Box::new(RandomPlayer::new(rng.fork()))),
        "greedy" if parts.next().is_none() => Ok(Box::new(GreedyPlayer)),
        "search" => {
            let config = search_spec(parts, base.clone())?;
            Ok(Box::new(SearchPlayer::new(config)?.with_name(spec)))
        }
        _ => bail!("unknown player {spec:?}"),
    }
}

fn search_spec<'a>(mut parts: impl Iterator<Item = &'a str>, mut config: SearchConfig) -> Result<SearchConfig> {
    if let Some(depth) = parts.next() {
        config.depth_limit = match depth {
            "inf" | "-1" => None,
            d => Some(d.parse().with_context(|| format!("bad depth {d:?}"))?),
        };
    }
    if let Some(algorithm) = parts.next() {
        config.algorithm = algorithm.parse()?;
    }
    for flag in parts {
        match flag {
            "c" => config.caching = true,
            "o" => config.ordering = true,
            "h" => config.evaluator = EvaluatorKind::Heuristic,
            other => bail!("unknown search flag {other:?}"),
        }
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(s: &str) -> Result<SearchConfig> {
        let mut parts = s.split(':');
        assert_eq!(parts.next(), Some("search"));
        search_spec(parts, SearchConfig::default())
    }

    #[test]
    fn test_search_spec() {
        assert_eq!(spec("search").unwrap(), SearchConfig::default());

        let config = spec("search:6:mm:c:o:h").unwrap();
        assert_eq!(config.depth_limit, Some(6));
        assert_eq!(config.algorithm, Algorithm::Minimax);
        assert!(config.caching);
        assert!(config.ordering);
        assert_eq!(config.evaluator, EvaluatorKind::Heuristic);

        assert_eq!(spec("search:inf").unwrap().depth_limit, None);
        assert!(spec("search:0").is_err());
        assert!(spec("search:x").is_err());
        assert!(spec("search:3:ab:z").is_err());
    }

    #[test]
    fn test_build_player() {
        let base = SearchConfig::default();
        let mut rng = GameRng::new(1);
        assert_eq!(build_player("greedy", &base, &mut rng).unwrap().name(), "greedy");
        assert_eq!(build_player("random", &base, &mut rng).unwrap().name(), "random");
        assert_eq!(build_player("search:2:ab", &base, &mut rng).unwrap().name(), "search:2:ab");
        assert!(build_player("random:3", &base, &mut rng).is_err());
        assert!(build_player("mcts", &base, &mut rng).is_err());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("1").unwrap(), Color::Dark);
        assert_eq!(parse_color("light").unwrap(), Color::Light);
        assert!(parse_color("3").is_err());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
