//! Headless match-3 runner (default binary).
//!
//! Plays a seeded game with random legal moves and writes a line-delimited JSON transcript
//! to stdout. Logs go to stderr; set `RUST_LOG` to change verbosity.
//!
//! ```text
//! match3 [--config <path>] [--seed <n>] [--moves <n>] [--width <n>] [--height <n>]
//! ```

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use match3::sim::{Autoplayer, Session, SimConfig, Summary, TranscriptWriter};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CliArgs {
    config: Option<PathBuf>,
    seed: Option<u64>,
    moves: Option<u32>,
    width: Option<usize>,
    height: Option<usize>,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        i += 1;
        let value = args
            .get(i)
            .ok_or_else(|| anyhow!("missing value for {}", flag))?;
        match flag {
            "--config" => out.config = Some(PathBuf::from(value)),
            "--seed" => out.seed = Some(parse_number(flag, value)?),
            "--moves" => out.moves = Some(parse_number(flag, value)?),
            "--width" => out.width = Some(parse_number(flag, value)?),
            "--height" => out.height = Some(parse_number(flag, value)?),
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(out)
}

fn parse_number<N: std::str::FromStr>(flag: &str, value: &str) -> Result<N> {
    value
        .parse::<N>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
}

fn load_config(args: &CliArgs) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            SimConfig::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(moves) = args.moves {
        config.max_moves = moves;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    config.validate()?;
    Ok(config)
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("match3=info,match3_core=info,match3_sim=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;
    let config = load_config(&args)?;
    info!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        max_moves = config.max_moves,
        "starting simulation"
    );

    let mut session = Session::from_config(&config)?;
    let mut player = Autoplayer::new(config.seed);

    let stdout = io::stdout();
    let mut transcript = TranscriptWriter::new(BufWriter::new(stdout.lock()));
    transcript.write_start(&config, session.board())?;

    while let Some((first, second)) = player.choose(&session) {
        let result = session.play(first, second);
        transcript.write_move(first, second, &result)?;
    }

    transcript.write_end(Summary {
        moves: session.moves(),
        matches: session.matches_cleared(),
        cascades: session.cascades(),
        stuck: session.is_stuck(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_overrides() {
        let args = parse_args(&strings(&["--seed", "9", "--moves", "3", "--width", "5"])).unwrap();
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.moves, Some(3));
        assert_eq!(args.width, Some(5));
        assert_eq!(args.height, None);

        let config = load_config(&args).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.max_moves, 3);
        assert_eq!(config.width, 5);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&strings(&["--seed"])).is_err());
        assert!(parse_args(&strings(&["--seed", "x"])).is_err());
        assert!(parse_args(&strings(&["--bogus", "1"])).is_err());
    }

    #[test]
    fn test_load_config_rejects_zero_width() {
        let args = parse_args(&strings(&["--width", "0"])).unwrap();
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_load_config_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let args = parse_args(&strings(&["--config", path.to_str().unwrap()])).unwrap();
        assert!(load_config(&args).is_err());
    }
}
