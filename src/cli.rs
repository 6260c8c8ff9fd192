//! Command-line arguments

use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use npuzzle::{Budget, SearchConfig, VisitedBackend, DEFAULT_SIZE, MAX_SIZE};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum VisitedArg {
    /// Hash set over the flattened board (default)
    #[default]
    Hash,
    /// Trie with one level per cell
    Trie,
}

impl From<VisitedArg> for VisitedBackend {
    fn from(arg: VisitedArg) -> Self {
        match arg {
            VisitedArg::Hash => VisitedBackend::Hash,
            VisitedArg::Trie => VisitedBackend::Trie,
        }
    }
}

/// Find a shortest solution to a sliding-tile puzzle by breadth-first search
#[derive(Parser, Debug)]
#[command(name = "npuzzle", version)]
pub struct Args {
    /// Puzzle file, one row per line. Reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Grid side length
    #[arg(short, long, default_value_t = DEFAULT_SIZE,
          value_parser = clap::value_parser!(u8).range(2..=MAX_SIZE as i64).map(usize::from))]
    pub size: usize,

    /// Solve a random solvable board instead of reading one
    #[arg(short, long, conflicts_with = "file")]
    pub random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Stop after expanding this many states
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Stop after this many milliseconds
    #[arg(long)]
    pub time_limit_ms: Option<u64>,

    /// Visited-state index backend
    #[arg(long, value_enum, default_value = "hash")]
    pub visited: VisitedArg,

    /// Skip the search when the parity check says the board is unsolvable
    #[arg(long)]
    pub precheck: bool,

    /// Only print the move list
    #[arg(short, long)]
    pub quiet: bool,

    /// Print configuration and search statistics to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Never colour the blank tile
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            size: self.size,
            budget: Budget {
                max_expansions: self.max_expansions,
                time_limit: self.time_limit_ms.map(Duration::from_millis),
            },
            visited: self.visited.into(),
            parity_precheck: self.precheck,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_default_config() {
        let args = Args::try_parse_from(["npuzzle", "start.txt"]).unwrap();
        assert_eq!(args.search_config(), SearchConfig::default());
        assert_eq!(args.file, Some(PathBuf::from("start.txt")));
    }

    #[test]
    fn budget_and_backend_flags() {
        let args = Args::try_parse_from([
            "npuzzle",
            "--size",
            "4",
            "--random",
            "--seed",
            "9",
            "--max-expansions",
            "100",
            "--time-limit-ms",
            "250",
            "--visited",
            "trie",
        ])
        .unwrap();
        let config = args.search_config();
        assert_eq!(config.size, 4);
        assert_eq!(config.visited, VisitedBackend::Trie);
        assert_eq!(config.budget.max_expansions, Some(100));
        assert_eq!(config.budget.time_limit, Some(Duration::from_millis(250)));
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn rejects_bad_size_and_conflicts() {
        assert!(Args::try_parse_from(["npuzzle", "--size", "1"]).is_err());
        assert!(Args::try_parse_from(["npuzzle", "--size", "16"]).is_err());
        assert!(Args::try_parse_from(["npuzzle", "f.txt", "--random"]).is_err());
        assert!(Args::try_parse_from(["npuzzle", "-q", "-v"]).is_err());
    }
}
