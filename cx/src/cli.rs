//! CLI argument parsing for computecontext

use clap::Parser;
use std::path::PathBuf;

use crate::algorithm::AlgorithmKind;

#[derive(Parser, Debug)]
#[command(name = "cx")]
#[command(author, version, about = "Run two numbers through a series of swappable algorithms", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Algorithms to run, in order (overrides config)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub algorithms: Vec<AlgorithmKind>,

    /// Left operand (default: 23)
    pub a: Option<i64>,

    /// Right operand (default: 34)
    pub b: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["cx"]).unwrap();
        assert_eq!(cli.a, None);
        assert_eq!(cli.b, None);
        assert!(cli.algorithms.is_empty());
    }

    #[test]
    fn test_operands() {
        let cli = Cli::try_parse_from(["cx", "-5", "12"]).unwrap();
        assert_eq!(cli.a, Some(-5));
        assert_eq!(cli.b, Some(12));
    }

    #[test]
    fn test_algorithm_list() {
        let cli = Cli::try_parse_from(["cx", "--algorithms", "concat,sum,concat"]).unwrap();
        assert_eq!(
            cli.algorithms,
            vec![AlgorithmKind::Concat, AlgorithmKind::Sum, AlgorithmKind::Concat]
        );
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(Cli::try_parse_from(["cx", "--algorithms", "divide"]).is_err());
    }

    #[test]
    fn test_non_numeric_operand_rejected() {
        assert!(Cli::try_parse_from(["cx", "twenty"]).is_err());
    }
}
