//! Command line argument parsing for the Glaive CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Glaive - synonym-aware catalog search
#[derive(Parser, Debug, Clone)]
#[command(name = "glaive")]
#[command(about = "Synonym-aware query expansion for catalog search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GlaiveArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "GLAIVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Synonym file (JSON), overrides the configuration file
    #[arg(short, long, value_name = "SYNONYM_FILE", env = "GLAIVE_SYNONYMS")]
    pub synonyms: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GlaiveArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Expand a single term through the synonym dictionary
    Expand(ExpandArgs),

    /// Expand every word of a phrase into a keyword bag
    Phrase(PhraseArgs),

    /// Build the boolean-mode full-text query for a phrase
    Query(QueryArgs),

    /// Inspect or edit the synonym dictionary
    #[command(subcommand)]
    Synonyms(SynonymCommand),

    /// Search a catalog file
    Search(SearchArgs),
}

/// Arguments for term expansion
#[derive(Parser, Debug, Clone)]
pub struct ExpandArgs {
    /// Term to expand
    #[arg(value_name = "TERM")]
    pub term: String,
}

/// Arguments for phrase expansion
#[derive(Parser, Debug, Clone)]
pub struct PhraseArgs {
    /// Phrase to expand
    #[arg(value_name = "PHRASE")]
    pub phrase: String,
}

/// Arguments for boolean query building
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Phrase to translate
    #[arg(value_name = "PHRASE")]
    pub phrase: String,

    /// Emit one unexpanded group instead of synonym groups
    #[arg(long)]
    pub literal: bool,

    /// Strip reserved boolean-mode characters
    #[arg(long)]
    pub sanitize: bool,
}

/// Synonym dictionary commands
#[derive(Subcommand, Debug, Clone)]
pub enum SynonymCommand {
    /// List all synonym entries
    List,

    /// Add synonyms to a main term
    Add(SynonymAddArgs),

    /// Remove synonyms, or a whole entry
    Remove(SynonymRemoveArgs),
}

/// Arguments for adding synonyms
#[derive(Parser, Debug, Clone)]
pub struct SynonymAddArgs {
    /// Main term
    #[arg(value_name = "MAIN_TERM")]
    pub main_term: String,

    /// Synonyms to add
    #[arg(value_name = "SYNONYM", required = true)]
    pub synonyms: Vec<String>,

    /// Write the updated dictionary back to the synonym file
    #[arg(long)]
    pub save: bool,
}

/// Arguments for removing synonyms
#[derive(Parser, Debug, Clone)]
pub struct SynonymRemoveArgs {
    /// Main term
    #[arg(value_name = "MAIN_TERM")]
    pub main_term: String,

    /// Synonyms to remove (all when omitted)
    #[arg(value_name = "SYNONYM")]
    pub synonyms: Vec<String>,

    /// Write the updated dictionary back to the synonym file
    #[arg(long)]
    pub save: bool,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Catalog file (JSON Lines)
    #[arg(value_name = "CATALOG_FILE")]
    pub catalog: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Skip the full-text tier
    #[arg(long)]
    pub no_full_text: bool,

    /// Do not expand synonyms
    #[arg(long)]
    pub no_synonyms: bool,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = GlaiveArgs::try_parse_from(["glaive", "synonyms", "list"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = GlaiveArgs::try_parse_from(["glaive", "-v", "synonyms", "list"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = GlaiveArgs::try_parse_from(["glaive", "-vv", "synonyms", "list"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args =
            GlaiveArgs::try_parse_from(["glaive", "--quiet", "-v", "synonyms", "list"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = GlaiveArgs::try_parse_from(["glaive", "--format", "json", "expand", "capacete"])
            .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }

    #[test]
    fn test_search_flags() {
        let args = GlaiveArgs::try_parse_from([
            "glaive",
            "search",
            "products.jsonl",
            "capacete azul",
            "--no-synonyms",
            "--limit",
            "5",
        ])
        .unwrap();

        match args.command {
            Command::Search(search) => {
                assert_eq!(search.query, "capacete azul");
                assert!(search.no_synonyms);
                assert!(!search.no_full_text);
                assert_eq!(search.limit, Some(5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_synonym_commands() {
        let args = GlaiveArgs::try_parse_from([
            "glaive", "synonyms", "remove", "capacete", "elmo", "--save",
        ])
        .unwrap();
        match args.command {
            Command::Synonyms(SynonymCommand::Remove(remove)) => {
                assert_eq!(remove.main_term, "capacete");
                assert_eq!(remove.synonyms, vec!["elmo"]);
                assert!(remove.save);
            }
            other => panic!("unexpected command {other:?}"),
        }

        assert!(GlaiveArgs::try_parse_from(["glaive", "synonyms", "add", "capacete"]).is_err());
    }
}
