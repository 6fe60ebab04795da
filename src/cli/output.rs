//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GlaiveArgs, OutputFormat};
use crate::error::Result;
use crate::search::SearchResults;
use crate::synonym::SynonymMap;

/// Result structure for term expansion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpansionResult {
    pub term: String,
    pub expansions: Vec<String>,
}

/// Result structure for phrase expansion.
#[derive(Debug, Serialize, Deserialize)]
pub struct PhraseResult {
    pub phrase: String,
    pub expansion: String,
}

/// Result structure for boolean query building.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResult {
    pub phrase: String,
    pub boolean_query: String,
}

/// Result structure for synonym listing and edits.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynonymListResult {
    pub entries: SynonymMap,
    pub saved_to: Option<String>,
}

/// Output a command result in the selected format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &GlaiveArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output search results in the selected format.
pub fn output_search_results(results: &SearchResults, args: &GlaiveArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_search_results_human(results, args);
            Ok(())
        }
        OutputFormat::Json => output_json(results, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &GlaiveArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {}", format_value(&val));
            }
        }
        other => println!("{}", format_value(&other)),
    }
    Ok(())
}

fn output_search_results_human(results: &SearchResults, args: &GlaiveArgs) {
    println!("Search Results:");
    println!("═══════════════");

    for (i, hit) in results.hits.iter().enumerate() {
        println!();
        println!("Result {}: (id: {}, tier: {:?})", i + 1, hit.record.id, hit.tier);
        println!("─────────────");
        for (field_name, text) in &hit.record.fields {
            println!("{field_name}: {text}");
        }
    }

    println!();
    println!("Total hits: {}", results.len());

    if args.verbosity() > 1 {
        if let Some(query) = &results.boolean_query {
            println!("Boolean query: {query}");
        }
        println!("Fallback used: {}", results.fallback_used);
    }
    if let Some(error) = &results.full_text_error {
        println!("Full-text search failed: {error}");
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &GlaiveArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(k, v)| format!("\n  {k}: {}", format_value(v)))
            .collect::<String>(),
        other => other.to_string(),
    }
}
