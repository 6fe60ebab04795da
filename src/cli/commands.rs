//! Command implementations for the Glaive CLI.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::MemoryCatalog;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EngineConfig;
use crate::error::{GlaiveError, Result};
use crate::expansion::{PhraseExpander, SynonymTermExpander, TermExpander};
use crate::query::{BooleanQueryBuilder, RequiredPrefixSyntax, SanitizingSyntax};
use crate::search::SearchOrchestrator;
use crate::synonym::SynonymStore;

/// Execute a CLI command.
pub fn execute_command(args: GlaiveArgs) -> Result<()> {
    let config = load_config(&args)?;
    let store = Arc::new(config.synonym_store());

    match &args.command {
        Command::Expand(expand_args) => expand_term(expand_args, &store, &args),
        Command::Phrase(phrase_args) => expand_phrase(phrase_args, &store, &args),
        Command::Query(query_args) => build_query(query_args, &store, &args),
        Command::Synonyms(synonym_command) => {
            edit_synonyms(synonym_command, &store, config.synonyms.path.as_deref(), &args)
        }
        Command::Search(search_args) => search_catalog(search_args, store, config, &args),
    }
}

/// Resolve the engine configuration from the command line.
fn load_config(args: &GlaiveArgs) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(path) = &args.synonyms {
        config.synonyms.path = Some(path.clone());
    }
    Ok(config)
}

fn expand_term(args: &ExpandArgs, store: &Arc<SynonymStore>, cli_args: &GlaiveArgs) -> Result<()> {
    let expander = SynonymTermExpander::new(store.clone());
    let expanded = expander.expand_term(&args.term);
    if !expanded.has_synonyms() {
        log::info!("No synonyms configured for '{}'", expanded.original());
    }

    output_result(
        "Term expansion",
        &ExpansionResult {
            term: expanded.original().to_string(),
            expansions: expanded.into_vec(),
        },
        cli_args,
    )
}

fn expand_phrase(
    args: &PhraseArgs,
    store: &Arc<SynonymStore>,
    cli_args: &GlaiveArgs,
) -> Result<()> {
    let expander = PhraseExpander::new(Arc::new(SynonymTermExpander::new(store.clone())));

    output_result(
        "Phrase expansion",
        &PhraseResult {
            phrase: args.phrase.clone(),
            expansion: expander.expand_phrase(&args.phrase),
        },
        cli_args,
    )
}

fn build_query(args: &QueryArgs, store: &Arc<SynonymStore>, cli_args: &GlaiveArgs) -> Result<()> {
    let mut builder = BooleanQueryBuilder::new(Arc::new(SynonymTermExpander::new(store.clone())));
    if args.sanitize {
        builder = builder.with_syntax(Arc::new(SanitizingSyntax::new(RequiredPrefixSyntax)));
    }

    let boolean_query = if args.literal {
        builder.build_literal(&args.phrase)
    } else {
        builder.build(&args.phrase)
    };

    output_result(
        "Boolean query",
        &QueryResult {
            phrase: args.phrase.clone(),
            boolean_query,
        },
        cli_args,
    )
}

fn edit_synonyms(
    command: &SynonymCommand,
    store: &Arc<SynonymStore>,
    path: Option<&Path>,
    cli_args: &GlaiveArgs,
) -> Result<()> {
    let save = match command {
        SynonymCommand::List => false,
        SynonymCommand::Add(add) => {
            store.add(&add.main_term, &add.synonyms);
            add.save
        }
        SynonymCommand::Remove(remove) => {
            if remove.synonyms.is_empty() {
                store.remove_entry(&remove.main_term);
            } else {
                store.remove_synonyms(&remove.main_term, &remove.synonyms);
            }
            remove.save
        }
    };

    let saved_to = if save {
        let path = path.ok_or_else(|| {
            GlaiveError::invalid_argument("--save requires a synonym file (--synonyms or config)")
        })?;
        store.save_to_file(path)?;
        Some(path.display().to_string())
    } else {
        None
    };

    output_result(
        "Synonym dictionary",
        &SynonymListResult {
            entries: store.get_all(),
            saved_to,
        },
        cli_args,
    )
}

fn search_catalog(
    args: &SearchArgs,
    store: Arc<SynonymStore>,
    config: EngineConfig,
    cli_args: &GlaiveArgs,
) -> Result<()> {
    let catalog = Arc::new(MemoryCatalog::from_jsonl(&args.catalog)?);

    let mut search_config = config.search;
    if let Some(limit) = args.limit {
        search_config.limit = limit;
    }

    let orchestrator = SearchOrchestrator::new(catalog, store, search_config);
    let results = orchestrator.search(&args.query, !args.no_full_text, !args.no_synonyms)?;
    output_search_results(&results, cli_args)
}
