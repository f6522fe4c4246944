// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `cacmex` CLI entry point: build, query, and evaluate search indexes.

mod cli;

use std::collections::HashSet;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cacmex::boolean::BooleanQuery;
use cacmex::config::{Config, Format};
use cacmex::harness;
use cacmex::index::build_index;
use cacmex::parse::{Cacm, Inex};
use cacmex::serialize;
use cacmex::tokenizer::load_stop_words;
use cacmex::vectorial::{CosineQuery, ProbabilisticQuery};
use cacmex::{IndexError, Result};

use cli::{Cli, Commands, FormatArg, ModelArg};

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Cacm => Format::Cacm,
            FormatArg::Inex => Format::Inex,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::BuildIndex {
            input,
            format,
            stop_words,
            jobs,
            output,
            config,
        } => build_index_cmd(input, format, stop_words, jobs, output, config),
        Commands::Boolean { index, expression } => boolean_cmd(&index, &expression),
        Commands::Tfidf { index, query } => vectorial_cmd(&index, &query, ModelArg::Tfidf),
        Commands::NormCount { index, query } => vectorial_cmd(&index, &query, ModelArg::NormCount),
        Commands::Probabilistic { index, query } => {
            vectorial_cmd(&index, &query, ModelArg::Probabilistic)
        }
        Commands::Eval {
            index,
            queries,
            judgements,
            iterations,
            model,
        } => eval_cmd(&index, &queries, &judgements, iterations, model),
    }
}

fn build_index_cmd(
    input: Vec<std::path::PathBuf>,
    format: Option<FormatArg>,
    stop_words: Option<std::path::PathBuf>,
    jobs: Option<usize>,
    output: Option<std::path::PathBuf>,
    config_path: Option<std::path::PathBuf>,
) -> Result<()> {
    let from_file = match &config_path {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };
    let from_flags = Config {
        shards: (!input.is_empty()).then_some(input),
        format: format.map(Format::from),
        stop_words_file: stop_words,
        jobs,
        output,
    };
    let config = from_file.merged_with(from_flags);

    let shards = config
        .shards
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| IndexError::usage("no input shards: pass --input or set it in --config"))?;
    let output = config
        .output
        .clone()
        .ok_or_else(|| IndexError::usage("no output path: pass --output or set it in --config"))?;
    let n = config.resolved_jobs();

    let stop_words: HashSet<String> = match &config.stop_words_file {
        Some(path) => load_stop_words(path)?,
        None => HashSet::new(),
    };

    let index = match config.format.unwrap_or(Format::Cacm) {
        Format::Cacm => build_index(&shards, &Cacm, stop_words, n)?,
        Format::Inex => build_index(&shards, &Inex, stop_words, n)?,
    };

    serialize::save(&index, &output)?;
    eprintln!(
        "built index: {} documents, {} terms -> {}",
        index.document_count(),
        index.stop_words().len(),
        output.display()
    );
    Ok(())
}

fn boolean_cmd(index_path: &std::path::Path, expression: &str) -> Result<()> {
    let index = serialize::load(index_path)?;
    let query = BooleanQuery::parse(expression)?;
    let mut ids: Vec<u32> = query.execute(&index).into_iter().map(|d| d.get()).collect();
    ids.sort_unstable();
    for id in ids {
        println!("{id}");
    }
    Ok(())
}

fn vectorial_cmd(index_path: &std::path::Path, query: &str, model: ModelArg) -> Result<()> {
    let index = serialize::load(index_path)?;
    let results = match model {
        ModelArg::Tfidf => CosineQuery::tfidf(query).execute(&index),
        ModelArg::NormCount => CosineQuery::norm_count(query).execute(&index),
        ModelArg::Probabilistic => ProbabilisticQuery::new(query).execute(&index),
    };
    for (doc_id, score) in results {
        println!("{}\t{:.6}", doc_id.get(), score);
    }
    Ok(())
}

fn eval_cmd(
    index_path: &std::path::Path,
    queries_path: &std::path::Path,
    judgements_path: &std::path::Path,
    iterations: u32,
    model: ModelArg,
) -> Result<()> {
    let index = serialize::load(index_path)?;
    let queries = harness::read_queries(queries_path)?;
    let judgements = harness::read_judgements(judgements_path)?;

    let curve = harness::recall_precision_curve(&queries, &judgements, &index, iterations, |idx, text| {
        match model {
            ModelArg::Tfidf => CosineQuery::tfidf(text).execute(idx),
            ModelArg::NormCount => CosineQuery::norm_count(text).execute(idx),
            ModelArg::Probabilistic => ProbabilisticQuery::new(text).execute(idx),
        }
    });

    println!("recall,precision");
    for point in curve {
        println!("{:.6},{:.6}", point.recall, point.precision);
    }
    Ok(())
}
