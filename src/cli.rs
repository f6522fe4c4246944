// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot CLI subcommands driving the retrieval engine. No REPL, no line
//! editing, no command history — those remain the out-of-scope interactive
//! shell this core does not carry.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cacmex",
    about = "Boolean and vectorial search over CACM/INEX document collections",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an index from one or more shard files
    BuildIndex {
        /// Shard file paths to index
        #[arg(long = "input", num_args = 1..)]
        input: Vec<PathBuf>,

        /// Document format of the input shards
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Stop-word file: one lowercased word per line
        #[arg(long)]
        stop_words: Option<PathBuf>,

        /// Number of worker threads for the map phase (0 = all cores)
        #[arg(long)]
        jobs: Option<usize>,

        /// Where to write the built index
        #[arg(long)]
        output: Option<PathBuf>,

        /// TOML config file providing defaults; any flag above overrides it
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Evaluate a boolean expression against a built index
    Boolean {
        #[arg(long)]
        index: PathBuf,
        expression: String,
    },

    /// Rank documents by tf-idf cosine similarity to a query
    Tfidf {
        #[arg(long)]
        index: PathBuf,
        query: String,
    },

    /// Rank documents by normalized-term-frequency cosine similarity
    NormCount {
        #[arg(long)]
        index: PathBuf,
        query: String,
    },

    /// Rank documents with the BIR-style probabilistic scorer
    Probabilistic {
        #[arg(long)]
        index: PathBuf,
        query: String,
    },

    /// Run the recall/precision evaluation harness over a labelled query set
    Eval {
        #[arg(long)]
        index: PathBuf,
        #[arg(long)]
        queries: PathBuf,
        #[arg(long)]
        judgements: PathBuf,
        #[arg(long, default_value = "100")]
        iterations: u32,
        /// Which ranking model to evaluate
        #[arg(long, value_enum, default_value = "tfidf")]
        model: ModelArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    Cacm,
    Inex,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum ModelArg {
    Tfidf,
    NormCount,
    Probabilistic,
}
