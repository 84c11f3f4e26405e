// SPDX-License-Identifier: Apache-2.0
//! sema CLI entrypoint.
//!
//! Loads the two WordNet-format CSV tables (synsets and hypernyms), builds a
//! validated taxonomy, and answers word-level queries:
//!
//! ```text
//! sema distance --synsets synsets.csv --hypernyms hypernyms.csv cat dog
//! sema ancestor --synsets synsets.csv --hypernyms hypernyms.csv cat dog
//! sema outcast  --synsets synsets.csv --hypernyms hypernyms.csv cat dog oak
//! ```
//!
//! Exits `0` on success; malformed tables, unknown words, and structural
//! validation failures exit non-zero with a contextual error chain.
#![deny(rust_2018_idioms)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use sema_core::Digraph;
use sema_lexicon::{Lexicon, Synset, Taxonomy};

#[derive(Parser, Debug)]
#[command(name = "sema", version, about = "Semantic distance over a hypernym taxonomy")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

/// Paths to the two source tables, shared by every subcommand.
#[derive(Args, Debug)]
struct Tables {
    /// Synsets table: one `id,words,gloss` row per synset.
    #[arg(long, value_name = "FILE")]
    synsets: PathBuf,
    /// Hypernyms table: one `id,hypernym_id,...` row per synset with hypernyms.
    #[arg(long, value_name = "FILE")]
    hypernyms: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest ancestral path length between two words.
    Distance {
        #[command(flatten)]
        tables: Tables,
        /// First word.
        word_a: String,
        /// Second word.
        word_b: String,
    },
    /// The synset that is the words' common ancestor on a shortest ancestral path.
    Ancestor {
        #[command(flatten)]
        tables: Tables,
        /// First word.
        word_a: String,
        /// Second word.
        word_b: String,
    },
    /// The word in the list semantically farthest from the rest.
    Outcast {
        #[command(flatten)]
        tables: Tables,
        /// Words to compare; the outcast maximizes total distance to the others.
        #[arg(required = true, num_args = 2..)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Distance {
            tables,
            word_a,
            word_b,
        } => {
            let taxonomy = load_taxonomy(&tables)?;
            let distance = taxonomy
                .distance(&word_a, &word_b)
                .with_context(|| format!("distance({word_a}, {word_b})"))?;
            println!("{distance}");
        }
        Command::Ancestor {
            tables,
            word_a,
            word_b,
        } => {
            let taxonomy = load_taxonomy(&tables)?;
            let ancestor = taxonomy
                .common_ancestor(&word_a, &word_b)
                .with_context(|| format!("ancestor({word_a}, {word_b})"))?;
            println!("{}", ancestor.label());
        }
        Command::Outcast { tables, words } => {
            let taxonomy = load_taxonomy(&tables)?;
            let outcast = taxonomy.outcast(&words).context("outcast")?;
            println!("{outcast}");
        }
    }
    Ok(())
}

fn load_taxonomy(tables: &Tables) -> Result<Taxonomy> {
    let synsets = load_synsets(&tables.synsets)
        .with_context(|| format!("loading synsets from {}", tables.synsets.display()))?;
    let vertex_count = synsets.len();
    let edges = load_hypernyms(&tables.hypernyms)
        .with_context(|| format!("loading hypernyms from {}", tables.hypernyms.display()))?;
    let lexicon = Lexicon::new(synsets);
    let graph = Digraph::new(vertex_count, edges).context("building hypernym graph")?;
    Taxonomy::new(lexicon, graph).context("validating hypernym graph")
}

/// Parses `id,words,gloss` rows. Ids must be dense and in file order, since
/// they double as graph vertex ids. The gloss keeps any commas it contains.
fn load_synsets(path: &Path) -> Result<Vec<Synset>> {
    let text = fs::read_to_string(path)?;
    let mut synsets = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let mut fields = line.splitn(3, ',');
        let id: usize = fields
            .next()
            .with_context(|| format!("line {}: missing id field", line_no + 1))?
            .parse()
            .with_context(|| format!("line {}: bad synset id", line_no + 1))?;
        if id != synsets.len() {
            bail!(
                "line {}: synset id {id} out of order (expected {})",
                line_no + 1,
                synsets.len()
            );
        }
        let words = fields
            .next()
            .with_context(|| format!("line {}: missing words field", line_no + 1))?;
        let gloss = fields.next().unwrap_or_default();
        synsets.push(Synset {
            words: words.split(' ').map(ToString::to_string).collect(),
            gloss: gloss.to_string(),
        });
    }
    Ok(synsets)
}

/// Parses `id,hypernym_id,...` rows into directed edges.
fn load_hypernyms(path: &Path) -> Result<Vec<(usize, usize)>> {
    let text = fs::read_to_string(path)?;
    let mut edges = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let from: usize = fields
            .next()
            .with_context(|| format!("line {}: missing synset id", line_no + 1))?
            .parse()
            .with_context(|| format!("line {}: bad synset id", line_no + 1))?;
        for field in fields {
            let to: usize = field
                .parse()
                .with_context(|| format!("line {}: bad hypernym id", line_no + 1))?;
            edges.push((from, to));
        }
    }
    Ok(edges)
}
