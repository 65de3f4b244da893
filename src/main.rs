//! ctrie CLI - Command line interface for compact_trie
//!
//! Loads words from the command line and/or a newline-separated file into a
//! compressed trie, then reports the stored words or the tree structure.

use clap::{Parser, Subcommand};
use compact_trie::Trie;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ctrie")]
#[command(about = "Build a compressed trie from words and inspect it")]
#[command(version)]
struct Cli {
    /// Newline-separated word list to load first ("-" reads stdin)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// List every stored word
    List {
        /// Words to insert after the input file
        words: Vec<String>,
    },

    /// Show the node structure
    Tree {
        /// Words to insert after the input file
        words: Vec<String>,
    },

    /// Show word, node and depth counts
    Stats {
        /// Words to insert after the input file
        words: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::List { words } => {
            let trie = build_trie(cli.input.as_deref(), words)?;
            let words = trie.words()?;
            match cli.format {
                OutputFormat::Json => output_json(&serde_json::json!({
                    "count": words.len(),
                    "words": words
                }))?,
                OutputFormat::Text => {
                    for word in &words {
                        println!("{}", word);
                    }
                }
            }
        }

        Commands::Tree { words } => {
            let trie = build_trie(cli.input.as_deref(), words)?;
            trie.validate()?;
            match cli.format {
                OutputFormat::Json => output_json(&serde_json::to_value(&trie)?)?,
                OutputFormat::Text => print!("{}", trie.render()),
            }
        }

        Commands::Stats { words } => {
            let trie = build_trie(cli.input.as_deref(), words)?;
            trie.validate()?;
            let stats = serde_json::json!({
                "words": trie.len(),
                "nodes": trie.node_count(),
                "depth": trie.depth()
            });
            match cli.format {
                OutputFormat::Json => output_json(&stats)?,
                OutputFormat::Text => {
                    println!("words: {}", trie.len());
                    println!("nodes: {}", trie.node_count());
                    println!("depth: {}", trie.depth());
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_trie(input: Option<&Path>, words: &[String]) -> anyhow::Result<Trie<char>> {
    let mut trie = Trie::new();

    if let Some(path) = input {
        let content = read_input(path)?;
        // Blank lines are separators, not empty words.
        for line in content.lines().filter(|l| !l.is_empty()) {
            trie.add_str(line)?;
        }
    }

    for word in words {
        trie.add_str(word)?;
    }

    tracing::debug!(words = trie.len(), nodes = trie.node_count(), "trie built");
    Ok(trie)
}

fn read_input(path: &Path) -> compact_trie::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn output_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
