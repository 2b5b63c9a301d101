//! CLI entry point for the `gwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_walk::cli::commands;
use graph_walk::tree::TreeOrder;
use graph_walk::types::DEFAULT_MAX_RESULTS;
use graph_walk::WalkError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "gwalk: traverse graphs, binary trees and recursive computations"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency list of an edge-list file
    Show {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Breadth-first traversal from a start vertex
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting vertex
        start: String,
        /// Maximum number of hops from the start
        #[arg(long, default_value_t = u32::MAX)]
        max_depth: u32,
        /// Maximum vertices to return
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,
    },
    /// Depth-first traversal from a start vertex
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting vertex
        start: String,
    },
    /// List the connected components of a graph
    Components {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Traverse a binary tree given in level order, e.g. "4,2,7,1,3,6,9"
    Tree {
        /// Comma-separated node values; "null" marks a missing child
        values: String,
        /// Order: pre, in, post, level, or all
        #[arg(long, default_value = "all")]
        order: String,
    },
    /// Compute a Fibonacci number with the memoized and bottom-up variants
    Fib {
        /// Index into the sequence
        n: u32,
    },
    /// Enumerate all subsets of a comma-separated list
    Subsets {
        /// Comma-separated integers, e.g. "1,2,3"
        values: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Show { file } => commands::cmd_show(&file, json),
        Commands::Bfs {
            file,
            start,
            max_depth,
            max_results,
        } => commands::cmd_bfs(&file, &start, max_depth, max_results, json),
        Commands::Dfs { file, start } => commands::cmd_dfs(&file, &start, json),
        Commands::Components { file } => commands::cmd_components(&file, json),
        Commands::Tree { values, order } => {
            let order = if order == "all" {
                None
            } else {
                match TreeOrder::from_name(&order) {
                    Some(o) => Some(o),
                    None => {
                        eprintln!("Invalid order: {}", order);
                        process::exit(3);
                    }
                }
            };
            commands::cmd_tree(&values, order, json)
        }
        Commands::Fib { n } => commands::cmd_fib(n, json),
        Commands::Subsets { values } => commands::cmd_subsets(&values, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            WalkError::Io(_) => 1,
            WalkError::Parse { .. } | WalkError::InvalidTree(_) => 2,
            WalkError::InvalidArgument(_) => 3,
            WalkError::VertexNotFound(_) => 4,
        };
        process::exit(code);
    }
}
