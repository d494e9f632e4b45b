//! CLI entry point: parses a taxonomy, a leaves list, and a cluster
//! membership matrix, runs the ParGenFS lift, and writes the result table
//! and serialized tree to disk.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pargenfs::config::{Config, DEFAULT_GAMMA, DEFAULT_LAMBDA, DEFAULT_THRESHOLD};
use pargenfs::output::{write_table, write_tree};
use pargenfs::parse::{cluster_column, parse_clusters, parse_leaves, parse_taxonomy};
use pargenfs::{lift, Result};

/// Lift a fuzzy cluster over a labeled taxonomy.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Taxonomy description in flat-view (*.fvtr) format.
    taxonomy_file: PathBuf,
    /// Taxonomy leaves, one name per line.
    leaves_file: PathBuf,
    /// Cluster membership matrix, one row per leaf.
    clusters_file: PathBuf,
    /// 0-based column index into the membership matrix.
    cluster_number: usize,

    /// Leaf memberships below this value are zeroed during truncation.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Leaf-membership penalty coefficient.
    #[arg(long, default_value_t = DEFAULT_GAMMA)]
    gamma: f64,
    /// Lift-cost coefficient applied to a node's cumulative gap importance.
    #[arg(long, default_value_t = DEFAULT_LAMBDA)]
    lambda: f64,
    /// Where to write the result table.
    #[arg(long, default_value = "table.csv")]
    table_out: PathBuf,
    /// Where to write the serialized annotated tree.
    #[arg(long, default_value = "taxonomy_tree_lifted.ete")]
    tree_out: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::new(cli.threshold, cli.gamma, cli.lambda, cli.cluster_number)?;

    log::info!("parsing taxonomy from {}", cli.taxonomy_file.display());
    let mut tree = parse_taxonomy(&cli.taxonomy_file)?;
    let leaf_names = parse_leaves(&cli.leaves_file)?;
    let matrix = parse_clusters(&cli.clusters_file)?;
    let cluster = cluster_column(&leaf_names, &matrix, config.cluster_number)?;

    let output = lift(&mut tree, &cluster, &config)?;

    write_table(&cli.table_out, &output.table)?;
    write_tree(&cli.tree_out, &output.tree)?;

    log::info!("table saved to {}", cli.table_out.display());
    log::info!("tree saved to {}", cli.tree_out.display());
    Ok(())
}
