extern crate mst_editor;

mod config;
mod export;

use clap::Parser;
use config::RunnerConfig;
use export::{ensure_dir, save, write_csv, write_visualization};
use mst_editor::analysis::{diff, WeightChange};
use mst_editor::{EditOutcome, EditStatus, Edge, Graph, MstEditor};
use std::error::Error;
use std::process::ExitCode;

fn demonstration_graph() -> Result<Graph, mst_editor::GraphError> {
    Graph::with_edges(
        6,
        [
            (0, 1, 4),
            (0, 2, 3),
            (1, 2, 1),
            (1, 3, 2),
            (2, 3, 4),
            (3, 4, 2),
            (4, 5, 6),
            (3, 5, 3),
        ],
    )
}

fn print_tree(edges: &[Edge]) {
    println!("MST Edges ({} edges):", edges.len());
    for edge in edges {
        println!("  {edge}");
    }
    println!("Total weight: {}", mst_editor::total_weight(edges));
}

fn print_outcome(outcome: &EditOutcome) {
    if let Some(partition) = &outcome.components {
        println!("Components after removal:");
        for (i, component) in partition.components().iter().enumerate() {
            println!("  Component {}: {component:?}", i + 1);
        }
    }
    match outcome.status {
        EditStatus::Reconnected(edge) => println!("Found replacement edge: {edge}"),
        EditStatus::Disconnected => {
            println!("No replacement edge found! Graph remains disconnected.")
        }
        EditStatus::NotFound => println!("Edge not found in MST!"),
        EditStatus::NoSplit => println!("Removal did not split the tree."),
    }
}

fn print_analysis(before: &[Edge], after: &[Edge]) {
    println!("\n--- RECONNECTION ANALYSIS ---");
    let swap = diff(before, after);
    if let Some(added) = swap.added {
        println!("Edge added to reconnect tree: {added}");
    }

    let before_weight = mst_editor::total_weight(before);
    let after_weight = mst_editor::total_weight(after);
    println!("MST weight: {before_weight} -> {after_weight}");
    match WeightChange::between(before_weight, after_weight) {
        WeightChange::Unchanged => println!("Weight unchanged - optimal replacement found!"),
        WeightChange::Increased => {
            println!("Weight increased - expected when removing a critical edge")
        }
        WeightChange::Decreased => println!("Weight decreased - the original tree was not minimal!"),
    }
    if let (Some(removed), Some(added)) = (swap.removed, swap.added) {
        println!("Edge swap: {removed} -> {added}");
    }
}

fn run(config: &RunnerConfig) -> Result<(), Box<dyn Error>> {
    ensure_dir(&config.results_dir)?;
    let dir = &config.results_dir;

    let graph = demonstration_graph()?;
    println!("=== Original Graph ===");
    print!("{graph}");

    let mut editor = MstEditor::new(&graph);
    println!("\n=== MST Before Edge Removal ===");
    print_tree(editor.edges());
    save(&dir.join("original_mst.csv"), |out| {
        write_csv(out, editor.edges())
    })?;
    save(&dir.join("visualization_original.txt"), |out| {
        write_visualization(out, editor.edges(), graph.vertex_count())
    })?;

    let (src, dest) = config.edge_to_remove();
    let Some(edge) = editor.find_edge(src, dest) else {
        log::error!("Edge {src}-{dest} not found in MST");
        return Err(format!("edge {src}-{dest} is not a tree edge").into());
    };

    println!("\n=== Removing edge {edge} ===");
    let outcome = editor.remove_and_reconnect(&edge);
    print_outcome(&outcome);

    println!("\n=== New MST After Reconnection ===");
    print_tree(&outcome.edges);
    save(&dir.join("updated_mst.csv"), |out| {
        write_csv(out, &outcome.edges)
    })?;
    save(&dir.join("visualization_updated.txt"), |out| {
        write_visualization(out, &outcome.edges, graph.vertex_count())
    })?;

    print_analysis(editor.original_edges(), &outcome.edges);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunnerConfig::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
