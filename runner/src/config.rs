use clap::Parser;
use mst_editor::Vertex;
use std::path::PathBuf;

const DEFAULT_EDGE_TO_REMOVE: (Vertex, Vertex) = (1, 2);

/// Settings for one demonstration run.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "runner")]
#[command(about = "Builds a minimum spanning tree, removes one edge and reconnects it")]
pub struct RunnerConfig {
    /// First endpoint of the tree edge to remove
    #[arg(requires = "dest")]
    src: Option<Vertex>,

    /// Second endpoint of the tree edge to remove
    #[arg(requires = "src")]
    dest: Option<Vertex>,

    /// Directory for CSV and visualization output
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,
}

impl RunnerConfig {
    /// The edge given on the command line, or `1 2` when none was.
    pub fn edge_to_remove(&self) -> (Vertex, Vertex) {
        match (self.src, self.dest) {
            (Some(src), Some(dest)) => (src, dest),
            _ => DEFAULT_EDGE_TO_REMOVE,
        }
    }
}
