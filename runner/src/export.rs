use mst_editor::{total_weight, Edge};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Writes `source,destination,weight` rows, header first.
pub fn write_csv<W: Write>(out: &mut W, edges: &[Edge]) -> io::Result<()> {
    writeln!(out, "source,destination,weight")?;
    for edge in edges {
        writeln!(out, "{},{},{}", edge.a, edge.b, edge.weight)?;
    }
    Ok(())
}

/// Writes a plain-text drawing of `edges` over `vertex_count` vertices.
pub fn write_visualization<W: Write>(
    out: &mut W,
    edges: &[Edge],
    vertex_count: usize,
) -> io::Result<()> {
    writeln!(out, "Graph Visualization:")?;
    writeln!(out, "Vertices: 0 to {}", vertex_count.saturating_sub(1))?;
    writeln!(out, "\nEdges:")?;
    for edge in edges {
        writeln!(out, "{} --- {} --- {}", edge.a, edge.weight, edge.b)?;
    }
    writeln!(out, "\nTotal weight: {}", total_weight(edges))?;
    Ok(())
}

pub fn ensure_dir(dir: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Creates `path` and fills it with `write`.
pub fn save<F>(path: &Path, write: F) -> Result<(), ExportError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let wrap = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(wrap)?);
    write(&mut out).map_err(wrap)?;
    out.flush().map_err(wrap)?;
    log::info!("Saved {}", path.display());
    Ok(())
}
