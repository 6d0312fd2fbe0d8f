//! Building graphs from edge-list corpora.

pub use edge_list::{load_edge_list, parse_edge_list};
pub use sqlite::{load_sqlite, read_sqlite};

use crate::{
    error::Result,
    graph::Graph,
    types::{VId, MAX_VID},
};
use log::warn;
use std::convert::TryFrom;
use std::path::Path;

mod edge_list;
mod sqlite;

/// Options shared by every loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Whether edges are inserted in both directions.
    pub undirected: bool,
    /// Skip malformed records with a warning instead of aborting the load.
    pub lenient: bool,
    /// The largest accepted 0-indexed vertex id. Storage is dense, so this caps memory use.
    pub max_id: VId,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            undirected: true,
            lenient: false,
            max_id: MAX_VID,
        }
    }
}

/// The on-disk format of a graph corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Whitespace separated `src dst` lines, `%` comments.
    Text,
    /// An SQLite3 file with an `edges (src, dst)` table.
    Sqlite,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(Format::Text),
            "sqlite" => Ok(Format::Sqlite),
            _ => Err(format!("unknown graph format `{}`", s)),
        }
    }
}

/// Loads the graph stored at `path` in `format`.
pub fn load<P: AsRef<Path>>(path: P, format: Format, options: &LoadOptions) -> Result<Graph> {
    match format {
        Format::Text => load_edge_list(path, options),
        Format::Sqlite => load_sqlite(path, options),
    }
}

/// Converts a 1-indexed id to a vertex id no larger than `options.max_id`.
fn zero_indexed(id: u64, options: &LoadOptions) -> std::result::Result<VId, String> {
    if id == 0 {
        return Err(String::from("vertex ids are 1-indexed"));
    }
    match VId::try_from(id - 1) {
        Ok(v) if v <= options.max_id.min(MAX_VID) => Ok(v),
        _ => Err(format!("vertex id {} is out of range", id)),
    }
}

/// Adds the edge `(src, dst)` to `graph` unless it is a self-edge, which returns `false`.
fn add_record(graph: &mut Graph, src: VId, dst: VId) -> std::result::Result<bool, String> {
    if src == dst {
        return Ok(false);
    }
    graph.add_edge(src, dst).map_err(|e| e.to_string())?;
    Ok(true)
}

/// Applies the leniency policy to a malformed record.
fn reject(options: &LoadOptions, line: usize, reason: String) -> Result<()> {
    if options.lenient {
        warn!("skipping record {}: {}", line, reason);
        Ok(())
    } else {
        Err(crate::error::Error::Malformed { line, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<Format>(), Ok(Format::Text));
        assert_eq!("sqlite".parse::<Format>(), Ok(Format::Sqlite));
        assert!("csv".parse::<Format>().is_err());
    }

    #[test]
    fn test_zero_indexed() {
        let options = LoadOptions::default();
        assert_eq!(zero_indexed(1, &options), Ok(0));
        assert_eq!(zero_indexed(42, &options), Ok(41));
        assert!(zero_indexed(0, &options).is_err());
        assert!(zero_indexed(u64::MAX, &options).is_err());
        assert!(zero_indexed(10_000_000_000, &options).is_err());
    }

    #[test]
    fn test_zero_indexed_max_id() {
        let options = LoadOptions {
            max_id: 9,
            ..LoadOptions::default()
        };
        assert_eq!(zero_indexed(10, &options), Ok(9));
        assert!(zero_indexed(11, &options).is_err());
    }
}
