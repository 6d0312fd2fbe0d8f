use super::{add_record, reject, zero_indexed, LoadOptions};
use crate::{error::Result, graph::Graph, types::VId};
use log::info;
use rusqlite::{params, Connection, OpenFlags};
use std::convert::TryFrom;
use std::path::Path;

/// Reads the graph stored in the SQLite3 file `path`.
///
/// The SQLite3 file must have the following schema:
///
/// ```sql
/// CREATE TABLE edges (src INT, dst INT);
/// -- optional
/// CREATE TABLE vertices (vid INT, label TEXT);
/// ```
///
/// Ids are 1-indexed like the edge-list text format.
pub fn load_sqlite<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Graph> {
    info!("loading {}", path.as_ref().display());
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    read_sqlite(&conn, options)
}

/// Builds a graph from the `edges` and optional `vertices` tables of `conn`.
///
/// Edges are read first so the graph source is the source of the first edge row.
pub fn read_sqlite(conn: &Connection, options: &LoadOptions) -> Result<Graph> {
    let mut graph = Graph::new(options.undirected);
    let mut edges_stmt = conn.prepare("SELECT src, dst FROM edges")?;
    let edges =
        edges_stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;
    for (i, edge) in edges.enumerate() {
        let (src, dst) = edge?;
        let record = match (convert(src, options), convert(dst, options)) {
            (Ok(src), Ok(dst)) => add_record(&mut graph, src, dst),
            (Err(reason), _) | (_, Err(reason)) => Err(reason),
        };
        if let Err(reason) = record {
            reject(options, i + 1, reason)?;
        }
    }
    if has_table(conn, "vertices")? {
        let mut vertices_stmt = conn.prepare("SELECT vid, label FROM vertices")?;
        let vertices = vertices_stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;
        for (i, vertex) in vertices.enumerate() {
            let (vid, label) = vertex?;
            let record = convert(vid, options)
                .and_then(|v| graph.add_labeled_vertex(v, label).map_err(|e| e.to_string()));
            if let Err(reason) = record {
                reject(options, i + 1, reason)?;
            }
        }
    }
    info!(
        "loaded {} vertices and {} edges",
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

fn convert(id: i64, options: &LoadOptions) -> std::result::Result<VId, String> {
    let id = u64::try_from(id).map_err(|_| format!("vertex id {} is negative", id))?;
    zero_indexed(id, options)
}

fn has_table(conn: &Connection, name: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        params![name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
