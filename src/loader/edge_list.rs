use super::{add_record, reject, zero_indexed, LoadOptions};
use crate::{error::Result, graph::Graph, types::VId};
use itertools::Itertools;
use log::{debug, info};
use memmap::Mmap;
use pest::Parser;
use pest_derive::Parser;
use std::fs::File;
use std::path::Path;

#[derive(Parser)]
#[grammar = "loader/edge_list.pest"]
struct EdgeListParser;

/// Reads the edge list stored in `path`.
///
/// The file is memory mapped and must be valid UTF-8.
pub fn load_edge_list<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Graph> {
    info!("loading {}", path.as_ref().display());
    let file = File::open(path.as_ref())?;
    if file.metadata()?.len() == 0 {
        return parse_edge_list("", options);
    }
    let mmap = unsafe { Mmap::map(&file)? };
    let text = std::str::from_utf8(&mmap)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    parse_edge_list(text, options)
}

/// Builds a graph from edge-list text.
///
/// Every line is either blank, a comment starting with `%`, or `src dst` followed by optional
/// columns which are ignored. Ids are 1-indexed and stored 0-indexed. Self-edges are dropped.
pub fn parse_edge_list(text: &str, options: &LoadOptions) -> Result<Graph> {
    let mut graph = Graph::new(options.undirected);
    let mut num_self_edges = 0;
    for (i, line) in text.lines().enumerate() {
        match parse_line(line, options) {
            Ok(Some((src, dst))) => match add_record(&mut graph, src, dst) {
                Ok(true) => {}
                Ok(false) => num_self_edges += 1,
                Err(reason) => reject(options, i + 1, reason)?,
            },
            Ok(None) => {}
            Err(reason) => reject(options, i + 1, reason)?,
        }
    }
    if num_self_edges > 0 {
        debug!("dropped {} self-edges", num_self_edges);
    }
    info!(
        "loaded {} vertices and {} edges",
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

fn parse_line(
    line: &str,
    options: &LoadOptions,
) -> std::result::Result<Option<(VId, VId)>, String> {
    let pairs = EdgeListParser::parse(Rule::line, line)
        .map_err(|_| format!("expected `src dst`, found {:?}", line))?;
    match pairs.flatten().find(|p| p.as_rule() == Rule::edge) {
        Some(edge) => {
            let (src, dst) = edge
                .into_inner()
                .filter(|p| p.as_rule() == Rule::id)
                .map(|p| p.as_str())
                .collect_tuple()
                .ok_or_else(|| format!("expected two vertex ids, found {:?}", line))?;
            Ok(Some((parse_id(src, options)?, parse_id(dst, options)?)))
        }
        None => Ok(None),
    }
}

fn parse_id(token: &str, options: &LoadOptions) -> std::result::Result<VId, String> {
    let id = token
        .parse::<u64>()
        .map_err(|_| format!("vertex id {} is out of range", token))?;
    zero_indexed(id, options)
}
