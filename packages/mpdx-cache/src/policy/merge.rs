//! Pagination merge policy for cached connections.
//!
//! Pages of one logical connection arrive one response at a time and must
//! land in the cache as a single ordered, de-duplicated edge list. The merge
//! is a pure function: no I/O, no failure path. Malformed input degrades to
//! a best-effort merge so the client keeps rendering.

use super::args::*;
use crate::connection::*;
use std::collections::HashSet;
use tracing::debug;

/// Merge an incoming page into the cached connection of the same
/// key-argument bucket, producing a new snapshot. The cached value is never
/// mutated in place.
///
/// Rules, in order:
/// - no cached connection: the incoming page is authoritative, whatever its
///   direction;
/// - empty incoming page: cached edges are kept, paging metadata is taken
///   from the incoming response;
/// - `after` cursor: incoming edges are appended; `before` cursor: incoming
///   edges are prepended; no cursor: the refetch replaces the edge list;
/// - an existing edge whose identity reappears in the incoming page is
///   dropped from its old position, the incoming occurrence wins at its new
///   one.
pub fn merge_page(
    existing: Option<&Connection>,
    incoming: &Connection,
    args: &FieldArgs,
) -> Connection {
    let existing = match existing {
        Some(existing) => existing,
        None => return incoming.clone(),
    };

    if incoming.edges.is_empty() {
        return Connection {
            edges: existing.edges.clone(),
            page_info: incoming.page_info.clone(),
            total_count: incoming.total_count.or(existing.total_count),
        };
    }

    let direction = args.direction();
    let edges = match direction {
        PageDirection::Forward => splice(&existing.edges, &incoming.edges, Splice::Append),
        PageDirection::Backward => splice(&existing.edges, &incoming.edges, Splice::Prepend),
        PageDirection::Initial => incoming.edges.clone(),
    };

    debug!(
        "merged {} cached and {} incoming edges into {} ({:?})",
        existing.edges.len(),
        incoming.edges.len(),
        edges.len(),
        direction,
    );

    Connection {
        edges,
        page_info: incoming.page_info.clone(),
        total_count: incoming.total_count.or(existing.total_count),
    }
}

enum Splice {
    Append,
    Prepend,
}

/// Concatenate in cursor order, dropping any cached edge whose identity
/// reappears in the incoming page. Identity-less edges cannot be matched up
/// and are kept positionally.
fn splice(existing: &[Edge], incoming: &[Edge], at: Splice) -> Vec<Edge> {
    let seen: HashSet<&str> = incoming.iter().filter_map(Edge::identity).collect();

    let kept = existing
        .iter()
        .filter(|edge| match edge.identity() {
            Some(id) => !seen.contains(id),
            None => true,
        })
        .cloned();

    match at {
        Splice::Append => kept.chain(incoming.iter().cloned()).collect(),
        Splice::Prepend => incoming.iter().cloned().chain(kept).collect(),
    }
}
