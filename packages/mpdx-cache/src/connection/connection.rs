//! Cached representation of one paginated list field.
//! See: https://relay.dev/graphql/connections.htm#sec-Connection-Types

use super::edge::*;
use super::page_info::*;
use super::self_prelude::*;

/// One paginated list field for one key-argument signature. Stored as an
/// immutable snapshot: merging never mutates a cached connection in place.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Connection {
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

impl Connection {
    pub fn new(edges: Vec<Edge>, page_info: PageInfo) -> Self {
        Self {
            edges,
            page_info,
            total_count: None,
        }
    }

    /// Read a connection out of an already-deserialized response object
    /// shaped per the relay convention (`edges` / `node` / `cursor` /
    /// `pageInfo` / `totalCount`).
    ///
    /// Malformed input is tolerated rather than rejected: edges without a
    /// cursor keep a `None` cursor, entries without a node are skipped, and
    /// a missing `pageInfo` is derived from the edge cursors.
    pub fn from_response(value: &serde_json::Value) -> Self {
        let edges: Vec<Edge> = value
            .get("edges")
            .and_then(|edges| edges.as_array())
            .map(|edges| {
                edges
                    .iter()
                    .filter_map(|edge| {
                        let node = edge.get("node")?;
                        let cursor = edge
                            .get("cursor")
                            .and_then(|cursor| cursor.as_str())
                            .map(str::to_string);
                        Some(Edge {
                            cursor,
                            node: NodeRef::from_value(node.clone()),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let page_info = value
            .get("pageInfo")
            .and_then(|info| serde_json::from_value(info.clone()).ok())
            .unwrap_or_else(|| PageInfo::spanning(&edges));

        let total_count = value.get("totalCount").and_then(|count| count.as_u64());

        Self {
            edges,
            page_info,
            total_count,
        }
    }

    /// Node references in edge order.
    pub fn nodes(&self) -> Vec<&NodeRef> {
        self.edges.iter().map(|edge| &edge.node).collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_response_reads_relay_shape() {
        let connection = Connection::from_response(&json!({
            "edges": [
                { "cursor": "a", "node": { "id": "Contact:1", "name": "Jane" } },
                { "cursor": "b", "node": { "id": "Contact:2", "name": "Arjun" } },
            ],
            "pageInfo": { "hasNextPage": true, "endCursor": "b" },
            "totalCount": 12,
        }));

        assert_eq!(connection.len(), 2);
        assert_eq!(connection.edges[0].identity(), Some("Contact:1"));
        assert!(connection.page_info.has_next_page);
        assert_eq!(connection.page_info.end_cursor.as_deref(), Some("b"));
        assert_eq!(connection.total_count, Some(12));
    }

    #[test]
    fn test_from_response_tolerates_missing_pieces() {
        // No cursors, no pageInfo, one entry without a node at all.
        let connection = Connection::from_response(&json!({
            "edges": [
                { "node": { "id": "Contact:1" } },
                { "cursor": "b" },
            ],
        }));

        assert_eq!(connection.len(), 1);
        assert_eq!(connection.edges[0].cursor, None);
        assert_eq!(connection.page_info, PageInfo::default());
        assert_eq!(connection.total_count, None);
    }
}
