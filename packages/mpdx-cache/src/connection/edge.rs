//! Edge types for cached GraphQL connections.
//! See: https://relay.dev/graphql/connections.htm#sec-Edge-Types

use super::self_prelude::*;

pub type Cursor = String;
pub type NodeId = String;

/// Reference to a node carried by an edge. The payload is the node's
/// already-deserialized field data.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NodeRef {
    /// Stable node identity, when the response selected one.
    pub id: Option<NodeId>,
    /// Node field data as returned by the API.
    pub data: serde_json::Value,
}

impl NodeRef {
    pub fn new(id: impl Into<NodeId>, data: serde_json::Value) -> Self {
        Self {
            id: Some(id.into()),
            data,
        }
    }

    /// Build a reference from a node object, reading its identity from the
    /// `id` field when selected.
    pub fn from_value(data: serde_json::Value) -> Self {
        let id = data
            .get("id")
            .and_then(|id| id.as_str())
            .map(str::to_string);
        Self { id, data }
    }
}

/// A (cursor, node) pair within a connection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    pub cursor: Option<Cursor>,
    pub node: NodeRef,
}

impl Edge {
    pub fn new(cursor: impl Into<Cursor>, node: NodeRef) -> Self {
        Self {
            cursor: Some(cursor.into()),
            node,
        }
    }

    /// Identity used to de-duplicate edges across merged pages: the node id
    /// when present, the cursor as a fallback. Edges with neither cannot be
    /// matched up and are merged positionally.
    pub fn identity(&self) -> Option<&str> {
        self.node.id.as_deref().or(self.cursor.as_deref())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identity() {
            Some(id) => write!(f, "{}", id),
            None => write!(f, "<anonymous edge>"),
        }
    }
}
