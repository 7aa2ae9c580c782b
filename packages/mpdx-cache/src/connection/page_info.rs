//! See: https://relay.dev/graphql/connections.htm#sec-PageInfo

use super::edge::*;
use super::self_prelude::*;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_previous_page: bool,
    #[serde(default)]
    pub start_cursor: Option<Cursor>,
    #[serde(default)]
    pub end_cursor: Option<Cursor>,
}

impl PageInfo {
    /// Page info spanning the given edges, for responses that did not
    /// select `pageInfo`.
    pub fn spanning(edges: &[Edge]) -> Self {
        Self {
            has_next_page: false,
            has_previous_page: false,
            start_cursor: edges.first().and_then(|e| e.cursor.clone()),
            end_cursor: edges.last().and_then(|e| e.cursor.clone()),
        }
    }
}
