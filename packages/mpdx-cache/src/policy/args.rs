//! Call arguments of a paginated field fetch.
//! See: https://relay.dev/graphql/connections.htm#sec-Arguments

use super::self_prelude::*;
use lazy_static::lazy_static;
use std::collections::HashSet;

pub const PAGE_ARG_FIRST: &str = "first";
pub const PAGE_ARG_AFTER: &str = "after";
pub const PAGE_ARG_LAST: &str = "last";
pub const PAGE_ARG_BEFORE: &str = "before";

lazy_static! {
    /// Arguments that drive pagination itself. They never discriminate
    /// between logical connections.
    pub static ref PAGINATION_ARGS: HashSet<&'static str> = HashSet::from_iter([
        PAGE_ARG_FIRST,
        PAGE_ARG_AFTER,
        PAGE_ARG_LAST,
        PAGE_ARG_BEFORE,
    ]);
}

/// Arguments of a single field fetch, in call order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldArgs(pub IndexMap<String, serde_json::Value>);

impl FieldArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.0.insert(name.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.iter()
    }

    pub fn is_pagination_arg(name: &str) -> bool {
        PAGINATION_ARGS.contains(name)
    }

    pub fn first(&self) -> Option<u64> {
        self.get(PAGE_ARG_FIRST).and_then(|v| v.as_u64())
    }

    pub fn after(&self) -> Option<&str> {
        self.get(PAGE_ARG_AFTER).and_then(|v| v.as_str())
    }

    pub fn last(&self) -> Option<u64> {
        self.get(PAGE_ARG_LAST).and_then(|v| v.as_u64())
    }

    pub fn before(&self) -> Option<&str> {
        self.get(PAGE_ARG_BEFORE).and_then(|v| v.as_str())
    }

    /// Direction of the fetch, keyed on the cursor arguments rather than
    /// arrival order so that merge outcomes are independent of response
    /// scheduling.
    pub fn direction(&self) -> PageDirection {
        if self.after().is_some() {
            PageDirection::Forward
        } else if self.before().is_some() {
            PageDirection::Backward
        } else {
            PageDirection::Initial
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for FieldArgs {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl FromIterator<(String, serde_json::Value)> for FieldArgs {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Direction of a page fetch, derived from its cursor arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageDirection {
    /// Fetched with an `after` cursor.
    Forward,
    /// Fetched with a `before` cursor.
    Backward,
    /// No cursor present. The response stands on its own.
    Initial,
}
