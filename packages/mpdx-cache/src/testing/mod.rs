//! Fixtures for exercising the cache against donor-CRM shaped data.

use crate::cache::EntityKey;
use crate::connection::{Connection, Edge, NodeRef, PageInfo};
use crate::policy::{FieldArgs, FieldPolicies, KeyArgsRule};
use serde_json::json;
use std::ops::Range;

pub fn account_list() -> EntityKey {
    EntityKey::new("AccountList", "acct-1")
}

pub fn contact_edge(n: u32) -> Edge {
    Edge::new(
        format!("contact-cursor-{n}"),
        NodeRef::from_value(json!({
            "id": format!("Contact:{n}"),
            "name": format!("Contact #{n}"),
            "status": "Partner - Financial",
        })),
    )
}

pub fn donation_edge(n: u32) -> Edge {
    Edge::new(
        format!("donation-cursor-{n}"),
        NodeRef::from_value(json!({
            "id": format!("Donation:{n}"),
            "amount": { "amount": 100 + n, "currency": "USD" },
            "donationDate": format!("2023-01-{:02}", n % 28 + 1),
        })),
    )
}

/// A page of contact edges covering `range`, with page info spanning the
/// page's own cursors.
pub fn contact_page(range: Range<u32>, has_next_page: bool) -> Connection {
    let edges: Vec<Edge> = range.map(contact_edge).collect();
    let page_info = PageInfo {
        has_next_page,
        ..PageInfo::spanning(&edges)
    };
    Connection::new(edges, page_info)
}

pub fn forward_args(first: u64, after: Option<&str>) -> FieldArgs {
    let mut args = FieldArgs::new();
    args.insert("first", json!(first));
    if let Some(after) = after {
        args.insert("after", json!(after));
    }
    args
}

pub fn backward_args(last: u64, before: Option<&str>) -> FieldArgs {
    let mut args = FieldArgs::new();
    args.insert("last", json!(last));
    if let Some(before) = before {
        args.insert("before", json!(before));
    }
    args
}

pub fn new_test_policies() -> FieldPolicies {
    let mut builder = FieldPolicies::builder();
    builder.define_field("contacts", KeyArgsRule::default());
    builder.define_field(
        "donations",
        KeyArgsRule::Explicit(vec!["designationAccountId".to_string()]),
    );
    builder.finish().unwrap()
}
