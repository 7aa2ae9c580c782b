use mpdx_cache::connection::{Connection, Edge, NodeRef, PageInfo};
use mpdx_cache::policy::merge_page;
use mpdx_cache::testing::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn identities(connection: &Connection) -> Vec<&str> {
    connection
        .edges
        .iter()
        .filter_map(Edge::identity)
        .collect()
}

#[test]
fn test_first_fetch_is_authoritative() {
    let incoming = contact_page(0..3, true);
    let merged = merge_page(None, &incoming, &forward_args(3, None));

    assert_eq!(merged, incoming);
}

#[test]
fn test_forward_merge_appends_without_duplicates() {
    let page_a = contact_page(0..3, true);
    let page_b = contact_page(3..6, false);

    let merged = merge_page(None, &page_a, &forward_args(3, None));
    let merged = merge_page(
        Some(&merged),
        &page_b,
        &forward_args(3, Some("contact-cursor-2")),
    );

    assert_eq!(
        identities(&merged),
        vec![
            "Contact:0",
            "Contact:1",
            "Contact:2",
            "Contact:3",
            "Contact:4",
            "Contact:5",
        ]
    );
    assert!(!merged.page_info.has_next_page);
}

#[test]
fn test_backward_merge_prepends_regardless_of_arrival_order() {
    // The later page of the list lands in cache first; the earlier page
    // then arrives via a `before` cursor.
    let page_b = contact_page(3..6, false);
    let page_a = contact_page(0..3, true);

    let merged = merge_page(None, &page_b, &forward_args(3, None));
    let merged = merge_page(
        Some(&merged),
        &page_a,
        &backward_args(3, Some("contact-cursor-3")),
    );

    assert_eq!(
        identities(&merged),
        vec![
            "Contact:0",
            "Contact:1",
            "Contact:2",
            "Contact:3",
            "Contact:4",
            "Contact:5",
        ]
    );
}

#[test]
fn test_remerged_node_wins_at_its_new_position() {
    let existing = contact_page(1..3, true);

    // Contact:2 comes back re-sorted to the tail with new data.
    let refreshed = Edge::new(
        "contact-cursor-9",
        NodeRef::from_value(json!({ "id": "Contact:2", "name": "Contact #2 (renamed)" })),
    );
    let incoming = Connection::new(vec![refreshed.clone()], PageInfo::default());

    let merged = merge_page(
        Some(&existing),
        &incoming,
        &forward_args(1, Some("contact-cursor-2")),
    );

    assert_eq!(identities(&merged), vec!["Contact:1", "Contact:2"]);
    assert_eq!(merged.edges[1], refreshed);
}

#[test]
fn test_empty_incoming_page_only_updates_page_info() {
    let existing = contact_page(0..3, true);

    let incoming = Connection::new(
        Vec::new(),
        PageInfo {
            has_next_page: false,
            ..existing.page_info.clone()
        },
    );

    let merged = merge_page(
        Some(&existing),
        &incoming,
        &forward_args(3, Some("contact-cursor-2")),
    );

    assert_eq!(merged.edges, existing.edges);
    assert!(!merged.page_info.has_next_page);
}

#[test]
fn test_cursorless_refetch_replaces_the_edge_list() {
    let existing = contact_page(0..5, false);
    let incoming = contact_page(2..4, false);

    let merged = merge_page(Some(&existing), &incoming, &forward_args(2, None));

    assert_eq!(identities(&merged), vec!["Contact:2", "Contact:3"]);
}

#[test]
fn test_total_count_is_retained_when_incoming_omits_it() {
    let mut existing = contact_page(0..2, true);
    existing.total_count = Some(120);
    let incoming = contact_page(2..4, true);

    let merged = merge_page(
        Some(&existing),
        &incoming,
        &forward_args(2, Some("contact-cursor-1")),
    );

    assert_eq!(merged.total_count, Some(120));
}

#[test]
fn test_edges_without_identity_are_merged_positionally() {
    // No node ids and no cursors anywhere: nothing to match on, so the
    // merge falls back to plain concatenation instead of raising.
    let anonymous = |name: &str| Edge {
        cursor: None,
        node: NodeRef {
            id: None,
            data: json!({ "name": name }),
        },
    };

    let existing = Connection::new(
        vec![anonymous("a"), anonymous("b")],
        PageInfo::default(),
    );
    let incoming = Connection::new(vec![anonymous("c")], PageInfo::default());

    let merged = merge_page(
        Some(&existing),
        &incoming,
        &forward_args(1, Some("opaque")),
    );

    assert_eq!(merged.len(), 3);
    assert_eq!(merged.edges[2].node.data, json!({ "name": "c" }));
}

#[test]
fn test_spec_scenario_forward_page_after_cursor() {
    let existing = Connection::new(
        vec![Edge::new("a", NodeRef::from_value(json!({ "id": "1" })))],
        PageInfo {
            has_next_page: true,
            end_cursor: Some("a".to_string()),
            ..PageInfo::default()
        },
    );
    let incoming = Connection::new(
        vec![Edge::new("b", NodeRef::from_value(json!({ "id": "2" })))],
        PageInfo {
            has_next_page: false,
            end_cursor: Some("b".to_string()),
            ..PageInfo::default()
        },
    );

    let merged = merge_page(Some(&existing), &incoming, &forward_args(1, Some("a")));

    assert_eq!(identities(&merged), vec!["1", "2"]);
    assert_eq!(merged.page_info.end_cursor.as_deref(), Some("b"));
}
