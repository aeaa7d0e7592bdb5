//! Normalization of the heterogeneous catalog response into canonical records.

use cardex_core::record::{
    CardRecord, DEFAULT_DESCRIPTION, DEFAULT_NAME, PLACEHOLDER_IMAGE, UNKNOWN_AUTHOR,
};
use log::debug;
use serde_json::Value;

/// Extract the result node list from a search response body.
///
/// The catalog has been observed to place it at `nodes` or under
/// `data.nodes`; a body with neither is treated as zero results.
fn node_list(body: &Value) -> Option<&Vec<Value>> {
    body.get("nodes")
        .or_else(|| body.get("data").and_then(|d| d.get("nodes")))
        .and_then(Value::as_array)
}

/// Map a raw search response into an ordered sequence of [`CardRecord`]s.
///
/// Missing or empty node lists yield an empty sequence, never an error.
/// Nodes without a usable `fullPath` are skipped.
#[must_use]
pub fn normalize_response(body: &Value) -> Vec<CardRecord> {
    let Some(nodes) = node_list(body) else {
        debug!("search response carried no node list");
        return Vec::new();
    };
    nodes.iter().filter_map(normalize_node).collect()
}

fn normalize_node(node: &Value) -> Option<CardRecord> {
    let path = node
        .get("fullPath")
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())?;

    let name = node
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_NAME);

    let description = node
        .get("tagline")
        .or_else(|| node.get("description"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION);

    // Author is always derived from the path; the catalog guarantees no
    // dedicated author field.
    let author = match path.split_once('/') {
        Some((author, _)) if !author.is_empty() => author,
        _ => UNKNOWN_AUTHOR,
    };

    let tags = node
        .get("topics")
        .and_then(Value::as_array)
        .map(|topics| {
            topics
                .iter()
                .filter_map(Value::as_str)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let image_url = node
        .get("avatar_url")
        .or_else(|| node.get("avatar"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE);

    Some(CardRecord {
        path: path.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        author: author.to_owned(),
        tags,
        image_url: image_url.to_owned(),
    })
}
