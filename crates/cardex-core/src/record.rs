//! Canonical character record produced by result normalization.

use serde::Serialize;

/// Name used when a result node carries no usable name.
pub const DEFAULT_NAME: &str = "Unnamed Character";

/// Description used when a result node carries no tagline or description.
pub const DEFAULT_DESCRIPTION: &str = "No description.";

/// Author used when a card path has no author segment.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Placeholder asset shown when a result node has no avatar URL.
pub const PLACEHOLDER_IMAGE: &str = "img/default-avatar.png";

/// A normalized, fully-typed search result independent of the remote API's
/// raw node shape.
///
/// Records are immutable once constructed; a result list is replaced
/// wholesale on each new search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardRecord {
    /// Full catalog path (`author/card-slug`) — identity and download key.
    pub path: String,
    /// Display name.
    pub name: String,
    /// Short description or tagline.
    pub description: String,
    /// Author, derived from the path's first segment.
    pub author: String,
    /// Topic tags, in catalog order (possibly empty).
    pub tags: Vec<String>,
    /// Avatar image URL, or the local placeholder path.
    pub image_url: String,
}
