//! Search options: raw user input and its canonical, fully-resolved form.

use serde::{Deserialize, Serialize};

use crate::flags::{FlagSet, FLAG_TABLE};
use crate::sort::SortKey;

/// Default page size when neither raw input nor settings supply one.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Loosely-typed search input as collected from a form or command line.
///
/// Every field is optional; numeric fields arrive as raw strings that may
/// fail to parse. Missing fields degrade to "unconstrained" or to the
/// persisted preference during normalization, never to an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchOptions {
    /// Free-text search term.
    pub search_term: Option<String>,
    /// Name substring filter.
    pub name_like: Option<String>,
    /// Language filter.
    pub language: Option<String>,
    /// Comma-separated tags to include.
    pub include_tags: Option<String>,
    /// Comma-separated tags to exclude.
    pub exclude_tags: Option<String>,
    /// Match any included tag instead of all of them.
    pub inclusive_or: Option<bool>,
    /// Minimum token count, as entered.
    pub min_tokens: Option<String>,
    /// Maximum token count, as entered.
    pub max_tokens: Option<String>,
    /// Minimum tag count, as entered.
    pub min_tags: Option<String>,
    /// Minimum number of users who chatted, as entered.
    pub min_users_chatted: Option<String>,
    /// Maximum age in days, as entered.
    pub max_days_ago: Option<String>,
    /// Minimum AI rating, as entered.
    pub min_ai_rating: Option<String>,
    /// Explicit NSFW choice.
    pub nsfw: Option<bool>,
    /// Explicit NSFL choice.
    pub nsfl: Option<bool>,
    /// Explicit NSFW-only choice.
    pub nsfw_only: Option<bool>,
    /// Explicit require-images choice.
    pub require_images: Option<bool>,
    /// Explicit require-example-dialogues choice.
    pub require_example_dialogues: Option<bool>,
    /// Explicit require-alternate-greetings choice.
    pub require_alternate_greetings: Option<bool>,
    /// Explicit require-custom-prompt choice.
    pub require_custom_prompt: Option<bool>,
    /// Explicit require-expressions choice.
    pub require_expressions: Option<bool>,
    /// Explicit require-lore choice.
    pub require_lore: Option<bool>,
    /// Explicit require-lore-embedded choice.
    pub require_lore_embedded: Option<bool>,
    /// Explicit require-lore-linked choice.
    pub require_lore_linked: Option<bool>,
    /// Explicit recommended/verified choice.
    pub recommended_verified: Option<bool>,
    /// Explicit include-forks choice.
    pub include_forks: Option<bool>,
    /// Sort key wire name.
    pub sort: Option<String>,
    /// Sort ascending instead of descending.
    pub sort_ascending: Option<bool>,
    /// Results per page, as entered.
    pub page_size: Option<String>,
    /// Page number, as entered.
    pub page: Option<String>,
}

/// Canonical search options with every field fully resolved.
///
/// After [`normalize`] no field is in an ambiguous "unset" state: booleans
/// are concrete and numeric filters are an explicit `Some`/`None`, where
/// `None` means the constraint is deliberately not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    /// Free-text search term (empty = omitted).
    pub search_term: String,
    /// Name substring filter (empty = omitted).
    pub name_like: String,
    /// Language filter (empty = omitted).
    pub language: String,
    /// Tags to include, trimmed, order-preserved.
    pub include_tags: Vec<String>,
    /// Tags to exclude, trimmed, order-preserved.
    pub exclude_tags: Vec<String>,
    /// Match any included tag instead of all of them.
    pub inclusive_or: bool,
    /// Minimum token count.
    pub min_tokens: Option<u32>,
    /// Maximum token count.
    pub max_tokens: Option<u32>,
    /// Minimum tag count.
    pub min_tags: Option<u32>,
    /// Minimum number of users who chatted.
    pub min_users_chatted: Option<u32>,
    /// Maximum age in days.
    pub max_days_ago: Option<u32>,
    /// Minimum AI rating.
    pub min_ai_rating: Option<u32>,
    /// Resolved boolean requirement flags.
    pub flags: FlagSet,
    /// Sort key.
    pub sort: SortKey,
    /// Sort ascending instead of descending.
    pub sort_ascending: bool,
    /// Results per page (positive).
    pub page_size: u32,
    /// Page number (1-indexed).
    pub page: u32,
}

/// Parse a raw numeric field with a strict base-10 parser.
///
/// Empty input and parse failures both mean "absent", never zero.
fn parse_numeric(raw: Option<&str>) -> Option<u32> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<u32>().ok())
}

/// Split a free-text tag field on commas, trimming whitespace and dropping
/// empty segments. Order is preserved and duplicates are kept.
#[must_use]
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Resolve raw input into canonical [`SearchOptions`].
///
/// Total function: malformed input degrades to "field absent". Per boolean
/// flag the resolution order is explicit value, then the persisted
/// preference in `prefs` (itself pre-seeded with built-in defaults).
/// `find_count` is the persisted default page size.
#[must_use]
pub fn normalize(raw: &RawSearchOptions, prefs: &FlagSet, find_count: u32) -> SearchOptions {
    let mut flags = FlagSet::default();
    for spec in FLAG_TABLE {
        let resolved = (spec.raw)(raw).unwrap_or_else(|| (spec.get)(prefs));
        (spec.set)(&mut flags, resolved);
    }

    let fallback_page_size = if find_count == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        find_count
    };

    SearchOptions {
        search_term: raw.search_term.as_deref().unwrap_or_default().trim().to_owned(),
        name_like: raw.name_like.as_deref().unwrap_or_default().trim().to_owned(),
        language: raw.language.as_deref().unwrap_or_default().trim().to_owned(),
        include_tags: split_tags(raw.include_tags.as_deref()),
        exclude_tags: split_tags(raw.exclude_tags.as_deref()),
        inclusive_or: raw.inclusive_or.unwrap_or(false),
        min_tokens: parse_numeric(raw.min_tokens.as_deref()),
        max_tokens: parse_numeric(raw.max_tokens.as_deref()),
        min_tags: parse_numeric(raw.min_tags.as_deref()),
        min_users_chatted: parse_numeric(raw.min_users_chatted.as_deref()),
        max_days_ago: parse_numeric(raw.max_days_ago.as_deref()),
        min_ai_rating: parse_numeric(raw.min_ai_rating.as_deref()),
        flags,
        sort: raw
            .sort
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default(),
        sort_ascending: raw.sort_ascending.unwrap_or(false),
        page_size: parse_numeric(raw.page_size.as_deref())
            .filter(|n| *n > 0)
            .unwrap_or(fallback_page_size),
        page: parse_numeric(raw.page.as_deref()).unwrap_or(1).max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_parse_rejects_garbage() {
        assert_eq!(parse_numeric(Some("42")), Some(42));
        assert_eq!(parse_numeric(Some("")), None);
        assert_eq!(parse_numeric(Some("abc")), None);
        assert_eq!(parse_numeric(None), None);
    }

    #[test]
    fn tag_split_trims_and_drops_empties() {
        assert_eq!(split_tags(Some("a, b ,,c")), vec!["a", "b", "c"]);
        assert_eq!(split_tags(Some("")), Vec::<String>::new());
        assert_eq!(split_tags(None), Vec::<String>::new());
    }

    #[test]
    fn tag_split_keeps_order_and_duplicates() {
        assert_eq!(split_tags(Some("elf, elf, dwarf")), vec!["elf", "elf", "dwarf"]);
    }
}
