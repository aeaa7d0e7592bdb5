//! Encoding of canonical search options into a flat URL query.

use std::fmt;

use cardex_core::flags::FLAG_TABLE;
use cardex_core::options::SearchOptions;

/// Maximum length of a joined tag-list value.
pub const MAX_TAG_VALUE_LEN: usize = 500;

/// An ordered key/value query ready for URL transmission.
///
/// A key appears at most once; a key is present only if its source field was
/// meaningful. Resolved booleans are always present, `true` and `false`
/// alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedQuery(Vec<(String, String)>);

impl EncodedQuery {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a string value, omitting the key entirely when empty.
    pub fn push_str(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.0.push((key.to_owned(), value.to_owned()));
        }
    }

    /// Emit a numeric value, omitting the key when absent.
    pub fn push_num(&mut self, key: &str, value: Option<u32>) {
        if let Some(n) = value {
            self.0.push((key.to_owned(), n.to_string()));
        }
    }

    /// Emit a resolved boolean as literal `true`/`false`. Never omitted.
    pub fn push_bool(&mut self, key: &str, value: bool) {
        self.0.push((key.to_owned(), value.to_string()));
    }

    /// Emit a tag list joined with commas, capped at
    /// [`MAX_TAG_VALUE_LEN`] characters; omitted when the join is empty.
    pub fn push_tags(&mut self, key: &str, tags: &[String]) {
        let mut joined = tags
            .iter()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        if joined.len() > MAX_TAG_VALUE_LEN {
            let mut cut = MAX_TAG_VALUE_LEN;
            while !joined.is_char_boundary(cut) {
                cut -= 1;
            }
            joined.truncate(cut);
        }
        if !joined.is_empty() {
            self.0.push((key.to_owned(), joined));
        }
    }

    /// The encoded pairs, in emission order.
    #[must_use]
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for EncodedQuery {
    /// Render as `k=v&k=v` with keys and values percent-encoded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", urlencoding::encode(k), urlencoding::encode(v))?;
        }
        Ok(())
    }
}

/// Map canonical search options to their flat query representation.
///
/// Pure function; the resulting key set is unique by construction.
#[must_use]
pub fn encode_query(opts: &SearchOptions) -> EncodedQuery {
    let mut q = EncodedQuery::new();

    q.push_str("search", &opts.search_term);
    q.push_str("namelike", &opts.name_like);
    q.push_str("language", &opts.language);

    q.push_tags("tags", &opts.include_tags);
    q.push_tags("exclude_tags", &opts.exclude_tags);
    q.push_bool("inclusive_or", opts.inclusive_or);

    q.push_num("min_tokens", opts.min_tokens);
    q.push_num("max_tokens", opts.max_tokens);
    q.push_num("min_tags", opts.min_tags);
    q.push_num("min_users_chatted", opts.min_users_chatted);
    q.push_num("max_days_ago", opts.max_days_ago);
    q.push_num("min_ai_rating", opts.min_ai_rating);

    for spec in FLAG_TABLE {
        q.push_bool(spec.query_key, (spec.get)(&opts.flags));
    }

    q.push_str("sort", opts.sort.as_wire());
    q.push_bool("asc", opts.sort_ascending);
    q.push_num("first", Some(opts.page_size));
    q.push_num("page", Some(opts.page));

    q
}
