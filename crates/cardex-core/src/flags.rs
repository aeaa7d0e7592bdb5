//! Boolean requirement flags and the static option table.
//!
//! Every boolean search option is declared exactly once in [`FLAG_TABLE`],
//! which ties together its persisted-setting key, its encoded-query key, and
//! its accessors. The normalizer, the query encoder, and the settings layer
//! all walk this table, so the three layers cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::options::RawSearchOptions;

/// Concrete values for every boolean requirement flag.
///
/// Used both as the persisted preference set and as the resolved flag block
/// inside canonical search options. `Default` supplies the built-in
/// defaults (everything off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FlagSet {
    /// Include NSFW results.
    pub nsfw: bool,
    /// Include NSFL results.
    pub nsfl: bool,
    /// Only NSFW results.
    pub nsfw_only: bool,
    /// Require a card image.
    pub require_images: bool,
    /// Require example dialogues.
    pub require_example_dialogues: bool,
    /// Require alternate greetings.
    pub require_alternate_greetings: bool,
    /// Require a custom system prompt.
    pub require_custom_prompt: bool,
    /// Require an expression pack.
    pub require_expressions: bool,
    /// Require attached lore.
    pub require_lore: bool,
    /// Require embedded lore books.
    pub require_lore_embedded: bool,
    /// Require linked lore books.
    pub require_lore_linked: bool,
    /// Only results recommended or verified by the catalog.
    pub recommended_verified: bool,
    /// Include forks of other cards.
    pub include_forks: bool,
}

/// One row of the option table: a boolean flag with its keys and accessors.
pub struct FlagSpec {
    /// Key in the persisted settings store.
    pub setting_key: &'static str,
    /// Key in the encoded remote query.
    pub query_key: &'static str,
    /// Read the explicit (tri-state) value from raw input.
    pub raw: fn(&RawSearchOptions) -> Option<bool>,
    /// Read the resolved value from a flag set.
    pub get: fn(&FlagSet) -> bool,
    /// Write a resolved value into a flag set.
    pub set: fn(&mut FlagSet, bool),
}

/// The statically declared table of every boolean search option.
pub const FLAG_TABLE: &[FlagSpec] = &[
    FlagSpec {
        setting_key: "nsfw",
        query_key: "nsfw",
        raw: |r| r.nsfw,
        get: |f| f.nsfw,
        set: |f, v| f.nsfw = v,
    },
    FlagSpec {
        setting_key: "nsfl",
        query_key: "nsfl",
        raw: |r| r.nsfl,
        get: |f| f.nsfl,
        set: |f, v| f.nsfl = v,
    },
    FlagSpec {
        setting_key: "nsfw_only",
        query_key: "nsfw_only",
        raw: |r| r.nsfw_only,
        get: |f| f.nsfw_only,
        set: |f, v| f.nsfw_only = v,
    },
    FlagSpec {
        setting_key: "require_images",
        query_key: "require_images",
        raw: |r| r.require_images,
        get: |f| f.require_images,
        set: |f, v| f.require_images = v,
    },
    FlagSpec {
        setting_key: "require_example_dialogues",
        query_key: "require_example_dialogues",
        raw: |r| r.require_example_dialogues,
        get: |f| f.require_example_dialogues,
        set: |f, v| f.require_example_dialogues = v,
    },
    FlagSpec {
        setting_key: "require_alternate_greetings",
        query_key: "require_alternate_greetings",
        raw: |r| r.require_alternate_greetings,
        get: |f| f.require_alternate_greetings,
        set: |f, v| f.require_alternate_greetings = v,
    },
    FlagSpec {
        setting_key: "require_custom_prompt",
        query_key: "require_custom_prompt",
        raw: |r| r.require_custom_prompt,
        get: |f| f.require_custom_prompt,
        set: |f, v| f.require_custom_prompt = v,
    },
    FlagSpec {
        setting_key: "require_expressions",
        query_key: "require_expressions",
        raw: |r| r.require_expressions,
        get: |f| f.require_expressions,
        set: |f, v| f.require_expressions = v,
    },
    FlagSpec {
        setting_key: "require_lore",
        query_key: "require_lore",
        raw: |r| r.require_lore,
        get: |f| f.require_lore,
        set: |f, v| f.require_lore = v,
    },
    FlagSpec {
        setting_key: "require_lore_embedded",
        query_key: "require_lore_embedded",
        raw: |r| r.require_lore_embedded,
        get: |f| f.require_lore_embedded,
        set: |f, v| f.require_lore_embedded = v,
    },
    FlagSpec {
        setting_key: "require_lore_linked",
        query_key: "require_lore_linked",
        raw: |r| r.require_lore_linked,
        get: |f| f.require_lore_linked,
        set: |f, v| f.require_lore_linked = v,
    },
    FlagSpec {
        setting_key: "recommended_verified",
        query_key: "recommended_verified",
        raw: |r| r.recommended_verified,
        get: |f| f.recommended_verified,
        set: |f, v| f.recommended_verified = v,
    },
    FlagSpec {
        setting_key: "include_forks",
        query_key: "include_forks",
        raw: |r| r.include_forks,
        get: |f| f.include_forks,
        set: |f, v| f.include_forks = v,
    },
];

/// Look up a flag row by its persisted-setting key.
#[must_use]
pub fn flag_by_setting_key(key: &str) -> Option<&'static FlagSpec> {
    FLAG_TABLE.iter().find(|spec| spec.setting_key == key)
}
