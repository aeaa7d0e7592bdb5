use cardex_core::flags::{FlagSet, FLAG_TABLE};
use cardex_core::options::{normalize, RawSearchOptions, DEFAULT_PAGE_SIZE};
use cardex_core::sort::SortKey;

#[test]
fn explicit_flag_beats_persisted_preference() {
    let prefs = FlagSet {
        nsfw: true,
        ..FlagSet::default()
    };
    let raw = RawSearchOptions {
        nsfw: Some(false),
        ..RawSearchOptions::default()
    };
    let opts = normalize(&raw, &prefs, 30);
    assert!(!opts.flags.nsfw);
}

#[test]
fn missing_flag_falls_back_to_persisted_preference() {
    let prefs = FlagSet {
        require_images: true,
        ..FlagSet::default()
    };
    let opts = normalize(&RawSearchOptions::default(), &prefs, 30);
    assert!(opts.flags.require_images);
    // The rest stay at their built-in defaults.
    assert!(!opts.flags.nsfw);
    assert!(!opts.flags.include_forks);
}

#[test]
fn every_flag_resolves_through_the_table() {
    let raw = RawSearchOptions {
        nsfw: Some(true),
        nsfl: Some(true),
        nsfw_only: Some(true),
        require_images: Some(true),
        require_example_dialogues: Some(true),
        require_alternate_greetings: Some(true),
        require_custom_prompt: Some(true),
        require_expressions: Some(true),
        require_lore: Some(true),
        require_lore_embedded: Some(true),
        require_lore_linked: Some(true),
        recommended_verified: Some(true),
        include_forks: Some(true),
        ..RawSearchOptions::default()
    };
    let opts = normalize(&raw, &FlagSet::default(), 30);
    for spec in FLAG_TABLE {
        assert!((spec.get)(&opts.flags), "{} not resolved", spec.setting_key);
    }
}

#[test]
fn numeric_fields_degrade_to_absent() {
    let raw = RawSearchOptions {
        min_tokens: Some("42".to_owned()),
        max_tokens: Some("abc".to_owned()),
        min_tags: Some(String::new()),
        ..RawSearchOptions::default()
    };
    let opts = normalize(&raw, &FlagSet::default(), 30);
    assert_eq!(opts.min_tokens, Some(42));
    assert_eq!(opts.max_tokens, None);
    assert_eq!(opts.min_tags, None);
    assert_eq!(opts.min_users_chatted, None);
}

#[test]
fn tags_are_trimmed_and_order_preserved() {
    let raw = RawSearchOptions {
        include_tags: Some("a, b ,,c".to_owned()),
        ..RawSearchOptions::default()
    };
    let opts = normalize(&raw, &FlagSet::default(), 30);
    assert_eq!(opts.include_tags, vec!["a", "b", "c"]);
}

#[test]
fn sort_and_pagination_defaults() {
    let opts = normalize(&RawSearchOptions::default(), &FlagSet::default(), 0);
    assert_eq!(opts.sort, SortKey::DownloadCount);
    assert!(!opts.sort_ascending);
    assert_eq!(opts.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(opts.page, 1);
}

#[test]
fn page_size_prefers_raw_then_find_count() {
    let raw = RawSearchOptions {
        page_size: Some("10".to_owned()),
        ..RawSearchOptions::default()
    };
    assert_eq!(normalize(&raw, &FlagSet::default(), 50).page_size, 10);
    assert_eq!(
        normalize(&RawSearchOptions::default(), &FlagSet::default(), 50).page_size,
        50
    );
}

#[test]
fn page_is_clamped_to_at_least_one() {
    let raw = RawSearchOptions {
        page: Some("0".to_owned()),
        ..RawSearchOptions::default()
    };
    assert_eq!(normalize(&raw, &FlagSet::default(), 30).page, 1);
}

#[test]
fn unknown_sort_key_falls_back_to_default() {
    let raw = RawSearchOptions {
        sort: Some("bogus".to_owned()),
        ..RawSearchOptions::default()
    };
    assert_eq!(normalize(&raw, &FlagSet::default(), 30).sort, SortKey::DownloadCount);
}

#[test]
fn sort_key_wire_names_round_trip() {
    for key in [
        SortKey::DownloadCount,
        SortKey::StarCount,
        SortKey::Id,
        SortKey::Rating,
        SortKey::RatingCount,
        SortKey::LastActivity,
        SortKey::CreatedAt,
        SortKey::Name,
    ] {
        assert_eq!(key.as_wire().parse::<SortKey>().unwrap(), key);
    }
}
