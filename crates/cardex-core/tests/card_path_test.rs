use cardex_core::card_path::CardPath;

#[test]
fn card_path_parses_author_and_slug() {
    let p = CardPath::parse("alice/forest-ranger").unwrap();
    assert_eq!(p.author(), "alice");
    assert_eq!(p.slug(), "forest-ranger");
    assert_eq!(p.as_str(), "alice/forest-ranger");
}

#[test]
fn card_path_rejects_empty() {
    assert!(CardPath::parse("").is_err());
    assert!(CardPath::parse("   ").is_err());
}

#[test]
fn card_path_rejects_missing_author() {
    assert!(CardPath::parse("forest-ranger").is_err());
    assert!(CardPath::parse("/forest-ranger").is_err());
    assert!(CardPath::parse("alice/").is_err());
}

#[test]
fn card_path_keeps_extra_slashes_in_slug() {
    let p = CardPath::parse("alice/packs/forest-ranger").unwrap();
    assert_eq!(p.author(), "alice");
    assert_eq!(p.slug(), "packs/forest-ranger");
}
