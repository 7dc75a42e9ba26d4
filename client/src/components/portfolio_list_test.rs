use super::*;

#[test]
fn join_tags_joins_with_commas() {
    let tags = vec!["energy".to_owned(), "tech".to_owned()];
    assert_eq!(join_tags(Some(&tags)), "energy, tech");
}

#[test]
fn join_tags_placeholder_for_missing_or_empty() {
    assert_eq!(join_tags(None), "\u{2014}");
    assert_eq!(join_tags(Some(&[])), "\u{2014}");
}
