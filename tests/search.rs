use recipe_share_api::services::recipe_service::escape_like;

#[test]
fn like_wildcards_are_escaped() {
    assert_eq!(escape_like("100%"), "100\\%");
    assert_eq!(escape_like("berry_tart"), "berry\\_tart");
    assert_eq!(escape_like("a\\b"), "a\\\\b");
}

#[test]
fn plain_text_is_untouched() {
    assert_eq!(escape_like("Pea Soup"), "Pea Soup");
    assert_eq!(escape_like("crème brûlée"), "crème brûlée");
}
