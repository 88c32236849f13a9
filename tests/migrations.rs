use recipe_share_api::db::split_statements;

#[test]
fn splits_on_statement_terminators() {
    let sql = "CREATE TABLE a (id INT);\n\nCREATE INDEX i ON a (id);\n";
    assert_eq!(
        split_statements(sql),
        ["CREATE TABLE a (id INT)", "CREATE INDEX i ON a (id)"]
    );
}

#[test]
fn semicolons_in_literals_and_comments_stay_put() {
    let sql = "-- seeds; run once\nINSERT INTO t VALUES ('a;b');\nSELECT 1 -- trailing; note\n;";
    assert_eq!(
        split_statements(sql),
        ["INSERT INTO t VALUES ('a;b')", "SELECT 1"]
    );
}

#[test]
fn trailing_statement_without_terminator_is_kept() {
    assert_eq!(split_statements("SELECT 1"), ["SELECT 1"]);
    assert!(split_statements("  \n -- nothing here\n").is_empty());
}
