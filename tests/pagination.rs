use recipe_share_api::routes::params::{Pagination, split_list};

#[test]
fn defaults_to_first_page_of_twenty() {
    assert_eq!(Pagination::default().normalize(), (1, 20, 0));
}

#[test]
fn page_and_size_are_clamped() {
    let p = Pagination {
        page: Some(0),
        per_page: Some(500),
    };
    assert_eq!(p.normalize(), (1, 100, 0));

    let p = Pagination {
        page: Some(3),
        per_page: Some(10),
    };
    assert_eq!(p.normalize(), (3, 10, 20));
}

#[test]
fn huge_page_saturates_offset() {
    let p = Pagination {
        page: Some(i64::MAX),
        per_page: Some(100),
    };
    let (page, per_page, offset) = p.normalize();
    assert_eq!(page, i64::MAX);
    assert_eq!(per_page, 100);
    assert_eq!(offset, i64::MAX);
}

#[test]
fn comma_lists_drop_blanks() {
    assert_eq!(split_list(Some(" dinner, ,lunch,")), vec!["dinner", "lunch"]);
    assert!(split_list(None).is_empty());
}
