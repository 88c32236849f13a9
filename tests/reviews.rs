mod common;

use chrono::Utc;
use recipe_share_api::models::Review;
use uuid::Uuid;

#[test]
fn review_count_tracks_reviews() {
    let mut recipe = common::recipe("Soup", &["dinner"], 40, Utc::now());

    for i in 0..3 {
        recipe.push_review(Review::new(
            "Ana",
            &format!("try {i}"),
            Some(Uuid::new_v4()),
            Utc::now(),
        ));
        assert_eq!(recipe.reviews_count as usize, recipe.reviews.len());
    }
    assert_eq!(recipe.reviews_count, 3);
}

#[test]
fn new_reviews_are_dated_just_now() {
    let review = Review::new("Ana", "Lovely", None, Utc::now());
    assert_eq!(review.date, Review::JUST_NOW);
    assert_eq!(review.user, "Ana");
}
