mod common;

use chrono::{Duration, TimeZone, Utc};
use recipe_share_api::{
    dashboard::{
        ActivityKind, MealPlanUpsert, compute_stats, favorites_by_category, latest_plan,
        recent_activity, recipe_type_stats, relative_label, synthesize_week_plan, title_case,
        upsert_meal_plan,
    },
    models::WeekPlan,
};

use common::recipe;

#[test]
fn title_case_normalizes_tags() {
    assert_eq!(title_case("breakfast"), "Breakfast");
    assert_eq!(title_case("DESSERTS"), "Desserts");
    assert_eq!(title_case(""), "");
}

#[test]
fn recipe_types_count_every_matching_tag() {
    let now = Utc::now();
    let recipes = vec![
        recipe("Oats", &["breakfast"], 10, now),
        recipe("Wrap", &["Breakfast", "Lunch"], 15, now),
    ];

    let counts = recipe_type_stats(&recipes);

    assert_eq!(counts.len(), 6);
    assert_eq!(counts["Breakfast"], 2);
    assert_eq!(counts["Lunch"], 1);
    assert_eq!(counts["Dinner"], 0);
    assert_eq!(counts["Snacks"], 0);
    assert_eq!(counts["Desserts"], 0);
    assert_eq!(counts["Appetizers"], 0);
}

#[test]
fn favorite_categories_ignore_unknown_tags() {
    let now = Utc::now();
    let favorites = vec![
        recipe("Tart", &["desserts", "french"], 60, now),
        recipe("Steak", &["mains", "dinner"], 30, now),
    ];

    let counts = favorites_by_category(&favorites);

    assert_eq!(counts.len(), 8);
    assert_eq!(counts["Desserts"], 1);
    assert_eq!(counts["Mains"], 1);
    assert_eq!(counts["Dinner"], 1);
    assert!(!counts.contains_key("French"));
}

#[test]
fn stats_average_time_and_weekly_meals() {
    let now = Utc::now();
    let recipes = vec![
        recipe("A", &[], 10, now - Duration::days(1)),
        recipe("B", &[], 20, now - Duration::days(6)),
        recipe("C", &[], 25, now - Duration::days(10)),
    ];

    let stats = compute_stats(&recipes, 4, 2, now);

    assert_eq!(stats.total_recipes, 3);
    assert_eq!(stats.avg_time, 18);
    assert_eq!(stats.weekly_meals, 2);
    assert_eq!(stats.favorites, 4);
    assert_eq!(stats.total_orders, 2);
}

#[test]
fn stats_on_empty_store_are_zero() {
    let stats = compute_stats(&[], 0, 0, Utc::now());
    assert_eq!(stats.total_recipes, 0);
    assert_eq!(stats.avg_time, 0);
    assert_eq!(stats.weekly_meals, 0);
}

#[test]
fn relative_labels() {
    let now = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
    let ago = |days| now - Duration::days(days);

    assert_eq!(relative_label(now, now), "Today");
    assert_eq!(relative_label(ago(1), now), "1 day ago");
    assert_eq!(relative_label(ago(3), now), "3 days ago");
    assert_eq!(relative_label(ago(7), now), "1 week ago");
    assert_eq!(relative_label(ago(20), now), "2 weeks ago");
    assert_eq!(relative_label(ago(30), now), "1 month ago");
    assert_eq!(relative_label(ago(95), now), "3 months ago");
    assert_eq!(relative_label(now + Duration::days(2), now), "Today");
}

#[test]
fn recent_activity_orders_newest_first() {
    let now = Utc::now();
    let created = vec![recipe("Fresh bake", &[], 30, now)];
    let favorites = vec![recipe("Old favorite", &[], 30, now - Duration::days(8))];

    let items = recent_activity(&created, &favorites, now);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind, ActivityKind::Created);
    assert_eq!(items[0].time_ago, "Today");
    assert_eq!(items[1].kind, ActivityKind::Favorite);
    assert_eq!(items[1].time_ago, "1 week ago");
}

#[test]
fn recent_activity_is_capped_at_ten() {
    let now = Utc::now();
    let created: Vec<_> = (0..12)
        .map(|i| recipe(&format!("c{i}"), &[], 10, now - Duration::hours(i)))
        .collect();
    let favorites: Vec<_> = (0..7)
        .map(|i| recipe(&format!("f{i}"), &[], 10, now - Duration::minutes(30 + i * 60)))
        .collect();

    let items = recent_activity(&created, &favorites, now);

    assert_eq!(items.len(), 10);
    assert!(items.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[test]
fn saving_within_a_day_updates_the_same_week() {
    let now = Utc::now();
    let start = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    let mut plans = Vec::new();

    let first = upsert_meal_plan(&mut plans, WeekPlan::default(), start, now);
    let second = upsert_meal_plan(&mut plans, WeekPlan::default(), start + Duration::hours(2), now);

    let MealPlanUpsert::Created(id) = first else {
        panic!("first save should create a plan");
    };
    assert_eq!(second, MealPlanUpsert::Updated(id));
    assert_eq!(plans.len(), 1);
}

#[test]
fn saving_a_day_apart_creates_a_new_week() {
    let now = Utc::now();
    let start = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    let mut plans = Vec::new();

    upsert_meal_plan(&mut plans, WeekPlan::default(), start, now);
    let second = upsert_meal_plan(&mut plans, WeekPlan::default(), start + Duration::hours(30), now);
    let third = upsert_meal_plan(&mut plans, WeekPlan::default(), start - Duration::hours(24), now);

    assert!(matches!(second, MealPlanUpsert::Created(_)));
    assert!(matches!(third, MealPlanUpsert::Created(_)));
    assert_eq!(plans.len(), 3);
    assert_eq!(latest_plan(&plans).map(|p| p.week_start_date), Some(start - Duration::hours(24)));
}

#[test]
fn synthesized_plan_fills_slots_in_order() {
    let now = Utc::now();
    let recipes: Vec<_> = (0..5)
        .map(|i| recipe(&format!("r{i}"), &[], 10, now))
        .collect();

    let plan = synthesize_week_plan(&recipes);

    let id_of = |slot: &Option<recipe_share_api::models::MealSlot>| slot.as_ref().map(|s| s.id);
    assert_eq!(id_of(&plan.monday.breakfast), Some(recipes[0].id));
    assert_eq!(id_of(&plan.monday.lunch), Some(recipes[1].id));
    assert_eq!(id_of(&plan.monday.dinner), Some(recipes[2].id));
    assert_eq!(id_of(&plan.tuesday.breakfast), Some(recipes[3].id));
    assert_eq!(id_of(&plan.tuesday.lunch), Some(recipes[4].id));
    assert!(plan.tuesday.dinner.is_none());
    assert!(plan.sunday.dinner.is_none());
}

#[test]
fn synthesized_plan_uses_at_most_21_recipes() {
    let now = Utc::now();
    let recipes: Vec<_> = (0..25)
        .map(|i| recipe(&format!("r{i}"), &[], 10, now))
        .collect();

    let plan = synthesize_week_plan(&recipes);

    assert_eq!(plan.sunday.dinner.as_ref().map(|s| s.id), Some(recipes[20].id));
}
