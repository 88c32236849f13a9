//! Dashboard aggregations.
//!
//! Everything here is a pure function over already loaded recipes and user
//! documents. `services::dashboard_service` does the store scans and hands
//! the rows to these functions on every request.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{MealPlanEntry, MealSlot, Recipe, WeekPlan};

pub const RECIPE_TYPE_BUCKETS: [&str; 6] = [
    "Breakfast",
    "Lunch",
    "Dinner",
    "Snacks",
    "Desserts",
    "Appetizers",
];

pub const FAVORITE_CATEGORY_BUCKETS: [&str; 8] = [
    "Desserts",
    "Mains",
    "Sides",
    "Appetizers",
    "Salads",
    "Breakfast",
    "Lunch",
    "Dinner",
];

pub const RECENT_CREATED_LIMIT: u64 = 10;
pub const RECENT_FAVORITES_LIMIT: usize = 5;
pub const RECENT_ACTIVITY_LIMIT: usize = 10;
pub const MEAL_SLOTS_PER_WEEK: u64 = 21;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_recipes: u64,
    pub favorites: u64,
    pub avg_time: i64,
    pub weekly_meals: u64,
    pub total_orders: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Created,
    Favorite,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub recipe_id: Uuid,
    pub title: String,
    pub image: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub time_ago: String,
}

/// First letter upper-cased, the rest lower-cased.
pub fn title_case(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Counts every recipe tag that normalizes to one of `buckets`. Buckets are
/// not exclusive: a recipe tagged both "lunch" and "dinner" lands in both.
pub fn bucket_counts<'a, I>(recipes: I, buckets: &[&'static str]) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut counts: BTreeMap<String, u64> =
        buckets.iter().map(|name| ((*name).to_string(), 0)).collect();

    for recipe in recipes {
        for tag in &recipe.tags {
            if let Some(count) = counts.get_mut(&title_case(tag)) {
                *count += 1;
            }
        }
    }
    counts
}

pub fn recipe_type_stats(recipes: &[Recipe]) -> BTreeMap<String, u64> {
    bucket_counts(recipes, &RECIPE_TYPE_BUCKETS)
}

pub fn favorites_by_category(favorites: &[Recipe]) -> BTreeMap<String, u64> {
    bucket_counts(favorites, &FAVORITE_CATEGORY_BUCKETS)
}

/// `avg_time` and `weekly_meals` are global across all recipes; the two
/// counters are the requesting user's.
pub fn compute_stats(
    recipes: &[Recipe],
    favorite_count: u64,
    order_count: u64,
    now: DateTime<Utc>,
) -> DashboardStats {
    let total = recipes.len() as u64;
    let avg_time = if total == 0 {
        0
    } else {
        let sum: i64 = recipes.iter().map(|r| i64::from(r.time)).sum();
        (sum as f64 / total as f64).round() as i64
    };

    let week_ago = now - Duration::days(7);
    let weekly_meals = recipes
        .iter()
        .filter(|r| r.created_at >= week_ago && r.created_at <= now)
        .count() as u64;

    DashboardStats {
        total_recipes: total,
        favorites: favorite_count,
        avg_time,
        weekly_meals,
        total_orders: order_count,
    }
}

pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - timestamp).num_days().max(0);
    match days {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => plural(days / 7, "week"),
        _ => plural(days / 30, "month"),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Merges created-recipe and favorite events, newest first.
///
/// `created` should already be the user's newest recipes; `favorites` is the
/// head of the stored favorites list. A favorite event carries the recipe's
/// own creation time since favorites are not timestamped.
pub fn recent_activity(
    created: &[Recipe],
    favorites: &[Recipe],
    now: DateTime<Utc>,
) -> Vec<ActivityItem> {
    let created_events = created
        .iter()
        .take(RECENT_CREATED_LIMIT as usize)
        .map(|r| (ActivityKind::Created, r));
    let favorite_events = favorites
        .iter()
        .take(RECENT_FAVORITES_LIMIT)
        .map(|r| (ActivityKind::Favorite, r));

    let mut items: Vec<ActivityItem> = created_events
        .chain(favorite_events)
        .map(|(kind, recipe)| ActivityItem {
            kind,
            recipe_id: recipe.id,
            title: recipe.title.clone(),
            image: recipe.image.clone(),
            timestamp: recipe.created_at,
            time_ago: relative_label(recipe.created_at, now),
        })
        .collect();

    // stable: equal timestamps keep created-before-favorite order
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items.truncate(RECENT_ACTIVITY_LIMIT);
    items
}

/// Fills Monday..Sunday x breakfast/lunch/dinner from `recipes` in order.
/// Slots past the end of `recipes` stay empty.
pub fn synthesize_week_plan(recipes: &[Recipe]) -> WeekPlan {
    let mut plan = WeekPlan::default();
    let mut pool = recipes.iter().take(MEAL_SLOTS_PER_WEEK as usize);

    for day in plan.days_mut() {
        for slot in day.slots_mut() {
            *slot = pool.next().map(MealSlot::from);
        }
    }
    plan
}

/// Most recently appended saved plan.
pub fn latest_plan(plans: &[MealPlanEntry]) -> Option<&MealPlanEntry> {
    plans.last()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealPlanUpsert {
    Updated(Uuid),
    Created(Uuid),
}

/// Two week-start dates closer than this are the same week.
pub fn week_bucket_tolerance() -> Duration {
    Duration::hours(24)
}

/// Overwrites the plan whose week start lies within the tolerance window of
/// `week_start`, or appends a new entry.
pub fn upsert_meal_plan(
    plans: &mut Vec<MealPlanEntry>,
    plan: WeekPlan,
    week_start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> MealPlanUpsert {
    let tolerance = week_bucket_tolerance();
    let existing = plans
        .iter_mut()
        .find(|entry| (entry.week_start_date - week_start).abs() < tolerance);

    match existing {
        Some(entry) => {
            entry.plan = plan;
            entry.created_at = now;
            MealPlanUpsert::Updated(entry.id)
        }
        None => {
            let id = Uuid::new_v4();
            plans.push(MealPlanEntry {
                id,
                week_start_date: week_start,
                plan,
                created_at: now,
            });
            MealPlanUpsert::Created(id)
        }
    }
}
