use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::{
    FromJsonQueryResult,
    entity::prelude::{DeriveActiveEnum, EnumIter, StringLen},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub favorites: Vec<Uuid>,
    pub collections: Vec<EmbeddedCollection>,
    pub meal_plans: Vec<MealPlanEntry>,
    pub created_recipes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Named group of recipes living inside a user document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedCollection {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub recipes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    pub id: Uuid,
    pub week_start_date: DateTime<Utc>,
    pub plan: WeekPlan,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealSlot {
    pub id: Uuid,
    pub title: Option<String>,
    pub image: Option<String>,
    pub time: Option<i32>,
}

impl From<&Recipe> for MealSlot {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: Some(recipe.title.clone()),
            image: recipe.image.clone(),
            time: Some(recipe.time),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayPlan {
    pub breakfast: Option<MealSlot>,
    pub lunch: Option<MealSlot>,
    pub dinner: Option<MealSlot>,
}

impl DayPlan {
    pub fn slots_mut(&mut self) -> [&mut Option<MealSlot>; 3] {
        [&mut self.breakfast, &mut self.lunch, &mut self.dinner]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct WeekPlan {
    pub monday: DayPlan,
    pub tuesday: DayPlan,
    pub wednesday: DayPlan,
    pub thursday: DayPlan,
    pub friday: DayPlan,
    pub saturday: DayPlan,
    pub sunday: DayPlan,
}

impl WeekPlan {
    /// Days in calendar order, Monday first.
    pub fn days_mut(&mut self) -> [&mut DayPlan; 7] {
        [
            &mut self.monday,
            &mut self.tuesday,
            &mut self.wednesday,
            &mut self.thursday,
            &mut self.friday,
            &mut self.saturday,
            &mut self.sunday,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user: String,
    pub comment: String,
    pub date: String,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, FromJsonQueryResult,
)]
#[serde(default)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Season {
    #[sea_orm(string_value = "Spring")]
    Spring,
    #[sea_orm(string_value = "Summer")]
    Summer,
    #[sea_orm(string_value = "Fall")]
    Fall,
    #[sea_orm(string_value = "Winter")]
    Winter,
    #[serde(rename = "All Seasons")]
    #[sea_orm(string_value = "All Seasons")]
    AllSeasons,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, EnumIter, DeriveActiveEnum,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Difficulty {
    #[sea_orm(string_value = "easy")]
    Easy,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "hard")]
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub chef: String,
    pub user_id: Option<Uuid>,
    pub image: Option<String>,
    pub time: i32,
    pub servings: i32,
    pub rating: f64,
    pub reviews: Vec<Review>,
    pub reviews_count: i32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutrition: Nutrition,
    pub tags: Vec<String>,
    pub season: Season,
    pub mood: Vec<String>,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub const JUST_NOW: &'static str = "Just now";

    pub fn new(author: &str, comment: &str, user_id: Option<Uuid>, now: DateTime<Utc>) -> Self {
        Self {
            user: author.to_string(),
            comment: comment.to_string(),
            date: Self::JUST_NOW.to_string(),
            user_id,
            created_at: now,
        }
    }
}

impl Recipe {
    /// Appends a review and keeps `reviews_count` equal to `reviews.len()`.
    pub fn push_review(&mut self, review: Review) {
        self.reviews.push(review);
        self.reviews_count = self.reviews.len() as i32;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub user_id: Uuid,
    pub is_public: bool,
    pub recipes: Vec<Uuid>,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, EnumIter, DeriveActiveEnum,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum OrderStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "processing")]
    Processing,
    #[sea_orm(string_value = "shipped")]
    Shipped,
    #[sea_orm(string_value = "delivered")]
    Delivered,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("Invalid order status: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub recipe_id: Option<Uuid>,
    pub name: String,
    pub quantity: i32,
    pub price: i64,
}

#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, FromJsonQueryResult,
)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_amount: i64,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    pub status: OrderStatus,
    pub is_paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    pub is_delivered: bool,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Notification types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, EnumIter, DeriveActiveEnum,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum NotificationKind {
    #[sea_orm(string_value = "like")]
    Like,
    #[sea_orm(string_value = "comment")]
    Comment,
    #[sea_orm(string_value = "follow")]
    Follow,
    #[sea_orm(string_value = "milestone")]
    Milestone,
    #[sea_orm(string_value = "order")]
    Order,
    #[sea_orm(string_value = "recipe")]
    Recipe,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub sender_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub recipe_id: Option<Uuid>,
    pub order_id: Option<Uuid>,
    pub read: bool,
    pub action: String,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
