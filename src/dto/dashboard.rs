use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dashboard::ActivityItem,
    models::{MealPlanEntry, WeekPlan},
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveMealPlanRequest {
    pub plan: WeekPlan,
    pub week_start_date: Option<DateTime<Utc>>,
}

/// Either the latest saved plan or a freshly generated one.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanView {
    pub plan: WeekPlan,
    pub week_start_date: Option<DateTime<Utc>>,
    pub saved: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MealPlanList {
    #[schema(value_type = Vec<MealPlanEntry>)]
    pub items: Vec<MealPlanEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ActivityList {
    #[schema(value_type = Vec<ActivityItem>)]
    pub items: Vec<ActivityItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct BucketCounts {
    pub counts: BTreeMap<String, u64>,
}
