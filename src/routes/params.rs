use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::Season;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Recipe ordering; exactly one key applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum RecipeSort {
    Rating,
    Time,
    #[default]
    CreatedAt,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RecipeQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Free text matched against title and tags
    pub search: Option<String>,
    /// Comma-separated, any-of
    pub tags: Option<String>,
    pub cuisine: Option<String>,
    pub season: Option<Season>,
    /// Comma-separated, any-of
    pub mood: Option<String>,
    pub sort: Option<RecipeSort>,
}

impl RecipeQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl OrderListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Splits a comma-separated query value, dropping blanks.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
