use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dashboard::{ActivityItem, ActivityKind, DashboardStats},
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest, UpdateProfileRequest},
        collections::{
            CollectionDetail, CollectionList, CreateCollectionRequest, UpdateCollectionRequest,
        },
        dashboard::{ActivityList, BucketCounts, MealPlanList, MealPlanView, SaveMealPlanRequest},
        favorites::{
            AddFavoriteRequest, CollectionRecipeRequest, CreateEmbeddedCollectionRequest,
            EmbeddedCollectionList, EmbeddedCollectionView, FavoriteIds, FavoriteRecipeList,
        },
        notifications::NotificationList,
        orders::{CreateOrderRequest, OrderList, UpdateOrderStatusRequest},
        recipes::{AddReviewRequest, CreateRecipeRequest, RecipeList, UpdateRecipeRequest},
    },
    models::{
        Collection, DayPlan, Difficulty, EmbeddedCollection, MealPlanEntry, MealSlot,
        Notification, NotificationKind, Nutrition, Order, OrderItem, OrderStatus, Recipe, Review,
        Season, ShippingAddress, User, WeekPlan,
    },
    response::{ApiResponse, ErrorResponse, Meta},
    routes::{
        auth, collections, dashboard, favorites, health, notifications, orders, params, recipes,
        users,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::register,
        users::get_me,
        users::update_me,
        recipes::list_recipes,
        recipes::random_recipe,
        recipes::list_my_recipes,
        recipes::get_recipe,
        recipes::create_recipe,
        recipes::update_recipe,
        recipes::delete_recipe,
        recipes::add_review,
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::remove_favorite,
        favorites::list_collections,
        favorites::create_collection,
        favorites::delete_collection,
        favorites::add_recipe_to_collection,
        favorites::remove_recipe_from_collection,
        collections::list_mine,
        collections::list_public,
        collections::create_collection,
        collections::get_collection,
        collections::update_collection,
        collections::delete_collection,
        collections::add_recipe,
        collections::remove_recipe,
        dashboard::stats,
        dashboard::recipe_types,
        dashboard::favorites_by_category,
        dashboard::recent_activity,
        dashboard::meal_plan,
        dashboard::save_meal_plan,
        dashboard::meal_plans,
        dashboard::delete_meal_plan,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::delete_order,
        orders::pay_order,
        orders::update_order_status,
        orders::cancel_order,
        notifications::list_notifications,
        notifications::mark_all_read,
        notifications::mark_read,
        notifications::delete_notification
    ),
    components(
        schemas(
            User,
            EmbeddedCollection,
            MealPlanEntry,
            WeekPlan,
            DayPlan,
            MealSlot,
            Recipe,
            Review,
            Nutrition,
            Season,
            Difficulty,
            Collection,
            Order,
            OrderItem,
            OrderStatus,
            ShippingAddress,
            Notification,
            NotificationKind,
            DashboardStats,
            ActivityItem,
            ActivityKind,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UpdateProfileRequest,
            CreateRecipeRequest,
            UpdateRecipeRequest,
            AddReviewRequest,
            RecipeList,
            AddFavoriteRequest,
            FavoriteIds,
            FavoriteRecipeList,
            CreateEmbeddedCollectionRequest,
            CollectionRecipeRequest,
            EmbeddedCollectionView,
            EmbeddedCollectionList,
            CreateCollectionRequest,
            UpdateCollectionRequest,
            CollectionDetail,
            CollectionList,
            SaveMealPlanRequest,
            MealPlanView,
            MealPlanList,
            ActivityList,
            BucketCounts,
            CreateOrderRequest,
            UpdateOrderStatusRequest,
            OrderList,
            NotificationList,
            params::Pagination,
            params::RecipeQuery,
            params::RecipeSort,
            params::OrderListQuery,
            Meta,
            ErrorResponse,
            ApiResponse<User>,
            ApiResponse<Recipe>,
            ApiResponse<RecipeList>,
            ApiResponse<Collection>,
            ApiResponse<CollectionDetail>,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<DashboardStats>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Users", description = "Profile endpoints"),
        (name = "Recipes", description = "Recipe catalog and reviews"),
        (name = "Favorites", description = "Favorites and personal collections"),
        (name = "Collections", description = "Shareable recipe collections"),
        (name = "Dashboard", description = "Statistics and meal planning"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Notifications", description = "Notification inbox"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
