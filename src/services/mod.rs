pub mod auth_service;
pub mod collection_service;
pub mod dashboard_service;
pub mod favorite_service;
pub mod notification_service;
pub mod order_service;
pub mod recipe_service;
pub mod user_service;
