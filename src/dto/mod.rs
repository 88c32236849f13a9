pub mod auth;
pub mod collections;
pub mod dashboard;
pub mod favorites;
pub mod notifications;
pub mod orders;
pub mod recipes;
