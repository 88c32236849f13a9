pub mod collections;
pub mod json;
pub mod notifications;
pub mod orders;
pub mod recipes;
pub mod users;

pub use collections::Entity as Collections;
pub use notifications::Entity as Notifications;
pub use orders::Entity as Orders;
pub use recipes::Entity as Recipes;
pub use users::Entity as Users;
