#![allow(dead_code)]

use chrono::{DateTime, Utc};
use recipe_share_api::models::{
    Collection, Difficulty, Nutrition, Order, OrderItem, OrderStatus, Recipe, Season,
    ShippingAddress, User,
};
use uuid::Uuid;

pub fn recipe(title: &str, tags: &[&str], time: i32, created_at: DateTime<Utc>) -> Recipe {
    Recipe {
        id: Uuid::new_v4(),
        title: title.to_string(),
        chef: "Tester".to_string(),
        user_id: None,
        image: None,
        time,
        servings: 2,
        rating: 0.0,
        reviews: Vec::new(),
        reviews_count: 0,
        ingredients: Vec::new(),
        instructions: Vec::new(),
        nutrition: Nutrition::default(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        season: Season::AllSeasons,
        mood: Vec::new(),
        difficulty: Difficulty::Easy,
        cuisine: String::new(),
        created_at,
        updated_at: created_at,
    }
}

pub fn user() -> User {
    User {
        id: Uuid::new_v4(),
        name: "Cook".to_string(),
        email: "cook@example.com".to_string(),
        avatar: None,
        bio: None,
        favorites: Vec::new(),
        collections: Vec::new(),
        meal_plans: Vec::new(),
        created_recipes: Vec::new(),
        created_at: Utc::now(),
    }
}

pub fn collection(owner: Uuid, is_public: bool) -> Collection {
    let now = Utc::now();
    Collection {
        id: Uuid::new_v4(),
        name: "Weeknights".to_string(),
        description: String::new(),
        user_id: owner,
        is_public,
        recipes: Vec::new(),
        cover_image: None,
        tags: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

pub fn order(status: OrderStatus) -> Order {
    let now = Utc::now();
    Order {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        items: vec![OrderItem {
            recipe_id: None,
            name: "Spice kit".to_string(),
            quantity: 2,
            price: 1500,
        }],
        total_amount: 3000,
        shipping_address: ShippingAddress::default(),
        payment_method: "card".to_string(),
        status,
        is_paid: false,
        paid_at: None,
        is_delivered: false,
        delivered_at: None,
        created_at: now,
        updated_at: now,
    }
}
