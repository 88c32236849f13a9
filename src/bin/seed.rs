use argon2::{
    Argon2, PasswordHasher,
    password_hash::{rand_core::OsRng, SaltString},
};
use recipe_share_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
};
use serde_json::json;
use uuid::Uuid;

struct SeedRecipe {
    title: &'static str,
    chef: &'static str,
    time: i32,
    servings: i32,
    tags: &'static [&'static str],
    mood: &'static [&'static str],
    season: &'static str,
    difficulty: &'static str,
    cuisine: &'static str,
    ingredients: &'static [&'static str],
}

const RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        title: "Fluffy Buttermilk Pancakes",
        chef: "Test Kitchen",
        time: 25,
        servings: 4,
        tags: &["breakfast", "desserts"],
        mood: &["cozy"],
        season: "All Seasons",
        difficulty: "easy",
        cuisine: "American",
        ingredients: &["flour", "buttermilk", "eggs", "butter"],
    },
    SeedRecipe {
        title: "Summer Panzanella",
        chef: "Test Kitchen",
        time: 20,
        servings: 2,
        tags: &["lunch", "salads"],
        mood: &["fresh", "light"],
        season: "Summer",
        difficulty: "easy",
        cuisine: "Italian",
        ingredients: &["bread", "tomatoes", "basil", "olive oil"],
    },
    SeedRecipe {
        title: "Braised Short Ribs",
        chef: "Test Kitchen",
        time: 180,
        servings: 6,
        tags: &["dinner", "mains"],
        mood: &["comfort"],
        season: "Winter",
        difficulty: "hard",
        cuisine: "French",
        ingredients: &["short ribs", "red wine", "carrots", "onions"],
    },
    SeedRecipe {
        title: "Crispy Chickpea Bites",
        chef: "Test Kitchen",
        time: 35,
        servings: 4,
        tags: &["snacks", "appetizers"],
        mood: &["party"],
        season: "All Seasons",
        difficulty: "medium",
        cuisine: "Mediterranean",
        ingredients: &["chickpeas", "paprika", "olive oil"],
    },
    SeedRecipe {
        title: "Spring Pea Risotto",
        chef: "Test Kitchen",
        time: 45,
        servings: 4,
        tags: &["dinner", "sides"],
        mood: &["fresh"],
        season: "Spring",
        difficulty: "medium",
        cuisine: "Italian",
        ingredients: &["arborio rice", "peas", "parmesan", "stock"],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;
    let pool = orm.get_postgres_connection_pool();

    let user_id = ensure_user(pool, "Demo Cook", "demo@example.com", "demo123").await?;
    seed_recipes(pool).await?;

    println!("Seed completed. Demo user ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    pool: &sqlx::PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO users (id, name, email, password_hash)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    // If user already exists, fetch id
    let user_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured user {email}");
    Ok(user_id)
}

/// Catalog recipes have no owner and cannot be edited through the API.
async fn seed_recipes(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let mut inserted = 0;
    for recipe in RECIPES {
        let result = sqlx::query(
            r#"
            INSERT INTO recipes
                (id, title, chef, time, servings, ingredients, instructions, nutrition,
                 tags, season, mood, difficulty, cuisine)
            SELECT $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13
            WHERE NOT EXISTS (SELECT 1 FROM recipes WHERE title = $2 AND user_id IS NULL)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(recipe.title)
        .bind(recipe.chef)
        .bind(recipe.time)
        .bind(recipe.servings)
        .bind(json!(recipe.ingredients))
        .bind(json!(["Prepare the ingredients.", "Cook and serve."]))
        .bind(json!({ "calories": 0.0, "protein": 0.0, "carbs": 0.0, "fat": 0.0 }))
        .bind(json!(recipe.tags))
        .bind(recipe.season)
        .bind(json!(recipe.mood))
        .bind(recipe.difficulty)
        .bind(recipe.cuisine)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }

    println!("Seeded {inserted} recipes");
    Ok(())
}
