use chrono::{Duration, Utc};
use recipe_share_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        auth::{LoginRequest, RegisterRequest},
        collections::CreateCollectionRequest,
        dashboard::SaveMealPlanRequest,
        favorites::{AddFavoriteRequest, CollectionRecipeRequest, CreateEmbeddedCollectionRequest},
        orders::{CreateOrderRequest, UpdateOrderStatusRequest},
        recipes::{AddReviewRequest, CreateRecipeRequest},
    },
    error::AppError,
    middleware::auth::{AuthUser, decode_token},
    models::{Nutrition, NotificationKind, OrderItem, OrderStatus, Season, ShippingAddress, WeekPlan},
    routes::params::{RecipeQuery, RecipeSort},
    services::{
        auth_service, collection_service, dashboard_service, favorite_service,
        notification_service, order_service, recipe_service, user_service,
    },
    state::AppState,
};
use sea_orm::{ConnectionTrait, Statement, TransactionTrait};
use std::time::Duration as StdDuration;

// Integration flow: register -> recipe -> favorites/reviews/collections -> delete cascade,
// then orders and meal plans.
#[tokio::test]
async fn recipe_sharing_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let alice = register(&state, "Alice", "Alice@Example.com").await?;
    let bob = register(&state, "Bob", "bob@example.com").await?;

    // Email is stored lower-cased and must be unique
    let taken = auth_service::register_user(
        &state,
        RegisterRequest {
            name: "Other".into(),
            email: "alice@example.com".into(),
            password: "secret1".into(),
        },
    )
    .await;
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    // Alice creates a recipe
    let recipe = recipe_service::create_recipe(&state, &alice, new_recipe("Shakshuka"))
        .await?
        .data
        .expect("recipe");
    let alice_doc = user_service::get_me(&state, &alice).await?.data.expect("user");
    assert_eq!(alice_doc.created_recipes, vec![recipe.id]);

    // Bob favorites it; a second add conflicts
    favorite_service::add_favorite(&state, &bob, AddFavoriteRequest { recipe_id: recipe.id })
        .await?;
    let duplicate =
        favorite_service::add_favorite(&state, &bob, AddFavoriteRequest { recipe_id: recipe.id })
            .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    // Bob reviews it
    let reviewed = recipe_service::add_review(
        &state,
        &bob,
        recipe.id,
        AddReviewRequest {
            comment: "Great with feta".into(),
        },
    )
    .await?
    .data
    .expect("recipe");
    assert_eq!(reviewed.reviews_count, 1);
    assert_eq!(reviewed.reviews.len(), 1);

    // Alice was notified of the favorite and the comment
    let inbox = notification_service::list_notifications(&state, &alice)
        .await?
        .data
        .expect("notifications");
    assert_eq!(inbox.unread_count, 2);
    assert!(inbox.items.iter().any(|n| n.kind == NotificationKind::Like));
    assert!(inbox.items.iter().any(|n| n.kind == NotificationKind::Comment));

    // Alice reviewing her own recipe does not notify her
    recipe_service::add_review(
        &state,
        &alice,
        recipe.id,
        AddReviewRequest {
            comment: "Thanks!".into(),
        },
    )
    .await?;
    let inbox = notification_service::list_notifications(&state, &alice)
        .await?
        .data
        .expect("notifications");
    assert_eq!(inbox.items.len(), 2);

    // Bob files it into an embedded and a standalone collection
    let embedded = favorite_service::create_collection(
        &state,
        &bob,
        CreateEmbeddedCollectionRequest {
            name: "Brunch".into(),
        },
    )
    .await?
    .data
    .expect("embedded collection");
    favorite_service::add_recipe_to_collection(
        &state,
        &bob,
        embedded.id,
        CollectionRecipeRequest { recipe_id: recipe.id },
    )
    .await?;

    let standalone = collection_service::create_collection(
        &state,
        &bob,
        CreateCollectionRequest {
            name: "Eggs".into(),
            description: String::new(),
            is_public: None,
            cover_image: None,
            tags: Vec::new(),
        },
    )
    .await?
    .data
    .expect("collection");
    assert!(!standalone.is_public);
    collection_service::add_recipe(&state, &bob, standalone.id, recipe.id).await?;

    // Private collection: owner reads it, others are forbidden
    let detail = collection_service::get_collection(&state, &bob, standalone.id)
        .await?
        .data
        .expect("detail");
    assert_eq!(detail.recipe_details.len(), 1);
    let forbidden = collection_service::get_collection(&state, &alice, standalone.id).await;
    assert!(matches!(forbidden, Err(AppError::Forbidden)));

    // Only the owner may delete; deletion removes every reference
    let not_owner = recipe_service::delete_recipe(&state, &bob, recipe.id).await;
    assert!(matches!(not_owner, Err(AppError::Forbidden)));
    recipe_service::delete_recipe(&state, &alice, recipe.id).await?;

    let bob_doc = user_service::get_me(&state, &bob).await?.data.expect("user");
    assert!(bob_doc.favorites.is_empty());
    assert!(bob_doc.collections[0].recipes.is_empty());
    let alice_doc = user_service::get_me(&state, &alice).await?.data.expect("user");
    assert!(alice_doc.created_recipes.is_empty());
    let detail = collection_service::get_collection(&state, &bob, standalone.id)
        .await?
        .data
        .expect("detail");
    assert!(detail.collection.recipes.is_empty());

    // A deleted recipe can no longer be referenced
    let gone =
        favorite_service::add_favorite(&state, &bob, AddFavoriteRequest { recipe_id: recipe.id })
            .await;
    assert!(matches!(gone, Err(AppError::NotFound("Recipe"))));
    let gone = favorite_service::add_recipe_to_collection(
        &state,
        &bob,
        embedded.id,
        CollectionRecipeRequest { recipe_id: recipe.id },
    )
    .await;
    assert!(matches!(gone, Err(AppError::NotFound("Recipe"))));
    let gone = collection_service::add_recipe(&state, &bob, standalone.id, recipe.id).await;
    assert!(matches!(gone, Err(AppError::NotFound("Recipe"))));

    // Orders
    let order = order_service::create_order(
        &state,
        &bob,
        CreateOrderRequest {
            items: vec![OrderItem {
                recipe_id: None,
                name: "Spice kit".into(),
                quantity: 2,
                price: 1500,
            }],
            shipping_address: ShippingAddress::default(),
            payment_method: "card".into(),
        },
    )
    .await?
    .data
    .expect("order");
    assert_eq!(order.total_amount, 3000);
    assert_eq!(order.status, OrderStatus::Pending);

    let paid = order_service::pay_order(&state, &bob, order.id).await?.data.expect("order");
    assert!(paid.is_paid);
    assert_eq!(paid.status, OrderStatus::Processing);

    let foreign = order_service::get_order(&state, &alice, order.id).await;
    assert!(matches!(foreign, Err(AppError::Forbidden)));

    let delivered = order_service::update_status(
        &state,
        &bob,
        order.id,
        UpdateOrderStatusRequest {
            status: "delivered".into(),
        },
    )
    .await?
    .data
    .expect("order");
    assert!(delivered.is_delivered);

    let cancel = order_service::cancel_order(&state, &bob, order.id).await;
    assert!(matches!(cancel, Err(AppError::InvalidTransition(_))));

    let second = order_service::create_order(
        &state,
        &bob,
        CreateOrderRequest {
            items: vec![OrderItem {
                recipe_id: None,
                name: "Apron".into(),
                quantity: 1,
                price: 2000,
            }],
            shipping_address: ShippingAddress::default(),
            payment_method: "card".into(),
        },
    )
    .await?
    .data
    .expect("order");
    let cancelled = order_service::cancel_order(&state, &bob, second.id)
        .await?
        .data
        .expect("order");
    assert_eq!(cancelled.status, OrderStatus::Cancelled);

    // Order events reach the owner as system notices; the rejected cancel sent none
    let inbox = notification_service::list_notifications(&state, &bob)
        .await?
        .data
        .expect("notifications");
    let notices: Vec<_> = inbox
        .items
        .iter()
        .filter(|n| n.kind == NotificationKind::Order)
        .collect();
    assert_eq!(notices.len(), 5);
    assert!(notices.iter().all(|n| n.sender_id.is_none()));
    assert_eq!(
        notices.iter().filter(|n| n.order_id == Some(order.id)).count(),
        3
    );
    assert_eq!(
        notices.iter().filter(|n| n.order_id == Some(second.id)).count(),
        2
    );

    let (cancels,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM audit_logs WHERE action = 'order_cancel' AND resource = 'orders'",
    )
    .fetch_one(&state.pool)
    .await?;
    assert_eq!(cancels, 1);

    // Meal plans within a day of each other collapse into one week
    let start = Utc::now();
    for offset in [0, 2] {
        dashboard_service::save_meal_plan(
            &state,
            &bob,
            SaveMealPlanRequest {
                plan: WeekPlan::default(),
                week_start_date: Some(start + Duration::hours(offset)),
            },
        )
        .await?;
    }
    let plans = dashboard_service::meal_plans(&state, &bob).await?.data.expect("plans");
    assert_eq!(plans.items.len(), 1);

    let stats = dashboard_service::stats(&state, &bob).await?.data.expect("stats");
    assert_eq!(stats.total_orders, 2);
    assert_eq!(stats.favorites, 0);

    search_and_sort(&state, &alice).await?;
    delete_waits_for_pending_reference(&state, &alice, &bob).await?;

    Ok(())
}

// Runs against an otherwise empty recipes table.
async fn search_and_sort(state: &AppState, owner: &AuthUser) -> anyhow::Result<()> {
    let fixtures: [(&str, &[&str], &[&str], Season, i32, f64, i32); 4] = [
        ("Pea Soup", &["dinner", "French"], &["cozy"], Season::Spring, 40, 4.5, 3),
        ("Tomato Salad", &["lunch", "Italian"], &["fresh", "light"], Season::Summer, 15, 3.0, 2),
        ("Berry_Tart 100%", &["dessert", "French"], &["light"], Season::Summer, 90, 4.9, 1),
        ("Chili", &["dinner", "Mexican"], &["cozy", "party"], Season::Winter, 60, 2.0, 0),
    ];
    for (title, tags, mood, season, time, rating, days_ago) in fixtures {
        let mut req = new_recipe(title);
        req.tags = tags.iter().map(|t| t.to_string()).collect();
        req.mood = mood.iter().map(|m| m.to_string()).collect();
        req.season = Some(season);
        req.time = time;
        let created = recipe_service::create_recipe(state, owner, req)
            .await?
            .data
            .expect("recipe");
        sqlx::query(
            "UPDATE recipes SET rating = $1, created_at = NOW() - make_interval(days => $2) WHERE id = $3",
        )
        .bind(rating)
        .bind(days_ago)
        .bind(created.id)
        .execute(&state.pool)
        .await?;
    }

    let all = ["Chili", "Berry_Tart 100%", "Tomato Salad", "Pea Soup"];
    assert_eq!(titles(state, RecipeQuery::default()).await?, all);

    let by_rating = RecipeQuery {
        sort: Some(RecipeSort::Rating),
        ..Default::default()
    };
    assert_eq!(
        titles(state, by_rating).await?,
        ["Berry_Tart 100%", "Pea Soup", "Tomato Salad", "Chili"]
    );

    let by_time = RecipeQuery {
        sort: Some(RecipeSort::Time),
        ..Default::default()
    };
    assert_eq!(
        titles(state, by_time).await?,
        ["Tomato Salad", "Pea Soup", "Chili", "Berry_Tart 100%"]
    );

    // Tags match any-of
    let any_tag = RecipeQuery {
        tags: Some("dinner, dessert".into()),
        sort: Some(RecipeSort::Time),
        ..Default::default()
    };
    assert_eq!(
        titles(state, any_tag).await?,
        ["Pea Soup", "Chili", "Berry_Tart 100%"]
    );

    // Cuisine is a tag test
    let french = RecipeQuery {
        cuisine: Some("French".into()),
        ..Default::default()
    };
    assert_eq!(titles(state, french).await?, ["Berry_Tart 100%", "Pea Soup"]);

    // Filters combine with AND; mood is any-of
    let summer_light = RecipeQuery {
        season: Some(Season::Summer),
        mood: Some("cozy,light".into()),
        ..Default::default()
    };
    assert_eq!(
        titles(state, summer_light).await?,
        ["Berry_Tart 100%", "Tomato Salad"]
    );
    let summer_cozy = RecipeQuery {
        season: Some(Season::Summer),
        mood: Some("cozy".into()),
        ..Default::default()
    };
    assert!(titles(state, summer_cozy).await?.is_empty());
    let dinner_party = RecipeQuery {
        tags: Some("dinner".into()),
        mood: Some("party".into()),
        ..Default::default()
    };
    assert_eq!(titles(state, dinner_party).await?, ["Chili"]);

    // Free text hits titles case-insensitively and individual tags
    assert_eq!(titles(state, text("SOUP")).await?, ["Pea Soup"]);
    assert_eq!(titles(state, text("mexi")).await?, ["Chili"]);

    // LIKE wildcards and JSON punctuation match literally
    assert_eq!(titles(state, text("%")).await?, ["Berry_Tart 100%"]);
    assert_eq!(titles(state, text("_")).await?, ["Berry_Tart 100%"]);
    assert!(titles(state, text("\",\"")).await?.is_empty());
    assert!(titles(state, text(",")).await?.is_empty());

    let page = recipe_service::list_recipes(
        state,
        RecipeQuery {
            page: Some(2),
            per_page: Some(3),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(page.data.expect("recipes").items.len(), 1);
    assert_eq!(page.meta.expect("meta").total, Some(4));

    Ok(())
}

fn text(search: &str) -> RecipeQuery {
    RecipeQuery {
        search: Some(search.into()),
        ..Default::default()
    }
}

async fn titles(state: &AppState, query: RecipeQuery) -> anyhow::Result<Vec<String>> {
    let list = recipe_service::list_recipes(state, query)
        .await?
        .data
        .expect("recipes");
    Ok(list.items.into_iter().map(|r| r.title).collect())
}

// A transaction holding the recipe's share lock holds off the delete.
async fn delete_waits_for_pending_reference(
    state: &AppState,
    owner: &AuthUser,
    fan: &AuthUser,
) -> anyhow::Result<()> {
    let recipe = recipe_service::create_recipe(state, owner, new_recipe("Flatbread"))
        .await?
        .data
        .expect("recipe");

    let txn = state.orm.begin().await?;
    recipe_service::share_recipe(&txn, recipe.id).await?;

    let delete = tokio::spawn({
        let state = state.clone();
        let owner = owner.clone();
        async move { recipe_service::delete_recipe(&state, &owner, recipe.id).await }
    });
    tokio::time::sleep(StdDuration::from_millis(300)).await;
    assert!(!delete.is_finished());
    txn.commit().await?;
    delete.await??;

    let gone =
        favorite_service::add_favorite(state, fan, AddFavoriteRequest { recipe_id: recipe.id })
            .await;
    assert!(matches!(gone, Err(AppError::NotFound("Recipe"))));

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE notifications, orders, collections, recipes, audit_logs, users CASCADE",
    ))
    .await?;

    let config = AppConfig {
        database_url: database_url.to_string(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: "test-secret".into(),
        jwt_ttl_hours: 1,
    };
    Ok(AppState::new(orm, config))
}

async fn register(state: &AppState, name: &str, email: &str) -> anyhow::Result<AuthUser> {
    auth_service::register_user(
        state,
        RegisterRequest {
            name: name.into(),
            email: email.into(),
            password: "secret1".into(),
        },
    )
    .await?;

    let login = auth_service::login_user(
        state,
        LoginRequest {
            email: email.into(),
            password: "secret1".into(),
        },
    )
    .await?
    .data
    .expect("login");

    let claims = decode_token(&login.token, &state.config.jwt_secret)?;
    assert_eq!(claims.name, name);

    Ok(AuthUser {
        user_id: login.user.id,
        name: login.user.name,
    })
}

fn new_recipe(title: &str) -> CreateRecipeRequest {
    CreateRecipeRequest {
        title: title.into(),
        chef: None,
        image: None,
        time: 30,
        servings: Some(2),
        ingredients: vec!["eggs".into(), "tomatoes".into()],
        instructions: vec!["Simmer".into()],
        nutrition: Nutrition::default(),
        tags: vec!["breakfast".into()],
        season: None,
        mood: Vec::new(),
        difficulty: None,
        cuisine: "Middle Eastern".into(),
    }
}
