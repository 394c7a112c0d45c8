//! Recipe CRUD tests against a real database
//!
//! Tests cover:
//! - Create/read round trip with ordered tags and nested sections
//! - Replace leaves `favorite` alone and bumps `modified`; patch only touches `favorite`
//! - Reads stamp `last_viewed`, and a stalled stamp never fails the read
//! - Delete is idempotent
//! - Missing ids map to 404
//! - The default owner is listed by `/api/users`

mod support;

use axum::http::{Method, StatusCode};
use sqlx::Connection as _;
use support::{
    assert_status, full_recipe, recipe, to_json_body, with_test_app, with_test_app_with_config,
    TestApp,
};

/// Evaluate a boolean SQL expression over the stored row of recipe `id`.
async fn row_check(app: &TestApp, id: i64, expr: &str) -> anyhow::Result<bool> {
    let sql = format!("SELECT {expr} FROM recipes WHERE id = $1");
    Ok(sqlx::query_scalar(&sql)
        .bind(id)
        .fetch_one(&app.state.db_pool)
        .await?)
}

#[tokio::test]
async fn create_then_get_round_trips_every_field() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let original = full_recipe();
            let id = app.create_recipe(&original).await?;
            assert!(id > 0);

            let json = app.get_json(&format!("/api/recipes/{id}")).await?;
            let fetched: cookbook::models::Recipe = serde_json::from_value(json["recipe"].clone())?;

            let mut expected = original.clone();
            expected.id = id;
            assert_eq!(fetched, expected);

            // camelCase on the wire
            assert_eq!(json["recipe"]["prepInfo"]["totalTime"], "30 min");
            assert_eq!(json["recipe"]["prepInfo"]["yield"], "4 servings");
            assert_eq!(json["recipe"]["imageSource"], original.image_source);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn tag_order_is_preserved_and_tags_are_shared() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let first = app.create_recipe(&recipe("Pho", &["soup", "beef", "vietnamese"])).await?;
            let second = app.create_recipe(&recipe("Bun Bo", &["vietnamese", "soup"])).await?;

            let json = app.get_json(&format!("/api/recipes/{first}")).await?;
            assert_eq!(
                json["recipe"]["tags"],
                serde_json::json!(["soup", "beef", "vietnamese"])
            );
            let json = app.get_json(&format!("/api/recipes/{second}")).await?;
            assert_eq!(json["recipe"]["tags"], serde_json::json!(["vietnamese", "soup"]));

            let tag_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
                .fetch_one(&app.state.db_pool)
                .await?;
            assert_eq!(tag_rows, 3);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn get_missing_recipe_is_not_found() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _, body) = app.request(Method::GET, "/api/recipes/999999", None).await?;
            assert_status(status, StatusCode::NOT_FOUND, "missing recipe");
            let json: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(json["Code"], 404);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn replace_updates_fields_but_not_favorite() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let id = app.create_recipe(&full_recipe()).await?;

            let mut replacement = recipe("Tomato Tofu (v2)", &["tag 2", "weeknight"]);
            replacement.favorite = false;
            replacement.directions = vec!["Just one step".to_string()];

            let (status, _, _) = app
                .request(
                    Method::PUT,
                    &format!("/api/recipes/{id}/"),
                    Some(to_json_body(&replacement)?),
                )
                .await?;
            assert_status(status, StatusCode::OK, "replace");

            let json = app.get_json(&format!("/api/recipes/{id}")).await?;
            assert_eq!(json["recipe"]["title"], "Tomato Tofu (v2)");
            assert_eq!(json["recipe"]["tags"], serde_json::json!(["tag 2", "weeknight"]));
            assert_eq!(json["recipe"]["directions"], serde_json::json!(["Just one step"]));
            assert_eq!(json["recipe"]["favorite"], true, "favorite is not replaced");
            assert_eq!(json["recipe"]["id"], id);
            assert!(row_check(app, id, "modified > created").await?, "modified is bumped");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn patch_toggles_favorite() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let id = app.create_recipe(&recipe("Flan", &["dessert"])).await?;

            let (status, _, _) = app
                .request(Method::PATCH, &format!("/api/recipes/{id}?favorite=true"), None)
                .await?;
            assert_status(status, StatusCode::OK, "patch");
            let json = app.get_json(&format!("/api/recipes/{id}")).await?;
            assert_eq!(json["recipe"]["favorite"], true);

            app.request(Method::PATCH, &format!("/api/recipes/{id}?favorite=false"), None)
                .await?;
            let json = app.get_json(&format!("/api/recipes/{id}")).await?;
            assert_eq!(json["recipe"]["favorite"], false);
            assert_eq!(json["recipe"]["title"], "Flan");
            assert!(
                row_check(app, id, "modified = created").await?,
                "patch leaves modified alone"
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn delete_is_idempotent() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let id = app.create_recipe(&recipe("Gone Soon", &[])).await?;

            let (status, _, _) = app
                .request(Method::DELETE, &format!("/api/recipes/{id}"), None)
                .await?;
            assert_status(status, StatusCode::OK, "first delete");

            let (status, _, _) = app
                .request(Method::DELETE, &format!("/api/recipes/{id}"), None)
                .await?;
            assert_status(status, StatusCode::OK, "second delete");

            let (status, _, _) = app
                .request(Method::GET, &format!("/api/recipes/{id}"), None)
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "read after delete");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn reading_a_recipe_marks_it_recently_used() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let older = app.create_recipe(&recipe("Older", &[])).await?;
            app.create_recipe(&recipe("Newer", &[])).await?;

            app.get_json(&format!("/api/recipes/{older}")).await?;

            assert!(row_check(app, older, "last_viewed > created").await?);

            let json = app.get_json("/api/recipes/summaries?sortBy=2").await?;
            assert_eq!(json["summaries"][0]["recipeId"], older);

            let json = app.get_json("/api/recipes/summaries?sortBy=-2").await?;
            assert_eq!(json["summaries"][0]["title"], "Newer");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn read_succeeds_while_last_viewed_stamp_is_blocked() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| config.database.query_timeout_ms = 1000,
        |app| {
            Box::pin(async move {
                let id = app.create_recipe(&recipe("Locked", &["dessert"])).await?;

                // Hold the row lock on a connection outside the app pool.
                let mut locker = sqlx::PgConnection::connect(&app.state.config.database.url).await?;
                let mut tx = locker.begin().await?;
                sqlx::query("SELECT id FROM recipes WHERE id = $1 FOR UPDATE")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;

                let (status, _, body) = app
                    .request(Method::GET, &format!("/api/recipes/{id}"), None)
                    .await?;
                tx.rollback().await?;

                assert_status(status, StatusCode::OK, "read with blocked view stamp");
                let json: serde_json::Value = serde_json::from_slice(&body)?;
                assert_eq!(json["recipe"]["title"], "Locked");
                assert_eq!(json["recipe"]["tags"], serde_json::json!(["dessert"]));
                Ok(())
            })
        },
    )
    .await
}

#[tokio::test]
async fn users_lists_default_owner() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let json = app.get_json("/api/users").await?;
            let owner = &app.state.config.recipes;
            assert_eq!(json["users"][0]["id"], owner.default_user_id.to_string());
            assert_eq!(json["users"][0]["email"], owner.default_user_email);
            Ok(())
        })
    })
    .await
}
