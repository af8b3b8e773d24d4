//! HTTP-level integration tests for genres, dashboard stats, and clips.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_file, post_json, TINY_PNG};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_genre_returns_201_and_rejects_duplicates(pool: PgPool) {
    let test = common::build_test_app(pool);

    let response = post_json(test.app(), "/api/v1/admin/genres", json!({ "name": " Horror " })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Horror");
    assert_eq!(json["notice"]["title"], "Added");

    let response = post_json(test.app(), "/api/v1/admin/genres", json!({ "name": "horror" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    let response = post_json(test.app(), "/api/v1/admin/genres", json!({ "name": "  " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn genre_in_use_cannot_be_deleted(pool: PgPool) {
    let test = common::build_test_app(pool);
    common::create_movie(&test, json!({ "title": "Up", "genre": "Comedy" })).await;

    let response = get(test.app(), "/api/v1/admin/genres").await;
    let json = body_json(response).await;
    let genre_id = |name: &str| {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|g| g["name"] == name)
            .unwrap()["id"]
            .as_str()
            .unwrap()
            .to_string()
    };

    let response = delete(
        test.app(),
        &format!("/api/v1/admin/genres/{}", genre_id("Comedy")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = delete(
        test.app(),
        &format!("/api/v1/admin/genres/{}", genre_id("Fantasy")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["notice"]["title"], "Deleted");
    assert_eq!(
        body["notice"]["description"],
        "Fantasy has been deleted successfully."
    );
}

// ---------------------------------------------------------------------------
// Dashboard stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_reflect_catalog_contents(pool: PgPool) {
    let test = common::build_test_app(pool);
    common::create_movie(&test, json!({ "title": "A", "status": "Published" })).await;
    common::create_movie(&test, json!({ "title": "B" })).await;
    common::create_series(&test, json!({ "title": "C", "status": "Published" })).await;

    let response = get(test.app(), "/api/v1/admin/stats").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let stats = json["data"].as_array().unwrap();

    let value = |title: &str| {
        stats
            .iter()
            .find(|s| s["title"] == title)
            .unwrap_or_else(|| panic!("missing stat {title}"))["value"]
            .as_str()
            .unwrap()
            .to_string()
    };
    assert_eq!(value("Total Movies"), "2");
    assert_eq!(value("Total Series"), "1");
    assert_eq!(value("Total Genres"), "5");
    assert_eq!(value("Total Clips"), "0");
    assert_eq!(value("Published"), "2");
    assert_eq!(value("Drafts"), "1");
}

// ---------------------------------------------------------------------------
// Clips
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn clips_upload_list_and_delete(pool: PgPool) {
    let test = common::build_test_app(pool);
    let series = common::create_series(
        &test,
        json!({ "title": "Severance", "status": "Published" }),
    )
    .await;
    let id = series["id"].as_str().unwrap();
    let clips_uri = format!("/api/v1/admin/media/{id}/clips");

    let response = post_file(test.app(), &clips_uri, "still.png", TINY_PNG).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["media_kind"], "series");
    assert_eq!(json["data"]["content_type"], "image/png");
    assert_eq!(json["notice"]["title"], "Uploaded");
    let clip_id = json["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(test.stored_files("clips"), 1);

    let response = get(test.app(), &clips_uri).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Clips show up on the public detail page.
    let response = get(test.app(), &format!("/api/v1/catalog/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["clips"][0]["id"], clip_id.as_str());

    let response = delete(test.app(), &format!("/api/v1/admin/clips/{clip_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["notice"]["description"],
        "clip has been deleted successfully."
    );
    assert_eq!(test.stored_files("clips"), 0);

    let response = get(test.app(), &clips_uri).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_media_removes_its_clips(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let movie = common::create_movie(&test, json!({ "title": "Tenet" })).await;
    let id = movie["id"].as_str().unwrap();

    let response = post_file(
        test.app(),
        &format!("/api/v1/admin/media/{id}/clips"),
        "scene.png",
        TINY_PNG,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(test.stored_files("clips"), 1);

    let response = delete(test.app(), &format!("/api/v1/admin/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM media_clips")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
    assert_eq!(test.stored_files("clips"), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn clip_upload_rejects_unknown_media_and_bad_extension(pool: PgPool) {
    let test = common::build_test_app(pool);

    let unknown = uuid::Uuid::now_v7();
    let response = post_file(
        test.app(),
        &format!("/api/v1/admin/media/{unknown}/clips"),
        "still.png",
        TINY_PNG,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let movie = common::create_movie(&test, json!({ "title": "Heat" })).await;
    let id = movie["id"].as_str().unwrap();
    let response = post_file(
        test.app(),
        &format!("/api/v1/admin/media/{id}/clips"),
        "notes.txt",
        b"hello",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test.stored_files("clips"), 0);
}
