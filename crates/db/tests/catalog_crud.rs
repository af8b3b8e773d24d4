//! Integration tests for the catalog repositories.
//!
//! Exercises the repository layer against a real database:
//! - Genre embedding on create/read/update
//! - Patch semantics of updates
//! - Published-only listing
//! - Clip cleanup when a movie or series is deleted
//! - Constraint violations (duplicate genre, genre in use, check constraints)

use moviehub_core::catalog::PublishStatus;
use moviehub_db::models::genre::CreateGenre;
use moviehub_db::models::media_clip::CreateMediaClip;
use moviehub_db::models::movie::{CreateMovie, UpdateMovie};
use moviehub_db::models::series::{CreateSeries, UpdateSeries};
use moviehub_db::repositories::{DashboardRepo, GenreRepo, MediaClipRepo, MovieRepo, SeriesRepo};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn genre_id(pool: &PgPool, name: &str) -> Uuid {
    GenreRepo::find_by_name(pool, name)
        .await
        .unwrap()
        .expect("seeded genre")
        .id
}

fn new_movie(genre_id: Uuid, title: &str) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        year: 2010,
        genre_id,
        rating: 8.8,
        duration: Some("2h 28m".to_string()),
        description: None,
        status_id: None,
    }
}

fn new_series(genre_id: Uuid, title: &str, seasons: i32) -> CreateSeries {
    CreateSeries {
        title: title.to_string(),
        year: 2008,
        genre_id,
        rating: 9.5,
        seasons,
        duration: None,
        description: None,
        status_id: Some(PublishStatus::Published.id()),
    }
}

fn new_clip(media_id: Uuid, kind: &str, key: &str) -> CreateMediaClip {
    CreateMediaClip {
        media_id,
        media_kind: kind.to_string(),
        clip_url: format!("http://localhost/storage/clips/{key}"),
        storage_key: key.to_string(),
        content_type: "image/png".to_string(),
        size_bytes: 42,
    }
}

fn db_error_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeded_genres_are_listed_alphabetically(pool: PgPool) {
    let names: Vec<String> = GenreRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, ["Action", "Comedy", "Drama", "Fantasy", "Sci-Fi"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_genre_by_name_ignores_case(pool: PgPool) {
    let genre = GenreRepo::find_by_name(&pool, "  sci-fi ").await.unwrap();
    assert_eq!(genre.unwrap().name, "Sci-Fi");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_genre_name_violates_unique_index(pool: PgPool) {
    let err = GenreRepo::create(&pool, &CreateGenre { name: "DRAMA".into() })
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23505"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn genre_in_use_cannot_be_deleted(pool: PgPool) {
    let action = genre_id(&pool, "Action").await;
    MovieRepo::create(&pool, &new_movie(action, "The Dark Knight"))
        .await
        .unwrap();

    let err = GenreRepo::delete(&pool, action).await.unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unused_genre_can_be_deleted(pool: PgPool) {
    let genre = GenreRepo::create(&pool, &CreateGenre { name: "Horror".into() })
        .await
        .unwrap();
    assert!(GenreRepo::delete(&pool, genre.id).await.unwrap());
    assert!(GenreRepo::find_by_id(&pool, genre.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_movie_embeds_genre_and_status(pool: PgPool) {
    let scifi = genre_id(&pool, "Sci-Fi").await;
    let movie = MovieRepo::create(&pool, &new_movie(scifi, "Inception"))
        .await
        .unwrap();

    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.genre, "Sci-Fi");
    assert_eq!(movie.status, "Draft");
    assert_eq!(movie.status_id, PublishStatus::Draft.id());

    let found = MovieRepo::find_by_id(&pool, movie.id).await.unwrap().unwrap();
    assert_eq!(found.id, movie.id);
    assert_eq!(found.duration.as_deref(), Some("2h 28m"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_movie_only_touches_given_fields(pool: PgPool) {
    let scifi = genre_id(&pool, "Sci-Fi").await;
    let drama = genre_id(&pool, "Drama").await;
    let movie = MovieRepo::create(&pool, &new_movie(scifi, "Interstellar"))
        .await
        .unwrap();

    let updated = MovieRepo::update(
        &pool,
        movie.id,
        &UpdateMovie {
            genre_id: Some(drama),
            status_id: Some(PublishStatus::Published.id()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "Interstellar");
    assert_eq!(updated.rating, 8.8);
    assert_eq!(updated.genre, "Drama");
    assert_eq!(updated.status, "Published");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_can_clear_optional_text(pool: PgPool) {
    let action = genre_id(&pool, "Action").await;
    let mut input = new_movie(action, "Inception");
    input.description = Some("Dreams within dreams.".to_string());
    let movie = MovieRepo::create(&pool, &input).await.unwrap();

    // Absent keeps, Some(None) clears.
    let updated = MovieRepo::update(
        &pool,
        movie.id,
        &UpdateMovie {
            duration: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.duration, None);
    assert_eq!(updated.description.as_deref(), Some("Dreams within dreams."));

    let updated = MovieRepo::update(
        &pool,
        movie.id,
        &UpdateMovie {
            duration: Some(Some("2h 30m".to_string())),
            description: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.duration.as_deref(), Some("2h 30m"));
    assert_eq!(updated.description, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_movie_returns_none(pool: PgPool) {
    let result = MovieRepo::update(&pool, Uuid::now_v7(), &UpdateMovie::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_published_excludes_drafts(pool: PgPool) {
    let action = genre_id(&pool, "Action").await;
    let draft = MovieRepo::create(&pool, &new_movie(action, "Draft Cut"))
        .await
        .unwrap();
    let mut published = new_movie(action, "Final Cut");
    published.status_id = Some(PublishStatus::Published.id());
    let published = MovieRepo::create(&pool, &published).await.unwrap();

    let all = MovieRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);

    let listed = MovieRepo::list_published(&pool).await.unwrap();
    let ids: Vec<Uuid> = listed.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![published.id]);
    assert!(!ids.contains(&draft.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rating_check_constraint_enforced(pool: PgPool) {
    let action = genre_id(&pool, "Action").await;
    let mut movie = new_movie(action, "Too Good");
    movie.rating = 11.0;
    let err = MovieRepo::create(&pool, &movie).await.unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_poster_records_url_and_key(pool: PgPool) {
    let action = genre_id(&pool, "Action").await;
    let movie = MovieRepo::create(&pool, &new_movie(action, "Heat"))
        .await
        .unwrap();

    let updated = MovieRepo::set_poster(&pool, movie.id, "http://cdn/p.png", "movie/x/p.png")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.poster_url.as_deref(), Some("http://cdn/p.png"));
    assert_eq!(updated.poster_key.as_deref(), Some("movie/x/p.png"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_movie_removes_its_clips(pool: PgPool) {
    let action = genre_id(&pool, "Action").await;
    let movie = MovieRepo::create(&pool, &new_movie(action, "Heat"))
        .await
        .unwrap();
    MediaClipRepo::create(&pool, &new_clip(movie.id, "movie", "movie/a.png"))
        .await
        .unwrap();
    MediaClipRepo::create(&pool, &new_clip(movie.id, "movie", "movie/b.png"))
        .await
        .unwrap();

    assert!(MovieRepo::delete(&pool, movie.id).await.unwrap());
    assert!(MovieRepo::find_by_id(&pool, movie.id).await.unwrap().is_none());
    assert!(MediaClipRepo::list_by_media(&pool, movie.id)
        .await
        .unwrap()
        .is_empty());

    // Deleting again reports nothing removed.
    assert!(!MovieRepo::delete(&pool, movie.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_update_series_seasons(pool: PgPool) {
    let drama = genre_id(&pool, "Drama").await;
    let series = SeriesRepo::create(&pool, &new_series(drama, "Breaking Bad", 5))
        .await
        .unwrap();
    assert_eq!(series.seasons, 5);
    assert_eq!(series.status, "Published");

    let updated = SeriesRepo::update(
        &pool,
        series.id,
        &UpdateSeries {
            seasons: Some(6),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.seasons, 6);
    assert_eq!(updated.title, "Breaking Bad");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn zero_seasons_violates_check(pool: PgPool) {
    let drama = genre_id(&pool, "Drama").await;
    let err = SeriesRepo::create(&pool, &new_series(drama, "Pilot Only", 0))
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23514"));
}

// ---------------------------------------------------------------------------
// Dashboard counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_counts_cover_all_tables(pool: PgPool) {
    let action = genre_id(&pool, "Action").await;
    let movie = MovieRepo::create(&pool, &new_movie(action, "Heat"))
        .await
        .unwrap();
    SeriesRepo::create(&pool, &new_series(action, "24", 9))
        .await
        .unwrap();
    MediaClipRepo::create(&pool, &new_clip(movie.id, "movie", "movie/a.png"))
        .await
        .unwrap();

    let counts = DashboardRepo::counts(&pool).await.unwrap();
    assert_eq!(counts.movies, 1);
    assert_eq!(counts.series, 1);
    assert_eq!(counts.genres, 5);
    assert_eq!(counts.clips, 1);
    assert_eq!(counts.published, 1);
    assert_eq!(counts.drafts, 1);
}
