use club_roster_be::{
    db,
    errors::AppError,
    models::team::{NewTeam, TeamUpdate},
};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    db::init::create_tables(&pool)
        .await
        .expect("Failed to create tables");

    pool
}

fn sample_team(name: &str) -> NewTeam {
    NewTeam {
        name: name.to_string(),
        team_logo: Some(format!("/static/images/{}.png", name.to_lowercase())),
    }
}

#[tokio::test]
async fn create_and_get_team() {
    let pool = test_pool().await;

    let team_id = db::team::create_team(&pool, sample_team("Arsenal"))
        .await
        .unwrap();

    let team = db::team::get_team(&pool, team_id).await.unwrap();
    assert_eq!(team.name, "Arsenal");
    assert_eq!(team.team_logo.as_deref(), Some("/static/images/arsenal.png"));
}

#[tokio::test]
async fn get_unknown_team_is_not_found() {
    let pool = test_pool().await;

    let err = db::team::get_team(&pool, 99).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn duplicate_team_name_is_rejected_by_the_schema() {
    let pool = test_pool().await;

    db::team::create_team(&pool, sample_team("Arsenal"))
        .await
        .unwrap();

    let err = db::team::create_team(&pool, sample_team("Arsenal"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DatabaseError(_)));
}

#[tokio::test]
async fn partial_update_keeps_missing_fields() {
    let pool = test_pool().await;

    let team_id = db::team::create_team(&pool, sample_team("Arsenal"))
        .await
        .unwrap();

    let changes = TeamUpdate {
        name: Some("Arsenal FC".to_string()),
        ..Default::default()
    };
    db::team::update_team(&pool, team_id, changes).await.unwrap();

    let team = db::team::get_team(&pool, team_id).await.unwrap();
    assert_eq!(team.name, "Arsenal FC");
    assert_eq!(team.team_logo.as_deref(), Some("/static/images/arsenal.png"));
}

#[tokio::test]
async fn explicit_null_clears_team_logo() {
    let pool = test_pool().await;

    let team_id = db::team::create_team(&pool, sample_team("Arsenal"))
        .await
        .unwrap();

    let changes = TeamUpdate {
        team_logo: Some(None),
        ..Default::default()
    };
    db::team::update_team(&pool, team_id, changes).await.unwrap();

    let team = db::team::get_team(&pool, team_id).await.unwrap();
    assert_eq!(team.name, "Arsenal");
    assert_eq!(team.team_logo, None);
}

#[tokio::test]
async fn update_unknown_team_is_not_found() {
    let pool = test_pool().await;

    let err = db::team::update_team(&pool, 99, TeamUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let pool = test_pool().await;

    let team_id = db::team::create_team(&pool, sample_team("Arsenal"))
        .await
        .unwrap();

    db::team::delete_team(&pool, team_id).await.unwrap();

    let err = db::team::get_team(&pool, team_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = db::team::delete_team(&pool, team_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn search_matches_substrings_case_insensitively() {
    let pool = test_pool().await;

    db::team::create_team(&pool, sample_team("Real Madrid"))
        .await
        .unwrap();
    db::team::create_team(&pool, sample_team("REAL Sociedad"))
        .await
        .unwrap();
    db::team::create_team(&pool, sample_team("Arsenal"))
        .await
        .unwrap();

    let results = db::team::search_teams(&pool, "real").await.unwrap();
    let names: Vec<&str> = results.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Real Madrid", "REAL Sociedad"]);

    // An empty query matches everything, like the list endpoint.
    let all = db::team::search_teams(&pool, "").await.unwrap();
    assert_eq!(all.len(), 3);
}
