use chrono::NaiveDate;
use club_roster_be::{
    db,
    models::{player::NewPlayer, team::TeamUpdate, transfer::NewTransfer},
};
use serde_json::json;
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

async fn seed_player(pool: &SqlitePool) -> i64 {
    let player = NewPlayer {
        name: "Bellingham".to_string(),
        position: "Midfielder".to_string(),
        price: 103.0,
        team: "Real Madrid".to_string(),
        contract_duration: 6,
        years_left: 6,
        on_loan: false,
        loan_team: None,
        statistics: json!({"goals": 4}),
        contract_start_date: NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
        sell_on_clause: false,
        sell_on_percentage: None,
        signing_date: None,
        nationality: Some("England".to_string()),
        nationality_flag: None,
    };

    db::player::create_player(pool, player).await.unwrap()
}

fn sample_transfer(player_id: i64) -> NewTransfer {
    NewTransfer {
        player_id,
        from_team: "Borussia Dortmund".to_string(),
        to_team: "Real Madrid".to_string(),
        transfer_date: NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
        transfer_window: "summer".to_string(),
        fee: Some(103.0),
    }
}

#[tokio::test]
async fn transfer_auto_creates_missing_teams() {
    let pool = test_pool().await;
    let player_id = seed_player(&pool).await;

    // "Real Madrid" already exists from the player insert.
    db::transfer::create_transfer(&pool, sample_transfer(player_id))
        .await
        .unwrap();

    let teams = db::team::get_all_teams(&pool).await.unwrap();
    let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Real Madrid", "Borussia Dortmund"]);
}

#[tokio::test]
async fn transfer_date_round_trips_as_iso_string() {
    let pool = test_pool().await;
    let player_id = seed_player(&pool).await;

    db::transfer::create_transfer(&pool, sample_transfer(player_id))
        .await
        .unwrap();

    let transfers = db::transfer::get_all_transfers(&pool).await.unwrap();
    assert_eq!(transfers.len(), 1);
    assert_eq!(
        transfers[0].transfer_date,
        NaiveDate::from_ymd_opt(2023, 7, 1).unwrap()
    );

    let serialized = serde_json::to_value(&transfers[0]).unwrap();
    assert_eq!(serialized["transfer_date"], "2023-07-01");
    assert_eq!(serialized["transfer_window"], "summer");
}

#[tokio::test]
async fn fee_is_optional() {
    let pool = test_pool().await;
    let player_id = seed_player(&pool).await;

    let mut transfer = sample_transfer(player_id);
    transfer.fee = None;
    db::transfer::create_transfer(&pool, transfer).await.unwrap();

    let transfers = db::transfer::get_all_transfers(&pool).await.unwrap();
    assert_eq!(transfers[0].fee, None);
}

#[tokio::test]
async fn team_rename_does_not_rewrite_transfer_history() {
    let pool = test_pool().await;
    let player_id = seed_player(&pool).await;

    db::transfer::create_transfer(&pool, sample_transfer(player_id))
        .await
        .unwrap();

    let teams = db::team::get_all_teams(&pool).await.unwrap();
    let dortmund = teams.iter().find(|t| t.name == "Borussia Dortmund").unwrap();

    let changes = TeamUpdate {
        name: Some("BVB 09".to_string()),
        ..Default::default()
    };
    db::team::update_team(&pool, dortmund.id, changes)
        .await
        .unwrap();

    let transfers = db::transfer::get_all_transfers(&pool).await.unwrap();
    assert_eq!(transfers[0].from_team, "Borussia Dortmund");
}

#[tokio::test]
async fn deleting_player_keeps_transfer_history() {
    let pool = test_pool().await;
    let player_id = seed_player(&pool).await;

    db::transfer::create_transfer(&pool, sample_transfer(player_id))
        .await
        .unwrap();

    db::player::delete_player(&pool, player_id).await.unwrap();

    let transfers = db::transfer::get_all_transfers(&pool).await.unwrap();
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].player_id, player_id);
}

#[tokio::test]
async fn second_transfer_reuses_auto_created_teams() {
    let pool = test_pool().await;
    let player_id = seed_player(&pool).await;

    db::transfer::create_transfer(&pool, sample_transfer(player_id))
        .await
        .unwrap();
    let before = db::team::get_all_teams(&pool).await.unwrap().len();

    db::transfer::create_transfer(&pool, sample_transfer(player_id))
        .await
        .unwrap();
    let after = db::team::get_all_teams(&pool).await.unwrap().len();

    assert_eq!(before, after);
}
