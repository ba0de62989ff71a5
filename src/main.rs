#[tokio::main]
async fn main() {
    club_roster_be::start_server().await;
}
