use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use meetgrid_backend::{
    api::router::create_router,
    config::Config,
    infra::repositories::{
        sqlite_participant_repo::SqliteParticipantRepo, sqlite_room_repo::SqliteRoomRepo,
    },
    state::AppState,
};
use serde_json::{Value, json};
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config,
            room_repo: Arc::new(SqliteRoomRepo::new(pool.clone())),
            participant_repo: Arc::new(SqliteParticipantRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Creates a two-day room (2025-06-02 to 2025-06-03, 48 slots) and
    /// returns `(room_id, host_id)`.
    #[allow(dead_code)]
    pub async fn create_two_day_room(&self, name: &str) -> (i64, String) {
        let payload = json!({
            "name": name,
            "hostName": "Host",
            "hostTimezone": "UTC",
            "startDate": "2025-06-02",
            "endDate": "2025-06-03",
            "timeStart": 9,
            "timeEnd": 18
        });

        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/rooms")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            response.status().is_success(),
            "Room creation failed in test helper: status {}",
            response.status()
        );

        let body = parse_body(response).await;
        (
            body["roomId"].as_i64().unwrap(),
            body["hostId"].as_str().unwrap().to_string(),
        )
    }

    /// Joins a room and returns the new participant's id.
    #[allow(dead_code)]
    pub async fn join(&self, room_id: i64, name: &str, timezone: &str) -> i64 {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/rooms/{}/join", room_id))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "name": name, "timezone": timezone }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            response.status().is_success(),
            "Join failed in test helper: status {}",
            response.status()
        );

        let body = parse_body(response).await;
        body["participant"]["id"].as_i64().unwrap()
    }

    /// Overwrites a participant's bitset with the given slot indices set.
    #[allow(dead_code)]
    pub async fn set_availability(
        &self,
        room_id: i64,
        participant_id: i64,
        total_slots: usize,
        bits: &[usize],
    ) -> Value {
        let mut availability = vec![b'0'; total_slots];
        for &bit in bits {
            availability[bit] = b'1';
        }
        let availability = String::from_utf8(availability).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!(
                        "/api/rooms/{}/participants/{}",
                        room_id, participant_id
                    ))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({ "availability": availability }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            response.status().is_success(),
            "Availability update failed in test helper: status {}",
            response.status()
        );

        parse_body(response).await
    }

    #[allow(dead_code)]
    pub async fn get_room(&self, room_id: i64) -> Value {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/rooms/{}", room_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        parse_body(response).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
