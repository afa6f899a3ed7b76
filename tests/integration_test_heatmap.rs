mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{TestApp, parse_body};
use tower::ServiceExt;

/// Two-day room, A marks {0, 1, 24}, B marks {0, 25}. Returns
/// `(room_id, host_id)`.
async fn seed_worked_example(app: &TestApp) -> (i64, String) {
    let (room_id, host_id) = app.create_two_day_room("Worked Example").await;
    let a = app.join(room_id, "A", "UTC").await;
    let b = app.join(room_id, "B", "Asia/Tokyo").await;
    app.set_availability(room_id, a, 48, &[0, 1, 24]).await;
    app.set_availability(room_id, b, 48, &[0, 25]).await;
    (room_id, host_id)
}

#[tokio::test]
async fn test_heatmap_counts_match_worked_example() {
    let app = TestApp::new().await;
    let (room_id, _) = seed_worked_example(&app).await;

    let room = app.get_room(room_id).await;
    let heatmap = room["heatmap"].as_array().unwrap();

    assert_eq!(heatmap.len(), 48);
    assert_eq!(heatmap[0], 2);
    assert_eq!(heatmap[1], 1);
    assert_eq!(heatmap[24], 1);
    assert_eq!(heatmap[25], 1);

    let total: u64 = heatmap.iter().map(|c| c.as_u64().unwrap()).sum();
    assert_eq!(total, 5, "all other slots must be zero");
}

#[tokio::test]
async fn test_heatmap_is_stable_across_reads() {
    let app = TestApp::new().await;
    let (room_id, _) = seed_worked_example(&app).await;

    let first = app.get_room(room_id).await;
    let second = app.get_room(room_id).await;
    assert_eq!(first["heatmap"], second["heatmap"]);
}

#[tokio::test]
async fn test_best_slots_ordering_and_attribution() {
    let app = TestApp::new().await;
    let (room_id, _) = seed_worked_example(&app).await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/rooms/{}/best-slots", room_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    let slots = body["slots"].as_array().unwrap();
    let order: Vec<(i64, i64)> = slots
        .iter()
        .map(|s| {
            (
                s["slotIndex"].as_i64().unwrap(),
                s["participantCount"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(order, vec![(0, 2), (1, 1), (24, 1), (25, 1)]);

    let top = &slots[0];
    let names: Vec<&str> = top["availableParticipants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A", "B"]);

    // Slot 0 anchors at the room's start date, midnight UTC.
    assert!(
        top["startsAtUtc"]
            .as_str()
            .unwrap()
            .starts_with("2025-06-02T00:00:00")
    );
}

#[tokio::test]
async fn test_best_slots_honors_limit() {
    let app = TestApp::new().await;
    let (room_id, _) = seed_worked_example(&app).await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/rooms/{}/best-slots?limit=2", room_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = parse_body(res).await;

    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0]["slotIndex"], 0);
    assert_eq!(slots[1]["slotIndex"], 1);
}

#[tokio::test]
async fn test_slot_detail_names_available_participants() {
    let app = TestApp::new().await;
    let (room_id, _) = seed_worked_example(&app).await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/rooms/{}/slots/0", room_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["slotIndex"], 0);
    assert_eq!(body["participantCount"], 2);
    let available = body["availableParticipants"].as_array().unwrap();
    assert_eq!(available[0]["name"], "A");
    assert_eq!(available[0]["timezone"], "UTC");
    assert_eq!(available[1]["name"], "B");
    assert_eq!(available[1]["timezone"], "Asia/Tokyo");
}

#[tokio::test]
async fn test_slot_detail_rejects_out_of_range_index() {
    let app = TestApp::new().await;
    let (room_id, _) = seed_worked_example(&app).await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/rooms/{}/slots/9999", room_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
