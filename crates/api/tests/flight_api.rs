//! HTTP-level tests for flight search, detail, and admin CRUD.

mod common;

use axum::http::StatusCode;
use common::{at, body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_i64().unwrap())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_shows_route_names_and_availability(pool: PgPool) {
    let token = common::user_token(&pool, "user@example.com").await;
    let world = common::seed_world(&pool).await;
    let flight_id = common::seed_flight(&pool, &world, at(2024, 3, 10, 9)).await;
    let app = common::build_test_app(pool);

    let json = body_json(get_auth(app, "/api/v1/flights", &token).await).await;
    let flight = &json["data"][0];

    assert_eq!(flight["id"], flight_id);
    assert_eq!(flight["route_source"], "London Heathrow");
    assert_eq!(flight["route_destination"], "Paris Charles de Gaulle");
    assert_eq!(flight["tickets_available"], 180);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_by_date_and_departure(pool: PgPool) {
    let token = common::user_token(&pool, "user@example.com").await;
    let world = common::seed_world(&pool).await;
    let on_day = common::seed_flight(&pool, &world, at(2024, 3, 10, 9)).await;
    let _next_day = common::seed_flight(&pool, &world, at(2024, 3, 11, 9)).await;
    let app = common::build_test_app(pool);

    let json = body_json(
        get_auth(
            app.clone(),
            "/api/v1/flights?depart_date=2024-03-10&departure=london",
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(ids(&json), vec![on_day]);

    let json = body_json(get_auth(app, "/api/v1/flights?arrival=berlin", &token).await).await;
    assert!(ids(&json).is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_most_recent_departure_first(pool: PgPool) {
    let token = common::user_token(&pool, "user@example.com").await;
    let world = common::seed_world(&pool).await;
    let earlier = common::seed_flight(&pool, &world, at(2024, 3, 10, 9)).await;
    let later = common::seed_flight(&pool, &world, at(2024, 3, 12, 9)).await;
    let app = common::build_test_app(pool);

    let json = body_json(get_auth(app, "/api/v1/flights", &token).await).await;
    assert_eq!(ids(&json), vec![later, earlier]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_depart_date_is_rejected(pool: PgPool) {
    let token = common::user_token(&pool, "user@example.com").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/flights?depart_date=10-03-2024", &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_reflects_booked_seats(pool: PgPool) {
    let token = common::user_token(&pool, "user@example.com").await;
    let world = common::seed_world(&pool).await;
    let flight_id = common::seed_flight(&pool, &world, at(2024, 3, 10, 9)).await;
    let app = common::build_test_app(pool);

    let order = json!({
        "tickets": [
            { "row": 2, "seat": 1, "flight": flight_id },
            { "row": 1, "seat": 2, "flight": flight_id },
            { "row": 1, "seat": 1, "flight": flight_id }
        ]
    });
    let response = post_json_auth(app.clone(), "/api/v1/orders", order, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get_auth(app, &format!("/api/v1/flights/{flight_id}"), &token).await).await;
    let detail = &json["data"];

    assert_eq!(detail["tickets_available"], 177);
    assert_eq!(
        detail["taken_places"],
        json!([
            { "row": 1, "seat": 1 },
            { "row": 1, "seat": 2 },
            { "row": 2, "seat": 1 }
        ])
    );
    assert_eq!(detail["route"]["source"], "London Heathrow");
    assert_eq!(detail["airplane"]["capacity"], 180);
    assert_eq!(detail["crew"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_flight_is_not_found(pool: PgPool) {
    let token = common::user_token(&pool, "user@example.com").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/flights/4242", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Flight with id 4242 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_creates_flight_with_crew(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let world = common::seed_world(&pool).await;
    let app = common::build_test_app(pool);

    let crew = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/crews",
            json!({ "first_name": "Amelia", "last_name": "Earhart" }),
            &admin,
        )
        .await,
    )
    .await;
    let crew_id = crew["data"]["id"].as_i64().unwrap();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/flights",
        json!({
            "route": world.route_id,
            "airplane": world.airplane_id,
            "departure_time": "2024-03-10T09:00:00Z",
            "arrival_time": "2024-03-10T12:00:00Z",
            "crew": [crew_id, crew_id]
        }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["crew"], json!([crew_id]));

    let flight_id = created["data"]["id"].as_i64().unwrap();
    let detail =
        body_json(get_auth(app, &format!("/api/v1/flights/{flight_id}"), &admin).await).await;
    assert_eq!(detail["data"]["crew"][0]["full_name"], "Amelia Earhart");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn flight_create_rejects_bad_input(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let world = common::seed_world(&pool).await;
    let app = common::build_test_app(pool);

    // Arrival before departure.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/flights",
        json!({
            "route": world.route_id,
            "airplane": world.airplane_id,
            "departure_time": "2024-03-10T12:00:00Z",
            "arrival_time": "2024-03-10T09:00:00Z"
        }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown airplane.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/flights",
        json!({
            "route": world.route_id,
            "airplane": 9999,
            "departure_time": "2024-03-10T09:00:00Z",
            "arrival_time": "2024-03-10T12:00:00Z"
        }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Unknown crew member.
    let response = post_json_auth(
        app,
        "/api/v1/flights",
        json!({
            "route": world.route_id,
            "airplane": world.airplane_id,
            "departure_time": "2024-03-10T09:00:00Z",
            "arrival_time": "2024-03-10T12:00:00Z",
            "crew": [777]
        }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Crew with id 777 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_updates_and_deletes_flight(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let world = common::seed_world(&pool).await;
    let flight_id = common::seed_flight(&pool, &world, at(2024, 3, 10, 9)).await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/flights/{flight_id}");

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({
            "route": world.route_id,
            "airplane": world.airplane_id,
            "departure_time": "2024-04-01T06:00:00Z",
            "arrival_time": "2024-04-01T08:30:00Z"
        }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["departure_time"], "2024-04-01T06:00:00Z");

    let response = delete_auth(app.clone(), &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app.clone(), &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn regular_user_cannot_change_flights(pool: PgPool) {
    let token = common::user_token(&pool, "user@example.com").await;
    let world = common::seed_world(&pool).await;
    let flight_id = common::seed_flight(&pool, &world, at(2024, 3, 10, 9)).await;
    let app = common::build_test_app(pool);

    let response = delete_auth(app, &format!("/api/v1/flights/{flight_id}"), &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_cannot_move_booked_flight_to_smaller_airplane(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let token = common::user_token(&pool, "user@example.com").await;
    let world = common::seed_world(&pool).await;
    let flight_id = common::seed_flight(&pool, &world, at(2024, 3, 10, 9)).await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/flights/{flight_id}");

    let tickets: Vec<_> = (1..=5)
        .map(|seat| json!({ "row": 30, "seat": seat, "flight": flight_id }))
        .collect();
    let response = post_json_auth(
        app.clone(),
        "/api/v1/orders",
        json!({ "tickets": tickets }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let tiny = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/airplanes",
            json!({
                "name": "Cessna 150",
                "rows": 1,
                "seats_in_row": 1,
                "airplane_type": world.airplane_type_id
            }),
            &admin,
        )
        .await,
    )
    .await;
    let tiny_id = tiny["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({
            "route": world.route_id,
            "airplane": tiny_id,
            "departure_time": "2024-03-10T09:00:00Z",
            "arrival_time": "2024-03-10T12:00:00Z"
        }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = get_auth(app.clone(), "/api/v1/flights", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"][0]["tickets_available"], 175);

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;
    assert_eq!(detail["data"]["airplane"]["id"], world.airplane_id);
    assert_eq!(detail["data"]["tickets_available"], 175);
}
