//! Seed helpers shared by the repository integration tests.

#![allow(dead_code)]

use airport_db::models::airplane::CreateAirplane;
use airport_db::models::airplane_type::CreateAirplaneType;
use airport_db::models::airport::CreateAirport;
use airport_db::models::flight::{CreateFlight, Flight};
use airport_db::models::location::CreateLocation;
use airport_db::models::route::CreateRoute;
use airport_db::models::user::CreateUser;
use airport_db::repositories::{
    AirplaneRepo, AirplaneTypeRepo, AirportRepo, FlightRepo, LocationRepo, RouteRepo, UserRepo,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::PgPool;

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            role: "user".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_airport(pool: &PgPool, name: &str, city: &str) -> i64 {
    let location = LocationRepo::create(
        pool,
        &CreateLocation {
            city: city.to_string(),
            country: "Testland".to_string(),
        },
    )
    .await
    .unwrap();
    AirportRepo::create(
        pool,
        &CreateAirport {
            name: name.to_string(),
            location: location.id,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_route(pool: &PgPool, source: &str, destination: &str) -> i64 {
    let src = seed_airport(pool, source, source).await;
    let dst = seed_airport(pool, destination, destination).await;
    RouteRepo::create(
        pool,
        &CreateRoute {
            source: src,
            destination: dst,
            distance: 1000,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_airplane(pool: &PgPool, rows: i32, seats_in_row: i32) -> i64 {
    let airplane_type = AirplaneTypeRepo::create(
        pool,
        &CreateAirplaneType {
            name: "Narrow-body".to_string(),
        },
    )
    .await
    .unwrap();
    AirplaneRepo::create(
        pool,
        &CreateAirplane {
            name: "A320".to_string(),
            rows,
            seats_in_row,
            airplane_type: airplane_type.id,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_flight(
    pool: &PgPool,
    route: i64,
    airplane: i64,
    departure: DateTime<Utc>,
) -> Flight {
    FlightRepo::create(
        pool,
        &CreateFlight {
            route,
            airplane,
            departure_time: departure,
            arrival_time: departure + Duration::hours(3),
            crew: vec![],
        },
    )
    .await
    .unwrap()
}

/// A 30x6 airplane flying London Heathrow -> Paris CDG on 2024-03-10.
pub async fn seed_standard_flight(pool: &PgPool) -> Flight {
    let route = seed_route(pool, "London Heathrow", "Paris CDG").await;
    let airplane = seed_airplane(pool, 30, 6).await;
    seed_flight(pool, route, airplane, at(2024, 3, 10, 9)).await
}

pub async fn ticket_count(pool: &PgPool, flight_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM tickets WHERE flight_id = $1")
        .bind(flight_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn order_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await
        .unwrap()
}
