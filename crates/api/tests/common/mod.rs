#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use airport_api::auth::jwt::{generate_access_token, JwtConfig};
use airport_api::auth::password::hash_password;
use airport_api::config::ServerConfig;
use airport_api::router::build_app_router;
use airport_api::state::AppState;
use airport_api::storage::ImageStore;
use airport_core::roles::{ROLE_ADMIN, ROLE_USER};
use airport_core::types::{DbId, Timestamp};
use airport_db::models::airplane::CreateAirplane;
use airport_db::models::airplane_type::CreateAirplaneType;
use airport_db::models::airport::CreateAirport;
use airport_db::models::flight::CreateFlight;
use airport_db::models::location::CreateLocation;
use airport_db::models::route::CreateRoute;
use airport_db::models::user::CreateUser;
use airport_db::repositories::{
    AirplaneRepo, AirplaneTypeRepo, AirportRepo, FlightRepo, LocationRepo, RouteRepo, UserRepo,
};
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(media_root: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_root,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router (same middleware stack as production).
///
/// Uploaded media goes to the system temp directory; tests that inspect the
/// written files use [`build_test_app_with_media`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_media(pool, &std::env::temp_dir().join("airport-api-tests"))
}

pub fn build_test_app_with_media(pool: PgPool, media_root: &Path) -> Router {
    let config = test_config(media_root.to_path_buf());
    let state = AppState {
        pool,
        images: Arc::new(ImageStore::new(media_root)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Identities
// ---------------------------------------------------------------------------

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Insert a user with the given role and return `(user_id, access_token)`.
pub async fn create_user_with_token(pool: &PgPool, email: &str, role: &str) -> (DbId, String) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    let config = test_config(PathBuf::new());
    let token =
        generate_access_token(user.id, &user.role, &config.jwt).expect("token should encode");
    (user.id, token)
}

pub async fn admin_token(pool: &PgPool) -> String {
    create_user_with_token(pool, "admin@airport.test", ROLE_ADMIN)
        .await
        .1
}

pub async fn user_token(pool: &PgPool, email: &str) -> String {
    create_user_with_token(pool, email, ROLE_USER).await.1
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Ids of a minimal bookable world: two airports, one route, one airplane.
pub struct World {
    pub location_id: DbId,
    pub source_airport_id: DbId,
    pub destination_airport_id: DbId,
    pub route_id: DbId,
    pub airplane_type_id: DbId,
    pub airplane_id: DbId,
}

/// London Heathrow -> Paris CDG on a 30 x 6 airplane.
pub async fn seed_world(pool: &PgPool) -> World {
    let london = LocationRepo::create(
        pool,
        &CreateLocation {
            city: "London".into(),
            country: "United Kingdom".into(),
        },
    )
    .await
    .unwrap();
    let paris = LocationRepo::create(
        pool,
        &CreateLocation {
            city: "Paris".into(),
            country: "France".into(),
        },
    )
    .await
    .unwrap();

    let lhr = AirportRepo::create(
        pool,
        &CreateAirport {
            name: "London Heathrow".into(),
            location: london.id,
        },
    )
    .await
    .unwrap();
    let cdg = AirportRepo::create(
        pool,
        &CreateAirport {
            name: "Paris Charles de Gaulle".into(),
            location: paris.id,
        },
    )
    .await
    .unwrap();

    let route = RouteRepo::create(
        pool,
        &CreateRoute {
            source: lhr.id,
            destination: cdg.id,
            distance: 344,
        },
    )
    .await
    .unwrap();

    let airplane_type = AirplaneTypeRepo::create(
        pool,
        &CreateAirplaneType {
            name: "Narrow-body".into(),
        },
    )
    .await
    .unwrap();
    let airplane = AirplaneRepo::create(
        pool,
        &CreateAirplane {
            name: "A320-01".into(),
            rows: 30,
            seats_in_row: 6,
            airplane_type: airplane_type.id,
        },
    )
    .await
    .unwrap();

    World {
        location_id: london.id,
        source_airport_id: lhr.id,
        destination_airport_id: cdg.id,
        route_id: route.id,
        airplane_type_id: airplane_type.id,
        airplane_id: airplane.id,
    }
}

/// Insert a three-hour flight on the world's route and airplane.
pub async fn seed_flight(pool: &PgPool, world: &World, departure: Timestamp) -> DbId {
    FlightRepo::create(
        pool,
        &CreateFlight {
            route: world.route_id,
            airplane: world.airplane_id,
            departure_time: departure,
            arrival_time: departure + chrono::Duration::hours(3),
            crew: Vec::new(),
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(
        app,
        request(Method::GET, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(
        app,
        request(Method::POST, uri, None)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(
        app,
        request(Method::POST, uri, Some(token))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(
        app,
        request(Method::PUT, uri, Some(token))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(
        app,
        request(Method::DELETE, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// POST a single-file multipart form.
pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    field: &str,
    filename: &str,
    data: &[u8],
    token: &str,
) -> Response<Body> {
    let boundary = "----airport-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    send(
        app,
        request(Method::POST, uri, Some(token))
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
