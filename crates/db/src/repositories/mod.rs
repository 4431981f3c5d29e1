//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async data-access methods
//! that accept `&PgPool` as the first argument. Methods that must run inside
//! a booking transaction accept `&mut PgConnection` instead.

pub mod airplane_repo;
pub mod airplane_type_repo;
pub mod airport_repo;
pub mod crew_repo;
pub mod flight_repo;
pub mod location_repo;
pub mod order_repo;
pub mod route_repo;
pub mod ticket_repo;
pub mod user_repo;

pub use airplane_repo::AirplaneRepo;
pub use airplane_type_repo::AirplaneTypeRepo;
pub use airport_repo::AirportRepo;
pub use crew_repo::CrewRepo;
pub use flight_repo::FlightRepo;
pub use location_repo::LocationRepo;
pub use order_repo::OrderRepo;
pub use route_repo::RouteRepo;
pub use ticket_repo::TicketRepo;
pub use user_repo::UserRepo;
