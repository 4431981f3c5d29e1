pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod auth;
pub mod crew;
pub mod flight;
pub mod location;
pub mod order;
pub mod route;
