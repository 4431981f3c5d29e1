//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint on `users.role` in
//! `20240101000001_create_users.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
