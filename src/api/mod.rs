//! HTTP transport
//!
//! A thin axum binding over the core operations. The core never sees HTTP;
//! the handlers validate field formats, call into [`crate::lot::ParkingLot`],
//! and shape the JSON responses.

pub mod routes;
pub mod server;

pub use self::routes::routes;
pub use self::server::{ServerConfig, serve};
