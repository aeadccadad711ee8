pub mod connection;
pub mod hypotheticals;
pub mod models;
pub mod players;
pub mod repository;
pub mod setup;
pub mod stats;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
pub use repository::StatRepository;
