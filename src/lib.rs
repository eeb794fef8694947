pub mod adapter;
pub mod api;
pub mod config;
pub mod error;
pub mod providers;
pub mod tools;
pub mod types;

pub use adapter::PublicDataAdapter;
pub use config::Config;
pub use error::QueryError;
pub use types::*;
