pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;
pub mod service;
pub mod types;

pub use config::Config;
pub use error::HubError;
pub use router::{HubState, hub_router};
