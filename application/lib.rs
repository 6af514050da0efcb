pub mod app_state;
pub mod config;
pub mod directory;
pub mod error;
pub mod handler;
pub mod models;
pub mod sync;
pub mod user_pool;
