pub mod commands;
pub mod config;
pub mod error;
pub mod notify;
pub mod registry;
pub mod secret;
pub mod user;
pub mod utils;

pub use registry::UserRegistry;
pub use user::User;
