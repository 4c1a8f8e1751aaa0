pub mod error;
pub mod server_config;
pub mod settings;
