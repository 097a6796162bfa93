mod notifications_store_config;

pub use notifications_store_config::*;
