mod connection_service_config;

pub use connection_service_config::*;
