pub mod alerts_service;
pub mod connection_service;
pub mod fanout_service;
pub mod notifications_service;
pub mod notifications_store;
pub mod popups_service;
