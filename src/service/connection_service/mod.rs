mod connection_service;
mod connection_service_impl;
mod connection_worker;
mod dto;
mod transport;
mod websocket_transport;

pub use connection_service::*;
pub use connection_service_impl::*;
pub use dto::ConnectionServiceConfig;
pub use transport::*;
pub use websocket_transport::*;
