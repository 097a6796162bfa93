mod dto;
mod popups_service;
mod popups_service_impl;

pub use dto::*;
pub use popups_service::*;
pub use popups_service_impl::*;
