mod popup;
mod popups_service_config;

pub use popup::*;
pub use popups_service_config::*;
