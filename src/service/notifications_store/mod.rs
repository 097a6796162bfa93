mod dto;
mod notifications_store;
mod notifications_store_impl;

pub use dto::NotificationsStoreConfig;
pub use notifications_store::*;
pub use notifications_store_impl::*;
