mod fanout_service;
mod fanout_service_impl;

pub use fanout_service::*;
pub use fanout_service_impl::*;
