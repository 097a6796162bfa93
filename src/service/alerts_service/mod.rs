mod alerts_service;
mod alerts_service_impl;
mod audio_sink;
mod tone;

pub use alerts_service::*;
pub use alerts_service_impl::*;
pub use audio_sink::*;
