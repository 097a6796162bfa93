mod client_message;

pub use client_message::*;
