mod server_message;

pub use server_message::*;
