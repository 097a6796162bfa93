pub mod input;
pub mod output;

mod connection_state;
mod notification;
mod profile;
mod settings;
mod snapshot;

pub use connection_state::*;
pub use notification::*;
pub use profile::*;
pub use settings::*;
pub use snapshot::*;
