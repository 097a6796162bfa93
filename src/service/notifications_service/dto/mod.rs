mod settings_update;

pub use settings_update::*;
