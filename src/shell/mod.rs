mod console_audio_sink;
mod console_shell;
mod ui_shell;

pub use console_audio_sink::*;
pub use console_shell::*;
pub use ui_shell::*;
