use serde::{Deserialize, Serialize};

///
/// User notification preferences.
///
/// Persisted wholesale; deserialization fills missing fields
/// from defaults so schema additions never break old data.
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub sound_enabled: bool,
    pub sound_type: SoundType,
    /// Alert tone length in milliseconds
    pub sound_duration: u64,
    pub show_toast: bool,
    pub auto_hide_toast: bool,
    /// Toast visibility time in milliseconds
    pub toast_duration: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            sound_type: SoundType::Chime,
            sound_duration: 300,
            show_toast: true,
            auto_hide_toast: true,
            toast_duration: 5000,
        }
    }
}

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SoundType {
    Beep,
    Chime,
    Bell,
    Ding,
    Pop,
}
