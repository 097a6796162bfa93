use crate::dto::{NotificationSettings, SoundType};
use serde::Deserialize;

///
/// Partial settings change. Absent fields keep their current value;
/// persistence always writes the merged object wholesale.
///
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsUpdate {
    pub sound_enabled: Option<bool>,
    pub sound_type: Option<SoundType>,
    pub sound_duration: Option<u64>,
    pub show_toast: Option<bool>,
    pub auto_hide_toast: Option<bool>,
    pub toast_duration: Option<u64>,
}

impl SettingsUpdate {
    pub fn merge_into(self, settings: &mut NotificationSettings) {
        if let Some(sound_enabled) = self.sound_enabled {
            settings.sound_enabled = sound_enabled;
        }
        if let Some(sound_type) = self.sound_type {
            settings.sound_type = sound_type;
        }
        if let Some(sound_duration) = self.sound_duration {
            settings.sound_duration = sound_duration;
        }
        if let Some(show_toast) = self.show_toast {
            settings.show_toast = show_toast;
        }
        if let Some(auto_hide_toast) = self.auto_hide_toast {
            settings.auto_hide_toast = auto_hide_toast;
        }
        if let Some(toast_duration) = self.toast_duration {
            settings.toast_duration = toast_duration;
        }
    }
}
