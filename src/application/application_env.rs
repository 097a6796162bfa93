use anyhow::anyhow;
use std::path::PathBuf;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub server_url: String,

    pub storage_directory: PathBuf,

    pub client_id: String,
    /// Businesses handling live orders want popups that demand
    /// acknowledgement instead of passive toasts
    pub blocking_popups: bool,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("ADMIN_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("ADMIN_NOTIFIER_LOG_FILENAME")?;
        let server_url = Self::env_var("ADMIN_NOTIFIER_SERVER_URL")?;
        let storage_directory = Self::env_var("ADMIN_NOTIFIER_STORAGE_DIRECTORY")?.into();
        let client_id = Self::env_var("ADMIN_NOTIFIER_CLIENT_ID")?;
        let blocking_popups = match std::env::var("ADMIN_NOTIFIER_BLOCKING_POPUPS") {
            Ok(value) => value.parse().map_err(|_| {
                anyhow!("environment variable ADMIN_NOTIFIER_BLOCKING_POPUPS is not a bool")
            })?,
            Err(_) => false,
        };

        Ok(Self {
            log_directory,
            log_filename,
            server_url,
            storage_directory,
            client_id,
            blocking_popups,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
