// SPDX-License-Identifier: MPL-2.0
//! Where FolioReel keeps its settings.
//!
//! The config directory is resolved in this order:
//! 1. an explicit override passed to [`get_app_config_dir_with_override`]
//! 2. the `--config-dir` CLI argument, registered with [`init_cli_override`]
//! 3. the `FOLIO_REEL_CONFIG_DIR` environment variable, when non-empty
//! 4. the platform config directory from the `dirs` crate, plus [`APP_NAME`]

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name appended to the platform config directory.
pub const APP_NAME: &str = "FolioReel";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_REEL_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--config-dir` argument. Only the first call has an effect.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already registered");
    }
}

/// Returns the config directory, or `None` when the platform has none.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }

    match std::env::var(ENV_CONFIG_DIR) {
        Ok(env_path) if !env_path.is_empty() => return Some(PathBuf::from(env_path)),
        _ => {}
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-wide.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn default_config_dir_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.is_absolute());
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn explicit_override_wins_over_env() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/folio");

        let override_path = PathBuf::from("/override/folio");
        assert_eq!(
            get_app_config_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn env_var_replaces_platform_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/srv/folio-config");

        assert_eq!(get_app_config_dir(), Some(PathBuf::from("/srv/folio-config")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
