//! Editor settings persisted in the user's config directory

mod file;

pub use file::{
    config_dir, load_settings, load_settings_from, save_settings, save_settings_to, settings_path,
    write_default_settings, PreferencesError,
};
