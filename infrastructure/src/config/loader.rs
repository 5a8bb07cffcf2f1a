//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["folio.toml", ".folio.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `FOLIO_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./folio.toml` or `./.folio.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/folio-assistant/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
    }

    /// Merge the given files over the defaults.
    ///
    /// Files that do not exist are skipped, except `explicit`, which must exist.
    pub fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment = figment.merge(Env::prefixed("FOLIO_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/folio-assistant/config.toml if set,
    /// otherwise falls back to ~/.config/folio-assistant/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio-assistant").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: FOLIO_* (e.g. FOLIO_HISTORY__ENABLED=false)");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./folio.toml or ./.folio.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.history.enabled);
        assert_eq!(config.assistant.max_input_chars, 250);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("folio-assistant"));
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_from(
            Some(&dir.path().join("global.toml")),
            Some(&dir.path().join("folio.toml")),
            None,
        )
        .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_later_sources_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("folio.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(
            &global,
            "[assistant]\nmin_delay_ms = 1\nmax_delay_ms = 2\n[output]\ncolor = false\n",
        )
        .unwrap();
        fs::write(&project, "[assistant]\nmax_delay_ms = 5\n").unwrap();
        fs::write(&explicit, "[history]\nkey = \"custom\"\n").unwrap();

        let config =
            ConfigLoader::load_from(Some(&global), Some(&project), Some(&explicit)).unwrap();
        assert_eq!(config.assistant.min_delay_ms, 1);
        assert_eq!(config.assistant.max_delay_ms, 5);
        assert!(!config.output.color);
        assert_eq!(config.history.key, "custom");
        // Untouched sections keep their defaults
        assert_eq!(config.history.max_messages, 50);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::load_from(None, None, Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("folio.toml");
        fs::write(&project, "[assistant]\nmin_delay_ms = \"soon\"\n").unwrap();
        assert!(ConfigLoader::load_from(None, Some(&project), None).is_err());
    }
}
