//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["advisor.toml", ".advisor.toml"];
const ENV_PREFIX: &str = "ADVISOR_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `ADVISOR_<SECTION>__<KEY>` (e.g. `ADVISOR_SCORING__DEFAULT_LIMIT`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./advisor.toml` or `./.advisor.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/supplement-advisor/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        let explicit = config_path.map(PathBuf::as_path);
        let figment = Self::figment(global.as_deref(), project.as_deref(), explicit)
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// File layers without the environment, lowest priority first
    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/supplement-advisor/config.toml if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("supplement-advisor").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [env  ] {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./advisor.toml or ./.advisor.toml");
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
    use figment::Jail;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.scoring.default_limit, 5);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("supplement-advisor"));
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        fs::write(&global, "[scoring]\ndefault_limit = 7\ngoal_increment = 9.0\n").unwrap();
        fs::write(&project, "[scoring]\ndefault_limit = 2\n").unwrap();

        let config: FileConfig =
            ConfigLoader::figment(Some(global.as_path()), Some(project.as_path()), None)
                .extract()
                .unwrap();
        assert_eq!(config.scoring.default_limit, 2);
        assert_eq!(config.scoring.goal_increment, 9.0);
        assert_eq!(config.scoring.symptom_increment, 3.0);
    }

    #[test]
    fn test_explicit_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("advisor.toml");
        let explicit = dir.path().join("custom.toml");
        fs::write(&project, "[output]\nformat = \"summary\"\n").unwrap();
        fs::write(&explicit, "[output]\nformat = \"json\"\ncolor = false\n").unwrap();

        let config: FileConfig =
            ConfigLoader::figment(None, Some(project.as_path()), Some(explicit.as_path()))
                .extract()
                .unwrap();
        assert_eq!(config.output.format, Some(advisor_domain::OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_no_files_yields_defaults() {
        let config: FileConfig = ConfigLoader::figment(None, None, None).extract().unwrap();
        assert_eq!(config.scoring, ConfigLoader::load_defaults().scoring);
    }

    /// Runs `load` inside a jail whose config home is the jail directory
    fn load_in_jail(jail: &mut Jail, explicit: Option<&PathBuf>) -> figment::Result<FileConfig> {
        let config_home = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", config_home.display());
        ConfigLoader::load(explicit).map_err(|e| *e)
    }

    #[test]
    fn test_load_discovers_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("advisor.toml", "[scoring]\ndefault_limit = 8\n")?;

            let config = load_in_jail(jail, None)?;
            assert_eq!(config.scoring.default_limit, 8);
            assert_eq!(config.scoring.goal_increment, 2.0);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_file_and_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "advisor.toml",
                "[scoring]\ndefault_limit = 8\nlifestyle_increment = 0.5\n",
            )?;
            jail.set_env("ADVISOR_SCORING__DEFAULT_LIMIT", "3");
            jail.set_env("ADVISOR_SCORING__GOAL_INCREMENT", "4.5");
            jail.set_env("ADVISOR_OUTPUT__FORMAT", "json");

            let config = load_in_jail(jail, None)?;
            assert_eq!(config.scoring.default_limit, 3);
            assert_eq!(config.scoring.goal_increment, 4.5);
            assert_eq!(config.scoring.lifestyle_increment, 0.5);
            assert_eq!(config.scoring.symptom_increment, 3.0);
            assert_eq!(config.output.format, Some(advisor_domain::OutputFormat::Json));
            Ok(())
        });
    }

    #[test]
    fn test_env_outranks_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                "[scoring]\ndefault_limit = 9\ngoal_increment = 6.0\n",
            )?;
            jail.set_env("ADVISOR_SCORING__DEFAULT_LIMIT", "2");

            let explicit = jail.directory().join("custom.toml");
            let config = load_in_jail(jail, Some(&explicit))?;
            assert_eq!(config.scoring.default_limit, 2);
            assert_eq!(config.scoring.goal_increment, 6.0);
            Ok(())
        });
    }
}
