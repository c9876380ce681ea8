use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind, Result};
use crate::holiday::Holiday;
use crate::render::Palettes;

const CONFIG_PATH_ENV_VAR: &str = "BINCAL_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Some(path) = env::var_os(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("bincal").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".bincal.toml"));
    }

    locations
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Marked as holidays in addition to the ones given on the command line.
    pub holidays: Vec<Holiday>,
    /// Added to the weekday offset of every month.
    pub week_shift: u32,
    pub palettes: Palettes,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| Error::from(err).with_msg(&path.display().to_string()))?;

        Self::from_toml(&content).map_err(|err| {
            Error::new(
                ErrorKind::ConfigParse,
                &format!("{}: {}", path.display(), err.message.unwrap_or_default()),
            )
        })
    }
}

/// Loads `path` if given, otherwise the first existing file out of the
/// default locations. Without any file the defaults apply.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("Using configuration '{}'", path.display());
        return Config::from_file(path);
    }

    match find_configfile_locations().into_iter().find(|p| p.is_file()) {
        Some(path) => {
            log::info!("Using configuration '{}'", path.display());
            Config::from_file(&path)
        }
        None => {
            log::info!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Palette;

    #[test]
    fn empty_config_is_default() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config, Config::default());
        assert!(config.holidays.is_empty());
        assert_eq!(config.week_shift, 0);
        assert_eq!(config.palettes.color, Palette::color());
        assert_eq!(config.palettes.grayscale, Palette::grayscale());
    }

    #[test]
    fn full_config() {
        let config = Config::from_toml(
            r##"
            holidays = ["01-01", "12-25"]
            week_shift = 3

            [palettes.grayscale]
            workday = "#222"
            holiday = "#888"
            weekend = "#ccc"
            line = "none"
            "##,
        )
        .unwrap();

        assert_eq!(
            config.holidays,
            vec![Holiday::new(1, 1).unwrap(), Holiday::new(12, 25).unwrap()]
        );
        assert_eq!(config.week_shift, 3);
        assert_eq!(config.palettes.color, Palette::color());
        assert_eq!(config.palettes.grayscale.workday, "#222");
        assert_eq!(config.palettes.grayscale.line, "none");
    }

    #[test]
    fn invalid_holiday_in_config() {
        let err = Config::from_toml(r#"holidays = ["25.12."]"#).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn incomplete_palette_is_rejected() {
        let err = Config::from_toml(
            r#"
            [palettes.color]
            workday = "blue"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn missing_file() {
        let path = env::temp_dir().join("bincal-does-not-exist.toml");
        let err = load_suitable_config(Some(&path)).unwrap_err();

        assert!(matches!(err.kind, ErrorKind::IOError(_)));
        assert!(err.to_string().contains("bincal-does-not-exist.toml"));
    }

    #[test]
    fn load_from_file() {
        let path = env::temp_dir().join(format!("bincal-config-{}.toml", std::process::id()));
        fs::write(&path, "week_shift = 2\n").unwrap();

        let config = load_suitable_config(Some(&path));
        fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().week_shift, 2);
    }
}
