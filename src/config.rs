//! Service configuration from environment variables and an optional TOML
//! config file.

use std::env;
use std::path::PathBuf;

use serde::Deserialize;

use crate::models::time::WeekdayTagMap;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Path to the catalog JSON document
    pub catalog_path: PathBuf,
    /// Campus time zone: every request resolves "now" through this zone
    pub timezone: chrono_tz::Tz,
    /// Calendar weekday -> catalog weekday vocabulary
    pub weekday_tags: WeekdayTagMap,
}

/// Optional TOML file contents, pointed at by `SPOTS_CONFIG`.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    timezone: Option<String>,
    catalog_path: Option<PathBuf>,
    weekday_tags: Option<WeekdayTagMap>,
}

impl FileConfig {
    fn parse(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| format!("Invalid config file: {}", e))
    }
}

impl AppConfig {
    /// Create the service configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): Server host
    /// - `PORT` (optional, default: 8080): Server port
    /// - `CATALOG_PATH` (optional, default: data/catalog.json): Catalog file
    /// - `TIMEZONE` (optional, default: America/Chicago): IANA zone name
    /// - `SPOTS_CONFIG` (optional): Path to a TOML file that may set
    ///   `timezone`, `catalog_path`, and a `[weekday_tags]` table overriding
    ///   any subset of the seven catalog weekday labels
    ///
    /// Environment variables win over the config file. The weekday table is
    /// validated to carry a non-empty tag for all seven days.
    ///
    /// # Errors
    /// Returns an error if the config file is unreadable or invalid, the
    /// port or time zone fail to parse, or the weekday table is incomplete.
    pub fn from_env() -> Result<Self, String> {
        let file = match env::var("SPOTS_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config file {}: {}", path, e))?;
                FileConfig::parse(&raw)?
            }
            Err(_) => FileConfig::default(),
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;

        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .ok()
            .or(file.catalog_path)
            .unwrap_or_else(|| PathBuf::from("data/catalog.json"));

        let timezone_name = env::var("TIMEZONE")
            .ok()
            .or(file.timezone)
            .unwrap_or_else(|| "America/Chicago".to_string());
        let timezone: chrono_tz::Tz = timezone_name
            .parse()
            .map_err(|_| format!("Unknown time zone '{}'", timezone_name))?;

        let weekday_tags = file.weekday_tags.unwrap_or_default();
        weekday_tags.validate()?;

        Ok(Self {
            host,
            port,
            catalog_path,
            timezone,
            weekday_tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_file_config_empty() {
        let file = FileConfig::parse("").unwrap();
        assert!(file.timezone.is_none());
        assert!(file.catalog_path.is_none());
        assert!(file.weekday_tags.is_none());
    }

    #[test]
    fn test_file_config_full() {
        let file = FileConfig::parse(
            r#"
            timezone = "Europe/Madrid"
            catalog_path = "campus/catalog.json"

            [weekday_tags]
            tue = "TUE"
            thu = "THU"
            "#,
        )
        .unwrap();

        assert_eq!(file.timezone.as_deref(), Some("Europe/Madrid"));
        assert_eq!(
            file.catalog_path,
            Some(PathBuf::from("campus/catalog.json"))
        );

        // Partial weekday table keeps the catalog defaults for the rest
        let tags = file.weekday_tags.unwrap();
        assert_eq!(tags.tag(Weekday::Tue), "TUE");
        assert_eq!(tags.tag(Weekday::Thu), "THU");
        assert_eq!(tags.tag(Weekday::Mon), "MON");
        assert_eq!(tags.tag(Weekday::Fri), "FRI");
    }

    #[test]
    fn test_file_config_invalid_toml() {
        assert!(FileConfig::parse("timezone = [").is_err());
    }

    #[test]
    fn test_timezone_parses() {
        let tz: chrono_tz::Tz = "America/Chicago".parse().unwrap();
        assert_eq!(tz, chrono_tz::America::Chicago);
        assert!("Not/AZone".parse::<chrono_tz::Tz>().is_err());
    }
}
