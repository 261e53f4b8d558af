//! Pipeline configuration
//!
//! Loaded from a TOML file; every section and field has a default so a
//! partial file (or none at all) works. The two cover-service credentials
//! can be injected through the environment instead of the file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding `[covers] user_id`
pub const COVER_USER_ID_ENV: &str = "BOOKERY_COVER_USER_ID";
/// Environment variable overriding `[covers] password`
pub const COVER_PASSWORD_ENV: &str = "BOOKERY_COVER_PASSWORD";

/// Default config file looked up next to the working directory
const DEFAULT_CONFIG_FILE: &str = "bookery.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sources: SourcesConfig,
    pub output: OutputConfig,
    pub covers: CoversConfig,
    pub content: ContentConfig,
    pub http: HttpConfig,
}

/// Input source locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Published-spreadsheet document key for `bookery fetch`
    pub spreadsheet_key: String,
    /// Local path of the books CSV
    pub books_csv: PathBuf,
    /// Workbook holding the controlled tag vocabulary
    pub copy_workbook: PathBuf,
    /// Sheet name of the vocabulary within the workbook
    pub tags_sheet: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            spreadsheet_key: String::new(),
            books_csv: PathBuf::from("data/books.csv"),
            copy_workbook: PathBuf::from("data/copy.xlsx"),
            tags_sheet: "tags".to_string(),
        }
    }
}

/// Output artifact locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// The JSON catalog artifact
    pub catalog_path: PathBuf,
    /// Directory receiving cover images and thumbnails
    pub covers_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("www/static-data/books.json"),
            covers_dir: PathBuf::from("www/assets/cover"),
        }
    }
}

/// Cover image service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoversConfig {
    /// Jacket endpoint of the image service
    pub base_url: String,
    /// Service credential, overridable via `BOOKERY_COVER_USER_ID`
    pub user_id: String,
    /// Service credential, overridable via `BOOKERY_COVER_PASSWORD`
    pub password: String,
    /// Responses smaller than this are treated as "no image available"
    pub min_plausible_bytes: u64,
    /// Target thumbnail width in pixels
    pub thumb_width: u32,
}

impl Default for CoversConfig {
    fn default() -> Self {
        Self {
            base_url: "http://imagesa.btol.com/ContentCafe/Jacket.aspx".to_string(),
            user_id: String::new(),
            password: String::new(),
            min_plausible_bytes: 10_000,
            thumb_width: 250,
        }
    }
}

impl CoversConfig {
    /// Jacket URL for one ISBN, embedding both credentials.
    pub fn cover_url(&self, isbn: &str) -> String {
        format!(
            "{}?UserID={}&Password={}&Return=T&Type=L&Value={}",
            self.base_url, self.user_id, self.password, isbn
        )
    }
}

/// External content system (headline lookups)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub base_url: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.npr.org".to_string(),
        }
    }
}

/// HTTP behavior for all external fetches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout; a stalled external fetch must not stall the batch
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist; without one, `bookery.toml` is used if
    /// present, defaults otherwise. Credential environment variables win
    /// over the file in either case.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env();
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid {}: {}", path.display(), e)))
    }

    fn apply_env(&mut self) {
        if let Ok(user_id) = env::var(COVER_USER_ID_ENV) {
            self.covers.user_id = user_id;
        }
        if let Ok(password) = env::var(COVER_PASSWORD_ENV) {
            self.covers.password = password;
        }
    }
}
