//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `ROSTER_*` environment variables (e.g. `ROSTER_DATABASE_PATH`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// SQLite database file. A leading `~/` is expanded.
  pub database_path: PathBuf,
}

impl ServerConfig {
  /// Load configuration from `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 8080)?
      .set_default("database_path", "roster.db")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("ROSTER"))
      .build()?
      .try_deserialize()
  }

  /// `host:port`, suitable for [`tokio::net::TcpListener::bind`].
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The database path with `~` expanded.
  pub fn store_path(&self) -> PathBuf { expand_tilde(&self.database_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  expand_tilde_in(path, std::env::var("HOME").ok().as_deref())
}

fn expand_tilde_in(path: &Path, home: Option<&str>) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Some(home) = home
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.database_path, PathBuf::from("roster.db"));
    assert_eq!(cfg.address(), "0.0.0.0:8080");
  }

  #[test]
  fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 5000\ndatabase_path = \"/data/people.db\"\n").unwrap();

    let cfg = ServerConfig::load(&path).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 5000);
    assert_eq!(cfg.store_path(), PathBuf::from("/data/people.db"));
  }

  #[test]
  fn plain_paths_are_not_expanded() {
    assert_eq!(expand_tilde(Path::new("data/roster.db")), PathBuf::from("data/roster.db"));
  }

  #[test]
  fn tilde_expands_to_home() {
    assert_eq!(
      expand_tilde_in(Path::new("~/data/roster.db"), Some("/home/roster")),
      PathBuf::from("/home/roster/data/roster.db")
    );
  }

  #[test]
  fn tilde_is_kept_without_home() {
    assert_eq!(expand_tilde_in(Path::new("~/roster.db"), None), PathBuf::from("~/roster.db"));
  }

  #[test]
  fn sample_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    let cfg = ServerConfig::load(&path).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.database_path, PathBuf::from("roster.db"));
  }
}
