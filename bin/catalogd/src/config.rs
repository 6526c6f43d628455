use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Server configuration, loaded from a TOML file.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address for the HTTP server.
    pub listen: String,

    /// Path to the SQLite database file.
    pub db_path: PathBuf,

    /// Public base URLs (dev, prod) advertised in the served schema
    /// metadata for the documentation renderer.
    pub servers: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
            db_path: PathBuf::from("catalog.sqlite"),
            servers: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Resolve a context name to a config path. A value containing `/`
    /// or `.` is used as a path directly; anything else resolves to
    /// `/etc/catalog/<name>.toml`.
    pub fn resolve_path(name: &str) -> PathBuf {
        if name.contains('/') || name.contains('.') {
            PathBuf::from(name)
        } else {
            PathBuf::from(format!("/etc/catalog/{}.toml", name))
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_resolves_to_etc() {
        assert_eq!(
            ServerConfig::resolve_path("prod"),
            PathBuf::from("/etc/catalog/prod.toml")
        );
    }

    #[test]
    fn path_like_values_are_used_directly() {
        assert_eq!(
            ServerConfig::resolve_path("./local.toml"),
            PathBuf::from("./local.toml")
        );
        assert_eq!(
            ServerConfig::resolve_path("/tmp/c.toml"),
            PathBuf::from("/tmp/c.toml")
        );
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.listen, "0.0.0.0:8080");
        assert_eq!(config.db_path, PathBuf::from("catalog.sqlite"));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(
            &path,
            "listen = \"127.0.0.1:9000\"\n\
             db_path = \"/var/lib/catalog/data.sqlite\"\n\
             servers = [\"https://catalog.example.com\"]\n",
        )
        .unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.listen, "127.0.0.1:9000");
        assert_eq!(config.db_path, PathBuf::from("/var/lib/catalog/data.sqlite"));
        assert_eq!(config.servers, vec!["https://catalog.example.com".to_string()]);
    }
}
