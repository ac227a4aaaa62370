use std::net::SocketAddr;
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use secrecy::SecretString;
use serde::Deserialize;

/// Server configuration.
///
/// Loaded from a YAML file, then overridden by `BLOGLIST_`-prefixed
/// environment variables (`__` separates nesting levels, e.g.
/// `BLOGLIST_AUTH__SECRET`). The signing secret has no default: starting
/// without one is a configuration error, not a prompt to invent a key.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret for bearer tokens. `SecretString` keeps it out
    /// of `Debug` output.
    pub secret: SecretString,
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3003))
}

impl AppConfig {
    /// Load configuration from `path`, with environment overrides.
    ///
    /// A missing file is fine as long as the environment supplies the
    /// required values.
    ///
    /// # Errors
    /// Returns a figment error when the sources cannot be read or the
    /// required fields are absent.
    pub fn load(path: &Path) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("BLOGLIST_").split("__"))
            .extract()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn loads_from_yaml_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "bloglist.yaml",
                "server:\n  bind_addr: 0.0.0.0:8080\nauth:\n  secret: file-secret\n",
            )?;

            let config = AppConfig::load(Path::new("bloglist.yaml")).unwrap();
            assert_eq!(config.server.bind_addr, "0.0.0.0:8080".parse().unwrap());
            assert_eq!(config.auth.secret.expose_secret(), "file-secret");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("bloglist.yaml", "auth:\n  secret: file-secret\n")?;
            jail.set_env("BLOGLIST_AUTH__SECRET", "env-secret");

            let config = AppConfig::load(Path::new("bloglist.yaml")).unwrap();
            assert_eq!(config.auth.secret.expose_secret(), "env-secret");
            // bind_addr falls back to the default.
            assert_eq!(config.server.bind_addr, default_bind_addr());
            Ok(())
        });
    }

    #[test]
    fn missing_secret_is_an_error() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("bloglist.yaml", "server:\n  bind_addr: 0.0.0.0:8080\n")?;

            assert!(AppConfig::load(Path::new("bloglist.yaml")).is_err());
            Ok(())
        });
    }
}
