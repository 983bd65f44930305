use std::env;

/// Port the server listens on when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port_value = env::var("PORT").ok();
        Self::resolve(port_value.as_deref())
    }

    /// Unset, empty, or unparseable values fall back to [`DEFAULT_PORT`].
    fn resolve(port_value: Option<&str>) -> Self {
        let port = port_value.and_then(|raw| raw.parse().ok()).unwrap_or(DEFAULT_PORT);
        Self { port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_uses_the_default() {
        assert_eq!(ServerConfig::resolve(None).port, DEFAULT_PORT);
    }

    #[test]
    fn numeric_port_is_honored() {
        assert_eq!(ServerConfig::resolve(Some("3000")).port, 3000);
    }

    #[test]
    fn unparseable_port_falls_back() {
        assert_eq!(ServerConfig::resolve(Some("battle")).port, DEFAULT_PORT);
        assert_eq!(ServerConfig::resolve(Some("")).port, DEFAULT_PORT);
        assert_eq!(ServerConfig::resolve(Some("70000")).port, DEFAULT_PORT);
    }
}
