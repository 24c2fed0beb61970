use {crate::catalog::DEFAULT_BASE_URL, thiserror::Error, url::Url};

pub const DEFAULT_PORT: u16 = 3000;
pub const BIND_HOST: &str = "0.0.0.0";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {value:?}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("CATALOG_URL must be an absolute URL, got {value:?}")]
    InvalidCatalogUrl {
        value: String,
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub catalog_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("CATALOG_URL").ok(),
        )
    }

    fn from_vars(port: Option<String>, catalog_url: Option<String>) -> Result<Self, ConfigError> {
        let port = match port.filter(|value| !value.is_empty()) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let catalog_url = catalog_url
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let catalog_url = Url::parse(&catalog_url).map_err(|source| {
            ConfigError::InvalidCatalogUrl {
                value: catalog_url.clone(),
                source,
            }
        })?;

        Ok(Config { port, catalog_url })
    }

    pub fn bind_addr(&self) -> (&'static str, u16) {
        (BIND_HOST, self.port)
    }
}
