use stockroom_core::{ConfigError, StockroomConfig};

/// Listener settings: `server.host` (`0.0.0.0`) and `server.port` (`3000`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn from_config(config: &StockroomConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            host: config.get_or("server.host", "0.0.0.0".to_string())?,
            port: config.get_or("server.port", 3000)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
