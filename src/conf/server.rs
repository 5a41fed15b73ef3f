use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
    /// Put the underlying error message in 500 bodies. Turning this off
    /// keeps database internals out of client responses.
    #[serde(default = "ServerConfig::default_expose_error_detail")]
    pub expose_error_detail: bool,
}

impl ServerConfig {
    fn default_port() -> u16 {
        8001
    }

    fn default_host() -> String {
        String::from("0.0.0.0")
    }

    fn default_expose_error_detail() -> bool {
        true
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            expose_error_detail: Self::default_expose_error_detail(),
        }
    }
}
