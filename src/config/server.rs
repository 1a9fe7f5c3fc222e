use std::env;
use std::net::{AddrParseError, SocketAddr};

/// Where the HTTP listener binds. `addr` must be an IP literal, since
/// `get_socket_addr` does not resolve hostnames.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub addr: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn get_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }

    pub fn get_http_addr(&self) -> String {
        format!("http://{}:{}", self.addr, self.port)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.get_addr().parse()
    }

    pub fn init_from_env(&mut self) -> Result<(), String> {
        self.addr = env::var("SERVER_ADDR")
            .map_err(|_| "SERVER_ADDR not set in environment".to_string())?;

        self.port = env::var("SERVER_PORT")
            .map_err(|_| "SERVER_PORT not set in environment".to_string())?
            .parse::<u16>()
            .map_err(|_| "SERVER_PORT is not a valid u16".to_string())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bind_addresses() {
        let config = ServerConfig {
            addr: "127.0.0.1".into(),
            port: 8080,
        };
        assert_eq!(config.get_addr(), "127.0.0.1:8080");
        assert_eq!(config.get_http_addr(), "http://127.0.0.1:8080");
        assert_eq!(
            config.get_socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn rejects_hostname_as_socket_addr() {
        let config = ServerConfig {
            addr: "localhost".into(),
            port: 8080,
        };
        assert!(config.get_socket_addr().is_err());
    }
}
