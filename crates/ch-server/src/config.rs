//! Configuration for the HTTP server.

use std::net::{Ipv4Addr, SocketAddr};

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration for [`serve`](crate::serve).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    /// Set the listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_localhost_3000() {
        assert_eq!(ServerConfig::default().addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn with_addr_overrides() {
        let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
        assert_eq!(ServerConfig::default().with_addr(addr).addr, addr);
    }
}
