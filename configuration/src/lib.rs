use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use serde::Deserialize;

pub fn get_config<'de, T: Deserialize<'de>>(config_path: PathBuf) -> Result<T, config::ConfigError> {
    let f = config::File::from(config_path);
    let config = config::Config::builder()
        .add_source(f)
        .build()?;
    config.try_deserialize::<T>()
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WordserveConfiguration {
    pub server: ServerConfiguration,
    pub dns: DnsConfiguration,
    pub wordlist: WordlistConfiguration,
}

impl Default for WordserveConfiguration {
    fn default() -> Self {
        Self {
            server: ServerConfiguration::default(),
            dns: DnsConfiguration::default(),
            wordlist: WordlistConfiguration::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfiguration {
    ip_address: IpAddr,
    port: u16,
}

impl ServerConfiguration {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.ip_address, self.port)
    }
}

impl Default for ServerConfiguration {
    // Loopback on the standard DNS port.
    fn default() -> Self {
        Self {
            ip_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 53,
        }
    }
}

/// Upstream server used when translating a conventional domain.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DnsConfiguration {
    pub server_address: SocketAddr,
}

impl Default for DnsConfiguration {
    fn default() -> Self {
        Self {
            server_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)), 53),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WordlistConfiguration {
    pub path: PathBuf,
}

impl Default for WordlistConfiguration {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./wordlist.txt"),
        }
    }
}
