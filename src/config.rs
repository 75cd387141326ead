use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    time::Duration,
};

use crate::error::ErrorVerbosity;

pub const LISTEN_PORT: u16 = 8080;
pub const MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DATABASE_NAME: &str = "bookstoredb";
pub const COLLECTION_NAME: &str = "books";
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const STATIC_DIR: &str = "static";
pub const ROOT_DIR: &str = ".";
/// Upper bound for a single `multipart/form-data` request body.
pub const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Where the book documents live.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub connect_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: MONGODB_URI.to_string(),
            database: DATABASE_NAME.to_string(),
            collection: COLLECTION_NAME.to_string(),
            connect_timeout: CONNECT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub socket_address: SocketAddr,
    pub error_verbosity: ErrorVerbosity,
    pub static_dir: PathBuf,
    pub root_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            socket_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), LISTEN_PORT),
            error_verbosity: ErrorVerbosity::Message,
            static_dir: PathBuf::from(STATIC_DIR),
            root_dir: PathBuf::from(ROOT_DIR),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            store: StoreConfig::default(),
        }
    }
}
