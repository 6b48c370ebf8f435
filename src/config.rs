//! Server configuration
//!
//! Built once from the command line at startup and read-only for the
//! process lifetime. There is no config file and no environment lookup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Default listening port when none is given on the command line.
pub const DEFAULT_PORT: u16 = 8000;

/// Immutable server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Document root: every served path resolves under this directory.
    pub root: PathBuf,
}

impl ServerConfig {
    /// Build configuration from command line arguments.
    ///
    /// Usage: `staticors [port] [directory]`. The port defaults to 8000;
    /// the document root defaults to the directory containing the server
    /// executable.
    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let port = match args.next() {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("Invalid port '{raw}': {e}"))?,
            None => DEFAULT_PORT,
        };

        let root = match args.next() {
            Some(dir) => PathBuf::from(dir),
            None => default_root()?,
        };

        if !root.is_dir() {
            return Err(format!(
                "Document root '{}' is not a directory",
                root.display()
            ));
        }

        Ok(Self { port, root })
    }

    /// Address to bind: all interfaces on the configured port.
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

/// Directory containing the running executable.
fn default_root() -> Result<PathBuf, String> {
    let exe = std::env::current_exe().map_err(|e| format!("Cannot locate executable: {e}"))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| "Executable has no parent directory".to_string())
}
