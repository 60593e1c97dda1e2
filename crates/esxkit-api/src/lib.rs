// esxkit-api: Async Rust client for the ESXi host management endpoint

pub mod client;
pub mod datetime;
pub mod error;
pub mod hosts;
pub mod inventory;
pub mod models;
pub mod options;
pub mod services;
pub mod session;
pub mod transport;

pub use client::HostClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
