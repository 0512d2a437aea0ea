//! Infrastructure layer for Tunescope
//!
//! Concrete adapters behind the ports `tunescope-core` defines: the
//! authenticated request gateway over HTTP and the file-backed credential
//! store. Nothing in here contains domain logic; policy lives in the core
//! crate and this layer only carries it out against the outside world.

pub mod config;
pub mod gateway;
pub mod storage;

pub use config::GatewayConfig;
pub use gateway::Gateway;
pub use storage::FileStore;
