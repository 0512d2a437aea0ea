//! Credential persistence backends

pub mod file;

pub use file::FileStore;
