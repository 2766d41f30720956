//! # Storage Traits
//!
//! This module defines the persistence abstraction that allows different
//! storage backends to be used interchangeably by the repositories.

use anyhow::Result;

/// Trait defining the interface for device-local blob storage
///
/// A backend maps string keys to serialized blobs. The repositories read the
/// whole collection for a key, mutate it in memory, and write the whole
/// collection back, so a backend only ever needs these two operations.
/// Implementations must round-trip blobs without loss.
pub trait BlobStore: Send + Sync {
    /// Read the blob stored under `key`, or `None` if nothing was ever written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `blob` under `key`, replacing any previous value
    ///
    /// A failed write (quota, missing directory, permissions) must surface as
    /// an error so callers can report the lost mutation.
    fn write(&self, key: &str, blob: &str) -> Result<()>;
}
