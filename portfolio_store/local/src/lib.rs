//! Local implementations of the key-value store: a JSON file on disk and a
//! purely in-memory map.

use std::collections::BTreeMap;

use portfolio_store_contracts::{entry_size, StoreSetError};

pub use file::{FileStore, FileStoreConfig};
pub use memory::MemoryStore;

mod file;
mod memory;

type Entries = BTreeMap<String, String>;

fn usage(entries: &Entries) -> usize {
    entries.iter().map(|(k, v)| entry_size(k, v)).sum()
}

/// Ensures that replacing the entry for `key` with `value` stays within
/// `capacity`.
///
/// A write that does not grow the entry is always accepted, so a store that
/// is already over its capacity (e.g. after the capacity was lowered) can
/// still be shrunk.
fn check_quota(
    entries: &Entries,
    key: &str,
    value: &str,
    capacity: usize,
) -> Result<(), StoreSetError> {
    let previous = entries.get(key).map_or(0, |old| entry_size(key, old));
    let size = entry_size(key, value);
    if size <= previous {
        return Ok(());
    }

    let required = usage(entries) - previous + size;
    if required > capacity {
        return Err(StoreSetError::QuotaExceeded { required, capacity });
    }
    Ok(())
}
