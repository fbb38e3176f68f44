//! Cache collaborators consumed by the caching clients.
//!
//! The clients only need [`Cache::get`] and [`Cache::set`]; eviction and
//! expiry belong to the backend.

mod memory;
mod traits;

pub use memory::MemoryCache;
pub use traits::Cache;
