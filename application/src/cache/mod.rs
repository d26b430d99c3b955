//! In-memory caching
//!
//! [`TtlCache`] is an explicitly constructed, cloneable handle. The
//! application root owns it, injects it where needed, and controls the
//! lifetime of its background sweeper through a cancellation token.

pub mod ttl_cache;

pub use ttl_cache::{DEFAULT_MAX_SIZE, DEFAULT_SWEEP_INTERVAL, DEFAULT_TTL, TtlCache};
