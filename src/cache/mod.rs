//! Query cache for content API reads.
//!
//! Pages declare what they need as a [`QueryKey`]; the cache answers from
//! memory while the value is fresh and otherwise coordinates a single
//! upstream fetch per key.
//!
//! ```toml
//! [cache]
//! capacity = 256
//! ttl_secs = 60
//! fetch_timeout_secs = 15
//! ```

mod config;
mod keys;
mod lock;
mod observer;
mod state;
mod store;

pub use config::QueryCacheConfig;
pub use keys::QueryKey;
pub use observer::{QueryFn, QueryObserver};
pub use state::{QueryState, QueryStatus};
pub use store::QueryCache;
