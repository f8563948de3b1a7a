//! Taifin data retrieval and normalization engine.
//!
//! The engine aggregates a few hundred read-only financial and government
//! data operations behind one calling surface. Its moving parts, leaves
//! first:
//!
//! - [`cache`] — bounded TTL + LRU store, checked lazily on read
//! - [`transport`] — the [`Upstream`] seam over the real HTTP client
//! - [`fetch`] — cache-coordinated, single-flight fetching
//! - [`csv_records`] — raw CSV to ordered records
//! - [`filter`] / [`extract`] — heterogeneous-record narrowing and fuzzy
//!   keyed indicator lookup
//! - [`forex`] — pivot cross-rate derivation
//! - [`executor`] — the dispatch pipeline over the static registry
//!
//! Construct one [`Engine`] at startup, share it by reference, and call
//! [`Engine::shutdown`] on exit to release the cache and connection pool.

pub mod cache;
pub mod csv_records;
pub mod executor;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod forex;
pub mod transport;

pub use executor::Engine;
pub use fetch::CachedFetcher;
pub use transport::{HttpUpstream, RawResponse, StaticUpstream, Upstream};
