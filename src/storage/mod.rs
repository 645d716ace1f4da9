//! Store implementations
//!
//! `InMemoryBillStore` backs tests, demos and development; `HttpBillStore`
//! (feature `http`) talks to the real remote service.

#[cfg(feature = "http")]
pub mod http;
pub mod in_memory;

#[cfg(feature = "http")]
pub use http::HttpBillStore;
pub use in_memory::InMemoryBillStore;
