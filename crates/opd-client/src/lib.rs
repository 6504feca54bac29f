//! # opd-client
//!
//! Query execution client for Operator Dashboard RS.
//!
//! Sends the composed query specification to the remote query service,
//! applies successful results to the query state, and caches them for
//! hydration on the next start. Failures are converted into a single
//! user-facing notification at this boundary; they never propagate as
//! unhandled errors.
//!
//! ## Structure
//!
//! - `client` - The HTTP client for `POST /run-query`
//! - `runner` - Orchestration around a `QueryState`
//! - `notify` - The injected notification sink
//! - `error` - Client error taxonomy

pub mod client;
pub mod error;
pub mod notify;
pub mod runner;

// Re-exports for convenience
pub use client::QueryClient;
pub use error::{ClientError, ClientResult};
pub use notify::{Notifier, NullNotifier, TracingNotifier};
pub use runner::QueryRunner;
