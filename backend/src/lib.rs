//! Fleet backend library: spaceship registry and credential lifecycle.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use middleware::trace_requests;
