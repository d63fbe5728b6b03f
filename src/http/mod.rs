//! HTTP transport
//!
//! GET-only client with retry, rate limiting and backoff. Authentication is
//! applied per request from an [`AuthConfig`](crate::auth::AuthConfig).

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
