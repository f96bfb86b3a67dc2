//! HTTP client module
//!
//! Provides the JSON-over-HTTP transport used to fetch pages.
//!
//! # Features
//!
//! - **Base URL joining**: relative endpoints resolve against one base
//! - **Default headers**: applied to every request
//! - **Error classification**: status, timeout, transport and decode errors

mod client;

pub use client::{default_user_agent, HttpClient, HttpClientConfig, RequestConfig};
