// src/lib.rs
// job-links - MCP tool server for finding recent job postings

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod http;
pub mod mcp;
pub mod search;

pub use error::{JobLinksError, Result};
