//! # launchq
//!
//! Resolves short names ("things") to URIs or paths through a user-maintained
//! alias table and opens each one with the platform's default handler.
//!
//! Provides the catalog (TOML-backed things and aliases), a pure resolver,
//! the platform launcher, and a dispatcher that fans jobs out across a
//! bounded pool of workers.

pub mod config;
pub mod engine;
pub mod error;
pub mod launcher;
pub mod model;
pub mod resolve;
pub mod telemetry;
