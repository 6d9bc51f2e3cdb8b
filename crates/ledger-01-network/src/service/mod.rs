//! # Network Service
//!
//! High-level service implementing the `NetworkApi` port.
//!
//! The service owns the remote collection fixed at construction and the push
//! policy. It snapshots scores, ranks eligible remotes through the domain
//! layer, and fans the wallet out with per-remote failure isolation.

// Semantic submodules
mod api;
mod network;

// Re-export public API
pub use network::Network;

#[cfg(test)]
mod tests;
