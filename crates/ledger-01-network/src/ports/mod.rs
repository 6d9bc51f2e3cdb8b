//! # Ports Layer (Hexagonal Architecture)
//!
//! - **Driving Ports (inbound):** `NetworkApi`, the push/pull API callers use
//! - **Driven Ports (outbound):** `Remote` and `ConfigProvider`, which the
//!   host application implements

pub mod inbound;
pub mod outbound;

pub use inbound::NetworkApi;
pub use outbound::{ConfigProvider, Remote};
