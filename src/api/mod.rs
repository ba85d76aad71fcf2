//! API Communication
//!
//! REST client for the LeakSense backend.
//!
//! # Endpoints
//!
//! - `GET /api/health` - Backend health probe
//! - `GET /api/sensors/latest` - Most recent sensor reading
//! - `GET /api/sensors/statistics?hours=N` - Min/avg/max aggregates
//! - `GET /api/sensors/chart-data?hours=N` - Parallel label/value series

pub mod client;

pub use client::*;
