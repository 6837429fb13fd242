//! Shared model and core logic for the feedback portal.
//!
//! The crate is used by both the `backend` (native) and the `frontend` (wasm)
//! binaries. Everything that decides *what* the portal does lives here:
//!
//! - [`catalog`]: the list of feedback form templates and its persistence rules.
//! - [`normalize`]: turning raw stored records into display-ready feedback.
//! - [`analytics`]: per-form aggregation (totals, averages, rating histograms).
//! - [`store`]: the seam to the feedback record store and the bulk clear operation.
//! - [`storage`] and [`session`]: the key-value seam and the admin session marker.
//! - [`requests`]: API paths shared by the server routes and the HTTP client.

pub mod analytics;
pub mod catalog;
pub mod error;
pub mod model;
pub mod normalize;
pub mod requests;
pub mod session;
pub mod storage;
pub mod store;
