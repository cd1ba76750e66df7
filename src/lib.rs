//! Client-side data access for the Prism media-sharing app: profile
//! retrieval and mutation, follow state, the two-phase media upload
//! pipeline, and the persisted theme preference.
#![deny(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_inception
)]

pub mod api;
pub mod config;
pub mod storage;
pub mod theme;
