//! Leaflet map integration.
//!
//! Browser only: the bindings talk to the Leaflet `L` global loaded by
//! `index.html`, so both submodules are gated behind the `csr` feature.

#[cfg(feature = "csr")]
pub mod controller;
#[cfg(feature = "csr")]
pub mod leaflet;
