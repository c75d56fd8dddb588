//! # Twine Vessels
//!
//! Liquid inventory and wetted-area models for process vessels and storage
//! tanks, built for [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a shell diameter, a tangent-to-tangent length, and a head shape, a
//! [`Vessel`](models::storage::vessel::Vessel) reports the liquid volume and
//! wetted internal surface as functions of fill height, along with the derived
//! quantities used to size and operate a vessel: working volume between
//! control levels, overflow allowance, and surge time.
//!
//! Flat, hemispherical, elliptical, torispherical, and conical heads are
//! supported on vertical and horizontal shells, together with flat-bottomed
//! vertical tanks and spherical tanks.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models or outside this crate. Only
//! utilities in [`support`] are part of the public API.

pub mod models;
pub mod support;
