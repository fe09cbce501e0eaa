//! Gradfill engine crate.
//!
//! This crate owns the host-side pieces the controls run against: the
//! lifecycle contract, the property bag and data set handed to every update,
//! the container elements controls render into, and logging setup.

pub mod control;
pub mod dom;
pub mod host;
pub mod id;
pub mod logging;
pub mod session;
