//! Container elements.
//!
//! A small stand-in for the host's DOM: controls receive a container element
//! at init, create their own child elements, and replace inner markup on
//! update. Elements are shared between host and control through
//! [`ElementRef`]; everything runs on one thread.

mod element;

pub use element::{Element, ElementRef};
