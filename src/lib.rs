//! Reads barcodes from a scanner and records them in a Grocy inventory.
//!
//! Scanners are read either as a raw stream of HID keyboard usage codes (keyboard emulation
//! mode, e.g. `/dev/hidraw0`) or as lines of text (e.g. a USB serial scanner). Each barcode is
//! either a mode token (`addcreate`, `consume`, `open`) that switches what happens to the
//! following scans, or a product barcode the current mode is applied to. Products Grocy does not
//! know yet are created from Open Food Facts metadata.

pub mod action;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod device;
pub mod devices;
pub mod error;
pub mod grocy;
pub mod provider;
pub mod server;
pub mod tools;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
