//! Barcode sources: the devices a scanner can be read from.

use std::io;

pub mod hid;
pub mod text;

pub use hid::HidScanner;
pub use text::TextScanner;

/// Something barcodes can be read from, one at a time.
pub trait BarcodeSource {
    /// Blocks until a complete barcode has been read.
    ///
    /// Errors are not recoverable: the caller is expected to stop reading.
    fn read_next(&mut self) -> io::Result<String>;
}

impl<S: BarcodeSource + ?Sized> BarcodeSource for Box<S> {
    fn read_next(&mut self) -> io::Result<String> {
        (**self).read_next()
    }
}
