use std::path::{Path, PathBuf};

use derive_more::Display;

/// The device barcodes are read from.
#[derive(Debug, Display, Eq, PartialEq, Clone)]
pub enum ScannerDevice {
    /// A scanner emulating a keyboard, read as a raw stream of HID usage codes.
    #[display(fmt = "HID {}", "_0.display()")]
    Hid(PathBuf),

    /// A scanner writing one barcode per line of text.
    #[display(fmt = "TTY {}", "_0.display()")]
    Tty(PathBuf),
}

impl ScannerDevice {
    pub fn path(&self) -> &Path {
        match self {
            ScannerDevice::Hid(path) | ScannerDevice::Tty(path) => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_kind_and_path() {
        assert_eq!(
            ScannerDevice::Hid(PathBuf::from("/dev/hidraw0")).to_string(),
            "HID /dev/hidraw0"
        );
        assert_eq!(
            ScannerDevice::Tty(PathBuf::from("/dev/ttyACM0")).to_string(),
            "TTY /dev/ttyACM0"
        );
    }
}
