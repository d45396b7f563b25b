use std::io::{self, BufRead, BufReader, Read};

use tracing::trace;

use crate::constants::KC_ENTER;
use crate::decoder::decode_frame;
use crate::device::BarcodeSource;

/// A scanner in keyboard emulation mode, read as a raw stream of HID usage codes.
#[derive(Debug)]
pub struct HidScanner<R> {
    reader: BufReader<R>,
}

impl<R: Read> HidScanner<R> {
    pub fn new(inner: R) -> Self {
        HidScanner {
            reader: BufReader::new(inner),
        }
    }
}

impl<R: Read> BarcodeSource for HidScanner<R> {
    fn read_next(&mut self) -> io::Result<String> {
        let mut frame = Vec::new();
        self.reader.read_until(KC_ENTER, &mut frame)?;

        if frame.last() != Some(&KC_ENTER) {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "keystroke stream ended before Enter ({} bytes pending)",
                    frame.len()
                ),
            ));
        }

        trace!("Received {} bytes: {:02x?}", frame.len(), frame);

        Ok(decode_frame(&frame))
    }
}
