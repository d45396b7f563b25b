use std::io::{self, BufRead, BufReader, Read};

use crate::device::BarcodeSource;

/// A scanner that writes each barcode as a line of text, such as a USB serial (CDC ACM) scanner.
#[derive(Debug)]
pub struct TextScanner<R> {
    reader: BufReader<R>,
}

impl<R: Read> TextScanner<R> {
    pub fn new(inner: R) -> Self {
        TextScanner {
            reader: BufReader::new(inner),
        }
    }
}

impl<R: Read> BarcodeSource for TextScanner<R> {
    fn read_next(&mut self) -> io::Result<String> {
        let mut line = Vec::new();
        self.reader.read_until(b'\n', &mut line)?;

        if line.last() != Some(&b'\n') {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "text stream ended before end of line",
            ));
        }

        // Noise on the line must not end the stream.
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn lines_are_trimmed() {
        let mut scanner = TextScanner::new(Cursor::new("  8411525020169\r\nconsume\n\n"));

        assert_eq!(scanner.read_next().unwrap(), "8411525020169");
        assert_eq!(scanner.read_next().unwrap(), "consume");
        assert_eq!(scanner.read_next().unwrap(), "");
    }

    #[test]
    fn invalid_utf8_does_not_break_the_stream() {
        let mut scanner = TextScanner::new(Cursor::new(&b"12\xff3\n456\n"[..]));

        assert_eq!(scanner.read_next().unwrap(), "12\u{fffd}3");
        assert_eq!(scanner.read_next().unwrap(), "456");
    }

    #[test]
    fn unterminated_line_is_an_error() {
        let mut scanner = TextScanner::new(Cursor::new("123\n456"));

        assert_eq!(scanner.read_next().unwrap(), "123");
        let err = scanner.read_next().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
