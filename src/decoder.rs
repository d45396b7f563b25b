//! Translation of HID keyboard usage codes into barcode characters.
//!
//! Scanners in keyboard emulation mode "type" the barcode: every character arrives as the usage
//! code of the key that would produce it, and the whole code is followed by `Enter`. Only
//! lowercase letters and digits are recognised. Everything else (modifiers, function keys and the
//! zero bytes some devices pad their reports with) is dropped.

use crate::constants::{KC_A, KC_ENTER, KC_ONE, KC_Z, KC_ZERO};

/// Maps a single usage code to the character it types, if it is a letter or a digit.
pub fn decode_keycode(keycode: u8) -> Option<char> {
    match keycode {
        KC_A..=KC_Z => Some(char::from(b'a' + (keycode - KC_A))),
        // Digit keys go 1, 2, ..., 9, 0. Shift by one so that `1` lands on 1 and the last key
        // wraps around to 0.
        KC_ONE..=KC_ZERO => Some(char::from(b'0' + (keycode - KC_ONE + 1) % 10)),
        _ => None,
    }
}

/// Decodes one frame of usage codes into a barcode.
///
/// A trailing `Enter` is stripped if present. Zero bytes are padding emitted by some devices and
/// are skipped along with every other unrecognised code.
pub fn decode_frame(frame: &[u8]) -> String {
    let frame = frame.strip_suffix(&[KC_ENTER]).unwrap_or(frame);
    frame.iter().copied().filter_map(decode_keycode).collect()
}
