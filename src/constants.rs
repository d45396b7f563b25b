use std::time::Duration;

// HID keyboard usage codes, as sent by scanners in keyboard emulation mode.
// Ref: https://gist.github.com/ekaitz-zarraga/2b25b94b711684ba4e969e5a5723969b

/// Usage code of the `a` key. Letters run contiguously up to `z`.
pub const KC_A: u8 = 0x04;

/// Usage code of the `z` key.
pub const KC_Z: u8 = 0x1d;

/// Usage code of the `1` key. Digits run `1..=9` and then `0`.
pub const KC_ONE: u8 = 0x1e;

/// Usage code of the `0` key, which comes after `9`.
pub const KC_ZERO: u8 = 0x27;

/// Usage code of the `Enter` key, which terminates every scanned frame.
pub const KC_ENTER: u8 = 0x28;

/// Path to a HID device stream (e.g. `/dev/hidraw0`).
pub const ENV_HID: &str = "GB_HID";

/// Path to a line oriented text device (e.g. `/dev/ttyACM0`).
pub const ENV_TTY: &str = "GB_TTY";

pub const ENV_GROCY_URL: &str = "GB_GROCY_URL";
pub const ENV_GROCY_API_KEY: &str = "GB_GROCY_API_KEY";
pub const ENV_PRODUCT_LOCATION_ID: &str = "GB_PRODUCT_LOCATION_ID";
pub const ENV_PRODUCT_UNIT_ID: &str = "GB_PRODUCT_UNIT_ID";

/// Set to `json` to get one JSON object per log line.
pub const ENV_LOG_FORMAT: &str = "GB_LOG_FORMAT";

/// Grocy location new products are stored in, unless configured otherwise.
pub const DEFAULT_PRODUCT_LOCATION_ID: u32 = 4;

/// Grocy quantity unit new products use, unless configured otherwise.
pub const DEFAULT_PRODUCT_UNIT_ID: u32 = 2;

/// Header Grocy reads the API key from.
pub const GROCY_API_KEY_HEADER: &str = "GROCY-API-KEY";

pub const GROCY_TIMEOUT: Duration = Duration::from_secs(30);

pub const OPEN_FOOD_FACTS_URL: &str = "https://world.openfoodfacts.org";

pub const OPEN_FOOD_FACTS_TIMEOUT: Duration = Duration::from_secs(10);
