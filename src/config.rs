use std::path::PathBuf;

use tracing::debug;

use crate::constants::{
    DEFAULT_PRODUCT_LOCATION_ID, DEFAULT_PRODUCT_UNIT_ID, ENV_GROCY_API_KEY, ENV_GROCY_URL,
    ENV_HID, ENV_LOG_FORMAT, ENV_PRODUCT_LOCATION_ID, ENV_PRODUCT_UNIT_ID, ENV_TTY,
};
use crate::devices::ScannerDevice;
use crate::error::{Error, Result};
use crate::grocy::Defaults;

/// Everything the reader needs to know at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub device: ScannerDevice,
    pub grocy_url: String,
    pub grocy_api_key: String,
    pub defaults: Defaults,
    pub json_logs: bool,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let device = match (var(ENV_HID), var(ENV_TTY)) {
            (_, Some(tty)) => ScannerDevice::Tty(PathBuf::from(tty)),
            (Some(hid), None) => ScannerDevice::Hid(PathBuf::from(hid)),
            (None, None) => return Err(Error::MissingVar("GB_HID or GB_TTY")),
        };

        let grocy_url = var(ENV_GROCY_URL).ok_or(Error::MissingVar(ENV_GROCY_URL))?;
        let grocy_api_key = var(ENV_GROCY_API_KEY).ok_or(Error::MissingVar(ENV_GROCY_API_KEY))?;

        let defaults = Defaults {
            product_location_id: parse_id(
                ENV_PRODUCT_LOCATION_ID,
                var(ENV_PRODUCT_LOCATION_ID),
                DEFAULT_PRODUCT_LOCATION_ID,
            )?,
            product_unit_id: parse_id(
                ENV_PRODUCT_UNIT_ID,
                var(ENV_PRODUCT_UNIT_ID),
                DEFAULT_PRODUCT_UNIT_ID,
            )?,
        };

        let json_logs =
            var(ENV_LOG_FORMAT).map_or(false, |format| format.eq_ignore_ascii_case("json"));

        let config = Config {
            device,
            grocy_url,
            grocy_api_key,
            defaults,
            json_logs,
        };
        debug!(device = %config.device, grocy_url = %config.grocy_url, "Loaded configuration.");
        Ok(config)
    }
}

fn parse_id(name: &'static str, value: Option<String>, default: u32) -> Result<u32> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidVar { name, value }),
    }
}
