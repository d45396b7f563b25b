use std::fs::File;
use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::device::{BarcodeSource, HidScanner, TextScanner};
use crate::devices::ScannerDevice;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,grocy_barcode=debug";

/// Initializes the global logging facility.
///
/// If `RUST_LOG` is not set, the global default logging level is `info`, and `debug` for
/// `grocy_barcode`.
///
/// Log messages are formatted and printed to standard output by `tracing_subscriber`, as JSON
/// objects if `json_output` is set.
///
/// # Panics
///
/// Panics if the initialization was unsuccessful, likely because a global subscriber was already
/// installed by another call to try_init.
pub fn initialize_logging(json_output: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if json_output {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Opens the configured scanner device for reading.
#[tracing::instrument]
pub fn open_scanner(device: &ScannerDevice) -> io::Result<Box<dyn BarcodeSource>> {
    info!("Opening {} barcode reader.", device);

    let file = File::open(device.path())?;
    Ok(match device {
        ScannerDevice::Hid(_) => Box::new(HidScanner::new(file)),
        ScannerDevice::Tty(_) => Box::new(TextScanner::new(file)),
    })
}

/// Strips the module path off a type name, so providers log as `OpenFoodFacts` rather than
/// `grocy_barcode::provider::off::OpenFoodFacts`.
pub fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
