use std::process;

use tracing::{error, info};

use grocy_barcode::config::Config;
use grocy_barcode::grocy::Client;
use grocy_barcode::provider::{Multi, OpenFoodFacts};
use grocy_barcode::server::{BarcodeServer, ModeActions};
use grocy_barcode::tools;

// Keyboard emulation mode:
//
// Most scanners ship configured as a USB HID keyboard. The barcode is "typed": every character is
// sent as the usage code of the key that would produce it, followed by Enter. Reading the raw
// hidraw node instead of relying on a focused terminal means the reader works headless, but the
// stream has to be decoded by hand (see `decoder`). Scanners that can be switched to a serial
// (CDC ACM) interface write plain lines of text instead, and are configured with GB_TTY.

fn main() {
    let config = Config::from_env();
    tools::initialize_logging(config.as_ref().map_or(false, |config| config.json_logs));
    info!("Starting grocy-barcode.");

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let scanner = match tools::open_scanner(&config.device) {
        Ok(scanner) => scanner,
        Err(e) => {
            error!("Error opening {}: {}", config.device, e);
            process::exit(1);
        }
    };

    let grocy = Client::new(
        config.grocy_url,
        config.grocy_api_key,
        config.defaults,
        Multi::new().with(OpenFoodFacts::new()),
    );
    info!("Created grocy client for {}", grocy.server());

    let actions = ModeActions::new(
        |barcode: &str| grocy.add_or_create(barcode),
        |barcode: &str| grocy.consume(barcode),
        |barcode: &str| grocy.open(barcode),
    );

    if let Err(e) = BarcodeServer::new(scanner, actions).start() {
        error!("{}", e);
        process::exit(1);
    };
}
