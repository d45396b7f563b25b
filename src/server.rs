use tracing::{debug, error, info};

use crate::action::{Action, Mode};
use crate::device::BarcodeSource;
use crate::error::{Error, Result};

/// The actions the server can switch between, one per [`Mode`].
pub struct ModeActions<'a> {
    pub add_create: Box<dyn Action + 'a>,
    pub consume: Box<dyn Action + 'a>,
    pub open: Box<dyn Action + 'a>,
}

impl<'a> ModeActions<'a> {
    pub fn new(
        add_create: impl Action + 'a,
        consume: impl Action + 'a,
        open: impl Action + 'a,
    ) -> Self {
        ModeActions {
            add_create: Box::new(add_create),
            consume: Box::new(consume),
            open: Box::new(open),
        }
    }

    pub fn get(&self, mode: Mode) -> &dyn Action {
        match mode {
            Mode::AddCreate => self.add_create.as_ref(),
            Mode::Consume => self.consume.as_ref(),
            Mode::Open => self.open.as_ref(),
        }
    }
}

/// What happened to a single scanned barcode.
#[derive(Debug)]
pub enum Scan {
    /// The barcode was a mode token and no action ran.
    ModeChanged(Mode),
    Performed { mode: Mode, barcode: String },
    /// The action failed. The server keeps reading.
    Failed {
        mode: Mode,
        barcode: String,
        error: Error,
    },
}

/// Reads barcodes from a scanner and applies the current mode's action to each of them.
pub struct BarcodeServer<'a, S> {
    source: S,
    actions: ModeActions<'a>,
    mode: Mode,
}

impl<'a, S: BarcodeSource> BarcodeServer<'a, S> {
    pub fn new(source: S, actions: ModeActions<'a>) -> Self {
        info!("Creating barcode server in {} mode.", Mode::default());

        BarcodeServer {
            source,
            actions,
            mode: Mode::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Reads and handles one barcode.
    ///
    /// Only a failing source is an error. Failed actions are reported as [`Scan::Failed`].
    pub fn step(&mut self) -> Result<Scan> {
        let barcode = self.source.read_next().map_err(Error::Read)?;

        if let Some(mode) = Mode::from_token(&barcode) {
            info!("Switching to mode {}.", mode);
            self.mode = mode;
            return Ok(Scan::ModeChanged(mode));
        }

        let mode = self.mode;
        debug!("Performing {} on {}.", mode, barcode);

        match self.actions.get(mode).perform(&barcode) {
            Ok(()) => Ok(Scan::Performed { mode, barcode }),
            Err(error) => Ok(Scan::Failed {
                mode,
                barcode,
                error,
            }),
        }
    }

    /// Handles barcodes until the source fails, and returns that failure.
    #[tracing::instrument(skip(self))]
    pub fn start(&mut self) -> Result<()> {
        info!("Starting server.");

        loop {
            info!("Ready to read barcode.");

            match self.step()? {
                Scan::ModeChanged(_) => {}
                Scan::Performed { mode, barcode } => info!("Done: {} {}.", mode, barcode),
                Scan::Failed {
                    mode,
                    barcode,
                    error,
                } => error!("Error processing {} in {} mode: {}", barcode, mode, error),
            }
        }
    }
}
