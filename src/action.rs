use derive_more::Display;

use crate::error::Result;

/// An inventory operation performed on a scanned barcode.
pub trait Action {
    fn perform(&self, barcode: &str) -> Result<()>;
}

impl<F> Action for F
where
    F: Fn(&str) -> Result<()>,
{
    fn perform(&self, barcode: &str) -> Result<()> {
        self(barcode)
    }
}

/// What the reader does with the barcodes it scans. Selected by scanning the mode's token.
#[derive(Debug, Display, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Mode {
    /// Add one unit to stock, creating the product first if it is unknown.
    #[display(fmt = "addcreate")]
    AddCreate,

    /// Consume one unit from stock.
    #[display(fmt = "consume")]
    Consume,

    /// Mark one unit as opened.
    #[display(fmt = "open")]
    Open,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::AddCreate, Mode::Consume, Mode::Open];

    /// Returns the mode a scanned barcode switches to, if it is a mode token.
    pub fn from_token(barcode: &str) -> Option<Mode> {
        match barcode {
            "addcreate" => Some(Mode::AddCreate),
            "consume" => Some(Mode::Consume),
            "open" => Some(Mode::Open),
            _ => None,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::AddCreate
    }
}
