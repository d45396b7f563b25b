use std::io;

use derive_more::{Display, Error, From};

/// Everything that can go wrong while reading, looking up or recording a barcode.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The barcode source failed. Fatal for the read loop.
    #[display(fmt = "reading barcode: {}", _0)]
    Read(io::Error),

    #[display(fmt = "HTTP error: {}", _0)]
    Http(Box<ureq::Error>),

    #[display(fmt = "JSON error: {}", _0)]
    Json(serde_json::Error),

    #[display(fmt = "invalid URL: {}", _0)]
    Url(url::ParseError),

    #[display(fmt = "{} cannot be used as a base URL", _0)]
    #[from(ignore)]
    NotABaseUrl(#[error(not(source))] String),

    #[display(fmt = "{}: unexpected status code {}", context, status)]
    #[from(ignore)]
    UnexpectedStatus { context: &'static str, status: u16 },

    #[display(fmt = "no product name found for {}", barcode)]
    #[from(ignore)]
    EmptyProduct { barcode: String },

    #[display(fmt = "all product providers failed: [{}]", _0)]
    AllProvidersFailed(#[error(not(source))] ProviderErrors),

    #[display(fmt = "{} must be set", _0)]
    #[from(ignore)]
    MissingVar(#[error(not(source))] &'static str),

    #[display(fmt = "{} has an invalid value {:?}", name, value)]
    #[from(ignore)]
    InvalidVar { name: &'static str, value: String },
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        Error::Http(Box::new(e))
    }
}

/// Failures of every provider that was asked for a product, in the order they were asked.
#[derive(Debug, Default, Display)]
#[display(fmt = "{}", "joined(_0)")]
pub struct ProviderErrors(pub Vec<Error>);

fn joined(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, Error>;
