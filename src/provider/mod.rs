//! Product metadata lookups for barcodes Grocy does not know yet.

use derive_more::Display;
use tracing::{debug, warn};

use crate::error::{Error, ProviderErrors, Result};
use crate::tools::short_type_name;

pub mod off;

pub use off::OpenFoodFacts;

/// What a provider knows about a product.
#[derive(Debug, Display, Clone, PartialEq, Eq, Default)]
#[display(fmt = "{}", name)]
pub struct Product {
    pub name: String,
    pub description: String,
}

/// A source of product metadata, keyed by barcode.
pub trait Provider {
    fn product(&self, barcode: &str) -> Result<Product>;

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<P: Provider + ?Sized> Provider for Box<P> {
    fn product(&self, barcode: &str) -> Result<Product> {
        (**self).product(barcode)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Asks each provider in turn and returns the first product found.
#[derive(Default)]
pub struct Multi(pub Vec<Box<dyn Provider>>);

impl Multi {
    pub fn new() -> Self {
        Multi(Vec::new())
    }

    pub fn with(mut self, provider: impl Provider + 'static) -> Self {
        self.0.push(Box::new(provider));
        self
    }
}

impl Provider for Multi {
    fn product(&self, barcode: &str) -> Result<Product> {
        let mut errors = Vec::new();

        for provider in &self.0 {
            match provider.product(barcode) {
                Ok(product) => {
                    debug!("{} found {} for {}.", provider.name(), product, barcode);
                    return Ok(product);
                }
                Err(e) => {
                    warn!("{} has no product for {}: {}", provider.name(), barcode, e);
                    errors.push(e);
                }
            }
        }

        Err(Error::AllProvidersFailed(ProviderErrors(errors)))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Fixed {
        answer: Option<&'static str>,
        asked: Cell<usize>,
    }

    impl Fixed {
        fn new(answer: Option<&'static str>) -> Self {
            Fixed {
                answer,
                asked: Cell::new(0),
            }
        }
    }

    impl Provider for Fixed {
        fn product(&self, barcode: &str) -> Result<Product> {
            self.asked.set(self.asked.get() + 1);
            match self.answer {
                Some(name) => Ok(Product {
                    name: name.to_string(),
                    description: String::new(),
                }),
                None => Err(Error::EmptyProduct {
                    barcode: barcode.to_string(),
                }),
            }
        }
    }

    impl Provider for Rc<Fixed> {
        fn product(&self, barcode: &str) -> Result<Product> {
            self.as_ref().product(barcode)
        }
    }

    #[test]
    fn first_success_wins() {
        let failing = Rc::new(Fixed::new(None));
        let found = Rc::new(Fixed::new(Some("Galletas")));
        let never = Rc::new(Fixed::new(Some("Other")));
        let multi = Multi::new()
            .with(Rc::clone(&failing))
            .with(Rc::clone(&found))
            .with(Rc::clone(&never));

        let product = multi.product("8411525020169").unwrap();

        assert_eq!(product.to_string(), "Galletas");
        assert_eq!(failing.asked.get(), 1);
        assert_eq!(found.asked.get(), 1);
        assert_eq!(never.asked.get(), 0);
    }

    #[test]
    fn all_failures_are_kept() {
        let multi = Multi::new()
            .with(Fixed::new(None))
            .with(Fixed::new(None));

        match multi.product("42") {
            Err(Error::AllProvidersFailed(ProviderErrors(errors))) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .all(|e| matches!(e, Error::EmptyProduct { barcode } if barcode == "42")));
            }
            other => panic!("expected every provider to fail, got {:?}", other),
        }
    }

    #[test]
    fn no_providers_is_a_failure() {
        assert!(matches!(
            Multi::new().product("42"),
            Err(Error::AllProvidersFailed(ProviderErrors(ref errors))) if errors.is_empty()
        ));
    }

    #[test]
    fn default_name_is_the_type_name() {
        assert_eq!(Fixed::new(None).name(), "Fixed");
        assert_eq!(Multi::new().name(), "Multi");
    }
}
