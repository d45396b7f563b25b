use serde::Deserialize;
use tracing::debug;

use crate::constants::{OPEN_FOOD_FACTS_TIMEOUT, OPEN_FOOD_FACTS_URL};
use crate::error::{Error, Result};
use crate::provider::{Product, Provider};

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    product: Option<OffProduct>,
}

#[derive(Debug, Deserialize)]
struct OffProduct {
    #[serde(default)]
    product_name: String,
    #[serde(rename = "_keywords", default)]
    keywords: Vec<String>,
}

/// Looks products up in the Open Food Facts database.
pub struct OpenFoodFacts {
    base_url: String,
    agent: ureq::Agent,
}

impl OpenFoodFacts {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_FOOD_FACTS_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        OpenFoodFacts {
            base_url: base_url.into(),
            agent: ureq::AgentBuilder::new()
                .timeout(OPEN_FOOD_FACTS_TIMEOUT)
                .build(),
        }
    }
}

impl Default for OpenFoodFacts {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for OpenFoodFacts {
    #[tracing::instrument(skip(self))]
    fn product(&self, barcode: &str) -> Result<Product> {
        let url = format!(
            "{}/api/v0/product/{}.json",
            self.base_url.trim_end_matches('/'),
            barcode
        );
        debug!("Querying {}", url);

        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(Error::UnexpectedStatus {
                    context: "querying open food facts",
                    status,
                })
            }
            Err(e) => return Err(e.into()),
        };

        if response.status() != 200 {
            return Err(Error::UnexpectedStatus {
                context: "querying open food facts",
                status: response.status(),
            });
        }

        let body: ProductResponse = serde_json::from_reader(response.into_reader())?;

        match body.product {
            Some(product) if !product.product_name.is_empty() => Ok(Product {
                name: product.product_name,
                description: product.keywords.join(", "),
            }),
            _ => Err(Error::EmptyProduct {
                barcode: barcode.to_string(),
            }),
        }
    }
}
