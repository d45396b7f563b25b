//! Client for the parts of the Grocy REST API a barcode reader needs.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};
use url::Url;

use crate::constants::{GROCY_API_KEY_HEADER, GROCY_TIMEOUT};
use crate::error::{Error, Result};
use crate::provider::Provider;

/// Ids Grocy needs for products created from a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub product_location_id: u32,
    pub product_unit_id: u32,
}

/// Id of an object Grocy just created. Depending on the version it is sent as a number or as a
/// string.
#[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectId {
    #[display(fmt = "{}", _0)]
    Number(u64),
    #[display(fmt = "{}", _0)]
    Text(String),
}

#[derive(Debug, Deserialize)]
struct Created {
    created_object_id: ObjectId,
}

pub struct Client {
    server: String,
    api_key: String,
    defaults: Defaults,
    provider: Box<dyn Provider>,
    agent: ureq::Agent,
}

impl Client {
    pub fn new(
        server: impl Into<String>,
        api_key: impl Into<String>,
        defaults: Defaults,
        provider: impl Provider + 'static,
    ) -> Self {
        Client {
            server: server.into(),
            api_key: api_key.into(),
            defaults,
            provider: Box::new(provider),
            agent: ureq::AgentBuilder::new().timeout(GROCY_TIMEOUT).build(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// Adds one unit of the product, creating it first if Grocy does not know the barcode.
    #[tracing::instrument(skip(self))]
    pub fn add_or_create(&self, barcode: &str) -> Result<()> {
        info!("Adding or creating {}", barcode);

        let response = self.call(
            self.request("GET", &["stock", "products", "by-barcode", barcode])?,
            None,
        )?;

        // Grocy answers 400 for unknown barcodes where 404 would be expected. Accept both.
        match response.status() {
            200 => {}
            400 | 404 => {
                info!("{} not registered, creating product", barcode);
                self.create(barcode)?;
            }
            status => {
                return Err(Error::UnexpectedStatus {
                    context: "checking existence of product",
                    status,
                })
            }
        }

        info!("Adding one unit of {}", barcode);
        self.add(barcode)
    }

    /// Creates a product from the provider's metadata and associates the barcode to it.
    pub fn create(&self, barcode: &str) -> Result<ObjectId> {
        let product = self.provider.product(barcode)?;
        if product.name.is_empty() {
            return Err(Error::EmptyProduct {
                barcode: barcode.to_string(),
            });
        }

        info!("Found product {}", product);

        let unit = self.defaults.product_unit_id;
        let created: Created = self.post_created(
            &["objects", "products"],
            json!({
                "name": product.name,
                "description": product.description,
                "active": 1,
                "location_id": self.defaults.product_location_id,
                "qu_id_stock": unit,
                "qu_id_purchase": unit,
                "qu_id_consume": unit,
                "qu_id_price": unit,
            }),
            "creating product",
        )?;

        let product_id = created.created_object_id;
        let created: Created = self.post_created(
            &["objects", "product_barcodes"],
            json!({
                "product_id": product_id,
                "barcode": barcode,
            }),
            "creating product barcode",
        )?;

        info!(
            "Created product {} ({}) and associated it to {}",
            product, product_id, barcode
        );

        Ok(created.created_object_id)
    }

    /// Adds one unit of an existing product to stock.
    pub fn add(&self, barcode: &str) -> Result<()> {
        self.stock_action(barcode, "add", json!({ "amount": 1 }), "adding product")
    }

    /// Consumes one unit of the product.
    #[tracing::instrument(skip(self))]
    pub fn consume(&self, barcode: &str) -> Result<()> {
        info!("Consuming one unit of {}", barcode);
        self.stock_action(
            barcode,
            "consume",
            json!({ "amount": 1, "spoiled": false }),
            "consuming product",
        )
    }

    /// Marks one unit of the product as opened.
    #[tracing::instrument(skip(self))]
    pub fn open(&self, barcode: &str) -> Result<()> {
        info!("Opening one unit of {}", barcode);
        self.stock_action(barcode, "open", json!({ "amount": 1 }), "opening product")
    }

    fn stock_action(
        &self,
        barcode: &str,
        action: &str,
        body: serde_json::Value,
        context: &'static str,
    ) -> Result<()> {
        let path = ["stock", "products", "by-barcode", barcode, action];
        let response = self.call(self.request("POST", &path)?, Some(body))?;
        expect_status(response.status(), &[200, 201], context)
    }

    fn post_created(
        &self,
        path: &[&str],
        body: serde_json::Value,
        context: &'static str,
    ) -> Result<Created> {
        let response = self.call(self.request("POST", path)?, Some(body))?;
        // Grocy answers 200 where 201 would be expected. Accept both.
        expect_status(response.status(), &[200, 201], context)?;
        Ok(serde_json::from_reader(response.into_reader())?)
    }

    /// Builds `{server}/api/{segments}`. Each segment is percent-encoded, so a barcode can never
    /// change the request target.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.server)?;
        url.path_segments_mut()
            .map_err(|_| Error::NotABaseUrl(self.server.clone()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: &str, segments: &[&str]) -> Result<ureq::Request> {
        Ok(self
            .agent
            .request_url(method, &self.url(segments)?)
            .set("content-type", "application/json")
            .set("accept", "application/json")
            .set(GROCY_API_KEY_HEADER, &self.api_key))
    }

    /// Performs the request. Error statuses are returned as responses for the caller to judge.
    fn call(
        &self,
        request: ureq::Request,
        body: Option<serde_json::Value>,
    ) -> Result<ureq::Response> {
        debug!("{} {}", request.method(), request.url());

        let result = match body {
            Some(body) => request.send_json(body),
            None => request.call(),
        };

        match result {
            Ok(response) | Err(ureq::Error::Status(_, response)) => Ok(response),
            Err(e) => Err(e.into()),
        }
    }
}

fn expect_status(status: u16, accepted: &[u16], context: &'static str) -> Result<()> {
    if accepted.contains(&status) {
        Ok(())
    } else {
        Err(Error::UnexpectedStatus { context, status })
    }
}
