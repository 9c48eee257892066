//! Request-for-quote basket and the stub lead-submission endpoint.
//!
//! The basket is keyed by product slug, the only stable join key into the
//! catalogue. Submissions are validated and logged; nothing is persisted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::state::ProductRecord;
use crate::validation::validate_rfq;

/// Quantity pre-filled when a product is added to the basket.
pub const DEFAULT_QUANTITY: u32 = 50;

/// One requested product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfqItem {
    /// Slug of the requested product.
    #[serde(default)]
    pub product_slug: String,
    /// Target quantity; zero means "not filled in".
    #[serde(default)]
    pub quantity: u32,
    /// Preferred colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Per-size quantity breakdown.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sizes: BTreeMap<String, u32>,
    /// Free-text customisation notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<String>,
}

impl RfqItem {
    /// New item with the default quantity and no options.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            product_slug: slug.into(),
            quantity: DEFAULT_QUANTITY,
            color: None,
            sizes: BTreeMap::new(),
            customization: None,
        }
    }
}

/// Partial update applied by [`RfqBasket::update`]; `None` fields are left alone.
#[derive(Clone, Debug, Default)]
pub struct RfqItemUpdate {
    /// New quantity.
    pub quantity: Option<u32>,
    /// New colour.
    pub color: Option<String>,
    /// Replacement size breakdown.
    pub sizes: Option<BTreeMap<String, u32>>,
    /// New customisation notes.
    pub customization: Option<String>,
}

/// Ordered, de-duplicated list of products a buyer wants quoted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RfqBasket {
    items: Vec<RfqItem>,
}

impl RfqBasket {
    /// What: Start a basket from a list of slugs.
    ///
    /// Inputs:
    /// - `slugs`: Slugs to pre-load, typically from a product page "Request quote" click.
    ///
    /// Output:
    /// - Basket with one default item per distinct slug, first occurrence wins.
    pub fn with_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut basket = Self::default();
        for s in slugs {
            basket.add(s);
        }
        basket
    }

    /// Add a product with the default quantity; returns `false` if it was already present.
    pub fn add(&mut self, slug: impl Into<String>) -> bool {
        let slug = slug.into();
        if self.contains(&slug) {
            return false;
        }
        tracing::debug!(slug = %slug, "[RFQ] Added product to basket");
        self.items.push(RfqItem::new(slug));
        true
    }

    /// Remove a product; returns `false` if it was not present.
    pub fn remove(&mut self, slug: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|it| it.product_slug != slug);
        before != self.items.len()
    }

    /// What: Patch an item in place.
    ///
    /// Inputs:
    /// - `slug`: Item to change.
    /// - `update`: Fields to overwrite.
    ///
    /// Output:
    /// - `true` when the item exists and was updated.
    pub fn update(&mut self, slug: &str, update: RfqItemUpdate) -> bool {
        let Some(item) = self.items.iter_mut().find(|it| it.product_slug == slug) else {
            return false;
        };
        if let Some(q) = update.quantity {
            item.quantity = q;
        }
        if let Some(c) = update.color {
            item.color = Some(c);
        }
        if let Some(s) = update.sizes {
            item.sizes = s;
        }
        if let Some(n) = update.customization {
            item.customization = Some(n);
        }
        true
    }

    /// Whether `slug` is already in the basket.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.items.iter().any(|it| it.product_slug == slug)
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[RfqItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Basket has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Catalogue products that can still be added.
    #[must_use]
    pub fn available_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ProductRecord> {
        catalog
            .records()
            .iter()
            .filter(|p| !self.contains(&p.slug))
            .collect()
    }

    /// Consume the basket into submission items.
    #[must_use]
    pub fn into_items(self) -> Vec<RfqItem> {
        self.items
    }
}

/// Payload posted by the RFQ form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RfqSubmission {
    /// Buyer company.
    pub company_name: String,
    /// Person to contact.
    pub contact_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Buyer country.
    pub country: String,
    /// Retailer, brand, distributor, ...
    pub business_type: String,
    /// Desired delivery timeline.
    pub timeline: String,
    /// Anything else the buyer wrote.
    pub additional_notes: String,
    /// Requested products.
    pub items: Vec<RfqItem>,
    /// Client-side submission time (RFC 3339), if sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Acknowledgement returned to the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfqAck {
    /// Whether the request was accepted.
    pub success: bool,
    /// Message for the toast.
    pub message: String,
    /// Reference id, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfq_id: Option<String>,
}

/// Submit an RFQ using the current time for the reference id.
#[must_use]
pub fn submit(data: &RfqSubmission) -> RfqAck {
    submit_at(data, Utc::now())
}

/// What: Validate and acknowledge an RFQ.
///
/// Inputs:
/// - `data`: Submission to accept.
/// - `now`: Clock reading used for the reference id and missing timestamps.
///
/// Output:
/// - Success ack with `RFQ-<unix millis>` id, or a failure ack listing validation errors.
///
/// Details:
/// - The accepted submission is only written to the log.
#[must_use]
pub fn submit_at(data: &RfqSubmission, now: DateTime<Utc>) -> RfqAck {
    let validation = validate_rfq(data);
    if !validation.is_valid() {
        tracing::warn!(
            company = %data.company_name,
            errors = validation.errors.len(),
            "[RFQ] Submission rejected"
        );
        return RfqAck {
            success: false,
            message: validation.errors.join(", "),
            rfq_id: None,
        };
    }

    let timestamp = data.timestamp.clone().unwrap_or_else(|| now.to_rfc3339());
    tracing::info!(
        company = %data.company_name,
        contact = %data.contact_name,
        email = %data.email,
        items = data.items.len(),
        timestamp = %timestamp,
        "[RFQ] Submission received"
    );
    RfqAck {
        success: true,
        message: "RFQ submitted successfully".to_string(),
        rfq_id: Some(format!("RFQ-{}", now.timestamp_millis())),
    }
}
