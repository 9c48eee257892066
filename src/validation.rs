//! Shape checks for raw product JSON and RFQ submissions, plus input sanitising.
//!
//! Validators never fail fast: they collect every problem so the caller can
//! show (or log) the full list at once.

use serde::Serialize;
use serde_json::Value;

use crate::rfq::RfqSubmission;
use crate::state::lenient::is_truthy;
use crate::util::truncate_chars;

/// Longest accepted free-text form input, in characters.
pub const MAX_INPUT_CHARS: usize = 1000;
/// Longest accepted search term, in characters.
pub const MAX_SEARCH_CHARS: usize = 100;

/// Outcome of a validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Human-readable problems, in check order.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// No problems were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }
}

/// Truthy JSON string at `key`.
fn non_empty_str<'a>(v: &'a Value, key: &str) -> Option<&'a str> {
    v.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// What: Check a raw product object before it enters the catalogue.
///
/// Inputs:
/// - `product`: One element of the product data array.
///
/// Output:
/// - [`ValidationResult`] listing every missing or mistyped field.
///
/// Details:
/// - `slug`, `name`, `summary`, `moq` must be non-empty strings.
/// - `category` must be one of Men, Women, Accessories.
/// - `images` must be a non-empty array; `keySpecs` must be an array.
/// - `fabric_oz` and `subCategory` are only checked when present and truthy.
#[must_use]
pub fn validate_product(product: &Value) -> ValidationResult {
    let mut res = ValidationResult::default();

    if non_empty_str(product, "slug").is_none() {
        res.push("Product slug is required and must be a string");
    }
    if non_empty_str(product, "name").is_none() {
        res.push("Product name is required and must be a string");
    }
    if !matches!(
        non_empty_str(product, "category"),
        Some("Men" | "Women" | "Accessories")
    ) {
        res.push("Product category must be one of: Men, Women, Accessories");
    }
    if !product
        .get("images")
        .and_then(Value::as_array)
        .is_some_and(|a| !a.is_empty())
    {
        res.push("Product must have at least one image");
    }
    if non_empty_str(product, "summary").is_none() {
        res.push("Product summary is required and must be a string");
    }
    if !product.get("keySpecs").is_some_and(Value::is_array) {
        res.push("Product keySpecs must be an array");
    }
    if non_empty_str(product, "moq").is_none() {
        res.push("Product MOQ is required and must be a string");
    }

    if let Some(oz) = product.get("fabric_oz").filter(|v| is_truthy(v))
        && !oz.as_f64().is_some_and(|w| w > 0.0)
    {
        res.push("Product fabric_oz must be a positive number");
    }
    if let Some(sub) = product.get("subCategory").filter(|v| is_truthy(v))
        && !sub.is_string()
    {
        res.push("Product subCategory must be a string");
    }

    res
}

/// What: Loose email shape check: `local@domain.tld` with no whitespace.
///
/// Inputs:
/// - `email`: Address as typed.
///
/// Output:
/// - `true` when there is exactly one `@`, a non-empty local part, and a
///   domain containing a dot with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// What: Check an RFQ before it is submitted.
///
/// Inputs:
/// - `data`: Submission assembled from the form and basket.
///
/// Output:
/// - [`ValidationResult`]; item problems are numbered from 1.
#[must_use]
pub fn validate_rfq(data: &RfqSubmission) -> ValidationResult {
    let mut res = ValidationResult::default();

    if data.company_name.trim().is_empty() {
        res.push("Company name is required");
    }
    if data.contact_name.trim().is_empty() {
        res.push("Contact name is required");
    }
    if !is_valid_email(&data.email) {
        res.push("Valid email address is required");
    }
    if data.country.trim().is_empty() {
        res.push("Country is required");
    }

    if data.items.is_empty() {
        res.push("At least one product must be selected");
    } else {
        for (i, item) in data.items.iter().enumerate() {
            let n = i + 1;
            if item.product_slug.is_empty() {
                res.push(format!("Item {n}: Product slug is required"));
            }
            if item.quantity == 0 {
                res.push(format!("Item {n}: Valid quantity is required"));
            }
        }
    }

    res
}

/// Strip angle brackets and whitespace from a form field and cap its length.
#[must_use]
pub fn sanitize_input(input: &str) -> String {
    let cleaned: String = input.trim().chars().filter(|c| !matches!(c, '<' | '>')).collect();
    truncate_chars(&cleaned, MAX_INPUT_CHARS).to_string()
}

/// Same as [`sanitize_input`] with the shorter search-box limit.
#[must_use]
pub fn validate_search_term(term: &str) -> String {
    let cleaned: String = term.trim().chars().filter(|c| !matches!(c, '<' | '>')).collect();
    truncate_chars(&cleaned, MAX_SEARCH_CHARS).to_string()
}
