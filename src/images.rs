//! Product image filename conventions.
//!
//! Uploaded images are named `{handle}-{color}-{view}-{NN}.png`, e.g.
//! `swift-waxed-jacket-brown-front-01.png`. This module parses such names and
//! derives the URLs and alt text the storefront serves for them. No image data
//! is read or transformed here.

use std::fmt;

use serde::Serialize;

use crate::util::capitalize_first;

/// Rendition widths generated for every image, widest first.
pub const RENDITION_WIDTHS: [u32; 5] = [2000, 1500, 1000, 600, 200];

/// Camera angle encoded in the filename.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageView {
    /// Front.
    Front,
    /// Back.
    Back,
    /// Side.
    Side,
    /// Close-up detail.
    Detail,
    /// Worn by a model.
    OnModel,
}

impl ImageView {
    /// Suffix match order when parsing filenames.
    const ALL: [Self; 5] = [Self::OnModel, Self::Detail, Self::Front, Self::Back, Self::Side];

    /// Token used in filenames.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Side => "side",
            Self::Detail => "detail",
            Self::OnModel => "on-model",
        }
    }

    /// Label used in alt text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Front => "Front View",
            Self::Back => "Back View",
            Self::Side => "Side View",
            Self::Detail => "Detail View",
            Self::OnModel => "On Model",
        }
    }
}

impl fmt::Display for ImageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Fields recovered from an image filename, lower-cased.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParsedImageName {
    /// Product handle (slug).
    pub handle: String,
    /// Colour name.
    pub color: String,
    /// Camera angle.
    pub view: ImageView,
    /// Sequence number within the view, from 0 to 99.
    pub index: u8,
}

/// What: Parse `{handle}-{color}-{view}-{NN}.png`.
///
/// Inputs:
/// - `filename`: Bare filename (no directories).
///
/// Output:
/// - `Some(ParsedImageName)` on match; `None` otherwise.
///
/// Details:
/// - Extension and view are case-insensitive; the index is exactly two ASCII digits.
/// - The colour is the last dash-separated word before the view, so the handle
///   may itself contain dashes.
#[must_use]
pub fn parse_filename(filename: &str) -> Option<ParsedImageName> {
    let lower = filename.to_lowercase();
    let stem = lower.strip_suffix(".png")?;

    let (rest, index) = stem.rsplit_once('-')?;
    if index.len() != 2 || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: u8 = index.parse().ok()?;

    let (rest, view) = ImageView::ALL.into_iter().find_map(|v| {
        rest.strip_suffix(v.token())
            .and_then(|r| r.strip_suffix('-'))
            .map(|r| (r, v))
    })?;

    let (handle, color) = rest.rsplit_once('-')?;
    if handle.is_empty() || color.is_empty() {
        return None;
    }
    Some(ParsedImageName {
        handle: handle.to_string(),
        color: color.to_string(),
        view,
        index,
    })
}

/// What: Alt text for a product image.
///
/// Inputs:
/// - `product_name`: Display name.
/// - `color`: Colour name, any case.
/// - `view`: Camera angle.
///
/// Output:
/// - e.g. "Swift Waxed Jacket in Brown — Front View".
#[must_use]
pub fn alt_text(product_name: &str, color: &str, view: ImageView) -> String {
    format!(
        "{product_name} in {} — {}",
        capitalize_first(color),
        view.label()
    )
}

/// URLs and metadata served for one uploaded image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedImage {
    /// Parsed filename fields.
    #[serde(flatten)]
    pub name: ParsedImageName,
    /// URL of the original PNG.
    pub original_url: String,
    /// `(width, url)` pairs for the WebP renditions, widest first.
    pub renditions: Vec<(u32, String)>,
    /// Alt text.
    pub alt_text: String,
    /// Front view #01 is the listing image.
    pub is_primary: bool,
}

/// What: Derive storage URLs and alt text for a parsed image.
///
/// Inputs:
/// - `name`: Parsed filename.
///
/// Output:
/// - [`ProcessedImage`] under `/images/products/{handle}/{color}/`.
#[must_use]
pub fn derive_urls(name: &ParsedImageName) -> ProcessedImage {
    let base = format!("/images/products/{}/{}", name.handle, name.color);
    let file = format!(
        "{}-{}-{}-{:02}",
        name.handle, name.color, name.view, name.index
    );
    let renditions = RENDITION_WIDTHS
        .iter()
        .map(|w| (*w, format!("{base}/{file}-{w}w.webp")))
        .collect();
    ProcessedImage {
        original_url: format!("{base}/{file}.png"),
        renditions,
        alt_text: alt_text(&name.handle.replace('-', " "), &name.color, name.view),
        is_primary: name.view == ImageView::Front && name.index == 1,
        name: name.clone(),
    }
}
