use serde::{Deserialize, Serialize};

use crate::location::GeoLocation;

/// A single restaurant as displayed in the listing grid.
///
/// Records are deserialized from the bundled fixture file and then passed
/// through the enrichment step in `catalog`, which overwrites
/// `delivery_price` with a randomized value. Everything else is carried
/// verbatim from the fixture.
///
/// `name` doubles as the rendering key for the card grid and is assumed
/// unique within the loaded set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Display name, also the filter and name-sort field (case-insensitive).
    pub name: String,
    /// Short marketing blurb shown under the name.
    pub description: String,
    /// City the restaurant operates in.
    pub city: String,
    /// Ordered tag list, joined with `", "` for display.
    pub tags: Vec<String>,
    /// ISO currency code. Only affects the price-rounding policy during
    /// enrichment (`"EUR"` is rounded to 2 decimals, everything else is
    /// left at the raw drawn value).
    pub currency: String,
    /// Delivery price in an implicit cent-like scale. The fixture value is
    /// discarded and replaced by the enrichment step.
    pub delivery_price: f64,
    /// Coordinates, stored in the fixture as a `[lat, lng]` array.
    pub location: GeoLocation,
    /// URL of the card image.
    pub image: String,
    /// Compact placeholder encoding shown while the image loads.
    pub blurhash: String,
    /// Carried from the fixture; no rendering logic reads it.
    pub online: bool,
}

/// Top-level shape of the bundled fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantFile {
    pub restaurants: Vec<Restaurant>,
}
