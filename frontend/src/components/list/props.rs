//! Defines the properties for the `RestaurantList` component.

use std::rc::Rc;

use common::location::GeoLocation;
use common::model::restaurant::Restaurant;
use yew::prelude::*;

/// Properties for the `RestaurantList`.
///
/// Both values are produced once by the app shell during initialization
/// and never change afterwards; the controller only reads them.
#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantListProps {
    /// The full enriched dataset, shared by reference with the shell.
    pub restaurants: Rc<Vec<Restaurant>>,
    /// Reference point for every "closest" comparison and for the
    /// distance shown on each card.
    pub viewer: GeoLocation,
}
