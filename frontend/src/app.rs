use std::rc::Rc;

use gloo_console::log;
use rand::thread_rng;
use yew::{html, Component, Context, Html};

use common::catalog::{assign_delivery_prices, random_viewer_location};
use common::location::GeoLocation;
use common::model::restaurant::{Restaurant, RestaurantFile};

use crate::components::list::RestaurantList;
use crate::navbar::Navbar;

const FIXTURE: &str = include_str!("restaurants.json");

/// Application shell. Parses the bundled fixture, runs the one-time
/// enrichment (randomized delivery prices, randomized viewer location)
/// and hands the result down as immutable props.
pub struct App {
    restaurants: Rc<Vec<Restaurant>>,
    viewer: GeoLocation,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let file: RestaurantFile =
            serde_json::from_str(FIXTURE).expect("bundled restaurants.json is well-formed");
        let mut restaurants = file.restaurants;

        let mut rng = thread_rng();
        assign_delivery_prices(&mut restaurants, &mut rng);
        let viewer = random_viewer_location(&restaurants, &mut rng);

        log!(format!(
            "loaded {} restaurants, viewer at ({:.4}, {:.4})",
            restaurants.len(),
            viewer.latitude,
            viewer.longitude
        ));

        Self {
            restaurants: Rc::new(restaurants),
            viewer,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <Navbar />
                <div class="page">
                    <h1 class="page-title">{ "Kaikki ravintolat" }</h1>
                    <RestaurantList restaurants={self.restaurants.clone()} viewer={self.viewer} />
                </div>
            </div>
        }
    }
}
