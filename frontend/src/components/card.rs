use common::location::GeoLocation;
use common::model::restaurant::Restaurant;
use yew::{html, Component, Context, Html, Properties};

use crate::components::blurhash_image::BlurhashImage;

#[derive(Properties, PartialEq)]
pub struct RestaurantCardProps {
    pub restaurant: Restaurant,
    pub viewer: GeoLocation,
}

/// One restaurant card: image region, name, description, joined tags,
/// city, formatted price and distance from the viewer.
pub struct RestaurantCard;

impl Component for RestaurantCard {
    type Message = ();
    type Properties = RestaurantCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RestaurantCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let restaurant = &props.restaurant;

        // Price display divides by 100 and appends a euro sign no matter
        // what the record's currency says.
        let price = format!("{:.2}€", restaurant.delivery_price / 100.0);
        let distance = props.viewer.distance_m(&restaurant.location).round();

        html! {
            <div class="restaurant-card">
                <div class="restaurant-card-media">
                    <BlurhashImage
                        src={restaurant.image.clone()}
                        blurhash={restaurant.blurhash.clone()}
                    />
                </div>
                <div class="restaurant-card-body">
                    <p class="restaurant-name">{ &restaurant.name }</p>
                    <p>{ &restaurant.description }</p>
                    <p class="restaurant-meta">{ restaurant.tags.join(", ") }</p>
                    <p class="restaurant-meta">{ &restaurant.city }</p>
                    <p class="restaurant-meta">{ price }</p>
                    <p>{ distance }</p>
                </div>
            </div>
        }
    }
}
