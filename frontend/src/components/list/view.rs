//! View rendering for the restaurant list controller.
//!
//! Renders the search box, the three sort controls and the card grid.
//! The displayed sequence is derived fresh on every render by
//! `common::query::filter_and_sort`; nothing is cached.

use common::query::{filter_and_sort, SortKey};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RestaurantList;
use crate::components::card::RestaurantCard;

pub fn view(component: &RestaurantList, ctx: &Context<RestaurantList>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    let derived = filter_and_sort(
        &props.restaurants,
        &component.filter,
        component.sort_key,
        component.ascending,
        &props.viewer,
    );

    html! {
        <div class="restaurant-list">
            <input
                type="text"
                class="search-box"
                placeholder="Search from restaurants"
                value={component.filter.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateFilter(input.value())
                })}
            />
            <div class="sort-controls">
                { "Sort by" }
                <div class="sort-options">
                    { sort_option(component, link, SortKey::Name, "name") }
                    { sort_option(component, link, SortKey::DeliveryPrice, "delivery price") }
                    { sort_option(component, link, SortKey::Closest, "closest") }
                </div>
            </div>
            <div class="card-grid">
                { for derived.iter().map(|restaurant| html! {
                    <RestaurantCard
                        key={restaurant.name.clone()}
                        restaurant={restaurant.clone()}
                        viewer={props.viewer}
                    />
                }) }
            </div>
        </div>
    }
}

/// One clickable sort control. The active key shows a direction marker.
fn sort_option(
    component: &RestaurantList,
    link: &Scope<RestaurantList>,
    key: SortKey,
    label: &str,
) -> Html {
    let active = component.sort_key == key;
    let marker = if !active {
        ""
    } else if component.ascending {
        " ▲"
    } else {
        " ▼"
    };

    html! {
        <span
            class={classes!("sort-option", active.then_some("active"))}
            onclick={link.callback(move |_| Msg::SelectSortKey(key))}
        >
            { label }{ marker }
        </span>
    }
}
