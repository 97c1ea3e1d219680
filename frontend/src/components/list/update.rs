//! Update logic for the restaurant list controller.

use yew::prelude::*;

use super::messages::Msg;
use super::state::RestaurantList;

/// Handles a message and returns whether the view must re-render.
pub fn update(component: &mut RestaurantList, _ctx: &Context<RestaurantList>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateFilter(text) => {
            component.filter = text;
            true
        }
        Msg::SelectSortKey(key) => {
            component.select_sort_key(key);
            true
        }
    }
}
