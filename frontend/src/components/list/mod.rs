//! Restaurant list controller: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view
//! rendering and properties.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `RestaurantListProps`, `RestaurantList`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//!
//! The controller owns the three pieces of interactive state (filter
//! text, sort key, direction) and re-derives the full filtered and
//! sorted sequence on every state change via `common::query`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RestaurantListProps;
pub use state::RestaurantList;

impl Component for RestaurantList {
    type Message = Msg;
    type Properties = RestaurantListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RestaurantList::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
