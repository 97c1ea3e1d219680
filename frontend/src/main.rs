use crate::app::App;

mod app;
mod components;
mod navbar;

fn main() {
    yew::Renderer::<App>::new().render();
}
