use yew::{html, Component, Context, Html};

/// Static top bar with the brand logo. No interactive behavior.
pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="navbar">
                <div class="navbar-inner">
                    <span class="navbar-logo">{ "ravintolat" }</span>
                </div>
            </div>
        }
    }
}
