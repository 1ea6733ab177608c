mod components;
mod pages;
mod providers;

use yew::prelude::*;

use pages::HomePage;

#[function_component(App)]
fn app() -> Html {
    html! {
        <HomePage />
    }
}

fn main() {
    if let Err(err) = mergington::log::setup() {
        web_sys::console::error_1(&format!("Failed to setup logging: {err}").into());
    }
    yew::Renderer::<App>::new().render();
}
