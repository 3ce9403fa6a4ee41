use products_dashboard::components::Dashboard;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Products Dashboard"}</h1>
            </header>

            <main class="app-main">
                <Dashboard />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
