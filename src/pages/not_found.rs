use crate::lab::Lab;
use leptos::*;
use leptos_router::{use_location, A};

/// Unknown route. Offers every calculator instead of a bare back link.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let suggestions = Lab::ALL
        .into_iter()
        .map(|lab| view! { <li><A href=lab.route()>{lab.title()}</A></li> })
        .collect_view();

    view! {
        <main class="container">
            <header>
                <h1>"Sin calculadora en " <code>{move || pathname.get()}</code></h1>
                <p class="tagline">"Elige uno de los modelos disponibles:"</p>
            </header>
            <ul class="lab-list">{suggestions}</ul>
        </main>
    }
}
