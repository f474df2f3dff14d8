use crate::lab::Lab;
use leptos::*;
use leptos_router::{use_location, A};

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    let lab_links = Lab::ALL
        .into_iter()
        .map(|lab| {
            let class = move || {
                if pathname.with(|p| lab.is_current(p)) {
                    "nav-link active"
                } else {
                    "nav-link"
                }
            };
            view! { <A href=lab.route() class=class>{lab.nav_label()}</A> }
        })
        .collect_view();

    let home_class = move || {
        if pathname.with(|p| p == "/") {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"Calculadoras"</A>
                <div class="nav-links">
                    <A href="/" class=home_class>"Inicio"</A>
                    {lab_links}
                </div>
            </div>
        </nav>
    }
}
