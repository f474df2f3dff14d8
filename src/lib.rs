pub mod components;
pub mod config;
pub mod lab;
pub mod pages;
pub mod service;

use components::{LabPage, NavBar};
use config::{load_config, AppConfig};
use lab::Lab;
use leptos::*;
use leptos_router::*;
use pages::{HomePage, NotFoundPage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Workaround for Leptos 0.6 router not re-rendering on browser back/forward.
///
/// Reloading re-mounts the target page from scratch, which also gives it a
/// fresh result store.
fn setup_popstate_reload() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Algo salió mal"</h2>
                    <p>"La calculadora encontró un error. Recarga la página para empezar de nuevo."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Recargar"</button>
                </div>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Loads the config once and hands it to every page.
#[component]
fn RootInner() -> impl IntoView {
    provide_context::<AppConfig>(load_config());

    view! {
        <Router>
            <NavBar/>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/newton" view=|| view! { <LabPage lab=Lab::Cooling/> }/>
                <Route path="/radiactiva" view=|| view! { <LabPage lab=Lab::Decay/> }/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
    setup_popstate_reload();
    mount_to_body(Root);
}
