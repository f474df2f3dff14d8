use crate::lab::Lab;
use leptos::*;
use leptos_router::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="container home-page">
            <header>
                <h1>"Calculadoras de Ecuaciones Diferenciales"</h1>
                <p class="tagline">"Modelos exponenciales de primer orden"</p>
            </header>

            <section class="lab-cards">
                <A href=Lab::Cooling.route() class="lab-card">
                    <h2>"🌡️ " {Lab::Cooling.title()}</h2>
                    <p>"T(t) = Tₘ + C·e^(Kt)"</p>
                    <p>"Temperatura, tiempo, constantes K y C, y tablas con gráfico."</p>
                </A>
                <A href=Lab::Decay.route() class="lab-card">
                    <h2>"⚛️ " {Lab::Decay.title()}</h2>
                    <p>"N(t) = N₀·e^(-kt)"</p>
                    <p>"Cantidad, tiempo, constante k, cantidad inicial y tablas."</p>
                </A>
            </section>
        </main>
    }
}
