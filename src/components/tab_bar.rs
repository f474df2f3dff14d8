use crate::lab::{Lab, TabController};
use leptos::*;

/// One button per panel; exactly one is active at a time.
#[component]
pub fn TabBar(lab: Lab, tabs: RwSignal<TabController>) -> impl IntoView {
    let buttons = lab
        .panels()
        .into_iter()
        .map(|panel| {
            view! {
                <button
                    type="button"
                    class="tab-btn"
                    attr:data-tab=panel
                    class:active=move || tabs.with(|t| t.is_active(panel))
                    on:click=move |_| {
                        tabs.update(|t| {
                            t.select(panel);
                        })
                    }
                >
                    {lab.panel_label(panel)}
                </button>
            }
        })
        .collect_view();

    view! { <div class="tabs">{buttons}</div> }
}
