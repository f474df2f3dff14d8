use crate::components::LabContext;
use crate::lab::{Modal, Notifications, TransferChoice};
use leptos::*;

#[component]
pub fn ToastStack(notes: RwSignal<Notifications<TransferChoice>>) -> impl IntoView {
    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || notes.with(|n| n.toasts().to_vec())
                key=|toast| toast.id
                children=|toast| view! { <div class="toast">{toast.message}</div> }
            />
        </div>
    }
}

/// Renders the open modal, if any. Backdrop clicks and the cancel button
/// both just dismiss.
#[component]
pub fn ModalHost(ctx: LabContext) -> impl IntoView {
    let notes = ctx.notes;
    let dismiss = move |_: ev::MouseEvent| notes.update(|n| n.dismiss());

    move || {
        notes.with(|n| n.modal().cloned()).map(|modal| {
            let body = match modal {
                Modal::Alert { title, message, tone } => view! {
                    <div class=format!("modal {}", tone.class()) on:click=|ev| ev.stop_propagation()>
                        <div class="modal-icon">{tone.icon()}</div>
                        <h3>{title}</h3>
                        <p>{message}</p>
                        <button type="button" class="btn-primary" on:click=dismiss>"Entendido"</button>
                    </div>
                }
                .into_view(),
                Modal::Chooser { title, subtitle, options } => {
                    let buttons = options
                        .into_iter()
                        .enumerate()
                        .map(|(index, option)| {
                            view! {
                                <button
                                    type="button"
                                    class="modal-option"
                                    on:click=move |_| ctx.pick_transfer(index)
                                >
                                    {option.label}
                                </button>
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="modal modal-chooser" on:click=|ev| ev.stop_propagation()>
                            <h3>{title}</h3>
                            <p class="modal-subtitle">{subtitle}</p>
                            <div class="modal-options">{buttons}</div>
                            <button type="button" class="btn-secondary" on:click=dismiss>"Cancelar"</button>
                        </div>
                    }
                    .into_view()
                }
            };
            view! { <div class="modal-backdrop" on:click=dismiss>{body}</div> }
        })
    }
}
