use crate::components::{LabContext, ResultPanel};
use crate::lab::{fraction_of, CalculationKind, ServiceError, QUICK_FRACTIONS};
use leptos::*;

/// Target-quantity shortcuts of the decay time form.
#[component]
fn QuickFractions(ctx: LabContext) -> impl IntoView {
    let buttons = QUICK_FRACTIONS
        .iter()
        .map(|&(label, fraction)| {
            let on_click = move |_: ev::MouseEvent| {
                let n0 = ctx.forms.with_untracked(|f| f.get("tiempo-N0").unwrap_or_default().to_string());
                match fraction_of(&n0, fraction) {
                    Some(target) => ctx.forms.update(|f| {
                        f.set("tiempo-N-objetivo", target);
                    }),
                    None => tracing::debug!(n0 = %n0, "no positive N0 to take a fraction of"),
                }
            };
            view! { <button type="button" class="btn-quick" on:click=on_click>{label}</button> }
        })
        .collect_view();
    view! { <div class="quick-buttons">{buttons}</div> }
}

#[component]
pub fn CalculationForm(kind: CalculationKind, ctx: LabContext) -> impl IntoView {
    let busy = move || ctx.submissions.with(|s| s.is_busy(kind));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !ctx.submissions.try_update(|s| s.begin(kind)).unwrap_or(false) {
            return;
        }
        let inputs = match ctx.forms.with_untracked(|f| f.numeric_inputs(kind)) {
            Ok(inputs) => inputs,
            Err(field) => {
                tracing::warn!(%kind, field, "input is not a number, not submitting");
                ctx.settle(kind, &Default::default(), Err(ServiceError::InvalidInput { field }));
                ctx.submissions.update(|s| s.finish(kind));
                return;
            }
        };
        let client = ctx.client.get_value();
        spawn_local(async move {
            let started = js_sys::Date::now();
            let result = client.compute(kind, &inputs).await;
            tracing::debug!(%kind, elapsed_ms = js_sys::Date::now() - started, "request finished");
            ctx.settle(kind, &inputs, result);
            ctx.submissions.update(|s| s.finish(kind));
        });
    };

    let fields = kind
        .inputs()
        .iter()
        .map(|field| {
            let id = field.id;
            view! {
                <div class="form-group">
                    <label for=id>{field.label}</label>
                    <input
                        type="number"
                        step="any"
                        id=id
                        name=field.key
                        placeholder=field.placeholder
                        prop:value=move || ctx.forms.with(|f| f.get(id).unwrap_or_default().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.forms.update(|f| {
                                f.set(id, value);
                            });
                        }
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="calculo">
            <h2>{kind.title()}</h2>
            <form id=kind.form_id() on:submit=on_submit>
                {fields}
                {(kind == CalculationKind::DecayTime).then(|| view! { <QuickFractions ctx=ctx/> })}
                <button type="submit" class="btn-primary" disabled=busy>
                    {move || if busy() { kind.busy_label() } else { kind.submit_label() }}
                </button>
            </form>
            <ResultPanel kind=kind ctx=ctx/>
        </div>
    }
}
