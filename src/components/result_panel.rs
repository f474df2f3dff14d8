use crate::components::{LabContext, TrendChart};
use crate::lab::{CalculationKind, ResultView, TableView, TRANSFER_BUTTON_LABEL};
use leptos::*;

fn result_table(table: TableView) -> impl IntoView {
    let headers = table.headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view();
    let rows = table
        .rows
        .into_iter()
        .map(|row| {
            let cells = row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();
    view! {
        <div class="tabla-container">
            <table class="tabla-resultados">
                <thead><tr>{headers}</tr></thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

fn result_body(ctx: LabContext, view: ResultView) -> impl IntoView {
    let ResultView { container, tone, heading, items, formula, notes, table, chart, transfer } =
        view;

    let items = items
        .into_iter()
        .map(|item| {
            view! {
                <p class="resultado-item" class:highlight=item.highlight>
                    <strong>{item.label}": "</strong>
                    <span>{item.value}</span>
                </p>
            }
        })
        .collect_view();

    let notes = (!notes.is_empty()).then(|| {
        let lines = notes.into_iter().map(|line| view! { <p>{line}</p> }).collect_view();
        view! { <div class="info-block">{lines}</div> }
    });

    let transfer = transfer.map(|affordance| {
        let source = affordance.source;
        view! {
            <button
                type="button"
                class="btn-transfer"
                title=format!("{} destinos disponibles", affordance.targets.len())
                on:click=move |_| ctx.offer_transfer(source)
            >
                {TRANSFER_BUTTON_LABEL}
            </button>
        }
    });

    view! {
        <div id=container class=tone.class()>
            <h3>{heading}</h3>
            {items}
            {formula.map(|f| view! { <p class="formula">{f}</p> })}
            {notes}
            {table.map(result_table)}
            {chart.map(|chart| view! { <TrendChart chart=chart/> })}
            {transfer}
        </div>
    }
}

/// This form's entry of the results map. Settling another form leaves it
/// equal, so the memo does not notify and the container is left alone.
pub(crate) fn result_memo(ctx: LabContext, kind: CalculationKind) -> Memo<Option<ResultView>> {
    create_memo(move |_| ctx.results.with(|r| r.get(&kind).cloned()))
}

/// Result container of one form. Empty until the form first settles.
#[component]
pub fn ResultPanel(kind: CalculationKind, ctx: LabContext) -> impl IntoView {
    let result = result_memo(ctx, kind);
    move || match result.get() {
        Some(view) => result_body(ctx, view).into_view(),
        None => view! { <div id=kind.container_id() class="resultado hidden"></div> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::lab::{classify, Inputs, Lab};
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_settling_one_form_leaves_other_containers() {
        let runtime = create_runtime();
        let ctx = LabContext::new(Lab::Decay, &AppConfig::default());
        let quantity = result_memo(ctx, CalculationKind::DecayQuantity);
        let half_life = result_memo(ctx, CalculationKind::DecayConstantFromHalfLife);

        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        create_effect(move |_| {
            quantity.with(|_| ());
            counter.set(counter.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        let inputs: Inputs = [("t_media", 10.0)].into_iter().collect();
        ctx.settle(
            CalculationKind::DecayConstantFromHalfLife,
            &inputs,
            classify(json!({"exito": true, "k": 0.0693, "t_media": 10})),
        );

        assert_eq!(runs.get(), 1, "quantity container re-rendered");
        assert!(quantity.get_untracked().is_none());
        assert_eq!(
            half_life.get_untracked().map(|v| v.container),
            Some("resultado-k-tmedia")
        );
        runtime.dispose();
    }
}
