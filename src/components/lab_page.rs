use crate::components::{CalculationForm, ModalHost, TabBar, ToastStack};
use crate::config::AppConfig;
use crate::lab::{
    offer_transfer, pick_transfer, CalculationKind, CrossTabState, FormValues, Inputs, Lab,
    Notifications, Payload, Picked, ResultView, ServiceError, Submissions, TabController,
    TransferChoice, TransferTable,
};
use crate::service::ServiceClient;
use leptos::*;
use std::collections::HashMap;
use std::time::Duration;

/// Reactive state of one mounted lab page. Everything here is dropped with
/// the page; nothing is persisted.
#[derive(Clone, Copy)]
pub struct LabContext {
    pub lab: Lab,
    pub store: RwSignal<CrossTabState>,
    pub tabs: RwSignal<TabController>,
    pub forms: RwSignal<FormValues>,
    pub submissions: RwSignal<Submissions>,
    pub results: RwSignal<HashMap<CalculationKind, ResultView>>,
    pub notes: RwSignal<Notifications<TransferChoice>>,
    pub table: StoredValue<TransferTable>,
    pub client: StoredValue<ServiceClient>,
    pub toast_duration: Duration,
}

impl LabContext {
    pub(crate) fn new(lab: Lab, config: &AppConfig) -> Self {
        let table = TransferTable::standard(lab).unwrap_or_else(|err| {
            tracing::error!(%err, "invalid transfer table, transfers disabled");
            TransferTable::empty(lab)
        });
        let first = lab.panels().first().copied().unwrap_or_default();
        Self {
            lab,
            store: create_rw_signal(CrossTabState::new()),
            tabs: create_rw_signal(TabController::new(lab.panels(), first)),
            forms: create_rw_signal(FormValues::for_lab(lab)),
            submissions: create_rw_signal(Submissions::new()),
            results: create_rw_signal(HashMap::new()),
            notes: create_rw_signal(Notifications::new()),
            table: store_value(table),
            client: store_value(ServiceClient::new(config.api_base.clone())),
            toast_duration: config.toast_duration(),
        }
    }

    /// Record the answer for `kind` and show it in its container.
    pub fn settle(
        &self,
        kind: CalculationKind,
        inputs: &Inputs,
        result: Result<Payload, ServiceError>,
    ) {
        let table = self.table;
        let view = self.store.try_update(|state| {
            table.with_value(|table| crate::lab::settle(state, table, kind, inputs, result))
        });
        if let Some(view) = view {
            self.results.update(|results| {
                results.insert(kind, view);
            });
        }
    }

    /// Remove toast `id` once the toast duration has passed.
    fn schedule_expiry(&self, id: u64) {
        let notes = self.notes;
        set_timeout(move || notes.update(|n| n.expire(id)), self.toast_duration);
    }

    pub fn offer_transfer(&self, source: CalculationKind) {
        let (table, store) = (self.table, self.store);
        self.notes.update(|notes| {
            table.with_value(|table| {
                store.with_untracked(|state| offer_transfer(table, state, notes, source))
            })
        });
    }

    /// Chooser option clicked. Tabs and forms are written back only when the
    /// copy went through.
    pub fn pick_transfer(&self, index: usize) {
        let (table, store) = (self.table, self.store);
        let mut tabs = self.tabs.get_untracked();
        let mut forms = self.forms.get_untracked();
        let picked = self.notes.try_update(|notes| {
            table.with_value(|table| {
                store.with_untracked(|state| {
                    pick_transfer(table, state, notes, &mut tabs, &mut forms, index)
                })
            })
        });
        if let Some(Picked::Transferred { toast }) = picked {
            self.tabs.set(tabs);
            self.forms.set(forms);
            self.schedule_expiry(toast);
        }
    }
}

#[component]
pub fn LabPage(lab: Lab) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let ctx = LabContext::new(lab, &config);

    let panels = lab
        .panels()
        .into_iter()
        .map(|panel| {
            let forms = lab
                .kinds()
                .iter()
                .filter(|kind| kind.panel() == panel)
                .map(|&kind| view! { <CalculationForm kind=kind ctx=ctx/> })
                .collect_view();
            view! {
                <section
                    id=panel
                    class="tab-content"
                    class:active=move || ctx.tabs.with(|t| t.is_active(panel))
                >
                    {forms}
                </section>
            }
        })
        .collect_view();

    view! {
        <main class="container lab-page">
            <header>
                <h1>{lab.title()}</h1>
            </header>
            <TabBar lab=lab tabs=ctx.tabs/>
            {panels}
            <ToastStack notes=ctx.notes/>
            <ModalHost ctx=ctx/>
        </main>
    }
}
