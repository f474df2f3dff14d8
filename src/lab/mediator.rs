//! Glue between the transfer table and the notification layer: the chooser
//! for a result, and what happens once a destination is picked.

use super::forms::FormValues;
use super::kind::CalculationKind;
use super::notify::{ChooserOption, ModalTone, Notifications};
use super::state::CrossTabState;
use super::tabs::TabController;
use super::transfer::{TransferTable, TRANSFER_CONFIRMATION};

/// A pending "copy these values" choice: (source, target).
pub type TransferChoice = (CalculationKind, CalculationKind);

pub const CHOOSER_TITLE: &str = "¿Dónde quieres usar estos valores?";
pub const CHOOSER_SUBTITLE: &str = "Los valores se copiarán al formulario seleccionado";

/// What a chooser click ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picked {
    /// No chooser was open or the index was out of range.
    Nothing,
    /// Values were copied; `toast` must be expired after the toast duration.
    Transferred { toast: u64 },
    /// The copy was refused and an alert is open instead.
    Refused,
}

/// Open the destination chooser for `source`, or an alert explaining why
/// there is nothing to copy yet.
pub fn offer_transfer(
    table: &TransferTable,
    state: &CrossTabState,
    notes: &mut Notifications<TransferChoice>,
    source: CalculationKind,
) {
    match table.offer(state, source) {
        Ok(targets) => {
            let options = targets
                .into_iter()
                .map(|target| ChooserOption {
                    label: target.title().to_string(),
                    value: (source, target),
                })
                .collect();
            notes.choose(CHOOSER_TITLE, CHOOSER_SUBTITLE, options);
        }
        Err(err) => {
            tracing::debug!(%source, %err, "transfer refused");
            notes.alert("⚠️ Sin datos", err.to_string(), ModalTone::Warning);
        }
    }
}

/// Handle a click on chooser option `index`.
///
/// The chooser is closed before the copy runs. `tabs` and `forms` are only
/// touched when the copy succeeds.
pub fn pick_transfer(
    table: &TransferTable,
    state: &CrossTabState,
    notes: &mut Notifications<TransferChoice>,
    tabs: &mut TabController,
    forms: &mut FormValues,
    index: usize,
) -> Picked {
    let Some((source, target)) = notes.pick(index) else {
        return Picked::Nothing;
    };
    match table.apply(state, source, target, tabs, forms) {
        Ok(_) => Picked::Transferred { toast: notes.toast(TRANSFER_CONFIRMATION) },
        Err(err) => {
            notes.alert("❌ Error", err.to_string(), ModalTone::Error);
            Picked::Refused
        }
    }
}
