//! From a service answer to the state a result container shows.

use super::kind::CalculationKind;
use super::outcome::{Outcome, ServiceError};
use super::record::{Inputs, Payload, ResultRecord};
use super::render::{render, ResultView};
use super::state::CrossTabState;
use super::transfer::TransferTable;
use std::collections::HashSet;

pub const INCOMPLETE_RESPONSE: &str = "La respuesta del servidor está incompleta";

/// Forms with a request in flight. A form is not submitted again until its
/// previous request settles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submissions {
    busy: HashSet<CalculationKind>,
}

impl Submissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `kind` busy. Returns `false` if it already was.
    pub fn begin(&mut self, kind: CalculationKind) -> bool {
        self.busy.insert(kind)
    }

    pub fn finish(&mut self, kind: CalculationKind) {
        self.busy.remove(&kind);
    }

    pub fn is_busy(&self, kind: CalculationKind) -> bool {
        self.busy.contains(&kind)
    }
}

/// Settle one submission.
///
/// A success is captured and stored before it is rendered, so the transfer
/// button never appears without a record behind it. Failures and warnings
/// leave the store alone and offer no transfer.
pub fn settle(
    state: &mut CrossTabState,
    table: &TransferTable,
    kind: CalculationKind,
    inputs: &Inputs,
    result: Result<Payload, ServiceError>,
) -> ResultView {
    let outcome = match result {
        Ok(payload) => match ResultRecord::capture(kind, inputs, &payload) {
            Ok(record) => {
                state.put(record);
                Outcome::Success(payload)
            }
            Err(err) => {
                tracing::warn!(%err, "discarding success without its record fields");
                Outcome::Failure(INCOMPLETE_RESPONSE.to_string())
            }
        },
        Err(err) => {
            tracing::debug!(%kind, %err, "calculation did not succeed");
            Outcome::from(err)
        }
    };

    let targets = match outcome {
        Outcome::Success(_) => table.eligible_targets(kind),
        _ => Vec::new(),
    };
    render(kind, &outcome, &targets)
}
