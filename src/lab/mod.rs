//! Browser-independent core of both calculator pages.

mod forms;
mod kind;
mod mediator;
mod notify;
mod outcome;
mod record;
mod render;
mod state;
mod submit;
mod tabs;
mod transfer;

pub use forms::{fraction_of, FormValues, QUICK_FRACTIONS};
pub use kind::{CalculationKind, FieldSource, InputField, Lab, RecordField};
pub use mediator::{offer_transfer, pick_transfer, Picked, TransferChoice};
pub use notify::{
    ChooserOption, Modal, ModalTone, Notifications, Toast, DEFAULT_TOAST_DURATION,
};
pub use outcome::{classify, Outcome, ServiceError, CONNECTION_ERROR, INVALID_INPUT};
pub use record::{format_field_value, CaptureError, Inputs, Payload, ResultRecord, TableRow};
pub use render::{
    render, ChartSeries, ChartView, ResultView, TableView, Tone, TransferAffordance, ViewItem,
    TRANSFER_BUTTON_LABEL,
};
pub use state::CrossTabState;
pub use submit::{settle, Submissions, INCOMPLETE_RESPONSE};
pub use tabs::TabController;
pub use transfer::{
    FieldMapping, MappingError, TransferError, TransferReport, TransferTable,
    TRANSFER_CONFIRMATION,
};
