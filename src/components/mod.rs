mod calculation_form;
mod lab_page;
mod nav_bar;
mod notifications;
mod result_panel;
mod tab_bar;
mod trend_chart;

pub use calculation_form::CalculationForm;
pub use lab_page::{LabContext, LabPage};
pub use nav_bar::NavBar;
pub use notifications::{ModalHost, ToastStack};
pub use result_panel::ResultPanel;
pub use tab_bar::TabBar;
pub use trend_chart::TrendChart;
