//! Dashboard views, drill-down and the recompute session.

mod drilldown;
mod session;
mod view;

pub use drilldown::{drill_down, DrillDown};
pub use session::DashboardSession;
pub use view::{ChartView, DashboardView};
