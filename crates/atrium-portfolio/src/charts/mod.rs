//! Chart-ready series and display palettes.
//!
//! Everything here is a rendering contract, not a business rule: the
//! chart widgets consume `{label, value}` tuples and fixed hex colors.

mod colors;
mod series;

pub use colors::{
    insight_color, risk_color, risk_color_for_label, roi_band, status_color,
    status_color_for_label, RoiBand, COLOR_AMBER, COLOR_BLUE, COLOR_GREEN, COLOR_RED,
};
pub use series::{build_chart_series, truncate_label, BudgetRoiPoint, ChartSeries, RiskSlice};
