//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod rubro_selector;
mod warning_display;
mod wave_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use rubro_selector::RubroSelector;
pub use warning_display::WarningDisplay;
pub use wave_selector::WaveSelector;
