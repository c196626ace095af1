//! Chart builders and the HTML index page.
//!
//! `plots` turns catalog and simulated series data into `plotly::Plot`
//! figures; `index` renders a small landing page linking the written charts.
pub mod index;
pub mod plots;
