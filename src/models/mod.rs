// Domain models

mod metrics;
mod product;
mod ui;

pub use metrics::MetricsSample;
pub use product::{ProductRating, ProductRecord};
pub use ui::ThemeConfig;
