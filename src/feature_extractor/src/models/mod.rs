pub mod price_point;
pub mod price_series;
