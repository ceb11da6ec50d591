pub mod calculator;
pub mod types;

pub use calculator::{fold_separation, AspectCalculator};
pub use types::{aspect_symbol, Aspect, AspectType};
