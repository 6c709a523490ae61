pub mod calculator;
pub mod inputs;
pub mod locale;
pub mod prelude;
pub mod types;

pub use calculator::{TipCalculator, calculate_tip};
pub use locale::{CurrencyFormatter, TipLocale};
pub use types::{TipBreakdown, TipError};
