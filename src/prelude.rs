//! Prelude module for tiptime
//!
//! This module re-exports commonly used structs, traits, and types to allow
//! for easier usage of the library.
//!
//! # Usage
//!
//! ```rust
//! use tiptime::prelude::*;
//! ```

pub use crate::calculator::{TipCalculator, calculate_tip};
pub use crate::inputs::{IntoTipAmount, parse_amount};
pub use crate::locale::{CurrencyFormatter, TipLocale};
pub use crate::types::{CalculationStep, Operation, TipBreakdown, TipError};
