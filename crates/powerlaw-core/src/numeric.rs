//! Numeric element trait for samples fed into the estimators
//!
//! Observations may arrive as floats or as integer counts. The estimators work
//! in f64 throughout, so every element type only needs to say how it widens
//! to f64.

use bytemuck::Pod;
use num_traits::Num;
use std::fmt::Debug;

/// Base trait for numeric types that can be used as observations
pub trait Numeric: Pod + Num + Copy + PartialOrd + Debug + Send + Sync {
    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;

    /// Convert to f64 (for operations that need f64)
    fn to_f64(&self) -> f64;
}

impl Numeric for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl Numeric for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

macro_rules! impl_integral_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn is_finite(&self) -> bool {
                    true // Integers are always finite
                }

                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_integral_numeric!(i32, u32, i64, u64);

/// Widen a sample to f64
pub fn widen<T: Numeric>(sample: &[T]) -> Vec<f64> {
    sample.iter().map(Numeric::to_f64).collect()
}
