//! Node value contract
//!
//! Values must be orderable (heap and BST checks compare parent against
//! child) and renderable (every layout draws a label). Floats are the only
//! built-in values that can be invalid: NaN breaks ordering.

use std::fmt;

/// Scalar stored in a tree node
pub trait NodeValue: Clone + PartialOrd + fmt::Debug {
    /// Whether the value satisfies the ordering contract
    fn is_valid(&self) -> bool {
        true
    }

    /// Text drawn for the value by the renderers
    fn label(&self) -> String;
}

macro_rules! impl_integer_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NodeValue for $ty {
                fn label(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_integer_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NodeValue for $ty {
                fn is_valid(&self) -> bool {
                    !self.is_nan()
                }

                // Debug keeps the trailing `.0` on integral floats
                fn label(&self) -> String {
                    format!("{:?}", self)
                }
            }
        )*
    };
}

impl_float_value!(f32, f64);

impl NodeValue for char {
    fn label(&self) -> String {
        self.to_string()
    }
}

impl NodeValue for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl NodeValue for &'static str {
    fn label(&self) -> String {
        (*self).to_string()
    }
}
