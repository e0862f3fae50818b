pub mod fixed_value_modifier;

pub use fixed_value_modifier::{FixedValueModifier, UpdateCounter};
