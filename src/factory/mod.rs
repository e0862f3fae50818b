mod error;
mod value_modifier_factory;

pub use error::BuildError;
pub use value_modifier_factory::{
    DefaultValueModifierFactory, ValueModifierFactory, build_solver, build_value_modifier,
};
