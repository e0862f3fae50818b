pub mod choices;
pub mod core;
pub mod factory;
pub mod modifiers;
pub mod solver;
pub mod tasks;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use choices::{ModifierKind, SolverConfig};
pub use crate::core::MessageData;
pub use factory::{BuildError, DefaultValueModifierFactory, ValueModifierFactory};
pub use modifiers::{LogValueModifier, ModifierError, SquareValueModifier, ValueModifier};
pub use solver::Solver;
