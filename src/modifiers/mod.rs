mod error;
mod log_value_modifier;
mod square_value_modifier;
mod value_modifier;

pub use error::ModifierError;
pub use log_value_modifier::LogValueModifier;
pub use square_value_modifier::SquareValueModifier;
pub use value_modifier::ValueModifier;
