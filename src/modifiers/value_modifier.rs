use crate::core::MessageData;
use crate::modifiers::ModifierError;

/// Pluggable computation consumed by a [`Solver`](crate::solver::Solver).
///
/// Implementations remember the last observation passed to [`update`] and
/// derive a scalar from it on demand via [`derive`]. A modifier that has never
/// been updated derives from the default observation (`0.0`).
///
/// [`update`]: ValueModifier::update
/// [`derive`]: ValueModifier::derive
pub trait ValueModifier: Send {
    /// Replaces the remembered observation.
    fn update(&mut self, msg: &MessageData);

    /// Computes the derived value from the remembered observation.
    ///
    /// Must be side effect free: two calls without an intervening
    /// [`update`](ValueModifier::update) return the same result.
    fn derive(&self) -> Result<f64, ModifierError>;

    /// Short, stable identifier used in logs and errors.
    fn name(&self) -> &'static str;
}
