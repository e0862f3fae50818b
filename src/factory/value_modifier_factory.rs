use crate::choices::ModifierKind;
use crate::factory::BuildError;
use crate::modifiers::{LogValueModifier, SquareValueModifier, ValueModifier};
use crate::solver::Solver;
use tracing::info;

/// Abstract factory for [`ValueModifier`]s.
///
/// Callers depend on this trait rather than on concrete modifiers, so the set
/// of modifiers a solver may use can be swapped by passing another factory.
pub trait ValueModifierFactory {
    fn make_value_modifier(&self, kind: ModifierKind)
    -> Result<Box<dyn ValueModifier>, BuildError>;

    /// Builds from a textual kind tag such as `"square"` or `"log"`.
    fn make_from_tag(&self, tag: &str) -> Result<Box<dyn ValueModifier>, BuildError> {
        self.make_value_modifier(ModifierKind::parse(tag)?)
    }
}

/// Builds the modifiers shipped with this crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultValueModifierFactory;

impl ValueModifierFactory for DefaultValueModifierFactory {
    fn make_value_modifier(
        &self,
        kind: ModifierKind,
    ) -> Result<Box<dyn ValueModifier>, BuildError> {
        Ok(match kind {
            ModifierKind::Square => Box::new(SquareValueModifier::new()),
            ModifierKind::Log => Box::new(LogValueModifier::new()),
        })
    }
}

pub fn build_value_modifier(kind: ModifierKind) -> Result<Box<dyn ValueModifier>, BuildError> {
    DefaultValueModifierFactory.make_value_modifier(kind)
}

/// Creates a modifier through `factory` and hands it to a new [`Solver`].
pub fn build_solver(
    factory: &dyn ValueModifierFactory,
    kind: ModifierKind,
    clipping_limit: f64,
) -> Result<Solver, BuildError> {
    let modifier = factory.make_value_modifier(kind)?;
    info!(%kind, clipping_limit, "built solver");
    Ok(Solver::new(clipping_limit, modifier))
}
