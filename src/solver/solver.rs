use crate::core::MessageData;
use crate::modifiers::{ModifierError, ValueModifier};
use tracing::debug;

/// Clips the output of an owned [`ValueModifier`] to a fixed upper bound.
///
/// Observations arrive through [`update`](Solver::update), which stores a copy
/// and forwards it to the modifier. [`solve`](Solver::solve) returns
/// `min(clipping_limit, modifier.derive())`. Both the limit and the modifier
/// are fixed for the solver's lifetime.
pub struct Solver {
    clipping_limit: f64,
    curr_data: MessageData,
    value_modifier: Box<dyn ValueModifier>,
}

impl Solver {
    /// A NaN `clipping_limit` is the caller's responsibility: it disables
    /// clipping. [`SolverConfig`](crate::choices::SolverConfig) rejects it.
    pub fn new(clipping_limit: f64, value_modifier: Box<dyn ValueModifier>) -> Self {
        Self {
            clipping_limit,
            curr_data: MessageData::default(),
            value_modifier,
        }
    }

    /// Stores `msg` as the current observation and forwards it to the modifier.
    pub fn update(&mut self, msg: MessageData) {
        debug!(value = msg.val(), modifier = self.value_modifier.name(), "solver update");
        self.curr_data = msg;
        self.value_modifier.update(&msg);
    }

    /// Derives a value from the current observation and clips it.
    ///
    /// A NaN derived value clips to the limit, following [`f64::min`].
    pub fn solve(&self) -> Result<f64, ModifierError> {
        let val = self.value_modifier.derive()?;
        let solution = self.clipping_limit.min(val);
        if solution < val {
            debug!(
                derived = val,
                clipping_limit = self.clipping_limit,
                "derived value clipped"
            );
        }
        Ok(solution)
    }

    #[inline]
    pub fn clipping_limit(&self) -> f64 {
        self.clipping_limit
    }

    #[inline]
    pub fn current_data(&self) -> MessageData {
        self.curr_data
    }

    pub fn modifier_name(&self) -> &'static str {
        self.value_modifier.name()
    }
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("clipping_limit", &self.clipping_limit)
            .field("curr_data", &self.curr_data)
            .field("value_modifier", &self.value_modifier.name())
            .finish()
    }
}
