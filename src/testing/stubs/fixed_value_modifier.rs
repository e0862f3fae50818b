use crate::core::MessageData;
use crate::modifiers::{ModifierError, ValueModifier};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared view of how many times a [`FixedValueModifier`] was updated, readable
/// after the stub has been moved into a solver.
#[derive(Debug, Clone, Default)]
pub struct UpdateCounter(Arc<AtomicUsize>);

impl UpdateCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

/// Ignores observations and always derives `value`.
pub struct FixedValueModifier {
    value: f64,
    updates: UpdateCounter,
}

impl FixedValueModifier {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            updates: UpdateCounter::default(),
        }
    }

    pub fn update_counter(&self) -> UpdateCounter {
        self.updates.clone()
    }
}

impl ValueModifier for FixedValueModifier {
    fn update(&mut self, _msg: &MessageData) {
        self.updates.0.fetch_add(1, Ordering::Relaxed);
    }

    fn derive(&self) -> Result<f64, ModifierError> {
        Ok(self.value)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
