use crate::core::MessageData;
use crate::modifiers::{ModifierError, ValueModifier};

/// `derive() = val²`. Total over every input.
#[derive(Debug, Default, Clone, Copy)]
pub struct SquareValueModifier {
    curr_data: MessageData,
}

impl SquareValueModifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueModifier for SquareValueModifier {
    #[inline]
    fn update(&mut self, msg: &MessageData) {
        self.curr_data = *msg;
    }

    #[inline]
    fn derive(&self) -> Result<f64, ModifierError> {
        let v = self.curr_data.val();
        Ok(v * v)
    }

    fn name(&self) -> &'static str {
        "square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_last_update() {
        let mut m = SquareValueModifier::new();
        m.update(&MessageData::new(3.0));
        assert_eq!(m.derive(), Ok(9.0));
        m.update(&MessageData::new(-4.0));
        assert_eq!(m.derive(), Ok(16.0));
    }

    #[test]
    fn never_updated_derives_from_zero() {
        let m = SquareValueModifier::new();
        assert_eq!(m.derive(), Ok(0.0));
    }
}
