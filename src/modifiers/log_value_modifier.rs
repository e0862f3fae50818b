use crate::core::MessageData;
use crate::modifiers::{ModifierError, ValueModifier};

/// `derive() = ln(val)`.
///
/// Only defined for strictly positive inputs: zero, negatives and NaN fail with
/// [`ModifierError::Domain`] instead of yielding `-inf`/`NaN`. Since the
/// default observation is `0.0`, a never-updated instance fails too.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogValueModifier {
    curr_data: MessageData,
}

impl LogValueModifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueModifier for LogValueModifier {
    #[inline]
    fn update(&mut self, msg: &MessageData) {
        self.curr_data = *msg;
    }

    fn derive(&self) -> Result<f64, ModifierError> {
        let v = self.curr_data.val();
        // also rejects NaN
        if !(v > 0.0) {
            return Err(ModifierError::Domain {
                modifier: self.name(),
                value: v,
            });
        }
        Ok(v.ln())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    fn log_of(v: f64) -> Result<f64, ModifierError> {
        let mut m = LogValueModifier::new();
        m.update(&MessageData::new(v));
        m.derive()
    }

    #[test]
    fn natural_log_of_positive_inputs() {
        assert!((log_of(1.0).unwrap() - 0.0).abs() < EPS);
        assert!((log_of(std::f64::consts::E).unwrap() - 1.0).abs() < EPS);
        assert!((log_of(20.0).unwrap() - 2.995_732_273_553_991).abs() < EPS);
    }

    #[test]
    fn zero_is_a_domain_error() {
        assert_eq!(
            log_of(0.0),
            Err(ModifierError::Domain {
                modifier: "log",
                value: 0.0
            })
        );
    }

    #[test]
    fn negative_is_a_domain_error() {
        assert!(matches!(
            log_of(-3.0),
            Err(ModifierError::Domain { value, .. }) if value == -3.0
        ));
    }

    #[test]
    fn nan_is_a_domain_error() {
        assert!(log_of(f64::NAN).is_err());
    }

    #[test]
    fn never_updated_fails() {
        assert!(LogValueModifier::new().derive().is_err());
    }

    #[test]
    fn error_message_names_modifier_and_input() {
        let err = log_of(-1.0).unwrap_err();
        assert_eq!(err.to_string(), "log is undefined for input -1");
    }
}
