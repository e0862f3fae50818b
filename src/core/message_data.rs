use serde::{Deserialize, Serialize};

/// A single scalar observation pushed into a [`Solver`](crate::solver::Solver).
///
/// Copied by value; the default observation is `0.0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageData {
    val: f64,
}

impl MessageData {
    #[inline]
    pub fn new(val: f64) -> Self {
        Self { val }
    }

    #[inline]
    pub fn val(&self) -> f64 {
        self.val
    }
}

impl From<f64> for MessageData {
    fn from(val: f64) -> Self {
        Self::new(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(MessageData::default().val(), 0.0);
    }

    #[test]
    fn serializes_as_bare_number() {
        let v = serde_json::to_value(MessageData::new(2.5)).unwrap();
        assert_eq!(v, serde_json::json!(2.5));
        let back: MessageData = serde_json::from_value(v).unwrap();
        assert_eq!(back, MessageData::from(2.5));
    }
}
