use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModifierError {
    #[error("{modifier} is undefined for input {value}")]
    Domain { modifier: &'static str, value: f64 },
}
