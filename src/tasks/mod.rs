mod sweep;

pub use sweep::{SweepPoint, default_inputs, sweep};
