use crate::core::MessageData;
use crate::modifiers::ModifierError;
use crate::solver::Solver;
use tracing::{info, warn};

/// One input pushed through a solver and what `solve()` returned for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub input: f64,
    pub output: Result<f64, ModifierError>,
}

/// `0.0, 1.0, .., (n - 1) as f64`.
pub fn default_inputs(n: usize) -> impl Iterator<Item = f64> {
    (0..n).map(|i| i as f64)
}

/// Feeds every input to `solver` in order, solving after each update.
///
/// A failing solve is recorded in its point and the sweep carries on.
pub fn sweep<I>(solver: &mut Solver, inputs: I) -> Vec<SweepPoint>
where
    I: IntoIterator<Item = f64>,
{
    let points: Vec<SweepPoint> = inputs
        .into_iter()
        .map(|input| {
            solver.update(MessageData::new(input));
            let output = solver.solve();
            if let Err(e) = &output {
                warn!(input, error = %e, "solve failed");
            }
            SweepPoint { input, output }
        })
        .collect();

    info!(
        modifier = solver.modifier_name(),
        clipping_limit = solver.clipping_limit(),
        points = points.len(),
        "sweep finished"
    );
    points
}
