use crate::{foundation::diagnostics::Diagnostics, shape::instance::ShapeInstance};

/// Anything that can be sampled at a time to produce shape snapshots.
///
/// Implementations must be pure: the output depends only on `self` and `time`, never on
/// previous calls or their order.
pub trait Evaluable {
    /// Append the snapshots at `time` (milliseconds, in this node's local clock) to `out`.
    fn evaluate_into(&self, time: f64, out: &mut Vec<ShapeInstance>, diag: &mut Diagnostics);

    /// Time after which this node stops changing, used to lay out sequences.
    ///
    /// Looping timings count one cycle.
    fn estimated_duration(&self) -> f64;

    /// Snapshots at `time`, discarding diagnostics.
    fn evaluate(&self, time: f64) -> Vec<ShapeInstance> {
        let mut out = Vec::new();
        let mut diag = Diagnostics::new();
        self.evaluate_into(time, &mut out, &mut diag);
        out
    }
}
