use crate::{
    flow::item::flatten_items,
    foundation::{
        diagnostics::{Diagnostic, DiagnosticLevel, Diagnostics},
        error::FlowsceneError,
    },
    scene::composition::Scene,
    shape::instance::ShapeInstance,
};

#[derive(Clone, Debug, serde::Serialize)]
/// Everything a renderer needs to draw one sampled time.
pub struct EvaluatedFrame {
    /// Sampled time in milliseconds.
    pub time: f64,
    /// Snapshots in draw order (ascending z-index, ties in evaluation order).
    pub instances: Vec<ShapeInstance>,
    /// Reports raised while evaluating this frame.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Stateless frame boundary between a [`Scene`] and a renderer.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate one frame with a fresh diagnostics sink.
    #[tracing::instrument(skip(scene))]
    pub fn eval_frame(scene: &Scene, time: f64) -> EvaluatedFrame {
        let mut diag = Diagnostics::new();
        let instances = Self::eval_frame_with(scene, time, &mut diag);
        EvaluatedFrame {
            time,
            instances,
            diagnostics: diag.into_events(),
        }
    }

    /// Evaluate one frame, reporting into a caller-owned sink.
    ///
    /// Reusing the sink across frames reports each distinct cause once per session.
    pub fn eval_frame_with(scene: &Scene, time: f64, diag: &mut Diagnostics) -> Vec<ShapeInstance> {
        let mut out = Vec::new();
        match scene.items_at(time) {
            Ok(items) => flatten_items(&items, time, 0.0, &mut out, diag),
            Err(err) => report_factory_error(&err, diag),
        }
        // Stable: equal z keeps evaluation order.
        out.sort_by_key(|i| i.z_index);
        out
    }
}

fn classify(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<serde_json::Error>().is_some() {
        return "syntax";
    }
    match err.downcast_ref::<FlowsceneError>() {
        Some(FlowsceneError::Serde(_)) => "syntax",
        Some(FlowsceneError::Validation(_)) => "validation",
        Some(FlowsceneError::Timing(_)) => "timing",
        Some(FlowsceneError::Scene(_)) => "scene",
        Some(FlowsceneError::Other(_)) | None => "runtime",
    }
}

fn report_factory_error(err: &anyhow::Error, diag: &mut Diagnostics) {
    let message = err.to_string();
    let class = classify(err);
    diag.add_once(
        format!("factory:{message}"),
        DiagnosticLevel::Error,
        format!("scene factory failed ({class} error): {message}"),
        Some(format!("{err:#}")),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
