use std::collections::BTreeSet;

/// Severity of a reported diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    /// The input could not be honored at all.
    Error,
    /// The input was degraded to something drawable.
    Warn,
}

/// One deduplicated report.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    /// Dedup key; at most one diagnostic exists per key.
    pub key: String,
    /// Severity.
    pub level: DiagnosticLevel,
    /// Human-readable message.
    pub message: String,
    /// Optional extra context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Explicit reporting channel threaded through evaluation.
///
/// Reports are deduplicated by key: the first report wins and later ones are dropped.
/// Recording a diagnostic never influences evaluation output.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    seen: BTreeSet<String>,
    events: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic unless `key` was reported before.
    ///
    /// Returns `true` when the diagnostic was recorded.
    pub fn add_once(
        &mut self,
        key: impl Into<String>,
        level: DiagnosticLevel,
        message: impl Into<String>,
        detail: Option<String>,
    ) -> bool {
        let key = key.into();
        if self.seen.contains(&key) {
            return false;
        }
        let message = message.into();
        match level {
            DiagnosticLevel::Error => tracing::error!(key = %key, "{message}"),
            DiagnosticLevel::Warn => tracing::warn!(key = %key, "{message}"),
        }
        self.seen.insert(key.clone());
        self.events.push(Diagnostic {
            key,
            level,
            message,
            detail,
        });
        true
    }

    /// Shorthand for a warning without detail.
    pub fn warn_once(&mut self, key: impl Into<String>, message: impl Into<String>) -> bool {
        self.add_once(key, DiagnosticLevel::Warn, message, None)
    }

    /// Return `true` if `key` has been reported.
    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` when nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Recorded diagnostics in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.events.iter()
    }

    /// Fold another sink into this one, keeping dedup semantics.
    pub fn merge(&mut self, other: Diagnostics) {
        for d in other.events {
            self.add_once(d.key, d.level, d.message, d.detail);
        }
    }

    /// Consume the sink, returning the recorded diagnostics.
    pub fn into_events(self) -> Vec<Diagnostic> {
        self.events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/diagnostics.rs"]
mod tests;
