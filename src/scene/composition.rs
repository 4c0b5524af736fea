use std::{borrow::Cow, fmt, fs::File, io::BufReader, path::Path, sync::Arc};

use crate::{
    animation::color::ColorValue,
    flow::item::{Item, max_duration},
    foundation::{
        core::Canvas,
        error::{FlowsceneError, FlowsceneResult},
    },
    scene::model::SceneDef,
};

/// Scene-level factory: given a time, return the items to draw.
///
/// Must be pure in `time`. Errors are reported through the frame's diagnostics.
pub type SceneFactory = Arc<dyn Fn(f64) -> anyhow::Result<Vec<Item>> + Send + Sync>;

#[derive(Clone)]
enum Source {
    Static(Vec<Item>),
    Factory(SceneFactory),
}

/// Root of an evaluable scene.
#[derive(Clone)]
pub struct Scene {
    /// Canvas size.
    pub canvas: Canvas,
    /// Explicit duration in milliseconds.
    pub duration: Option<f64>,
    /// Background color.
    pub background: Option<ColorValue>,
    source: Source,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Scene");
        d.field("canvas", &self.canvas)
            .field("duration", &self.duration)
            .field("background", &self.background);
        match &self.source {
            Source::Static(items) => d.field("items", items),
            Source::Factory(_) => d.field("factory", &".."),
        };
        d.finish()
    }
}

impl Scene {
    /// Scene with a fixed item list.
    pub fn new(canvas: Canvas, items: Vec<Item>) -> Self {
        Self {
            canvas,
            duration: None,
            background: None,
            source: Source::Static(items),
        }
    }

    /// Scene whose items are produced per evaluated time.
    pub fn from_factory(
        canvas: Canvas,
        factory: impl Fn(f64) -> anyhow::Result<Vec<Item>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            canvas,
            duration: None,
            background: None,
            source: Source::Factory(Arc::new(factory)),
        }
    }

    /// Set an explicit duration.
    pub fn with_duration(mut self, ms: f64) -> Self {
        self.duration = Some(ms);
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: impl Into<ColorValue>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Build from a validated document.
    pub fn from_def(def: SceneDef) -> FlowsceneResult<Self> {
        def.validate()?;
        let items = def.items.iter().map(|i| i.to_item()).collect();
        Ok(Self {
            canvas: def.canvas,
            duration: def.duration,
            background: def.background,
            source: Source::Static(items),
        })
    }

    /// Parse a scene document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlowsceneResult<Self> {
        let def: SceneDef = serde_json::from_reader(r)
            .map_err(|e| FlowsceneError::serde(format!("parse scene JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse a scene document from a JSON string.
    pub fn from_json_str(s: &str) -> FlowsceneResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a scene document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlowsceneResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlowsceneError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Items to evaluate at `time`.
    pub fn items_at(&self, time: f64) -> anyhow::Result<Cow<'_, [Item]>> {
        match &self.source {
            Source::Static(items) => Ok(Cow::Borrowed(items)),
            Source::Factory(f) => f(time).map(Cow::Owned),
        }
    }

    /// Explicit duration, or the longest estimated duration of the items at time `0`.
    pub fn estimated_duration(&self) -> FlowsceneResult<f64> {
        if let Some(d) = self.duration {
            return Ok(d);
        }
        let items = self
            .items_at(0.0)
            .map_err(|e| FlowsceneError::scene(format!("scene factory failed at 0ms: {e:#}")))?;
        Ok(max_duration(&items))
    }

    /// Return `true` when items are produced by a factory.
    pub fn is_dynamic(&self) -> bool {
        matches!(self.source, Source::Factory(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composition.rs"]
mod tests;
