use crate::{
    assets::color::Rgba,
    foundation::core::{Affine, BezPath, Canvas, Point, Rect, Vec2},
};

/// One stop of a gradient ramp; `offset` is in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(offset: f32, color: impl Into<Rgba>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

/// How a path is filled or stroked.
///
/// Gradient geometry is expressed in the user space active when the paint is used, so it
/// follows the current transform like the path does.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear {
        start: Point,
        end: Point,
        stops: Vec<ColorStop>,
    },
    /// Two-circle radial gradient: the ramp runs from the start circle to the end circle.
    Radial {
        start_center: Point,
        start_radius: f64,
        end_center: Point,
        end_radius: f64,
        stops: Vec<ColorStop>,
    },
}

impl Paint {
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Paint::Solid(_) => &[],
            Paint::Linear { stops, .. } | Paint::Radial { stops, .. } => stops,
        }
    }
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self {
        Paint::Solid(c)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub dashes: Vec<f64>,
    pub dash_offset: f64,
}

impl StrokeStyle {
    pub fn solid(width: f64) -> Self {
        Self {
            width,
            dashes: Vec::new(),
            dash_offset: 0.0,
        }
    }

    pub fn dashed(width: f64, dashes: impl Into<Vec<f64>>, dash_offset: f64) -> Self {
        Self {
            width,
            dashes: dashes.into(),
            dash_offset,
        }
    }
}

/// An immediate-mode 2D drawing target.
///
/// The model follows the familiar canvas discipline: `save`/`restore` scope the transform,
/// global alpha and blur; transforms compose onto the current one.
pub trait Surface {
    fn size(&self) -> Canvas;

    /// Resets the whole surface to its clear color.
    fn clear(&mut self);

    fn save(&mut self);

    fn restore(&mut self);

    fn translate(&mut self, v: Vec2);

    fn scale(&mut self, sx: f64, sy: f64);

    fn rotate(&mut self, radians: f64);

    /// Opacity multiplied into every subsequent draw, like a canvas `globalAlpha`.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Gaussian blur (standard deviation in pixels) applied to subsequent draws; `0` disables.
    fn set_blur(&mut self, radius_px: f32);

    fn fill(&mut self, path: &BezPath, paint: &Paint);

    fn stroke(&mut self, path: &BezPath, paint: &Paint, style: &StrokeStyle);
}

/// Transform, alpha and blur shared by surface implementations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    pub transform: Affine,
    pub alpha: f32,
    pub blur: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            alpha: 1.0,
            blur: 0.0,
        }
    }
}

impl DrawState {
    pub fn translate(&mut self, v: Vec2) {
        self.transform = self.transform * Affine::translate(v);
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.transform = self.transform * Affine::scale_non_uniform(sx, sy);
    }

    pub fn rotate(&mut self, radians: f64) {
        self.transform = self.transform * Affine::rotate(radians);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    Fill,
    Stroke,
}

/// A draw call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCmd {
    pub kind: DrawKind,
    /// Path bounds in surface space (current transform applied).
    pub bounds: Rect,
    pub paint: Paint,
    pub stroke: Option<StrokeStyle>,
    pub state: DrawState,
}

/// A [`Surface`] that keeps a log of draw calls instead of rasterizing.
///
/// Useful for inspecting draw order, transforms and save/restore balance.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Canvas,
    state: DrawState,
    stack: Vec<DrawState>,
    cmds: Vec<DrawCmd>,
    clears: usize,
    max_depth: usize,
    unbalanced_restores: usize,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Canvas::new(width, height),
            state: DrawState::default(),
            stack: Vec::new(),
            cmds: Vec::new(),
            clears: 0,
            max_depth: 0,
            unbalanced_restores: 0,
        }
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Open `save` calls not yet matched by `restore`.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    pub fn current_state(&self) -> DrawState {
        self.state
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Canvas::new(width, height);
    }

    fn record(&mut self, kind: DrawKind, path: &BezPath, paint: &Paint, stroke: Option<&StrokeStyle>) {
        use kurbo::Shape as _;

        let mut p = path.clone();
        p.apply_affine(self.state.transform);
        self.cmds.push(DrawCmd {
            kind,
            bounds: p.bounding_box(),
            paint: paint.clone(),
            stroke: stroke.cloned(),
            state: self.state,
        });
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Canvas {
        self.size
    }

    fn clear(&mut self) {
        self.cmds.clear();
        self.clears += 1;
    }

    fn save(&mut self) {
        self.stack.push(self.state);
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(s) => self.state = s,
            None => self.unbalanced_restores += 1,
        }
    }

    fn translate(&mut self, v: Vec2) {
        self.state.translate(v);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.scale(sx, sy);
    }

    fn rotate(&mut self, radians: f64) {
        self.state.rotate(radians);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha;
    }

    fn set_blur(&mut self, radius_px: f32) {
        self.state.blur = radius_px;
    }

    fn fill(&mut self, path: &BezPath, paint: &Paint) {
        self.record(DrawKind::Fill, path, paint, None);
    }

    fn stroke(&mut self, path: &BezPath, paint: &Paint, style: &StrokeStyle) {
        self.record(DrawKind::Stroke, path, paint, Some(style));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
