use crate::{
    assets::color::Rgba,
    effects::{
        blur::{blur_rgba8_premul, kernel_radius_for_sigma},
        composite::over_in_place,
    },
    foundation::{
        core::{Affine, BezPath, Canvas, Point, Vec2},
        error::{FaceError, FaceResult},
        math::mul_div255_u8,
    },
    render::{
        backend::{FrameRGBA, RenderSettings},
        surface::{ColorStop, DrawState, Paint, StrokeStyle, Surface},
    },
};

/// A [`Surface`] rasterized on the CPU with `vello_cpu`.
///
/// Draw calls accumulate into a render context. Whenever the blur radius changes, the pending
/// segment is rendered into its own pixmap, blurred if needed and composited over the frame,
/// so blurred and crisp layers keep their paint order.
pub struct CpuSurface {
    width: u16,
    height: u16,
    clear_premul: [u8; 4],
    frame: Vec<u8>,
    ctx: vello_cpu::RenderContext,
    segment_blur: f32,
    segment_dirty: bool,
    state: DrawState,
    stack: Vec<DrawState>,
    deferred_error: Option<FaceError>,
}

impl CpuSurface {
    pub fn new(width: u32, height: u32, settings: &RenderSettings) -> FaceResult<Self> {
        if width == 0 || height == 0 {
            return Err(FaceError::validation("surface dimensions must be non-zero"));
        }
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| FaceError::validation("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| FaceError::validation("surface height exceeds u16"))?;

        let clear_premul = settings
            .clear_rgba
            .map(|[r, g, b, a]| premul_rgba8(r, g, b, a))
            .unwrap_or([0, 0, 0, 0]);
        let mut frame = vec![0u8; width as usize * height as usize * 4];
        fill_rgba(&mut frame, clear_premul);

        Ok(Self {
            width: width_u16,
            height: height_u16,
            clear_premul,
            frame,
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
            segment_blur: 0.0,
            segment_dirty: false,
            state: DrawState::default(),
            stack: Vec::new(),
            deferred_error: None,
        })
    }

    /// Composites pending draws and returns a copy of the frame.
    pub fn finish(&mut self) -> FaceResult<FrameRGBA> {
        self.flush_segment();
        if let Some(err) = self.deferred_error.take() {
            return Err(err);
        }
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.frame.clone(),
            premultiplied: true,
        })
    }

    fn flush_segment(&mut self) {
        if !self.segment_dirty {
            return;
        }
        self.segment_dirty = false;

        let mut ctx = std::mem::replace(
            &mut self.ctx,
            vello_cpu::RenderContext::new(self.width, self.height),
        );
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);
        let layer = pixmap.data_as_u8_slice();

        let radius = kernel_radius_for_sigma(self.segment_blur);
        let result = if radius > 0 {
            blur_rgba8_premul(
                layer,
                u32::from(self.width),
                u32::from(self.height),
                radius,
                self.segment_blur,
            )
            .and_then(|blurred| over_in_place(&mut self.frame, &blurred))
        } else {
            over_in_place(&mut self.frame, layer)
        };

        if let Err(err) = result {
            tracing::warn!(error = %err, "dropping render segment");
            self.deferred_error.get_or_insert(err);
        }
    }

    fn begin_draw(&mut self) {
        if self.segment_dirty && self.state.blur != self.segment_blur {
            self.flush_segment();
        }
        self.segment_blur = self.state.blur;
        self.segment_dirty = true;
        self.ctx.set_transform(affine_to_cpu(self.state.transform));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    fn set_paint(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_paint(color_to_cpu(*c)),
            Paint::Linear { start, end, stops } => self.ctx.set_paint(
                vello_cpu::peniko::Gradient::new_linear(point_to_cpu(*start), point_to_cpu(*end))
                    .with_stops(stops_to_cpu(stops).as_slice()),
            ),
            Paint::Radial {
                start_center,
                start_radius,
                end_center,
                end_radius,
                stops,
            } => self.ctx.set_paint(
                vello_cpu::peniko::Gradient::new_two_point_radial(
                    point_to_cpu(*start_center),
                    *start_radius as f32,
                    point_to_cpu(*end_center),
                    *end_radius as f32,
                )
                .with_stops(stops_to_cpu(stops).as_slice()),
            ),
        }
    }

    fn draw_with_alpha(&mut self, draw: impl FnOnce(&mut vello_cpu::RenderContext)) {
        let alpha = self.state.alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        if alpha < 1.0 {
            self.ctx.push_opacity_layer(alpha);
        }
        draw(&mut self.ctx);
        if alpha < 1.0 {
            self.ctx.pop_layer();
        }
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> Canvas {
        Canvas::new(u32::from(self.width), u32::from(self.height))
    }

    fn clear(&mut self) {
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        self.segment_dirty = false;
        fill_rgba(&mut self.frame, self.clear_premul);
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(s) = self.stack.pop() {
            self.state = s;
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
        self.state.blur = radius_px.max(0.0);
    }

    fn fill(&mut self, path: &BezPath, paint: &Paint) {
        if !self.state.transform.is_finite() {
            return;
        }
        self.begin_draw();
        self.set_paint(paint);
        let cpu_path = bezpath_to_cpu(path);
        self.draw_with_alpha(|ctx| ctx.fill_path(&cpu_path));
    }

    fn stroke(&mut self, path: &BezPath, paint: &Paint, style: &StrokeStyle) {
        if !self.state.transform.is_finite() {
            return;
        }
        self.begin_draw();
        self.set_paint(paint);
        let mut stroke = vello_cpu::kurbo::Stroke::new(style.width);
        if !style.dashes.is_empty() {
            stroke = stroke.with_dashes(style.dash_offset, style.dashes.iter().copied());
        }
        self.ctx.set_stroke(stroke);
        let cpu_path = bezpath_to_cpu(path);
        self.draw_with_alpha(|ctx| ctx.stroke_path(&cpu_path));
    }
}

fn premul_rgba8(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    let a16 = u16::from(a);
    [
        mul_div255_u8(u16::from(r), a16),
        mul_div255_u8(u16::from(g), a16),
        mul_div255_u8(u16::from(b), a16),
        a,
    ]
}

fn fill_rgba(data: &mut [u8], rgba: [u8; 4]) {
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn color_to_cpu(c: Rgba) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.alpha_u8())
}

fn stops_to_cpu(stops: &[ColorStop]) -> Vec<vello_cpu::peniko::ColorStop> {
    stops
        .iter()
        .map(|s| vello_cpu::peniko::ColorStop {
            offset: s.offset.clamp(0.0, 1.0),
            color: vello_cpu::peniko::color::DynamicColor::from_alpha_color(color_to_cpu(
                s.color,
            )),
        })
        .collect()
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
