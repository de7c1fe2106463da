use crate::{
    caption::layout::CaptionPlan,
    caption::style::CaptionStyle,
    foundation::core::Rgba8,
    foundation::error::AnnotateResult,
    text::engine::TextLayoutEngine,
};

/// Rasterises a [`CaptionPlan`] into a transparent premultiplied layer.
pub struct CpuCaptionRasterizer {
    font: vello_cpu::peniko::FontData,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuCaptionRasterizer {
    /// Rasteriser drawing with `font`; the render context is created on first use.
    pub fn new(font: vello_cpu::peniko::FontData) -> Self {
        Self { font, ctx: None }
    }

    /// Draw every planned line twice, shadow first and face on top, and return the layer.
    pub fn rasterize(
        &mut self,
        plan: &CaptionPlan,
        style: &CaptionStyle,
        engine: &mut TextLayoutEngine,
    ) -> AnnotateResult<vello_cpu::Pixmap> {
        let (width, height) = plan.canvas.as_u16()?;
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        let passes = [
            (style.shadow_offset, style.shadow_color),
            (kurbo::Vec2::ZERO, style.text_color),
        ];
        for line in &plan.lines {
            if line.text.trim().is_empty() {
                continue;
            }
            let layout = engine.layout_line(&line.text, &plan.font)?;
            for (offset, color) in passes {
                ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                    line.origin.x + offset.x,
                    line.origin.y + offset.y,
                )));
                self.fill_layout(&mut ctx, &layout, color);
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);
        Ok(pixmap)
    }

    fn fill_layout(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        layout: &parley::Layout<()>,
        color: Rgba8,
    ) {
        ctx.set_paint(color.to_cpu_color());
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}
