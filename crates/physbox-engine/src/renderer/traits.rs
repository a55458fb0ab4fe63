//! Renderer trait for drawing backends.
//!
//! The browser build renders from `FrameData::to_json` on the JavaScript side.
//! Native hosts implement this trait and let `draw_frame` walk the frame.

use glam::Vec2;

use super::frame::{Anchor, DrawCommand, FrameData, ShapeInstance};
use crate::api::types::Color;
use crate::systems::text::TextImage;

/// Drawing backend.
///
/// Every call may fail (lost device, closed window); failures are fatal
/// to the frame loop.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasRenderer {
///     ctx: web_sys::CanvasRenderingContext2d,
/// }
///
/// impl Renderer for CanvasRenderer {
///     fn backend(&self) -> &'static str { "canvas2d" }
///
///     fn clear(&mut self, color: Color) -> anyhow::Result<()> {
///         // fillRect over the whole canvas...
///     }
///     // ...
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "canvas2d", "sdl", "log").
    fn backend(&self) -> &'static str;

    fn clear(&mut self, color: Color) -> anyhow::Result<()>;

    fn draw_shape(&mut self, shape: &ShapeInstance) -> anyhow::Result<()>;

    fn draw_cross(&mut self, center: Vec2, half_len: f32, color: Color) -> anyhow::Result<()>;

    /// Composite a rasterized image centered at `pos`.
    fn draw_image(&mut self, image: &TextImage, pos: Vec2, alpha: u8) -> anyhow::Result<()>;

    fn draw_text(
        &mut self,
        text: &str,
        size: u32,
        pos: Vec2,
        color: Color,
        alpha: u8,
        anchor: Anchor,
    ) -> anyhow::Result<()>;

    fn set_title(&mut self, _title: &str) -> anyhow::Result<()> {
        Ok(())
    }

    /// Show the finished frame.
    fn present(&mut self) -> anyhow::Result<()>;
}

/// Issue one frame: background, underlay, shapes, overlay, present.
pub fn draw_frame<R: Renderer + ?Sized>(renderer: &mut R, frame: &FrameData) -> anyhow::Result<()> {
    renderer.clear(frame.background)?;
    for command in &frame.underlay {
        draw_command(renderer, command)?;
    }
    for shape in &frame.shapes {
        renderer.draw_shape(shape)?;
    }
    for command in &frame.overlay {
        draw_command(renderer, command)?;
    }
    renderer.present()
}

fn draw_command<R: Renderer + ?Sized>(renderer: &mut R, command: &DrawCommand) -> anyhow::Result<()> {
    match command {
        DrawCommand::Cross {
            center,
            half_len,
            color,
        } => renderer.draw_cross(*center, *half_len, *color),
        DrawCommand::Image { image, pos, alpha } => renderer.draw_image(image, *pos, *alpha),
        DrawCommand::Text {
            text,
            size,
            pos,
            color,
            alpha,
            anchor,
        } => renderer.draw_text(text, *size, *pos, *color, *alpha, *anchor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::entity::ShapeKind;

    #[derive(Default)]
    struct CallLog {
        calls: Vec<&'static str>,
    }

    impl Renderer for CallLog {
        fn backend(&self) -> &'static str {
            "log"
        }
        fn clear(&mut self, _color: Color) -> anyhow::Result<()> {
            self.calls.push("clear");
            Ok(())
        }
        fn draw_shape(&mut self, _shape: &ShapeInstance) -> anyhow::Result<()> {
            self.calls.push("shape");
            Ok(())
        }
        fn draw_cross(&mut self, _c: Vec2, _h: f32, _color: Color) -> anyhow::Result<()> {
            self.calls.push("cross");
            Ok(())
        }
        fn draw_image(&mut self, _i: &TextImage, _p: Vec2, _a: u8) -> anyhow::Result<()> {
            self.calls.push("image");
            Ok(())
        }
        fn draw_text(
            &mut self,
            _t: &str,
            _s: u32,
            _p: Vec2,
            _c: Color,
            _a: u8,
            _anchor: Anchor,
        ) -> anyhow::Result<()> {
            self.calls.push("text");
            Ok(())
        }
        fn present(&mut self) -> anyhow::Result<()> {
            anyhow::bail!("device lost")
        }
    }

    #[test]
    fn frame_is_drawn_in_layer_order() {
        let mut frame = FrameData::new(800.0, 600.0, "t");
        frame.overlay.push(DrawCommand::Cross {
            center: Vec2::ZERO,
            half_len: 2.0,
            color: Color::WHITE,
        });
        frame.shapes.push(ShapeInstance {
            entity: EntityId(1),
            pos: Vec2::ZERO,
            rotation: 0.0,
            shape: ShapeKind::Circle { radius: 4.0 },
            is_static: false,
        });
        frame.underlay.push(DrawCommand::Text {
            text: "help".into(),
            size: 20,
            pos: Vec2::ZERO,
            color: Color::WHITE,
            alpha: 100,
            anchor: Anchor::Center,
        });

        let mut log = CallLog::default();
        let result = draw_frame(&mut log, &frame);

        assert_eq!(log.calls, vec!["clear", "text", "shape", "cross"]);
        assert!(result.is_err(), "present failure must surface");
    }
}
