use glam::Vec2;
use physbox_engine::{Anchor, Color, DrawCommand, RenderContext};

const WATERMARK_Y: f32 = 220.0;
const WATERMARK_SIZE: u32 = 200;
const WATERMARK_ALPHA: u8 = 15;

const HELP_TOP: f32 = 335.0;
const HELP_STEP: f32 = 25.0;
const HELP_ALPHA: u8 = 100;

const HUD_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
const HUD_STEP: f32 = 25.0;

const TEXT_SIZE: u32 = 20;

pub const HELP_LINES: [&str; 5] = [
    "Press SPACE to reset",
    "LEFT CLICK creates the selected body",
    "RIGHT CLICK and drag to draw walls",
    "NUMBER KEYS change the selected body",
    "MOUSE WHEEL changes the size",
];

fn centered_text(text: &str, size: u32, pos: Vec2, color: Color, alpha: u8) -> DrawCommand {
    DrawCommand::Text {
        text: text.to_owned(),
        size,
        pos,
        color,
        alpha,
        anchor: Anchor::Center,
    }
}

/// Faint oversized letters behind everything. Nothing while empty.
pub fn watermark(ctx: &mut RenderContext, text: &str) {
    if text.is_empty() {
        return;
    }
    let pos = Vec2::new(ctx.frame.world_width / 2.0, WATERMARK_Y);
    ctx.push_underlay(centered_text(text, WATERMARK_SIZE, pos, Color::GOLD, WATERMARK_ALPHA));
}

/// Control hints, drawn under the bodies.
pub fn help(ctx: &mut RenderContext) {
    let x = ctx.frame.world_width / 2.0;
    for (i, line) in HELP_LINES.iter().enumerate() {
        let pos = Vec2::new(x, HELP_TOP + i as f32 * HELP_STEP);
        ctx.push_underlay(centered_text(line, TEXT_SIZE, pos, Color::WHITE, HELP_ALPHA));
    }
}

/// Radius, selector and frame rate in the top-left corner.
pub fn hud(ctx: &mut RenderContext, radius: f32, selector: u8) {
    let lines = [
        format!("Radius: {radius}"),
        format!("Shape: {selector}"),
        format!("FPS: {}", ctx.fps as u32),
    ];
    for (i, text) in lines.into_iter().enumerate() {
        ctx.push_overlay(DrawCommand::Text {
            text,
            size: TEXT_SIZE,
            pos: HUD_ORIGIN + Vec2::new(0.0, i as f32 * HUD_STEP),
            color: Color::WHITE,
            alpha: u8::MAX,
            anchor: Anchor::TopLeft,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physbox_engine::FrameData;

    #[test]
    fn empty_watermark_draws_nothing() {
        let mut frame = FrameData::new(800.0, 600.0, "t");
        let mut ctx = RenderContext { frame: &mut frame, fps: 0.0 };
        watermark(&mut ctx, "");
        assert!(frame.underlay.is_empty());
    }

    #[test]
    fn watermark_is_faint_gold_and_centered() {
        let mut frame = FrameData::new(800.0, 600.0, "t");
        let mut ctx = RenderContext { frame: &mut frame, fps: 0.0 };
        watermark(&mut ctx, "QR");
        assert_eq!(
            frame.underlay,
            vec![DrawCommand::Text {
                text: "QR".into(),
                size: 200,
                pos: Vec2::new(400.0, 220.0),
                color: Color::GOLD,
                alpha: 15,
                anchor: Anchor::Center,
            }]
        );
    }

    #[test]
    fn help_lines_step_down_the_screen() {
        let mut frame = FrameData::new(800.0, 600.0, "t");
        let mut ctx = RenderContext { frame: &mut frame, fps: 0.0 };
        help(&mut ctx);
        let ys: Vec<f32> = frame
            .underlay
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { pos, alpha: 100, .. } => Some(pos.y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![335.0, 360.0, 385.0, 410.0, 435.0]);
    }

    #[test]
    fn hud_reads_radius_selector_and_fps() {
        let mut frame = FrameData::new(800.0, 600.0, "t");
        let mut ctx = RenderContext { frame: &mut frame, fps: 59.7 };
        hud(&mut ctx, 25.0, 3);
        let texts: Vec<&str> = frame
            .overlay
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Radius: 25", "Shape: 3", "FPS: 59"]);
    }
}
