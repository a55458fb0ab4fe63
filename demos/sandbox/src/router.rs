use glam::Vec2;
use physbox_engine::{InputEvent, Key, MouseButton};

use crate::session::{SELECT_BRUSH, SELECT_CIRCLE, SELECT_LABEL, SELECT_SEGMENT};

/// Bodies a single click can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Circle,
    Segment,
    Polygon { sides: u8 },
    HollowCircle,
    LabeledBox,
}

/// What one input event asks the sandbox to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    Spawn { kind: SpawnKind, at: Vec2 },
    BeginFreeform(Vec2),
    EndFreeform,
    BeginWall(Vec2),
    EndWall,
    AdjustRadius(f32),
    FullReset,
    AppendWatermark(char),
    Select(u8),
}

/// Map one event to an action, given the active selector.
/// Events with no meaning in the sandbox map to `None`.
pub fn route(event: &InputEvent, selector: u8) -> Option<Action> {
    match *event {
        InputEvent::Quit => Some(Action::Quit),
        InputEvent::ButtonDown { button, x, y } => {
            let at = Vec2::new(x, y);
            match button {
                MouseButton::Primary => primary_down(selector, at),
                MouseButton::Secondary => Some(Action::BeginWall(at)),
                MouseButton::Middle => Some(Action::Spawn {
                    kind: SpawnKind::HollowCircle,
                    at,
                }),
                MouseButton::Other(_) => None,
            }
        }
        InputEvent::ButtonUp { button, .. } => match button {
            MouseButton::Primary => Some(Action::EndFreeform),
            MouseButton::Secondary => Some(Action::EndWall),
            _ => None,
        },
        InputEvent::Wheel { delta } => Some(Action::AdjustRadius(delta)),
        InputEvent::KeyDown { key } => match key {
            Key::Space => Some(Action::FullReset),
            Key::Letter(c) => Some(Action::AppendWatermark(c)),
            Key::Digit(d) => Some(Action::Select(d)),
            Key::Other(_) => None,
        },
        InputEvent::PointerMove { .. } | InputEvent::KeyUp { .. } => None,
    }
}

fn primary_down(selector: u8, at: Vec2) -> Option<Action> {
    let kind = match selector {
        SELECT_BRUSH => return Some(Action::BeginFreeform(at)),
        SELECT_CIRCLE => SpawnKind::Circle,
        SELECT_SEGMENT => SpawnKind::Segment,
        SELECT_LABEL => SpawnKind::LabeledBox,
        sides @ 3..=8 => SpawnKind::Polygon { sides },
        _ => return None,
    };
    Some(Action::Spawn { kind, at })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(button: MouseButton) -> InputEvent {
        InputEvent::ButtonDown {
            button,
            x: 12.0,
            y: 34.0,
        }
    }

    const AT: Vec2 = Vec2::new(12.0, 34.0);

    #[test]
    fn primary_click_follows_selector() {
        let click = down(MouseButton::Primary);
        assert_eq!(route(&click, 0), Some(Action::BeginFreeform(AT)));
        assert_eq!(
            route(&click, 1),
            Some(Action::Spawn { kind: SpawnKind::Circle, at: AT })
        );
        assert_eq!(
            route(&click, 2),
            Some(Action::Spawn { kind: SpawnKind::Segment, at: AT })
        );
        for sides in 3..=8 {
            assert_eq!(
                route(&click, sides),
                Some(Action::Spawn { kind: SpawnKind::Polygon { sides }, at: AT })
            );
        }
        assert_eq!(
            route(&click, 9),
            Some(Action::Spawn { kind: SpawnKind::LabeledBox, at: AT })
        );
        assert_eq!(route(&click, 10), None);
    }

    #[test]
    fn buttons_map_to_strokes() {
        assert_eq!(route(&down(MouseButton::Secondary), 4), Some(Action::BeginWall(AT)));
        let up = |button| InputEvent::ButtonUp { button, x: 0.0, y: 0.0 };
        assert_eq!(route(&up(MouseButton::Primary), 4), Some(Action::EndFreeform));
        assert_eq!(route(&up(MouseButton::Secondary), 0), Some(Action::EndWall));
        assert_eq!(route(&up(MouseButton::Middle), 0), None);
        assert_eq!(
            route(&down(MouseButton::Middle), 1),
            Some(Action::Spawn { kind: SpawnKind::HollowCircle, at: AT })
        );
        assert_eq!(route(&down(MouseButton::Other(3)), 1), None);
    }

    #[test]
    fn keys_and_wheel() {
        let key = |key| InputEvent::KeyDown { key };
        assert_eq!(route(&key(Key::Space), 1), Some(Action::FullReset));
        assert_eq!(route(&key(Key::Letter('Q')), 1), Some(Action::AppendWatermark('Q')));
        assert_eq!(route(&key(Key::Digit(7)), 1), Some(Action::Select(7)));
        assert_eq!(route(&key(Key::from_code(27)), 1), None, "escape is unbound");
        assert_eq!(route(&InputEvent::KeyUp { key: Key::Space }, 1), None);
        assert_eq!(route(&InputEvent::Wheel { delta: -1.0 }, 1), Some(Action::AdjustRadius(-1.0)));
        assert_eq!(route(&InputEvent::Quit, 1), Some(Action::Quit));
        assert_eq!(route(&InputEvent::PointerMove { x: 1.0, y: 1.0 }, 1), None);
    }
}
