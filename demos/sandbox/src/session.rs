use crate::brush::BrushSession;
use crate::config::SandboxConfig;

/// Selector value that arms the freeform brush.
pub const SELECT_BRUSH: u8 = 0;
pub const SELECT_CIRCLE: u8 = 1;
pub const SELECT_SEGMENT: u8 = 2;
pub const SELECT_LABEL: u8 = 9;
/// Selector after start-up and every reset.
pub const DEFAULT_SELECTOR: u8 = SELECT_CIRCLE;

/// Letters typed so far, each at most once, in press order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watermark {
    text: String,
    alphabet: String,
}

impl Watermark {
    /// A watermark accepting only the letters of `alphabet`.
    pub fn new(alphabet: &str) -> Self {
        Self {
            text: String::with_capacity(alphabet.len()),
            alphabet: alphabet.to_owned(),
        }
    }

    /// Append `letter` if it belongs to the alphabet and is not present yet.
    pub fn push(&mut self, letter: char) -> bool {
        if !self.alphabet.contains(letter) || self.text.contains(letter) {
            return false;
        }
        self.text.push(letter);
        true
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Everything the player controls between resets, apart from the world.
#[derive(Debug, Clone)]
pub struct SessionState {
    selector: u8,
    radius: f32,
    initial_radius: f32,
    min_radius: f32,
    pub brush: BrushSession,
    watermark: Watermark,
    target_word: String,
    triggered: bool,
}

impl SessionState {
    pub fn new(config: &SandboxConfig) -> Self {
        Self {
            selector: DEFAULT_SELECTOR,
            radius: config.initial_radius,
            initial_radius: config.initial_radius,
            min_radius: config.min_radius,
            brush: BrushSession::default(),
            watermark: Watermark::new(&config.target_word),
            target_word: config.target_word.clone(),
            triggered: false,
        }
    }

    pub fn selector(&self) -> u8 {
        self.selector
    }

    pub fn select(&mut self, selector: u8) {
        self.selector = selector;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Wall and line thickness, tied to the radius.
    pub fn brush_thickness(&self) -> f32 {
        self.radius / 5.0
    }

    /// Grow or shrink the radius, never below the minimum.
    pub fn adjust_radius(&mut self, delta: f32) {
        self.radius = (self.radius + delta).max(self.min_radius);
    }

    pub fn watermark(&self) -> &Watermark {
        &self.watermark
    }

    /// Append a watermark letter. Completing the target word exactly
    /// latches the trigger; returns true on that transition.
    pub fn append_watermark(&mut self, letter: char) -> bool {
        if !self.watermark.push(letter) {
            return false;
        }
        if !self.triggered && self.watermark.as_str() == self.target_word {
            self.triggered = true;
            return true;
        }
        false
    }

    /// Whether the target word has been typed since the last full reset.
    pub fn triggered(&self) -> bool {
        self.triggered
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    /// Back to start-up selector, radius and an idle brush.
    /// The watermark and trigger survive.
    pub fn reset(&mut self) {
        self.selector = DEFAULT_SELECTOR;
        self.radius = self.initial_radius;
        self.brush.clear();
    }

    /// `reset` plus an empty watermark and a cleared trigger.
    pub fn full_reset(&mut self) {
        self.reset();
        self.watermark.clear();
        self.triggered = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn session() -> SessionState {
        SessionState::new(&SandboxConfig::default())
    }

    fn type_word(session: &mut SessionState, word: &str) -> bool {
        word.chars().fold(false, |hit, c| session.append_watermark(c) || hit)
    }

    #[test]
    fn defaults() {
        let s = session();
        assert_eq!(s.selector(), 1);
        assert_eq!(s.radius(), 25.0);
        assert_eq!(s.brush_thickness(), 5.0);
        assert!(s.watermark().is_empty());
        assert!(!s.triggered());
    }

    #[test]
    fn watermark_letters_are_unique_and_ordered() {
        let mut s = session();
        type_word(&mut s, "KQKKAQL");
        assert_eq!(s.watermark().as_str(), "KQL");
    }

    #[test]
    fn exact_word_triggers() {
        let mut s = session();
        assert!(type_word(&mut s, "QRKLY"));
        assert!(s.triggered());
        assert!(!s.append_watermark('Q'), "trigger fires once");
        assert!(s.triggered());
    }

    #[test]
    fn out_of_order_or_incomplete_does_not_trigger() {
        let mut s = session();
        assert!(!type_word(&mut s, "QRKL"));
        assert!(!s.triggered());

        let mut s = session();
        assert!(!type_word(&mut s, "YQRKL"));
        assert_eq!(s.watermark().as_str(), "YQRKL");
        assert!(!s.triggered());
    }

    #[test]
    fn reset_keeps_watermark_full_reset_clears_it() {
        let mut s = session();
        type_word(&mut s, "QRKLY");
        s.select(7);
        s.adjust_radius(40.0);
        s.brush.begin_wall(Vec2::ZERO);

        s.reset();
        assert_eq!(s.selector(), 1);
        assert_eq!(s.radius(), 25.0);
        assert!(s.brush.is_idle());
        assert_eq!(s.watermark().as_str(), "QRKLY");
        assert!(s.triggered());

        s.full_reset();
        assert!(s.watermark().is_empty());
        assert!(!s.triggered());
        assert!(type_word(&mut s, "QRKLY"), "trigger can fire again");
    }

    proptest! {
        #[test]
        fn radius_never_drops_below_minimum(deltas in prop::collection::vec(-40.0f32..10.0, 0..64)) {
            let mut s = session();
            for d in deltas {
                s.adjust_radius(d);
                prop_assert!(s.radius() >= 5.0);
                prop_assert!((s.brush_thickness() - s.radius() / 5.0).abs() < 1e-6);
            }
        }

        #[test]
        fn watermark_is_duplicate_free_subsequence(keys in prop::collection::vec(prop::sample::select(vec!['Q', 'R', 'K', 'L', 'Y', 'A', 'Z']), 0..40)) {
            let mut s = session();
            let mut expected = String::new();
            for &k in &keys {
                s.append_watermark(k);
                if "QRKLY".contains(k) && !expected.contains(k) {
                    expected.push(k);
                }
            }
            prop_assert_eq!(s.watermark().as_str(), expected.as_str());
            prop_assert_eq!(s.triggered(), expected == "QRKLY");
        }
    }
}
