//! Brush strokes: wall painting and freeform blobs.
//!
//! A wall stroke turns every pointer movement into its own static segment
//! the frame it happens. A freeform stroke only collects points; the blob is
//! built once, when the stroke ends.

use glam::Vec2;

/// The stroke in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum BrushStroke {
    /// Painting walls; `anchor` is where the next segment starts.
    Wall { anchor: Vec2 },
    /// Collecting an outline, no two consecutive points equal.
    Freeform { points: Vec<Vec2> },
}

/// At most one stroke at a time.
#[derive(Debug, Clone, Default)]
pub struct BrushSession {
    stroke: Option<BrushStroke>,
}

impl BrushSession {
    pub fn is_idle(&self) -> bool {
        self.stroke.is_none()
    }

    pub fn stroke(&self) -> Option<&BrushStroke> {
        self.stroke.as_ref()
    }

    /// Start painting walls from `at`. Ignored while another stroke is active.
    pub fn begin_wall(&mut self, at: Vec2) -> bool {
        if self.stroke.is_some() {
            return false;
        }
        self.stroke = Some(BrushStroke::Wall { anchor: at });
        true
    }

    /// Stop painting walls. Returns false if no wall stroke was active.
    pub fn end_wall(&mut self) -> bool {
        if matches!(self.stroke, Some(BrushStroke::Wall { .. })) {
            self.stroke = None;
            return true;
        }
        false
    }

    /// Start a freeform outline at `at`. Ignored while another stroke is active.
    pub fn begin_freeform(&mut self, at: Vec2) -> bool {
        if self.stroke.is_some() {
            return false;
        }
        self.stroke = Some(BrushStroke::Freeform { points: vec![at] });
        true
    }

    /// End the freeform stroke. Returns its points when there are enough
    /// for a polygon (three or more); otherwise the stroke is discarded.
    pub fn end_freeform(&mut self) -> Option<Vec<Vec2>> {
        match self.stroke.take() {
            Some(BrushStroke::Freeform { points }) if points.len() > 2 => Some(points),
            Some(BrushStroke::Freeform { .. }) => None,
            other => {
                self.stroke = other;
                None
            }
        }
    }

    /// Feed this frame's pointer position into the active stroke.
    ///
    /// A wall stroke that moved returns the segment to build and advances its
    /// anchor. A freeform stroke appends the point if it differs from the
    /// last one and returns nothing.
    pub fn sample(&mut self, pointer: Vec2) -> Option<(Vec2, Vec2)> {
        match &mut self.stroke {
            Some(BrushStroke::Wall { anchor }) => {
                if *anchor == pointer {
                    return None;
                }
                let from = std::mem::replace(anchor, pointer);
                Some((from, pointer))
            }
            Some(BrushStroke::Freeform { points }) => {
                if points.last() != Some(&pointer) {
                    points.push(pointer);
                }
                None
            }
            None => None,
        }
    }

    /// Drop any stroke without building anything.
    pub fn clear(&mut self) {
        self.stroke = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_stroke_emits_one_segment_per_move() {
        let mut brush = BrushSession::default();
        let samples = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 5.0),
        ];
        assert!(brush.begin_wall(samples[0]));

        let segments: Vec<_> = samples[1..].iter().filter_map(|p| brush.sample(*p)).collect();

        assert_eq!(
            segments,
            vec![
                (Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)),
                (Vec2::new(10.0, 0.0), Vec2::new(20.0, 5.0)),
            ]
        );
        assert!(brush.end_wall());
        assert!(brush.is_idle());
        assert_eq!(brush.sample(Vec2::new(99.0, 0.0)), None);
    }

    #[test]
    fn freeform_deduplicates_consecutive_points() {
        let mut brush = BrushSession::default();
        brush.begin_freeform(Vec2::ZERO);
        for p in [Vec2::ZERO, Vec2::X, Vec2::X, Vec2::Y, Vec2::X] {
            assert_eq!(brush.sample(p), None);
        }
        assert_eq!(
            brush.end_freeform(),
            Some(vec![Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::X])
        );
        assert!(brush.is_idle());
    }

    #[test]
    fn short_freeform_is_discarded() {
        let mut brush = BrushSession::default();
        brush.begin_freeform(Vec2::ZERO);
        brush.sample(Vec2::X);
        assert_eq!(brush.end_freeform(), None);
        assert!(brush.is_idle(), "points are cleared either way");
    }

    #[test]
    fn modes_are_mutually_exclusive() {
        let mut brush = BrushSession::default();
        assert!(brush.begin_wall(Vec2::ZERO));
        assert!(!brush.begin_freeform(Vec2::X));
        assert_eq!(brush.end_freeform(), None);
        assert!(
            matches!(brush.stroke(), Some(BrushStroke::Wall { .. })),
            "ending the other mode leaves the wall stroke alone"
        );

        brush.end_wall();
        assert!(brush.begin_freeform(Vec2::X));
        assert!(!brush.begin_wall(Vec2::ZERO));
        assert!(!brush.end_wall());
    }
}
