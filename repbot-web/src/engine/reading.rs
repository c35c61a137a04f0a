//! What an exercise descriptor reports about one frame

use crate::pose::Point;

use super::event::{AngleValue, Position};
use super::state::Limb;

/// Start/completion predicates evaluated for one limb (or the whole body)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LimbSignal {
    pub limb: Limb,
    pub start: bool,
    pub complete: bool,
}

/// Descriptor output: predicate results, angles for display and cues
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoseReading {
    pub signals: Vec<LimbSignal>,
    pub angles: Vec<(&'static str, AngleValue)>,
    /// Form problem; shown but never blocks counting
    pub warning: Option<&'static str>,
    /// Progress cue when nothing else applies
    pub hint: Option<&'static str>,
}

impl PoseReading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole-body predicates
    pub fn body(self, start: bool, complete: bool) -> Self {
        self.limb(Limb::Body, start, complete)
    }

    pub fn limb(mut self, limb: Limb, start: bool, complete: bool) -> Self {
        self.signals.push(LimbSignal { limb, start, complete });
        self
    }

    pub fn angle(mut self, label: &'static str, value: f32, position: Point) -> Self {
        self.angles.push((
            label,
            AngleValue {
                value,
                position: Position::from(position),
            },
        ));
        self
    }

    pub fn warn_if(mut self, condition: bool, warning: &'static str) -> Self {
        if condition && self.warning.is_none() {
            self.warning = Some(warning);
        }
        self
    }

    pub fn hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn any_start(&self) -> bool {
        self.signals.iter().any(|s| s.start)
    }

    pub fn any_complete(&self) -> bool {
        self.signals.iter().any(|s| s.complete)
    }
}
