// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use fingertip_swipe::DragPhase;
use kurbo::{Affine, Vec2};

/// Per-surface visual tri-state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualState {
    /// At rest.
    #[default]
    Idle,
    /// Following a finger; the visual must track it with no easing.
    Dragging,
    /// Easing toward a committed or reset position.
    Animating,
}

impl From<DragPhase> for VisualState {
    fn from(phase: DragPhase) -> Self {
        match phase {
            DragPhase::Idle => Self::Idle,
            DragPhase::Dragging => Self::Dragging,
            DragPhase::Committing | DragPhase::Resolving | DragPhase::Cancelling => {
                Self::Animating
            }
        }
    }
}

/// Translation plus uniform scale applied to a surface's content.
///
/// `Display` renders the CSS-equivalent transform string, e.g.
/// `translate(-40px, 0px) scale(1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Offset in pixels.
    pub translate: Vec2,
    /// Uniform scale.
    pub scale: f64,
}

impl Transform {
    /// No translation, scale `1`.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    /// A horizontal offset.
    #[must_use]
    pub fn offset_x(x: f64) -> Self {
        Self {
            translate: Vec2::new(x, 0.0),
            ..Self::IDENTITY
        }
    }

    /// A vertical offset.
    #[must_use]
    pub fn offset_y(y: f64) -> Self {
        Self {
            translate: Vec2::new(0.0, y),
            ..Self::IDENTITY
        }
    }

    /// The equivalent affine map (scale first, then translate).
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding zero folds `-0` into `0`.
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.translate.x + 0.0,
            self.translate.y + 0.0,
            self.scale
        )
    }
}

/// Whether the visual eases toward its transform or jumps to it.
///
/// `Display` renders the CSS-equivalent transition value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Follow immediately.
    None,
    /// Ease over `duration_ms`.
    Eased {
        /// Transition length in milliseconds.
        duration_ms: u64,
    },
}

impl Transition {
    /// The transition for a surface in `state`.
    ///
    /// Dragging always follows the finger; reduced motion never eases.
    #[must_use]
    pub fn for_state(state: VisualState, duration_ms: u64, reduced_motion: bool) -> Self {
        if state == VisualState::Dragging || reduced_motion {
            Self::None
        } else {
            Self::Eased { duration_ms }
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Eased { duration_ms } => write!(f, "transform {duration_ms}ms ease-out"),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use kurbo::Point;

    use super::*;

    #[test]
    fn css_strings() {
        assert_eq!(
            Transform::offset_x(-42.5).to_string(),
            "translate(-42.5px, 0px) scale(1)"
        );
        let zoomed = Transform {
            translate: Vec2::new(-0.0, 12.0),
            scale: 2.25,
        };
        assert_eq!(zoomed.to_string(), "translate(0px, 12px) scale(2.25)");
        assert_eq!(Transition::None.to_string(), "none");
        assert_eq!(
            Transition::Eased { duration_ms: 300 }.to_string(),
            "transform 300ms ease-out"
        );
    }

    #[test]
    fn dragging_and_reduced_motion_disable_easing() {
        assert_eq!(
            Transition::for_state(VisualState::Dragging, 300, false),
            Transition::None
        );
        assert_eq!(
            Transition::for_state(VisualState::Animating, 300, true),
            Transition::None
        );
        assert_eq!(
            Transition::for_state(VisualState::Animating, 300, false),
            Transition::Eased { duration_ms: 300 }
        );
    }

    #[test]
    fn affine_scales_then_translates() {
        let t = Transform {
            translate: Vec2::new(10.0, 0.0),
            scale: 2.0,
        };
        assert_eq!(t.to_affine() * Point::new(5.0, 5.0), Point::new(20.0, 10.0));
    }
}
