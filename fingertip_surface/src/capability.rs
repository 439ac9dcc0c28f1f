// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform capabilities injected into every adapter.

bitflags::bitflags! {
    /// What the host platform supports or the user has asked for.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// The device can vibrate.
        const VIBRATION      = 0b0000_0001;
        /// The user prefers reduced motion; eased transitions are disabled.
        const REDUCED_MOTION = 0b0000_0010;
        /// The primary input is touch.
        const TOUCH          = 0b0000_0100;
    }
}

/// Named vibration patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticPattern {
    /// A short tick.
    Light,
    /// A firmer tick, used when a drag commits.
    Medium,
    /// A strong pulse.
    Heavy,
    /// Completion of an action.
    Success,
    /// Failure of an action.
    Error,
}

impl HapticPattern {
    /// Lowercase pattern name as platform vibration APIs spell it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// The platform's vibration primitive.
pub trait Haptics {
    /// Plays `pattern`. Must not fail; unsupported patterns are ignored.
    fn vibrate(&mut self, pattern: HapticPattern);
}

/// Haptics for hosts without a vibration motor.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&mut self, _pattern: HapticPattern) {}
}

/// Capability flags plus the haptics implementation they gate.
#[derive(Clone, Debug, Default)]
pub struct CapabilityContext<H = NoHaptics> {
    capabilities: Capabilities,
    haptics: H,
}

impl CapabilityContext<NoHaptics> {
    /// Capability flags for a host with no vibration support.
    #[must_use]
    pub fn without_haptics(capabilities: Capabilities) -> Self {
        Self::new(capabilities - Capabilities::VIBRATION, NoHaptics)
    }
}

impl<H: Haptics> CapabilityContext<H> {
    /// Bundles `capabilities` with the platform's `haptics`.
    pub fn new(capabilities: Capabilities, haptics: H) -> Self {
        Self {
            capabilities,
            haptics,
        }
    }

    /// The capability flags.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Replaces the capability flags, e.g. when the reduced-motion preference changes.
    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.capabilities = capabilities;
    }

    /// Returns `true` when eased transitions should be skipped.
    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.capabilities.contains(Capabilities::REDUCED_MOTION)
    }

    /// Plays `pattern` if the device can vibrate; otherwise does nothing.
    pub fn vibrate(&mut self, pattern: HapticPattern) {
        if self.capabilities.contains(Capabilities::VIBRATION) {
            self.haptics.vibrate(pattern);
        } else {
            log::trace!("no vibration capability, skipped {}", pattern.name());
        }
    }

    /// The haptics implementation.
    #[must_use]
    pub fn haptics(&self) -> &H {
        &self.haptics
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<HapticPattern>);

    impl Haptics for Recorder {
        fn vibrate(&mut self, pattern: HapticPattern) {
            self.0.push(pattern);
        }
    }

    #[test]
    fn vibration_requires_capability() {
        let mut ctx = CapabilityContext::new(Capabilities::TOUCH, Recorder::default());
        ctx.vibrate(HapticPattern::Medium);
        assert!(ctx.haptics().0.is_empty());

        ctx.set_capabilities(Capabilities::TOUCH | Capabilities::VIBRATION);
        ctx.vibrate(HapticPattern::Success);
        assert_eq!(ctx.haptics().0, [HapticPattern::Success]);
    }

    #[test]
    fn reduced_motion_flag() {
        let ctx = CapabilityContext::without_haptics(Capabilities::REDUCED_MOTION);
        assert!(ctx.reduced_motion());
        assert!(!CapabilityContext::<NoHaptics>::default().reduced_motion());
    }
}
