/// Homepage engagement phases, ordered. The tracker only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EngagementState {
    Idle,
    Engaged,
    Validated,
}

/// Watches the quote inputs and derives a monotonic UI state from them.
///
/// Two one-shot latches guard the transitions: typing (or a programmatic
/// zip fill) engages once, a resolved city validates once. The latches are
/// independent, so a geolocation autofill can validate straight from Idle
/// before any keystroke lands.
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementTracker {
    state: EngagementState,
    has_engaged: bool,
    has_validated: bool,
}

impl Default for EngagementTracker {
    fn default() -> Self {
        Self {
            state: EngagementState::Idle,
            has_engaged: false,
            has_validated: false,
        }
    }
}

impl EngagementTracker {
    /// Call on every keystroke in a tracked input. One-shot, never regresses.
    pub fn report_input_changed(&mut self) {
        self.engage();
    }

    /// Re-evaluate whenever any of the four quote fields changes.
    /// Empty string means unset; no field content is ever inspected.
    pub fn observe(&mut self, from_zip: &str, to_zip: &str, from_city: &str, to_city: &str) {
        if !from_zip.is_empty() || !to_zip.is_empty() {
            self.engage();
        }
        if !from_city.is_empty() || !to_city.is_empty() {
            self.validate();
        }
    }

    fn engage(&mut self) {
        if self.has_engaged {
            return;
        }
        self.has_engaged = true;
        if self.state < EngagementState::Engaged {
            self.state = EngagementState::Engaged;
        }
    }

    fn validate(&mut self) {
        if self.has_validated {
            return;
        }
        self.has_validated = true;
        if self.state < EngagementState::Validated {
            self.state = EngagementState::Validated;
        }
    }

    pub fn state(&self) -> EngagementState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == EngagementState::Idle
    }

    pub fn is_engaged(&self) -> bool {
        self.state == EngagementState::Engaged
    }

    pub fn is_validated(&self) -> bool {
        self.state == EngagementState::Validated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let tracker = EngagementTracker::default();
        assert!(tracker.is_idle());
        assert!(!tracker.is_engaged());
        assert!(!tracker.is_validated());
    }

    #[test]
    fn keystrokes_engage_exactly_once() {
        let mut tracker = EngagementTracker::default();
        for _ in 0..50 {
            tracker.report_input_changed();
            assert_eq!(tracker.state(), EngagementState::Engaged);
        }
    }

    #[test]
    fn empty_observes_never_transition() {
        let mut tracker = EngagementTracker::default();
        for _ in 0..10 {
            tracker.observe("", "", "", "");
        }
        assert!(tracker.is_idle());
    }

    #[test]
    fn zip_fill_engages_without_keystroke() {
        let mut tracker = EngagementTracker::default();
        tracker.observe("07030", "", "", "");
        assert!(tracker.is_engaged());
        tracker.report_input_changed();
        assert!(tracker.is_engaged());
    }

    #[test]
    fn resolved_city_validates_from_engaged() {
        let mut tracker = EngagementTracker::default();
        tracker.report_input_changed();
        tracker.observe("07030", "", "Hoboken, NJ", "");
        assert!(tracker.is_validated());
    }

    #[test]
    fn city_before_keystroke_validates_straight_from_idle() {
        let mut tracker = EngagementTracker::default();
        tracker.observe("", "", "Hoboken, NJ", "");
        assert!(tracker.is_validated());
    }

    #[test]
    fn validated_never_regresses() {
        let mut tracker = EngagementTracker::default();
        tracker.observe("07030", "", "Hoboken, NJ", "");
        assert!(tracker.is_validated());
        tracker.report_input_changed();
        tracker.observe("", "", "", "");
        tracker.observe("11201", "94110", "", "");
        assert!(tracker.is_validated());
    }

    #[test]
    fn destination_fields_count_too() {
        let mut tracker = EngagementTracker::default();
        tracker.observe("", "94110", "", "");
        assert!(tracker.is_engaged());
        tracker.observe("", "94110", "", "San Francisco, CA");
        assert!(tracker.is_validated());
    }

    #[test]
    fn exactly_one_flag_true_in_every_state() {
        let mut tracker = EngagementTracker::default();
        let flags = |t: &EngagementTracker| {
            [t.is_idle(), t.is_engaged(), t.is_validated()]
                .iter()
                .filter(|b| **b)
                .count()
        };
        assert_eq!(flags(&tracker), 1);
        tracker.report_input_changed();
        assert_eq!(flags(&tracker), 1);
        tracker.observe("", "", "", "Austin, TX");
        assert_eq!(flags(&tracker), 1);
    }

    // Random interleavings of the two operations must produce a
    // non-decreasing state sequence.
    #[test]
    fn state_is_monotonic_under_random_interleavings() {
        let mut seed: u64 = 0x5eed_cafe;
        let mut next = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as u32
        };

        for _ in 0..200 {
            let mut tracker = EngagementTracker::default();
            let mut last = tracker.state();
            for _ in 0..40 {
                match next() % 4 {
                    0 => tracker.report_input_changed(),
                    1 => tracker.observe("", "", "", ""),
                    2 => tracker.observe("07030", "", "", ""),
                    _ => tracker.observe("07030", "", "Hoboken, NJ", ""),
                }
                assert!(tracker.state() >= last, "state regressed");
                last = tracker.state();
            }
        }
    }
}
