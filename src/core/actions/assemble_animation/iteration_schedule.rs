use serde::Deserialize;

pub const DEFAULT_SCHEDULE_START: u32 = 2;
pub const DEFAULT_SCHEDULE_STEP: u32 = 10;

/// Frame iteration caps: `start, start + step, ...` up to and including the maximum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IterationSchedule {
    pub start: u32,
    pub step: u32,
}

impl Default for IterationSchedule {
    fn default() -> Self {
        Self {
            start: DEFAULT_SCHEDULE_START,
            step: DEFAULT_SCHEDULE_STEP,
        }
    }
}

impl IterationSchedule {
    /// Increasing caps `<= max_iterations`; empty when `start` already exceeds it.
    ///
    /// A zero `step` is treated as 1 so the sequence always terminates.
    pub fn iterations(&self, max_iterations: u32) -> impl Iterator<Item = u32> {
        let step = self.step.max(1) as usize;
        let start = self.start.max(1);

        (start..=max_iterations).step_by(step)
    }

    #[must_use]
    pub fn frame_count(&self, max_iterations: u32) -> usize {
        self.iterations(max_iterations).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sequence_starts_at_two_in_steps_of_ten() {
        let caps: Vec<u32> = IterationSchedule::default().iterations(42).collect();

        assert_eq!(caps, vec![2, 12, 22, 32, 42]);
    }

    #[test]
    fn test_hundred_gives_ten_frames() {
        let schedule = IterationSchedule::default();

        assert_eq!(schedule.frame_count(100), (100 - 2) / 10 + 1);
        assert_eq!(schedule.iterations(100).last(), Some(92));
    }

    #[test]
    fn test_cap_below_start_is_empty() {
        let schedule = IterationSchedule::default();

        assert_eq!(schedule.frame_count(1), 0);
        assert_eq!(schedule.frame_count(0), 0);
        assert_eq!(schedule.iterations(2).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_zero_step_still_terminates() {
        let schedule = IterationSchedule { start: 3, step: 0 };

        assert_eq!(schedule.iterations(5).collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let schedule: IterationSchedule = serde_json::from_str(r#"{"step": 5}"#).unwrap();

        assert_eq!(schedule, IterationSchedule { start: 2, step: 5 });
    }
}
