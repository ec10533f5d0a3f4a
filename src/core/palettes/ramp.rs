use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

pub type ColourStop = (f64, Colour);

/// Piecewise-linear ramp through colour stops at increasing positions in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ColourRamp {
    name: String,
    stops: &'static [ColourStop],
    reversed: bool,
}

impl ColourRamp {
    /// `stops` must be non-empty and sorted by position.
    #[must_use]
    pub fn new(name: impl Into<String>, stops: &'static [ColourStop], reversed: bool) -> Self {
        debug_assert!(!stops.is_empty());
        debug_assert!(stops.windows(2).all(|pair| pair[0].0 <= pair[1].0));

        Self {
            name: name.into(),
            stops,
            reversed,
        }
    }

    fn sample(&self, t: f64) -> Colour {
        let Some(&(first_at, first)) = self.stops.first() else {
            return Colour::BLACK;
        };
        if t <= first_at {
            return first;
        }

        for pair in self.stops.windows(2) {
            let (start_at, start) = pair[0];
            let (end_at, end) = pair[1];

            if t <= end_at {
                let span = end_at - start_at;
                if span <= 0.0 {
                    return end;
                }
                return start.lerp(end, (t - start_at) / span);
            }
        }

        self.stops.last().map_or(first, |&(_, last)| last)
    }
}

impl ColourMap for ColourRamp {
    fn map(&self, t: f64) -> Colour {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        if self.reversed {
            self.sample(1.0 - t)
        } else {
            self.sample(t)
        }
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
