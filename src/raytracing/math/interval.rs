/// Range of accepted ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Interval {
        Interval { min, max }
    }

    /// Interval starting at `min` and never closing.
    pub fn from_min(min: f64) -> Interval {
        Interval::new(min, f64::INFINITY)
    }

    /// Strict containment, both ends excluded.
    #[inline(always)]
    pub fn surrounds(&self, t: f64) -> bool {
        self.min < t && t < self.max
    }

    pub fn clamp(&self, t: f64) -> f64 {
        t.max(self.min).min(self.max)
    }

    /// Same lower bound with the upper bound moved to `max`.
    #[inline(always)]
    pub fn with_max(self, max: f64) -> Interval {
        Interval { max, ..self }
    }
}
