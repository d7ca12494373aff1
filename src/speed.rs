use std::time::Duration;

use crate::config::{INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};

/// Current tick interval. Shrinks a little every time food is eaten.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Speed {
    interval_ms: u64,
}

impl Speed {
    /// Speed at the start of every game.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            interval_ms: INITIAL_TICK_INTERVAL_MS,
        }
    }

    #[cfg(test)]
    const fn from_millis(interval_ms: u64) -> Self {
        Self { interval_ms }
    }

    /// Shortens the interval by the step for the current band.
    ///
    /// | interval  | step |
    /// |-----------|------|
    /// | > 150     | 5    |
    /// | 101..=150 | 3    |
    /// | 51..=100  | 2    |
    /// | 26..=50   | 1    |
    /// | <= 25     | 0    |
    pub fn accelerate(&mut self) {
        let step = match self.interval_ms {
            ms if ms > 150 => 5,
            ms if ms > 100 => 3,
            ms if ms > 50 => 2,
            ms if ms > MIN_TICK_INTERVAL_MS => 1,
            _ => 0,
        };
        self.interval_ms -= step;
    }

    #[must_use]
    pub fn interval_ms(self) -> u64 {
        self.interval_ms
    }

    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::Speed;

    fn after_meals(meals: usize) -> u64 {
        let mut speed = Speed::initial();
        for _ in 0..meals {
            speed.accelerate();
        }
        speed.interval_ms()
    }

    #[test]
    fn first_meal_takes_five_off() {
        assert_eq!(after_meals(0), 200);
        assert_eq!(after_meals(1), 195);
    }

    #[test]
    fn steps_shrink_band_by_band() {
        // 200 -> 150 in 10 meals of 5
        assert_eq!(after_meals(10), 150);
        // 150 -> 99 in 17 meals of 3
        assert_eq!(after_meals(27), 99);
        // 99 -> 49 in 25 meals of 2
        assert_eq!(after_meals(52), 49);
        // 49 -> 25 in 24 meals of 1
        assert_eq!(after_meals(76), 25);
    }

    #[test]
    fn interval_is_non_increasing_and_floored() {
        let mut speed = Speed::initial();
        let mut previous = speed.interval_ms();

        for _ in 0..500 {
            speed.accelerate();
            assert!(speed.interval_ms() <= previous);
            assert!(speed.interval_ms() >= 25);
            previous = speed.interval_ms();
        }

        assert_eq!(speed.interval_ms(), 25);
    }

    #[test]
    fn band_edges_use_the_lower_step() {
        let mut speed = Speed::from_millis(151);
        speed.accelerate();
        assert_eq!(speed.interval_ms(), 146);

        let mut speed = Speed::from_millis(150);
        speed.accelerate();
        assert_eq!(speed.interval_ms(), 147);

        let mut speed = Speed::from_millis(26);
        speed.accelerate();
        assert_eq!(speed.interval_ms(), 25);
    }
}
