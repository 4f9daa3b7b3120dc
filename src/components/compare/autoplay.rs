use super::tracker::SliderPosition;

pub const DEFAULT_LOW: f64 = 5.0;
pub const DEFAULT_HIGH: f64 = 95.0;
pub const DEFAULT_STEP: f64 = 0.5;

/// Timer ticks per autoplay cycle.
const TICKS_PER_CYCLE: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Sweeps the slider back and forth between `low` and `high`.
#[derive(Clone, Debug, PartialEq)]
pub struct Oscillator {
    low: f64,
    high: f64,
    step: f64,
    direction: Direction,
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(DEFAULT_LOW, DEFAULT_HIGH, DEFAULT_STEP)
    }
}

impl Oscillator {
    pub fn new(low: f64, high: f64, step: f64) -> Self {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        Self {
            low: SliderPosition::new(low).percent(),
            high: SliderPosition::new(high).percent(),
            step: step.abs(),
            direction: Direction::Up,
        }
    }

    /// Next position. Lands exactly on a bound before reversing from it.
    pub fn tick(&mut self, current: SliderPosition) -> SliderPosition {
        let current = current.percent();
        if current >= self.high {
            self.direction = Direction::Down;
        } else if current <= self.low {
            self.direction = Direction::Up;
        }

        let next = match self.direction {
            Direction::Up => (current + self.step).min(self.high),
            Direction::Down => (current - self.step).max(self.low),
        };
        SliderPosition::new(next)
    }
}

/// Timer period for a full cycle of `cycle_ms`, never zero.
pub fn tick_interval_ms(cycle_ms: u32) -> u32 {
    (cycle_ms / TICKS_PER_CYCLE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_up_then_reverses_exactly_at_high() {
        let mut oscillator = Oscillator::default();
        let mut position = SliderPosition::new(94.0);
        position = oscillator.tick(position);
        assert_eq!(position.percent(), 94.5);
        position = oscillator.tick(position);
        assert_eq!(position.percent(), 95.0);
        position = oscillator.tick(position);
        assert_eq!(position.percent(), 94.5);
    }

    #[test]
    fn reverses_exactly_at_low() {
        let mut oscillator = Oscillator::default();
        let mut position = SliderPosition::new(95.0);
        let mut previous = position.percent();
        while position.percent() > DEFAULT_LOW {
            position = oscillator.tick(position);
            assert!(position.percent() < previous);
            previous = position.percent();
        }
        assert_eq!(position.percent(), DEFAULT_LOW);
        assert_eq!(oscillator.tick(position).percent(), DEFAULT_LOW + DEFAULT_STEP);
    }

    #[test]
    fn stays_within_bounds_and_is_monotonic_between_reversals() {
        let mut oscillator = Oscillator::new(10.0, 90.0, 0.7);
        let mut position = SliderPosition::new(50.0);
        let mut rising = true;
        let mut reversals = 0;
        for _ in 0..2_000 {
            let next = oscillator.tick(position);
            assert!(next.percent() >= 10.0 && next.percent() <= 90.0);
            let now_rising = next.percent() > position.percent();
            if now_rising != rising {
                // A reversal only ever starts from a bound.
                assert!(position.percent() == 10.0 || position.percent() == 90.0);
                reversals += 1;
                rising = now_rising;
            }
            position = next;
        }
        assert!(reversals >= 2);
    }

    #[test]
    fn starting_outside_the_band_walks_into_it() {
        let mut oscillator = Oscillator::default();
        let position = oscillator.tick(SliderPosition::new(0.0));
        assert_eq!(position.percent(), 0.5);
        let position = oscillator.tick(SliderPosition::new(100.0));
        assert_eq!(position.percent(), 99.5);
    }

    #[test]
    fn swapped_bounds_are_normalised() {
        let mut oscillator = Oscillator::new(80.0, 20.0, 1.0);
        assert_eq!(oscillator.tick(SliderPosition::new(80.0)).percent(), 79.0);
    }

    #[test]
    fn tick_interval_divides_cycle() {
        assert_eq!(tick_interval_ms(5_000), 25);
        assert_eq!(tick_interval_ms(0), 1);
        assert_eq!(tick_interval_ms(150), 1);
    }
}
