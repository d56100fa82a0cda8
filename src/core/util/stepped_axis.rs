/// Sample positions `start, start + step, ...` strictly below `end`.
///
/// Positions are produced by repeated addition, so rounding accumulates the
/// same way on every call; renderers rely on that to place blocks
/// consistently between sequential and parallel sampling. A non-positive or
/// NaN step yields no samples.
#[must_use]
pub fn stepped_axis(start: f64, end: f64, step: f64) -> SteppedAxis {
    SteppedAxis {
        position: start,
        end,
        step,
        finished: step.is_nan() || step <= 0.0,
    }
}

/// Lazy iterator returned by [`stepped_axis`].
#[derive(Debug, Clone)]
pub struct SteppedAxis {
    position: f64,
    end: f64,
    step: f64,
    finished: bool,
}

impl Iterator for SteppedAxis {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let position = self.position;

        if self.finished || position.is_nan() || position >= self.end {
            self.finished = true;
            return None;
        }

        // a step too small to move the position ends the axis
        let next = position + self.step;
        if next == position {
            self.finished = true;
        } else {
            self.position = next;
        }

        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(start: f64, end: f64, step: f64) -> Vec<f64> {
        stepped_axis(start, end, step).collect()
    }

    #[test]
    fn test_exact_steps_exclude_end() {
        assert_eq!(samples(-2.0, 2.0, 1.0), vec![-2.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_partial_last_step_is_included() {
        assert_eq!(samples(0.0, 1.0, 0.4).len(), 3);
    }

    #[test]
    fn test_empty_when_start_not_below_end() {
        assert!(samples(1.0, 1.0, 0.1).is_empty());
        assert!(samples(2.0, 1.0, 0.1).is_empty());
        assert!(samples(f64::NAN, 1.0, 0.1).is_empty());
    }

    #[test]
    fn test_invalid_step_yields_nothing() {
        assert!(samples(0.0, 1.0, 0.0).is_empty());
        assert!(samples(0.0, 1.0, -0.5).is_empty());
        assert!(samples(0.0, 1.0, f64::NAN).is_empty());
    }

    #[test]
    fn test_infinite_step_yields_start_only() {
        assert_eq!(samples(-1.5, 1.5, f64::INFINITY), vec![-1.5]);
    }

    #[test]
    fn test_vanishing_step_stops_after_one_sample() {
        assert_eq!(samples(1.0e20, 2.0e20, 1.0), vec![1.0e20]);
    }

    #[test]
    fn test_accumulates_by_addition() {
        let mut expected = -2.0;

        for sample in stepped_axis(-2.0, 2.0, 0.4) {
            assert_eq!(sample, expected);
            expected += 0.4;
        }
    }

    #[test]
    fn test_stays_exhausted() {
        let mut axis = stepped_axis(0.0, 1.0, 0.5);

        assert_eq!(axis.next(), Some(0.0));
        assert_eq!(axis.next(), Some(0.5));
        assert_eq!(axis.next(), None);
        assert_eq!(axis.next(), None);
    }
}
