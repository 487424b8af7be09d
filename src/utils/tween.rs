use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    Running(f64),
    Done(f64),
}

/// Linear count-up from zero toward `target`, one increment per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTween {
    current: f64,
    target: f64,
    increment: f64,
    done: bool,
}

impl CounterTween {
    pub fn new(target: f64, frames: u32) -> Self {
        let frames = frames.max(1) as f64;
        Self {
            current: 0.0,
            target,
            increment: target / frames,
            done: false,
        }
    }

    pub fn step(&mut self) -> Tick {
        if self.done {
            return Tick::Done(self.target);
        }
        let next = self.current + self.increment;
        if self.increment <= 0.0 || next >= self.target {
            self.current = self.target;
            self.done = true;
            Tick::Done(self.target)
        } else {
            self.current = next;
            Tick::Running(next)
        }
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn final_display(&self) -> String {
        format_number(self.target)
    }

    /// Text for the counter element: whole numbers while running, the exact
    /// target once finished.
    pub fn display(&self) -> String {
        if self.done {
            format_number(self.target)
        } else {
            format_number(self.current.ceil().min(self.target))
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Parses a `data-target` attribute value.
pub fn parse_target(raw: &str) -> Result<f64, SiteError> {
    match raw.trim().replace(',', "").parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SiteError::InvalidTarget(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: f64, frames: u32) -> (f64, usize) {
        let mut tween = CounterTween::new(target, frames);
        let mut steps = 0;
        loop {
            steps += 1;
            assert!(steps <= frames as usize + 2, "tween did not terminate");
            if let Tick::Done(v) = tween.step() {
                return (v, steps);
            }
        }
    }

    #[test]
    fn always_lands_on_target() {
        for &target in &[1.0, 7.0, 99.0, 250.0, 1234.0, 98.6, 1e6] {
            for &frames in &[1, 3, 7, 60, 125, 1000] {
                let (end, _) = run(target, frames);
                assert_eq!(end, target, "target {} frames {}", target, frames);
            }
        }
    }

    #[test]
    fn takes_about_frames_steps() {
        let (_, steps) = run(500.0, 125);
        assert!((124..=126).contains(&steps));
    }

    #[test]
    fn display_never_overshoots() {
        let mut tween = CounterTween::new(10.0, 3);
        let mut shown = Vec::new();
        while !tween.is_done() {
            tween.step();
            shown.push(tween.display());
        }
        assert_eq!(shown.last().map(String::as_str), Some("10"));
        for s in &shown {
            assert!(s.parse::<f64>().unwrap() <= 10.0);
        }
    }

    #[test]
    fn zero_and_negative_targets_finish_immediately() {
        assert_eq!(CounterTween::new(0.0, 60).step(), Tick::Done(0.0));
        assert_eq!(CounterTween::new(-5.0, 60).step(), Tick::Done(-5.0));
    }

    #[test]
    fn zero_frames_treated_as_one() {
        assert_eq!(CounterTween::new(42.0, 0).step(), Tick::Done(42.0));
    }

    #[test]
    fn stepping_after_done_is_stable() {
        let mut tween = CounterTween::new(3.0, 1);
        tween.step();
        assert_eq!(tween.step(), Tick::Done(3.0));
        assert_eq!(tween.display(), "3");
        assert_eq!(CounterTween::new(98.5, 10).final_display(), "98.5");
    }

    #[test]
    fn parses_attribute_values() {
        assert_eq!(parse_target("1500").unwrap(), 1500.0);
        assert_eq!(parse_target(" 1,200 ").unwrap(), 1200.0);
        assert_eq!(parse_target("98.5").unwrap(), 98.5);
        assert!(parse_target("lots").is_err());
        assert!(parse_target("inf").is_err());
        assert!(parse_target("").is_err());
    }
}
