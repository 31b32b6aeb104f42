use std::time::Duration;

/// Count-up animation from 0 to `end` over `duration`.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedCounter {
    pub end: u64,
    pub duration: Duration,
    pub suffix: String,
}

impl AnimatedCounter {
    pub fn new(end: u64, duration: Duration) -> Self {
        Self {
            end,
            duration,
            suffix: String::new(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Fraction of the animation completed, in `[0, 1]`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Lands exactly on `end` when done and never exceeds it, even where
    /// `end as f64` rounds.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.end;
        }
        ((progress * self.end as f64).floor() as u64).min(self.end)
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }

    /// Display text, e.g. `"1,250+"`.
    pub fn text_at(&self, elapsed: Duration) -> String {
        format!("{}{}", group_thousands(self.value_at(elapsed)), self.suffix)
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
