//! Fake sentiment "inference" for the playground widget. Scores are random.

use rand::Rng;

/// Scores in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl Prediction {
    /// What the widget shows before the first run.
    pub const INITIAL: Prediction = Prediction {
        positive: 12.4,
        neutral: 88.5,
        negative: 0.1,
    };

    /// Label with the highest score.
    pub fn dominant(&self) -> &'static str {
        if self.positive >= self.neutral && self.positive >= self.negative {
            "Positive"
        } else if self.neutral >= self.negative {
            "Neutral"
        } else {
            "Negative"
        }
    }
}

pub const SAMPLE_INPUTS: [&str; 4] = [
    "The new neural network architecture showed promising results, although training stability remains a challenge.",
    "This is an incredible breakthrough in AI technology!",
    "The model performance was disappointing and failed to meet expectations.",
    "The weather today is cloudy with a chance of rain.",
];

/// Positive in `[0, 40)`, negative in `[0, 20)`, neutral takes the rest.
/// Each score is rounded to one decimal after neutral is derived.
pub fn simulate<R: Rng + ?Sized>(rng: &mut R) -> Prediction {
    let positive = rng.gen::<f64>() * 40.0;
    let negative = rng.gen::<f64>() * 20.0;
    let neutral = 100.0 - positive - negative;
    Prediction {
        positive: round1(positive),
        neutral: round1(neutral),
        negative: round1(negative),
    }
}

pub fn pick_sample<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SAMPLE_INPUTS[rng.gen_range(0..SAMPLE_INPUTS.len())]
}

#[inline]
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
