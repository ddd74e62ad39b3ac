use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the randomness used for decorative lines.
///
/// Implementors only supply unit samples; ranges are derived from them so a
/// scripted source fully determines the synthesized geometry.
pub trait JitterSource: Send {
    /// A sample in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// A sample in `[low, high)`.
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.next_unit()
    }

    /// An integer in `[low, high]`.
    fn pick(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        let span = (high - low + 1) as f32;
        (low + (self.next_unit() * span) as usize).min(high)
    }
}

/// Jitter backed by any `rand` generator.
pub struct RngJitter<R: Rng + Send> {
    rng: R,
}

impl<R: Rng + Send> RngJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngJitter<ChaCha8Rng> {
    /// Reproducible jitter from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Jitter seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng + Send> JitterSource for RngJitter<R> {
    fn next_unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// Replays a fixed list of unit samples, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedJitter {
    samples: Vec<f32>,
    cursor: usize,
}

impl ScriptedJitter {
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl JitterSource for ScriptedJitter {
    fn next_unit(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let v = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        v.clamp(0.0, 1.0)
    }
}
