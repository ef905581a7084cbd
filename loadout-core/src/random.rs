use rand::Rng;

/// Source of uniform draws in `[0, 1)`.
///
/// Every generator in this crate takes one of these so callers can swap
/// a seeded `StdRng` for a [`ScriptedSource`] and assert exact outcomes.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index into a collection of `len` elements. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = (self.next_unit() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `values` is empty or any value lies outside `[0, 1)`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "ScriptedSource needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "ScriptedSource values must lie in [0, 1)"
        );
        Self { values, pos: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
