//! Discretised sample paths.

/// Fixed-length sequence of samples taken every `dt`.
///
/// Sample `i` is the process value at time `i * dt`. Paths are immutable once
/// generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    values: Vec<f64>,
    dt: f64,
}

impl Path {
    pub(crate) fn new(values: Vec<f64>, dt: f64) -> Self {
        Self { values, dt }
    }

    /// All samples in time order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Step size used to produce the path.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Horizon the path was generated for, `len() * dt`.
    ///
    /// The last sample sits one step before the horizon.
    pub fn duration(&self) -> f64 {
        self.values.len() as f64 * self.dt
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First sample, the process initial value.
    pub fn initial(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Last sample.
    pub fn terminal(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Sample times 0, dt, 2dt, ...
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.values.len()).map(move |i| i as f64 * self.dt)
    }

    /// Consumes the path, returning its samples.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let path = Path::new(vec![1.0, 1.5, 0.5], 0.25);
        assert_eq!(path.len(), 3);
        assert!(!path.is_empty());
        assert_eq!(path.initial(), Some(1.0));
        assert_eq!(path.terminal(), Some(0.5));
        assert_eq!(path.dt(), 0.25);
        assert_eq!(path.duration(), 0.75);
        assert_eq!(path.times().collect::<Vec<_>>(), vec![0.0, 0.25, 0.5]);
        assert_eq!(path.into_values(), vec![1.0, 1.5, 0.5]);
    }
}
