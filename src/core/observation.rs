//! Observations handed to the external model.

use serde::{Deserialize, Serialize};

/// Observation as a flat tensor.
///
/// Games choose the shape (e.g. `[planes, height, width]` for board games or
/// `[features]` for small vectors); the driver reshapes `data` accordingly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Flattened tensor data (row-major order).
    pub data: Vec<f32>,

    /// Shape of the tensor.
    pub shape: Vec<usize>,
}

impl Observation {
    /// Create a new observation.
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            data.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { data, shape }
    }

    /// Create a zero-filled observation with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            data: vec![0.0; size],
            shape,
        }
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.data.get(index).copied()
    }

    /// Set the element at a flat index. Out-of-range writes are ignored.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.data.get_mut(index) {
            *slot = value;
        }
    }

    /// Mutable view of plane `plane` for `[planes, ...]` shaped observations.
    pub fn plane_mut(&mut self, plane: usize) -> &mut [f32] {
        let plane_len: usize = self.shape.iter().skip(1).product();
        let start = plane * plane_len;
        &mut self.data[start..start + plane_len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let obs = Observation::zeros(vec![3, 3, 3]);
        assert_eq!(obs.len(), 27);
        assert!(obs.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_set_and_get() {
        let mut obs = Observation::zeros(vec![4]);
        obs.set(2, 1.5);
        obs.set(10, 9.0);
        assert_eq!(obs.get(2), Some(1.5));
        assert_eq!(obs.get(10), None);
    }

    #[test]
    fn test_plane_mut() {
        let mut obs = Observation::zeros(vec![2, 2, 2]);
        obs.plane_mut(1)[3] = 1.0;
        assert_eq!(obs.get(7), Some(1.0));
        assert_eq!(obs.data.iter().sum::<f32>(), 1.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let obs = Observation::new(vec![1.0, 0.0], vec![2]);
        let json = serde_json::to_string(&obs).unwrap();
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, back);
    }
}
