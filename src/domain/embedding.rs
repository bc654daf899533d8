use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    pub values: Vec<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn zeros(dimensions: usize) -> Self {
        Self {
            values: vec![0.0; dimensions],
        }
    }

    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    pub fn norm(&self) -> f32 {
        self.values.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Scales the vector to unit length. A zero vector is returned unchanged.
    pub fn l2_normalized(mut self) -> Self {
        let length = self.norm();
        if length > 0.0 {
            self.values.iter_mut().for_each(|x| *x /= length);
        }
        self
    }

    pub fn cosine_similarity(&self, other: &Self) -> f32 {
        if self.values.len() != other.values.len() {
            return 0.0;
        }

        let dot_product: f32 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum();

        let magnitude_a = self.norm();
        let magnitude_b = other.norm();

        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            return 0.0;
        }

        dot_product / (magnitude_a * magnitude_b)
    }

    /// `1 - cosine_similarity`. Undefined (`None`) when the dimensions differ
    /// or either side is the zero vector, so such pairs can never count as a match.
    pub fn cosine_distance(&self, other: &Self) -> Option<f32> {
        if self.values.len() != other.values.len() || self.is_zero() || other.is_zero() {
            return None;
        }
        Some(1.0 - self.cosine_similarity(other))
    }
}
