//! Background starfield
//!
//! Stars are generated once at startup and never mutated. Generation takes
//! the RNG explicitly so tests (and configs with a seed) are reproducible.

use rand::{rngs::StdRng, Rng, SeedableRng};
use starship_math::Vec3;

use crate::{Material, Primitive, ShapeBatch};

/// Axis-aligned box that stars are scattered in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for StarBounds {
    fn default() -> Self {
        Self {
            min: Vec3::new(-10.0, -10.0, -20.0),
            max: Vec3::new(10.0, 10.0, -5.0),
        }
    }
}

impl StarBounds {
    /// Check whether a point lies inside the bounds (inclusive)
    pub fn contains(&self, p: Vec3) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }
}

/// Fixed set of background points
#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    stars: Vec<Vec3>,
}

impl Starfield {
    /// Scatter `count` stars uniformly inside the default bounds
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        Self::generate_in(count, StarBounds::default(), rng)
    }

    /// Scatter `count` stars uniformly inside `bounds`
    pub fn generate_in<R: Rng>(count: usize, bounds: StarBounds, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(bounds.min.x..=bounds.max.x),
                    rng.gen_range(bounds.min.y..=bounds.max.y),
                    rng.gen_range(bounds.min.z..=bounds.max.z),
                )
            })
            .collect();
        Self { stars }
    }

    /// Reproducible starfield from a fixed seed
    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::generate(count, &mut StdRng::seed_from_u64(seed))
    }

    /// Starfield seeded from OS entropy
    pub fn from_entropy(count: usize) -> Self {
        Self::generate(count, &mut StdRng::from_entropy())
    }

    /// Star positions
    pub fn stars(&self) -> &[Vec3] {
        &self.stars
    }

    /// Get the number of stars
    #[inline]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Check whether the starfield is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// The stars as a single point batch
    pub fn batch(&self) -> ShapeBatch {
        ShapeBatch::new(Primitive::Points, Material::STAR, self.stars.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count() {
        for count in [0, 1, 150, 1000] {
            assert_eq!(Starfield::seeded(count, 7).len(), count);
        }
    }

    #[test]
    fn test_generate_within_bounds() {
        let bounds = StarBounds::default();
        let field = Starfield::seeded(500, 42);
        for star in field.stars() {
            assert!(bounds.contains(*star), "star {:?} out of bounds", star);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        assert_eq!(Starfield::seeded(150, 1), Starfield::seeded(150, 1));
        assert_ne!(Starfield::seeded(150, 1), Starfield::seeded(150, 2));
    }

    #[test]
    fn test_custom_bounds() {
        let bounds = StarBounds {
            min: Vec3::new(0.0, 0.0, -1.0),
            max: Vec3::new(1.0, 1.0, 0.0),
        };
        let mut rng = StdRng::seed_from_u64(3);
        let field = Starfield::generate_in(64, bounds, &mut rng);
        assert!(field.stars().iter().all(|s| bounds.contains(*s)));
    }

    #[test]
    fn test_batch() {
        let field = Starfield::seeded(10, 5);
        let batch = field.batch();
        assert_eq!(batch.primitive, Primitive::Points);
        assert_eq!(batch.material, Material::STAR);
        assert_eq!(batch.vertices.as_slice(), field.stars());
    }

    #[test]
    fn test_from_entropy_count() {
        let field = Starfield::from_entropy(150);
        assert_eq!(field.len(), 150);
        assert!(!field.is_empty());
    }
}
