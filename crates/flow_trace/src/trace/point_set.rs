//! Committed-point storage with a bucket-grid spatial index.
use std::collections::HashMap;

use glam::Vec2;

/// Default bucket edge length in canvas units.
pub const DEFAULT_BUCKET_SIZE: f32 = 4.0;

/// Cumulative collection of every point committed by finished lines, with
/// a spatial index answering "any point within radius?" queries.
///
/// The set grows monotonically over a run and is updated only after a line
/// completes, so a line in progress never sees its own trajectory. Queries
/// are inclusive: a point at exactly `radius` distance counts as within.
#[derive(Clone, Debug)]
pub struct PointSet {
    bucket_size: f32,
    points: Vec<Vec2>,
    buckets: HashMap<(i32, i32), Vec<Vec2>>,
}

impl PointSet {
    /// Creates an empty set with [`DEFAULT_BUCKET_SIZE`].
    pub fn new() -> Self {
        Self::with_bucket_size(DEFAULT_BUCKET_SIZE)
    }

    /// Creates an empty set with the given bucket edge length.
    pub fn with_bucket_size(bucket_size: f32) -> Self {
        debug_assert!(bucket_size.is_finite() && bucket_size > 0.0);
        Self {
            bucket_size,
            points: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Creates an empty set with a bucket edge suited to queries of the
    /// given radius, so a query touches a small constant neighborhood.
    pub fn for_query_radius(radius: f32) -> Self {
        if radius.is_finite() && radius > 0.0 {
            Self::with_bucket_size(radius / std::f32::consts::SQRT_2)
        } else {
            Self::new()
        }
    }

    #[inline]
    fn bucket_of(&self, p: Vec2) -> (i32, i32) {
        (
            (p.x / self.bucket_size).floor() as i32,
            (p.y / self.bucket_size).floor() as i32,
        )
    }

    /// Appends all given points and indexes them for queries.
    ///
    /// Called once per completed line with its full trajectory; repeated
    /// calls with partial trajectories are also safe.
    pub fn commit(&mut self, points: &[Vec2]) {
        for p in points.iter().copied() {
            let key = self.bucket_of(p);
            self.buckets.entry(key).or_default().push(p);
            self.points.push(p);
        }
    }

    /// Returns `true` iff at least one committed point lies within
    /// Euclidean distance `radius` of `p`. Radius zero is an
    /// exact-coincidence check.
    pub fn query_any_within(&self, p: Vec2, radius: f32) -> bool {
        if !radius.is_finite() || radius < 0.0 || self.points.is_empty() {
            return false;
        }

        let radius_squared = radius * radius;
        let reach = (radius / self.bucket_size).ceil() as i32;
        let (bx, by) = self.bucket_of(p);

        for y in (by - reach)..=(by + reach) {
            for x in (bx - reach)..=(bx + reach) {
                if let Some(bucket) = self.buckets.get(&(x, y)) {
                    for q in bucket.iter() {
                        if (p - *q).length_squared() <= radius_squared {
                            return true;
                        }
                    }
                }
            }
        }

        false
    }

    /// Number of committed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Committed points in commit order.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}
