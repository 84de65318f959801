//! Background acceleration grid for proximity checks.
use std::f32::consts::SQRT_2;

use glam::Vec2;

use crate::error::{Error, Result};
use crate::geometry::Domain;

/// Uniform grid with cell size `radius / sqrt(2)`.
///
/// A cell's diagonal equals the radius, so two accepted samples can never share
/// a cell and any neighbour closer than the radius lies within two cells on
/// each axis.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    cols: usize,
    rows: usize,
    cells: Vec<Option<Vec2>>,
    occupied: usize,
}

impl SpatialGrid {
    /// Builds an empty grid covering `domain` for samples spaced `radius` apart.
    pub fn new(domain: &Domain, radius: f32) -> Result<Self> {
        let radius = Error::require_positive("radius", radius)?;
        let cell_size = radius / SQRT_2;
        let cols = cell_count(domain.width(), cell_size)?;
        let rows = cell_count(domain.height(), cell_size)?;
        let too_large =
            || Error::InvalidConfig(format!("grid of {cols}x{rows} cells does not fit in memory"));
        let total = cols.checked_mul(rows).ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(total).map_err(|_| too_large())?;
        cells.resize(total, None);

        Ok(Self {
            cell_size,
            cols,
            rows,
            cells,
            occupied: 0,
        })
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Grid dimensions as `(columns, rows)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline]
    fn index(&self, ix: usize, iz: usize) -> usize {
        iz * self.cols + ix
    }

    /// Cell coordinates of a point inside the domain.
    ///
    /// Indices are clamped to the last column/row so that rounding right at the
    /// far edges cannot step outside the grid.
    #[inline]
    pub fn cell_index_of(&self, point: Vec2) -> (usize, usize) {
        debug_assert!(
            point.x >= 0.0 && point.y >= 0.0,
            "point {point} lies outside the grid"
        );
        let ix = ((point.x / self.cell_size).floor() as usize).min(self.cols - 1);
        let iz = ((point.y / self.cell_size).floor() as usize).min(self.rows - 1);
        (ix, iz)
    }

    pub fn get(&self, ix: usize, iz: usize) -> Option<Vec2> {
        if ix >= self.cols || iz >= self.rows {
            return None;
        }
        self.cells[self.index(ix, iz)]
    }

    /// Stores an accepted sample in its cell.
    ///
    /// The cell must be empty; the minimum distance between accepted samples
    /// guarantees this.
    pub fn insert(&mut self, sample: Vec2) {
        let (ix, iz) = self.cell_index_of(sample);
        let idx = self.index(ix, iz);
        debug_assert!(
            self.cells[idx].is_none(),
            "cell ({ix}, {iz}) already holds {:?}, cannot insert {sample}",
            self.cells[idx]
        );
        self.cells[idx] = Some(sample);
        self.occupied += 1;
    }

    /// Returns `false` if any stored sample is strictly closer than `radius`.
    pub fn is_far_enough(&self, candidate: Vec2, radius: f32) -> bool {
        let radius_squared = radius * radius;
        let (gx, gz) = self.cell_index_of(candidate);
        let start_x = gx.saturating_sub(2);
        let end_x = (gx + 3).min(self.cols);
        let start_z = gz.saturating_sub(2);
        let end_z = (gz + 3).min(self.rows);

        for z in start_z..end_z {
            for x in start_x..end_x {
                if let Some(existing) = self.cells[self.index(x, z)] {
                    if existing.distance_squared(candidate) < radius_squared {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Iterates over occupied cells as `((ix, iz), sample)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Vec2)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|sample| ((i % self.cols, i / self.cols), sample))
        })
    }
}

fn cell_count(side: f32, cell_size: f32) -> Result<usize> {
    let count = (side / cell_size).ceil();
    if !count.is_finite() || count > usize::MAX as f32 {
        return Err(Error::InvalidConfig(format!(
            "side {side} needs too many cells of size {cell_size}"
        )));
    }
    Ok((count as usize).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: f32, height: f32, radius: f32) -> SpatialGrid {
        SpatialGrid::new(&Domain::new(width, height).unwrap(), radius).unwrap()
    }

    #[test]
    fn dimensions_follow_cell_size() {
        let g = grid(10.0, 4.0, 2.0);
        let cs = 2.0 / SQRT_2;
        assert!((g.cell_size() - cs).abs() < 1e-6);
        assert_eq!(
            g.dimensions(),
            ((10.0 / cs).ceil() as usize, (4.0 / cs).ceil() as usize)
        );
    }

    #[test]
    fn tiny_domain_still_has_one_cell() {
        let g = grid(1.0, 1.0, 5.0);
        assert_eq!(g.dimensions(), (1, 1));
    }

    #[test]
    fn cell_index_floors_coordinates() {
        let g = grid(10.0, 10.0, SQRT_2);
        assert_eq!(g.cell_index_of(Vec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(g.cell_index_of(Vec2::new(2.5, 7.1)), (2, 7));
        assert_eq!(g.cell_index_of(Vec2::new(9.999, 9.999)), (9, 9));
    }

    #[test]
    fn insert_and_get() {
        let mut g = grid(10.0, 10.0, SQRT_2);
        assert!(g.is_empty());
        g.insert(Vec2::new(3.5, 4.5));
        assert_eq!(g.len(), 1);
        assert_eq!(g.get(3, 4), Some(Vec2::new(3.5, 4.5)));
        assert_eq!(g.get(4, 3), None);
        assert_eq!(g.get(100, 0), None);
        assert_eq!(g.iter().collect::<Vec<_>>(), vec![((3, 4), Vec2::new(3.5, 4.5))]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already holds")]
    fn double_insert_into_one_cell_panics_in_debug() {
        let mut g = grid(10.0, 10.0, SQRT_2);
        g.insert(Vec2::new(3.1, 4.1));
        g.insert(Vec2::new(3.9, 4.9));
    }

    #[test]
    fn is_far_enough_rejects_close_neighbors() {
        let mut g = grid(10.0, 10.0, 1.0);
        g.insert(Vec2::new(5.0, 5.0));
        assert!(!g.is_far_enough(Vec2::new(5.5, 5.0), 1.0));
        assert!(!g.is_far_enough(Vec2::new(5.7, 5.7), 1.0));
        assert!(g.is_far_enough(Vec2::new(6.0, 5.0), 1.0));
        assert!(g.is_far_enough(Vec2::new(6.5, 6.5), 1.0));
    }

    #[test]
    fn is_far_enough_on_empty_grid() {
        let g = grid(3.0, 3.0, 1.0);
        assert!(g.is_far_enough(Vec2::new(1.0, 1.0), 1.0));
    }

    #[test]
    fn sample_at_origin_is_not_treated_as_empty() {
        let mut g = grid(10.0, 10.0, 2.0);
        g.insert(Vec2::ZERO);
        assert!(!g.is_far_enough(Vec2::new(1.0, 1.0), 2.0));
        assert!(!g.is_far_enough(Vec2::new(0.0, 1.99), 2.0));
    }

    #[test]
    fn neighbour_two_cells_away_is_found() {
        let mut g = grid(20.0, 20.0, 2.0);
        // Cells are ~1.414 wide; these points are two columns apart.
        let stored = Vec2::new(2.8, 5.0);
        g.insert(stored);
        let candidate = Vec2::new(4.25, 5.0);
        assert_eq!(
            g.cell_index_of(candidate).0 - g.cell_index_of(stored).0,
            2
        );
        assert!(!g.is_far_enough(candidate, 2.0));
    }

    #[test]
    fn grid_beyond_addressable_memory_is_rejected() {
        // ~2e18 cells: the count fits in usize but the bytes do not.
        let d = Domain::new(1.0e6, 1.0e6).unwrap();
        assert!(matches!(
            SpatialGrid::new(&d, 1.0e-3),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let d = Domain::new(f32::MAX, f32::MAX).unwrap();
        assert!(matches!(
            SpatialGrid::new(&d, 1e-30),
            Err(Error::InvalidConfig(_))
        ));
    }
}
