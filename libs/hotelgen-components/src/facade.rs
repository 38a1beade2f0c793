//! Facade composition: window grids positioned on a wall.

use hotelgen_solid::{translate, GeometryError, Solid};

use crate::window::window_cutout;

/// Parameters for one facade's window grid.
#[derive(Debug, Clone)]
pub struct WindowGrid {
    pub wall_width: f64,
    pub wall_thickness: f64,
    pub num_floors: u32,
    pub floor_height: f64,
    pub windows_per_floor: u32,
    pub window_width: f64,
    pub window_height: f64,
    /// Z offset for the first floor
    pub first_floor_offset: f64,
    /// Skip windows on the ground floor, leaving room for the door
    pub ground_floor_skip: bool,
}

impl WindowGrid {
    pub fn new(wall_width: f64, wall_thickness: f64, num_floors: u32, floor_height: f64) -> Self {
        Self {
            wall_width,
            wall_thickness,
            num_floors,
            floor_height,
            windows_per_floor: 2,
            window_width: 1.0,
            window_height: 1.0,
            first_floor_offset: 0.0,
            ground_floor_skip: true,
        }
    }

    pub fn windows(mut self, per_floor: u32, width: f64, height: f64) -> Self {
        self.windows_per_floor = per_floor;
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn keep_ground_floor(mut self) -> Self {
        self.ground_floor_skip = false;
        self
    }
}

/// Generates a grid of window cutouts positioned on a wall.
///
/// Window centers are evenly spaced across the wall width and vertically
/// centered within each floor. Returns cutouts ready to be translated onto
/// a facade and subtracted from the building shell.
pub fn window_grid_cutouts(grid: &WindowGrid) -> Result<Vec<Solid>, GeometryError> {
    let mut cutouts = Vec::new();
    let start_floor = if grid.ground_floor_skip { 1 } else { 0 };

    for floor_idx in start_floor..grid.num_floors {
        let spacing = grid.wall_width / (grid.windows_per_floor + 1) as f64;

        for win_idx in 0..grid.windows_per_floor {
            let x_pos = -grid.wall_width / 2.0 + spacing * (win_idx + 1) as f64;
            let z_pos = floor_idx as f64 * grid.floor_height
                + grid.first_floor_offset
                + (grid.floor_height - grid.window_height) / 2.0;

            let cut = window_cutout(grid.window_width, grid.window_height, grid.wall_thickness)?;
            cutouts.push(translate(&cut, x_pos, 0.0, z_pos));
        }
    }

    Ok(cutouts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_skips_ground_floor_by_default() {
        let grid = WindowGrid::new(30.0, 0.8, 4, 5.0).windows(3, 2.0, 3.0);
        let cuts = window_grid_cutouts(&grid).unwrap();
        assert_eq!(cuts.len(), 9);
        // Lowest cutout starts on floor 1
        let min_z = cuts
            .iter()
            .map(|c| c.bounding_box().0.z)
            .fold(f64::INFINITY, f64::min);
        assert!(min_z >= 5.0);
    }

    #[test]
    fn test_grid_keep_ground_floor() {
        let grid = WindowGrid::new(30.0, 0.8, 4, 5.0)
            .windows(3, 2.0, 3.0)
            .keep_ground_floor();
        let cuts = window_grid_cutouts(&grid).unwrap();
        assert_eq!(cuts.len(), 12);
    }

    #[test]
    fn test_grid_windows_stay_within_wall() {
        let grid = WindowGrid::new(30.0, 0.8, 3, 5.0).windows(4, 2.0, 3.0);
        let cuts = window_grid_cutouts(&grid).unwrap();
        for cut in &cuts {
            let (min, max) = cut.bounding_box();
            assert!(min.x >= -15.0);
            assert!(max.x <= 15.0);
        }
    }

    #[test]
    fn test_grid_vertically_centered_in_floor() {
        let grid = WindowGrid::new(10.0, 0.8, 2, 5.0).windows(2, 2.0, 3.0);
        let cuts = window_grid_cutouts(&grid).unwrap();
        let (min, max) = cuts[0].bounding_box();
        assert!((min.z - 6.0).abs() < 1e-9);
        assert!((max.z - 9.0).abs() < 1e-9);
    }
}
