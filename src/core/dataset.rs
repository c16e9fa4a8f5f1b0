//! Fixed properties of the Smith-Sandwell global topography grid
//!
//! The v18-series grid is a Mercator projection stored as big-endian
//! 16-bit integers, row-major from north to south.

/// Grid geometry of a Smith-Sandwell release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFacts {
    /// Longitude columns (1-minute spacing, 0..360)
    pub nlon: u64,
    /// Latitude rows
    pub nlat: u64,
    /// Latitude extent, degrees north and south
    pub max_abs_lat: f64,
    /// Bytes per cell
    pub cell_bytes: u64,
}

/// The published Smith-Sandwell v18-series layout
pub const SMITH_SANDWELL: GridFacts = GridFacts {
    nlon: 21600,
    nlat: 17280,
    max_abs_lat: 80.738,
    cell_bytes: 2,
};

impl GridFacts {
    /// Size of the `.img` grid file in bytes
    pub fn grid_bytes(&self) -> u64 {
        self.nlon * self.nlat * self.cell_bytes
    }
}
