//! Garden theme records: per-style landscape aesthetics.

pub use hotelgen_components::landscape::PoolShape;

/// Tree species used for a style's grounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Deciduous,
    Conifer,
    Palm,
}

/// Nominal pool footprint, resolved to millimeters by the garden engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolSize {
    Small,
    Medium,
    Large,
}

impl PoolSize {
    /// Footprint in millimeters (width, depth).
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PoolSize::Small => (12.0, 8.0),
            PoolSize::Medium => (18.0, 11.0),
            PoolSize::Large => (25.0, 15.0),
        }
    }
}

/// Hedge arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HedgeStyle {
    /// Side hedges along the lot borders
    Border,
    /// Border hedges plus cross hedges
    Formal,
    /// Border hedges only, placed by the same rules as Border
    Sparse,
}

/// Path geometry from the road to the entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Straight,
    Curved,
}

/// Configuration for a style's garden/leisure areas.
#[derive(Debug, Clone)]
pub struct GardenTheme {
    pub tree_kind: TreeKind,
    /// 0.0-1.0; drives Poisson-disk spacing and the tree cap
    pub tree_density: f64,
    pub pool_shape: Option<PoolShape>,
    pub pool_size: PoolSize,
    pub has_hedges: bool,
    pub hedge_style: HedgeStyle,
    pub has_terrace: bool,
    pub path_style: PathStyle,
}

impl Default for GardenTheme {
    fn default() -> Self {
        Self {
            tree_kind: TreeKind::Deciduous,
            tree_density: 0.5,
            pool_shape: Some(PoolShape::Rectangular),
            pool_size: PoolSize::Medium,
            has_hedges: true,
            hedge_style: HedgeStyle::Border,
            has_terrace: true,
            path_style: PathStyle::Straight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_sizes_ordered() {
        let (sw, sd) = PoolSize::Small.dimensions();
        let (mw, md) = PoolSize::Medium.dimensions();
        let (lw, ld) = PoolSize::Large.dimensions();
        assert!(sw < mw && mw < lw);
        assert!(sd < md && md < ld);
    }
}
