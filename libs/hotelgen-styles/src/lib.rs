//! # hotelgen-styles
//!
//! Eight architectural styles behind one trait, dispatched through an
//! explicit registry. Every style is a deterministic function from
//! (parameters, manufacturing profile, seed) to a single assembled solid,
//! built with the shared three-phase protocol in [`style::assemble_building`].

mod art_deco;
mod classical;
mod common;
mod mediterranean;
mod modern;
mod registry;
mod skyscraper;
mod style;
mod theme;
mod townhouse;
mod tropical;
mod victorian;

pub use registry::StyleRegistry;
pub use style::{assemble_building, HotelStyle};
pub use theme::{GardenTheme, HedgeStyle, PathStyle, PoolShape, PoolSize, TreeKind};

#[cfg(test)]
mod tests {
    use super::*;
    use hotelgen_core::{BuildingParams, ManufacturingProfile};

    /// Every registered style must succeed on default parameters under both
    /// manufacturing profiles. No style/profile combination may fail.
    #[test]
    fn test_style_totality() {
        let registry = StyleRegistry::new();
        for name in registry.names() {
            for printer_type in ["fdm", "resin"] {
                let mut params = BuildingParams::for_style(name);
                params.printer_type = printer_type.to_string();
                let profile = ManufacturingProfile::from_type(printer_type).unwrap();
                let style = registry.get(name).unwrap();
                let solid = style
                    .generate(&params, &profile)
                    .unwrap_or_else(|e| panic!("{name}/{printer_type} failed: {e}"));
                assert!(
                    solid.volume() > 0.0,
                    "{name}/{printer_type} produced non-positive volume"
                );
            }
        }
    }

    /// Identical parameters (including seed) must reproduce identical
    /// proportions.
    #[test]
    fn test_style_determinism() {
        let registry = StyleRegistry::new();
        let profile = ManufacturingProfile::fdm();
        for name in registry.names() {
            let params = BuildingParams::for_style(name);
            let style = registry.get(name).unwrap();
            let a = style.generate(&params, &profile).unwrap();
            let b = style.generate(&params, &profile).unwrap();
            assert!(
                (a.volume() - b.volume()).abs() < 1e-9,
                "{name} is not deterministic"
            );
        }
    }

    /// Preferred layout strategies must name real strategies.
    #[test]
    fn test_preferred_strategies_are_known() {
        let registry = StyleRegistry::new();
        let known = ["row", "courtyard", "hierarchical", "cluster", "campus", "l_layout"];
        for name in registry.names() {
            let strategy = registry.get(name).unwrap().preferred_layout_strategy();
            assert!(known.contains(&strategy), "{name} prefers unknown {strategy}");
        }
    }
}
