//! Named presets for curated hotel complexes.

use std::collections::BTreeMap;

use hotelgen_core::{GenError, PresetInfo, Role};
use hotelgen_layout::{RoleSize, SizeHints};

/// Curated hotel complex configuration.
#[derive(Debug, Clone)]
pub struct HotelPreset {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub style_name: &'static str,
    pub num_buildings: u32,
    pub building_roles: Vec<Role>,
    pub size_hints: SizeHints,
    /// Degrees to bend the complex around the vertical axis. Carried as
    /// metadata; the builder does not apply a geometric bend.
    pub bend_angle: f64,
    /// Forces a specific layout strategy instead of the style's preference.
    pub layout_override: Option<&'static str>,
}

impl HotelPreset {
    pub fn to_preset_info(&self) -> PresetInfo {
        PresetInfo {
            name: self.name.to_string(),
            display_name: self.display_name.to_string(),
            description: self.description.to_string(),
            style_name: self.style_name.to_string(),
            num_buildings: self.num_buildings,
            building_roles: self.building_roles.clone(),
        }
    }
}

fn hints(entries: &[(Role, f64, f64, f64)]) -> SizeHints {
    entries
        .iter()
        .map(|&(role, width, depth, floors)| {
            (
                role,
                RoleSize {
                    width,
                    depth,
                    floors,
                },
            )
        })
        .collect()
}

/// Read-only preset table, built once at startup.
pub struct PresetRegistry {
    presets: BTreeMap<&'static str, HotelPreset>,
}

impl PresetRegistry {
    pub fn new() -> Self {
        let mut presets = BTreeMap::new();
        for preset in Self::all_presets() {
            presets.insert(preset.name, preset);
        }
        Self { presets }
    }

    fn all_presets() -> Vec<HotelPreset> {
        use Role::*;
        vec![
            HotelPreset {
                name: "royal",
                display_name: "Royal",
                description: "Grand classical hotel with courtyard, wide wings, and clock tower",
                style_name: "classical",
                num_buildings: 4,
                building_roles: vec![Main, Wing, Wing, Tower],
                size_hints: hints(&[
                    (Main, 1.1, 0.8, 1.0),
                    (Wing, 0.8, 0.55, 0.85),
                    (Tower, 0.3, 0.3, 1.5),
                ]),
                bend_angle: 0.0,
                layout_override: None,
            },
            HotelPreset {
                name: "fujiyama",
                display_name: "Fujiyama",
                description: "Art Deco skyscraper complex with stepped towers",
                style_name: "art_deco",
                num_buildings: 3,
                building_roles: vec![Main, Annex, Annex],
                size_hints: hints(&[(Main, 0.9, 0.75, 1.25), (Annex, 0.5, 0.4, 0.85)]),
                bend_angle: 0.0,
                layout_override: None,
            },
            HotelPreset {
                name: "waikiki",
                display_name: "Waikiki",
                description: "Tropical resort with main lodge and scattered pagoda pavilions",
                style_name: "tropical",
                num_buildings: 5,
                building_roles: vec![Main, Pavilion, Pavilion, Pavilion, Pavilion],
                size_hints: hints(&[(Main, 1.1, 0.8, 1.0), (Pavilion, 0.45, 0.35, 0.35)]),
                bend_angle: 0.0,
                layout_override: None,
            },
            HotelPreset {
                name: "president",
                display_name: "President",
                description: "Imposing modern tower complex with cascading heights",
                style_name: "modern",
                num_buildings: 4,
                building_roles: vec![Main, Tower, Wing, Annex],
                size_hints: hints(&[
                    (Main, 1.0, 0.7, 3.58),
                    (Tower, 0.75, 0.55, 2.86),
                    (Wing, 0.65, 0.45, 2.15),
                    (Annex, 0.55, 0.4, 1.43),
                ]),
                bend_angle: 0.0,
                layout_override: None,
            },
            HotelPreset {
                name: "safari",
                display_name: "Safari",
                description: "Mediterranean lodge with wide, low-slung wings",
                style_name: "mediterranean",
                num_buildings: 3,
                building_roles: vec![Main, Wing, Wing],
                size_hints: hints(&[(Main, 1.15, 0.75, 0.75), (Wing, 0.85, 0.5, 0.6)]),
                bend_angle: 0.0,
                layout_override: None,
            },
            HotelPreset {
                name: "taj_mahal",
                display_name: "Taj Mahal",
                description: "Victorian-Mughal palace with onion-domed turrets and flanking pavilions",
                style_name: "victorian",
                num_buildings: 3,
                building_roles: vec![Main, Pavilion, Pavilion],
                size_hints: hints(&[(Main, 1.0, 0.85, 1.0), (Pavilion, 0.45, 0.35, 0.5)]),
                bend_angle: 0.0,
                layout_override: None,
            },
            HotelPreset {
                name: "letoile",
                display_name: "L'Etoile",
                description: "Curved crescent of elegant narrow townhouses",
                style_name: "townhouse",
                num_buildings: 4,
                building_roles: vec![Main, Main, Main, Main],
                size_hints: hints(&[(Main, 0.7, 1.0, 1.15)]),
                bend_angle: 60.0,
                layout_override: None,
            },
            HotelPreset {
                name: "vacation",
                display_name: "Vacation",
                description: "Sweeping curved modern high-rise resort tower",
                style_name: "modern",
                num_buildings: 1,
                building_roles: vec![Main],
                size_hints: hints(&[(Main, 3.33, 0.8, 2.86)]),
                bend_angle: 90.0,
                layout_override: None,
            },
            HotelPreset {
                name: "boomerang",
                display_name: "Boomerang",
                description: "Curved skyscraper complex swept into a boomerang arc",
                style_name: "skyscraper",
                num_buildings: 3,
                building_roles: vec![Tower, Wing, Wing],
                size_hints: hints(&[(Tower, 0.35, 0.35, 2.5), (Wing, 0.8, 0.5, 0.85)]),
                bend_angle: 120.0,
                layout_override: Some("row"),
            },
        ]
    }

    /// Looks up a preset by name.
    pub fn get(&self, name: &str) -> Result<&HotelPreset, GenError> {
        self.presets.get(name).ok_or_else(|| {
            GenError::invalid_params(format!(
                "Unknown preset '{name}'. Available: {}",
                self.names().join(", ")
            ))
        })
    }

    /// Registered preset names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.presets.keys().copied().collect()
    }

    /// Metadata for every preset.
    pub fn list(&self) -> Vec<PresetInfo> {
        self.presets.values().map(|p| p.to_preset_info()).collect()
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_nine_presets() {
        let registry = PresetRegistry::new();
        assert_eq!(registry.names().len(), 9);
    }

    #[test]
    fn test_unknown_preset_lists_names() {
        let registry = PresetRegistry::new();
        let err = registry.get("grand_budapest").unwrap_err();
        assert!(err.to_string().contains("royal"));
    }

    #[test]
    fn test_roles_match_building_counts() {
        let registry = PresetRegistry::new();
        for name in registry.names() {
            let preset = registry.get(name).unwrap();
            assert_eq!(
                preset.building_roles.len(),
                preset.num_buildings as usize,
                "preset {name}"
            );
            assert!((1..=6).contains(&preset.num_buildings), "preset {name}");
        }
    }

    #[test]
    fn test_preset_styles_exist() {
        let registry = PresetRegistry::new();
        let styles = hotelgen_styles::StyleRegistry::new();
        for name in registry.names() {
            let preset = registry.get(name).unwrap();
            assert!(styles.get(preset.style_name).is_ok(), "preset {name}");
        }
    }
}
