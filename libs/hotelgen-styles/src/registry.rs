//! # Style Registry
//!
//! Explicit, explicitly-initialized read-only style table. The registry is
//! built once by [`StyleRegistry::new`] during process startup and never
//! mutated afterwards; there is no registration side effect to order-depend
//! on, and concurrent reads need no locking.

use std::collections::BTreeMap;

use hotelgen_core::{GenError, StyleInfo};

use crate::art_deco::ArtDecoStyle;
use crate::classical::ClassicalStyle;
use crate::mediterranean::MediterraneanStyle;
use crate::modern::ModernStyle;
use crate::skyscraper::SkyscraperStyle;
use crate::style::HotelStyle;
use crate::townhouse::TownhouseStyle;
use crate::tropical::TropicalStyle;
use crate::victorian::VictorianStyle;

type BoxedStyle = Box<dyn HotelStyle + Send + Sync>;

/// Read-only map from style name to style implementation.
pub struct StyleRegistry {
    styles: BTreeMap<&'static str, BoxedStyle>,
}

impl StyleRegistry {
    /// Builds the registry with all eight styles.
    pub fn new() -> Self {
        let mut styles: BTreeMap<&'static str, BoxedStyle> = BTreeMap::new();
        for style in [
            Box::new(ModernStyle) as BoxedStyle,
            Box::new(ArtDecoStyle),
            Box::new(ClassicalStyle),
            Box::new(VictorianStyle),
            Box::new(MediterraneanStyle),
            Box::new(TropicalStyle),
            Box::new(SkyscraperStyle),
            Box::new(TownhouseStyle),
        ] {
            styles.insert(style.name(), style);
        }
        Self { styles }
    }

    /// Looks up a style by name.
    ///
    /// Unknown names fail with `InvalidParams` listing the valid styles.
    pub fn get(&self, name: &str) -> Result<&(dyn HotelStyle + Send + Sync), GenError> {
        self.styles.get(name).map(|s| s.as_ref()).ok_or_else(|| {
            GenError::invalid_params(format!(
                "Unknown style '{name}'. Available: {}",
                self.names().join(", ")
            ))
        })
    }

    /// Registered style names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.styles.keys().copied().collect()
    }

    /// Metadata for every registered style.
    pub fn styles(&self) -> Vec<StyleInfo> {
        self.styles
            .values()
            .map(|s| StyleInfo {
                name: s.name().to_string(),
                display_name: s.display_name().to_string(),
                description: s.description().to_string(),
                params_schema: s.style_params_schema(),
            })
            .collect()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_all_eight_styles() {
        let registry = StyleRegistry::new();
        let names = registry.names();
        assert_eq!(names.len(), 8);
        for expected in [
            "art_deco",
            "classical",
            "mediterranean",
            "modern",
            "skyscraper",
            "townhouse",
            "tropical",
            "victorian",
        ] {
            assert!(names.contains(&expected), "missing style {expected}");
        }
    }

    #[test]
    fn test_registry_unknown_style_lists_valid_names() {
        let registry = StyleRegistry::new();
        let err = registry.get("brutalist").err().unwrap();
        let message = err.to_string();
        assert!(message.contains("brutalist"));
        assert!(message.contains("modern"));
    }

    #[test]
    fn test_registry_styles_metadata() {
        let registry = StyleRegistry::new();
        let infos = registry.styles();
        assert_eq!(infos.len(), 8);
        assert!(infos.iter().all(|i| !i.display_name.is_empty()));
    }
}
