//! Last gear catalog seen from the remote guild API.

use std::sync::{Arc, RwLock};

use crate::model::gear::GearDto;

/// Shared copy of the most recently fetched gear catalog.
///
/// Refreshed by every full loadout fetch. Equip requests consult it to reject unknown or
/// incompatible gear before contacting the remote API; the fresh catalog fetched for the
/// mutation itself is still checked afterwards.
#[derive(Clone, Default)]
pub struct GearCatalogCache {
    catalog: Arc<RwLock<Option<Arc<Vec<GearDto>>>>>,
}

impl GearCatalogCache {
    pub fn get(&self) -> Option<Arc<Vec<GearDto>>> {
        self.catalog.read().ok().and_then(|catalog| catalog.clone())
    }

    pub fn store(&self, catalog: &[GearDto]) {
        if let Ok(mut cached) = self.catalog.write() {
            *cached = Some(Arc::new(catalog.to_vec()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GearCatalogCache;
    use crate::model::gear::{GearDto, GearType, Rarity};

    #[test]
    /// Expect the last stored catalog to be returned and shared between clones
    fn stores_latest_catalog() {
        let cache = GearCatalogCache::default();
        let shared = cache.clone();
        assert!(cache.get().is_none());

        let gear = GearDto {
            id: 101,
            name: "Stormpiercer Crossbow".to_string(),
            gear_type: GearType::Weapon,
            rarity: Rarity::Epic,
            skill: None,
            damage_pct: None,
            defense: None,
            health_bonus: None,
        };
        cache.store(&[gear.clone()]);

        assert_eq!(shared.get().as_deref(), Some(&vec![gear]));
    }
}
