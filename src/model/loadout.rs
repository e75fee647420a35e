//! Loadout state for a single player.
//!
//! [`LoadoutState`] maps every `(drifter, slot)` pair to the gear it holds and keeps a reverse
//! index from gear id to slot. Both structures are only ever built together from one
//! authoritative fetch in [`LoadoutState::from_parts`]; there is no API to patch one without the
//! other. Server data that breaks the loadout invariants is rejected instead of being repaired.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    gear::{GearDto, GearType},
    player::{DrifterDto, DrifterStats, PlayerDto, DRIFTER_COUNT},
    slot::{is_compatible, SlotKey, SlotRef},
};

/// One equipped-gear record as reported by the remote API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EquippedGearDto {
    #[serde(alias = "drifter_num")]
    pub drifter: u8,
    pub slot: SlotKey,
    pub gear_id: i64,
}

/// Server data that cannot form a valid loadout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadoutStateError {
    #[error("Drifter ordinal {0} is outside 1..={max}", max = DRIFTER_COUNT)]
    DrifterOutOfRange(u8),
    #[error("Drifter ordinal {0} is reported more than once")]
    DuplicateDrifter(u8),
    #[error("Drifter {0} is unassigned but has gear equipped")]
    UnassignedDrifter(u8),
    #[error("Gear ID {gear_id} is equipped in both {first} and {second}")]
    DuplicateEquip {
        gear_id: i64,
        first: SlotRef,
        second: SlotRef,
    },
    #[error("Slot {slot} holds both gear ID {existing} and gear ID {incoming}")]
    SlotConflict {
        slot: SlotRef,
        existing: i64,
        incoming: i64,
    },
    #[error("Gear ID {gear_id} equipped in {slot} is not in the gear catalog")]
    UnknownGear { gear_id: i64, slot: SlotRef },
    #[error("Gear ID {gear_id} of type {gear_type} cannot be equipped in {slot}")]
    IncompatibleGear {
        gear_id: i64,
        gear_type: GearType,
        slot: SlotRef,
    },
}

/// Reasons an equip request is refused before anything is sent to the remote API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquipRejection {
    #[error("Gear ID {0} is not in the gear catalog")]
    GearNotFound(i64),
    #[error("Drifter {0} does not exist")]
    DrifterNotFound(u8),
    #[error("Drifter {0} is unassigned and has no equipment slots")]
    DrifterUnassigned(u8),
    #[error("Gear of type {gear_type} cannot be equipped in the {slot} slot")]
    IncompatibleSlot { slot: SlotKey, gear_type: GearType },
}

/// Looks `gear_id` up in `catalog` and checks it fits `slot`.
///
/// Needs nothing but the catalog, so callers can reject a request before any other work.
pub fn check_gear_fits(
    catalog: &[GearDto],
    gear_id: i64,
    slot: SlotKey,
) -> Result<&GearDto, EquipRejection> {
    let gear = catalog
        .iter()
        .find(|g| g.id == gear_id)
        .ok_or(EquipRejection::GearNotFound(gear_id))?;
    check_fit(gear, slot)?;

    Ok(gear)
}

fn check_fit(gear: &GearDto, slot: SlotKey) -> Result<(), EquipRejection> {
    if !is_compatible(slot, gear.gear_type) {
        return Err(EquipRejection::IncompatibleSlot {
            slot,
            gear_type: gear.gear_type,
        });
    }

    Ok(())
}

/// What has to happen remotely for an equip request to take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipPlan {
    /// The gear already sits in the requested slot.
    AlreadyInPlace,
    /// The gear is currently unequipped.
    Place,
    /// The gear has to leave `from` first.
    Move { from: SlotRef },
}

#[derive(Clone, Debug)]
pub struct LoadoutState {
    player: PlayerDto,
    drifters: Vec<DrifterDto>,
    catalog: Vec<GearDto>,
    catalog_index: HashMap<i64, usize>,
    slots: BTreeMap<SlotRef, i64>,
    holders: HashMap<i64, SlotRef>,
}

impl LoadoutState {
    /// Builds the slot map and reverse index from one set of fetched records.
    ///
    /// Drifter positions missing from `drifters` are filled with unassigned drifters so the
    /// result always has exactly [`DRIFTER_COUNT`] drifters in ordinal order.
    ///
    /// # Returns
    /// - `Ok(LoadoutState)` - Records satisfy every loadout invariant
    /// - `Err(LoadoutStateError)` - Records describe an impossible loadout (duplicate equips,
    ///   unknown gear, incompatible slots, unknown or unassigned drifter positions)
    pub fn from_parts(
        player: PlayerDto,
        drifters: Vec<DrifterDto>,
        catalog: Vec<GearDto>,
        equipped: Vec<EquippedGearDto>,
    ) -> Result<Self, LoadoutStateError> {
        let mut by_ordinal: BTreeMap<u8, DrifterDto> = BTreeMap::new();
        for drifter in drifters {
            if drifter.ordinal == 0 || drifter.ordinal > DRIFTER_COUNT {
                return Err(LoadoutStateError::DrifterOutOfRange(drifter.ordinal));
            }
            let ordinal = drifter.ordinal;
            if by_ordinal.insert(ordinal, drifter).is_some() {
                return Err(LoadoutStateError::DuplicateDrifter(ordinal));
            }
        }
        let drifters: Vec<DrifterDto> = (1..=DRIFTER_COUNT)
            .map(|ordinal| {
                by_ordinal
                    .remove(&ordinal)
                    .unwrap_or_else(|| DrifterDto::unassigned(ordinal))
            })
            .collect();

        let catalog_index: HashMap<i64, usize> = catalog
            .iter()
            .enumerate()
            .map(|(idx, gear)| (gear.id, idx))
            .collect();

        let mut slots = BTreeMap::new();
        let mut holders = HashMap::new();

        for entry in equipped {
            let slot = SlotRef {
                drifter: entry.drifter,
                slot: entry.slot,
            };

            if entry.drifter == 0 || entry.drifter > DRIFTER_COUNT {
                return Err(LoadoutStateError::DrifterOutOfRange(entry.drifter));
            }
            if !drifters[usize::from(entry.drifter) - 1].is_assigned() {
                return Err(LoadoutStateError::UnassignedDrifter(entry.drifter));
            }

            let Some(gear) = catalog_index.get(&entry.gear_id).map(|idx| &catalog[*idx]) else {
                return Err(LoadoutStateError::UnknownGear {
                    gear_id: entry.gear_id,
                    slot,
                });
            };

            if !is_compatible(slot.slot, gear.gear_type) {
                return Err(LoadoutStateError::IncompatibleGear {
                    gear_id: gear.id,
                    gear_type: gear.gear_type,
                    slot,
                });
            }

            if let Some(existing) = slots.get(&slot) {
                if *existing != entry.gear_id {
                    return Err(LoadoutStateError::SlotConflict {
                        slot,
                        existing: *existing,
                        incoming: entry.gear_id,
                    });
                }
                // The same record reported twice is harmless.
                continue;
            }

            if let Some(first) = holders.get(&entry.gear_id) {
                return Err(LoadoutStateError::DuplicateEquip {
                    gear_id: entry.gear_id,
                    first: *first,
                    second: slot,
                });
            }

            slots.insert(slot, entry.gear_id);
            holders.insert(entry.gear_id, slot);
        }

        Ok(Self {
            player,
            drifters,
            catalog,
            catalog_index,
            slots,
            holders,
        })
    }

    pub fn player(&self) -> &PlayerDto {
        &self.player
    }

    pub fn drifters(&self) -> &[DrifterDto] {
        &self.drifters
    }

    pub fn drifter(&self, ordinal: u8) -> Option<&DrifterDto> {
        self.drifters.iter().find(|d| d.ordinal == ordinal)
    }

    pub fn catalog(&self) -> &[GearDto] {
        &self.catalog
    }

    pub fn gear(&self, gear_id: i64) -> Option<&GearDto> {
        self.catalog_index.get(&gear_id).map(|idx| &self.catalog[*idx])
    }

    /// Gear currently held by `slot`, if any.
    pub fn gear_in(&self, slot: SlotRef) -> Option<&GearDto> {
        self.slots.get(&slot).and_then(|id| self.gear(*id))
    }

    /// Slot currently holding `gear_id`, `None` when the gear is unequipped.
    pub fn slot_of(&self, gear_id: i64) -> Option<SlotRef> {
        self.holders.get(&gear_id).copied()
    }

    /// Every occupied slot in `(drifter, slot)` order.
    pub fn equipped(&self) -> impl Iterator<Item = (SlotRef, &GearDto)> + '_ {
        self.slots
            .iter()
            .filter_map(|(slot, id)| self.gear(*id).map(|gear| (*slot, gear)))
    }

    /// Catalog entries not equipped anywhere, in catalog order.
    pub fn available_gear(&self) -> Vec<&GearDto> {
        self.catalog
            .iter()
            .filter(|gear| !self.holders.contains_key(&gear.id))
            .collect()
    }

    /// Decides what an equip of `gear_id` into `target` requires.
    ///
    /// # Returns
    /// - `Ok(EquipPlan)` - Request is valid against this state
    /// - `Err(EquipRejection)` - Drifter or gear does not exist, drifter is unassigned, or the
    ///   slot does not accept the gear's type
    pub fn plan_equip(&self, gear_id: i64, target: SlotRef) -> Result<EquipPlan, EquipRejection> {
        let drifter = self
            .drifter(target.drifter)
            .ok_or(EquipRejection::DrifterNotFound(target.drifter))?;
        if !drifter.is_assigned() {
            return Err(EquipRejection::DrifterUnassigned(target.drifter));
        }

        let gear = self
            .gear(gear_id)
            .ok_or(EquipRejection::GearNotFound(gear_id))?;
        check_fit(gear, target.slot)?;

        Ok(match self.slot_of(gear_id) {
            Some(current) if current == target => EquipPlan::AlreadyInPlace,
            Some(current) => EquipPlan::Move { from: current },
            None => EquipPlan::Place,
        })
    }

    /// Base stats of a drifter plus the bonuses of everything it has equipped.
    pub fn stat_totals(&self, ordinal: u8) -> Option<StatTotals> {
        let drifter = self.drifter(ordinal)?;
        let base = drifter.stats();
        let mut totals = StatTotals {
            health: base.health,
            energy: base.energy,
            damage: base.damage,
            damage_pct: 0.0,
            defense: base.defense,
        };

        for (_, gear) in self.equipped().filter(|(slot, _)| slot.drifter == ordinal) {
            totals.health = totals.health.saturating_add(gear.health_bonus.unwrap_or(0));
            totals.defense = totals.defense.saturating_add(gear.defense.unwrap_or(0));
            totals.damage_pct += gear.damage_pct.unwrap_or(0.0);
        }

        Some(totals)
    }

    /// Renders the state for the dashboard client.
    pub fn to_dto(&self, can_edit: bool) -> LoadoutDto {
        let drifters = self
            .drifters
            .iter()
            .map(|drifter| {
                let slots = drifter
                    .interactive_slots()
                    .into_iter()
                    .map(|descriptor| SlotDto {
                        key: descriptor.key,
                        accepted_type: descriptor.accepted_type,
                        is_mod: descriptor.is_mod,
                        gear: self
                            .gear_in(SlotRef {
                                drifter: drifter.ordinal,
                                slot: descriptor.key,
                            })
                            .cloned(),
                    })
                    .collect();

                DrifterLoadoutDto {
                    ordinal: drifter.ordinal,
                    name: drifter.display_name().to_string(),
                    assigned: drifter.is_assigned(),
                    stats: drifter.stats(),
                    totals: self.stat_totals(drifter.ordinal).unwrap_or_default(),
                    slots,
                }
            })
            .collect();

        LoadoutDto {
            player: self.player.clone(),
            drifters,
            available: self.available_gear().into_iter().cloned().collect(),
            can_edit,
        }
    }
}

/// Display-only aggregate of base stats and gear bonuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StatTotals {
    pub health: i32,
    pub energy: i32,
    pub damage: i32,
    pub damage_pct: f64,
    pub defense: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SlotDto {
    pub key: SlotKey,
    pub accepted_type: GearType,
    pub is_mod: bool,
    pub gear: Option<GearDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DrifterLoadoutDto {
    pub ordinal: u8,
    pub name: String,
    pub assigned: bool,
    pub stats: DrifterStats,
    pub totals: StatTotals,
    /// Empty for unassigned drifters.
    pub slots: Vec<SlotDto>,
}

/// Loadout of every drifter of a player as returned by the dashboard API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoadoutDto {
    pub player: PlayerDto,
    pub drifters: Vec<DrifterLoadoutDto>,
    /// Catalog entries not equipped on any drifter.
    pub available: Vec<GearDto>,
    /// Whether the viewer may equip and unequip gear.
    pub can_edit: bool,
}

impl LoadoutDto {
    /// Catalog entry for `gear_id`, whether equipped or available.
    pub fn gear(&self, gear_id: i64) -> Option<&GearDto> {
        self.available.iter().find(|g| g.id == gear_id).or_else(|| {
            self.drifters
                .iter()
                .flat_map(|drifter| drifter.slots.iter())
                .filter_map(|slot| slot.gear.as_ref())
                .find(|g| g.id == gear_id)
        })
    }

    /// Local pre-check of an equip request, run before anything is sent.
    pub fn check_equip(&self, gear_id: i64, target: SlotRef) -> Result<(), EquipRejection> {
        let drifter = self
            .drifters
            .iter()
            .find(|d| d.ordinal == target.drifter)
            .ok_or(EquipRejection::DrifterNotFound(target.drifter))?;
        if !drifter.assigned {
            return Err(EquipRejection::DrifterUnassigned(target.drifter));
        }

        let gear = self
            .gear(gear_id)
            .ok_or(EquipRejection::GearNotFound(gear_id))?;
        check_fit(gear, target.slot)
    }

    pub fn slot_of(&self, gear_id: i64) -> Option<SlotRef> {
        self.drifters.iter().find_map(|drifter| {
            drifter
                .slots
                .iter()
                .find(|slot| slot.gear.as_ref().is_some_and(|g| g.id == gear_id))
                .map(|slot| SlotRef {
                    drifter: drifter.ordinal,
                    slot: slot.key,
                })
        })
    }
}
