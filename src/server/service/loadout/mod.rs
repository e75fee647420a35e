//! Loadout service layer.
//!
//! Reads a player's loadout from the remote guild API and applies equip and unequip requests to
//! it. The remote API is the only source of truth: after every mutation the full loadout is
//! fetched again and the change is confirmed against it. Nothing is ever patched locally.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;

use crate::{
    model::{
        loadout::{check_gear_fits, EquipPlan, EquipRejection, LoadoutState},
        slot::SlotRef,
    },
    server::{
        error::{loadout::LoadoutError, Error},
        model::{catalog::GearCatalogCache, lock::LoadoutLocks},
        remote::GuildApiClient,
        service::access::{Access, AccessGate, Credentials},
    },
};

pub struct LoadoutService<'a> {
    client: &'a GuildApiClient,
    locks: &'a LoadoutLocks,
    catalog: &'a GearCatalogCache,
}

impl<'a> LoadoutService<'a> {
    /// Creates a new instance of [`LoadoutService`]
    pub fn new(
        client: &'a GuildApiClient,
        locks: &'a LoadoutLocks,
        catalog: &'a GearCatalogCache,
    ) -> Self {
        Self {
            client,
            locks,
            catalog,
        }
    }

    /// Authorizes the caller and loads the current loadout of `player_id`.
    ///
    /// # Returns
    /// - `Ok((LoadoutState, Access))` - Loadout and the access the caller holds
    /// - `Err(Error::AuthError)` - Caller may not view the player
    /// - `Err(Error::LoadoutError(LoadoutError::PlayerNotFound))` - Player does not exist
    /// - `Err(Error::LoadoutError(LoadoutError::InconsistentState))` - Remote records break loadout invariants
    /// - `Err(Error::RemoteError)` - Remote API unreachable after retries
    pub async fn load_player_loadout(
        &self,
        player_id: i64,
        credentials: &Credentials,
    ) -> Result<(LoadoutState, Access), Error> {
        let access = AccessGate::new(self.client)
            .authorize(player_id, credentials)
            .await?;

        let state = self.fetch_state(player_id).await?;

        Ok((state, access))
    }

    /// Places `gear_id` into `target`, moving it out of its current slot if needed.
    ///
    /// Gear that does not fit the target slot is rejected before anything is sent to the remote
    /// API. If a move's unequip succeeds but its equip fails, the gear is put back into its
    /// previous slot before the error is returned.
    ///
    /// # Returns
    /// - `Ok((LoadoutState, Access))` - Refetched loadout with the gear in `target`
    /// - `Err(Error::LoadoutError(LoadoutError::IncompatibleSlot))` - Slot does not accept the gear type
    /// - `Err(Error::LoadoutError(LoadoutError::GearNotFound))` - Gear is not in the catalog
    /// - `Err(Error::LoadoutError(LoadoutError::OperationInProgress))` - Another change for the player is in flight
    /// - `Err(Error::LoadoutError(LoadoutError::MutationNotApplied))` - Refetched loadout does not show the change
    /// - `Err(Error::AuthError)` - Caller may not edit the player
    /// - `Err(Error::RemoteError)` - Remote API failed or refused the change
    pub async fn equip(
        &self,
        player_id: i64,
        gear_id: i64,
        target: SlotRef,
        credentials: &Credentials,
    ) -> Result<(LoadoutState, Access), Error> {
        self.reject_incompatible(gear_id, target)?;

        let access = AccessGate::new(self.client)
            .authorize(player_id, credentials)
            .await?;
        AccessGate::require_edit(&access)?;

        let _guard = self.locks.try_acquire(player_id)?;

        let state = self.fetch_state(player_id).await?;
        let plan = state
            .plan_equip(gear_id, target)
            .map_err(LoadoutError::from)?;

        match plan {
            EquipPlan::AlreadyInPlace => {
                tracing::debug!(player_id, gear_id, "Gear already in {}", target);

                return Ok((state, access));
            }
            EquipPlan::Place => {
                self.client.equip_gear(player_id, gear_id, target).await?;
            }
            EquipPlan::Move { from } => {
                self.client.unequip_gear(player_id, gear_id).await?;

                if let Err(err) = self.client.equip_gear(player_id, gear_id, target).await {
                    self.restore(player_id, gear_id, from).await;

                    return Err(err);
                }
            }
        }

        let state = self.fetch_state(player_id).await?;
        let found = state.slot_of(gear_id);
        if found != Some(target) {
            return Err(LoadoutError::MutationNotApplied {
                player_id,
                gear_id,
                expected: Some(target),
                found,
            }
            .into());
        }

        tracing::info!(player_id, gear_id, "Equipped gear into {}", target);

        Ok((state, access))
    }

    /// Removes `gear_id` from whatever slot holds it.
    ///
    /// Unequipping gear that is not equipped succeeds without contacting the remote API.
    ///
    /// # Returns
    /// - `Ok((LoadoutState, Access))` - Loadout with the gear unequipped
    /// - `Err(Error::LoadoutError(LoadoutError::GearNotFound))` - Gear is not in the catalog
    /// - `Err(Error::LoadoutError(LoadoutError::OperationInProgress))` - Another change for the player is in flight
    /// - `Err(Error::LoadoutError(LoadoutError::MutationNotApplied))` - Refetched loadout still holds the gear
    /// - `Err(Error::AuthError)` - Caller may not edit the player
    /// - `Err(Error::RemoteError)` - Remote API failed or refused the change
    pub async fn unequip(
        &self,
        player_id: i64,
        gear_id: i64,
        credentials: &Credentials,
    ) -> Result<(LoadoutState, Access), Error> {
        let access = AccessGate::new(self.client)
            .authorize(player_id, credentials)
            .await?;
        AccessGate::require_edit(&access)?;

        let _guard = self.locks.try_acquire(player_id)?;

        let state = self.fetch_state(player_id).await?;
        if state.gear(gear_id).is_none() {
            return Err(LoadoutError::GearNotFound(gear_id).into());
        }

        let Some(from) = state.slot_of(gear_id) else {
            tracing::debug!(player_id, gear_id, "Gear already unequipped");

            return Ok((state, access));
        };

        self.client.unequip_gear(player_id, gear_id).await?;

        let state = self.fetch_state(player_id).await?;
        if let Some(found) = state.slot_of(gear_id) {
            return Err(LoadoutError::MutationNotApplied {
                player_id,
                gear_id,
                expected: None,
                found: Some(found),
            }
            .into());
        }

        tracing::info!(player_id, gear_id, "Unequipped gear from {}", from);

        Ok((state, access))
    }

    /// Fetches player, drifters, catalog, and equipped gear, in that order, and builds the loadout.
    async fn fetch_state(&self, player_id: i64) -> Result<LoadoutState, Error> {
        let Some(player) = self.client.get_player(player_id).await? else {
            return Err(LoadoutError::PlayerNotFound(player_id).into());
        };
        let drifters = self.client.get_player_drifters(player_id).await?;
        let catalog = self.client.get_gear_catalog().await?;
        self.catalog.store(&catalog);
        let equipped = self.client.get_equipped_gear(player_id).await?;

        let state = LoadoutState::from_parts(player, drifters, catalog, equipped)
            .map_err(LoadoutError::from)?;

        Ok(state)
    }

    /// Refuses gear the last known catalog marks as incompatible with the target slot.
    ///
    /// Gear missing from the cached catalog is left for the fresh fetch to decide.
    fn reject_incompatible(&self, gear_id: i64, target: SlotRef) -> Result<(), Error> {
        let Some(catalog) = self.catalog.get() else {
            return Ok(());
        };

        match check_gear_fits(&catalog, gear_id, target.slot) {
            Err(rejection @ EquipRejection::IncompatibleSlot { .. }) => {
                Err(LoadoutError::from(rejection).into())
            }
            _ => Ok(()),
        }
    }

    /// Best-effort return of moved gear to the slot it left.
    async fn restore(&self, player_id: i64, gear_id: i64, from: SlotRef) {
        match self.client.equip_gear(player_id, gear_id, from).await {
            Ok(()) => tracing::warn!(
                player_id,
                gear_id,
                "Move failed, gear returned to {}",
                from
            ),
            Err(err) => tracing::error!(
                player_id,
                gear_id,
                "Move failed and gear could not be returned to {}: {}",
                from,
                err
            ),
        }
    }
}
