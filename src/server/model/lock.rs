//! Per-player guard serializing loadout mutations.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tokio::sync::OwnedMutexGuard;

use crate::server::error::{loadout::LoadoutError, Error};

/// Hands out one mutation slot per player.
///
/// A second mutation for a player whose guard is held is refused rather than queued. Guards for
/// different players never contend.
#[derive(Clone, Default)]
pub struct LoadoutLocks {
    players: Arc<Mutex<HashMap<i64, Arc<tokio::sync::Mutex<()>>>>>,
}

/// Held for the duration of one mutation; dropping it releases the player.
///
/// The player's entry is removed from the table once no guard or pending claim refers to it.
pub struct LoadoutGuard {
    player_id: i64,
    players: Arc<Mutex<HashMap<i64, Arc<tokio::sync::Mutex<()>>>>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for LoadoutGuard {
    fn drop(&mut self) {
        drop(self.guard.take());

        let Ok(mut players) = self.players.lock() else {
            return;
        };
        if players
            .get(&self.player_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            players.remove(&self.player_id);
        }
    }
}

impl LoadoutLocks {
    /// Claims the mutation slot of `player_id`.
    ///
    /// # Returns
    /// - `Ok(LoadoutGuard)` - No other mutation for this player is in flight
    /// - `Err(Error::LoadoutError(LoadoutError::OperationInProgress))` - Another mutation holds the slot
    pub fn try_acquire(&self, player_id: i64) -> Result<LoadoutGuard, Error> {
        let lock = {
            let mut players = self.players.lock().map_err(|_| {
                Error::InternalError("Loadout lock table was poisoned".to_string())
            })?;

            players.entry(player_id).or_default().clone()
        };

        match lock.try_lock_owned() {
            Ok(guard) => Ok(LoadoutGuard {
                player_id,
                players: self.players.clone(),
                guard: Some(guard),
            }),
            Err(_) => Err(LoadoutError::OperationInProgress(player_id).into()),
        }
    }

    #[cfg(test)]
    fn tracked_players(&self) -> usize {
        self.players.lock().map(|players| players.len()).unwrap_or(0)
    }
}
