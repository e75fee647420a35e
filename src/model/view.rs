//! Client-side bookkeeping for a mounted loadout view.
//!
//! The dashboard allows one logical operation at a time per view. [`LoadoutView`] hands out a
//! [`Ticket`] when an operation starts and only accepts its result if the ticket is still the
//! current one, the player context has not changed, and the view has not been torn down.

use thiserror::Error;

use crate::model::loadout::LoadoutDto;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Another loadout change is still in progress")]
pub struct ViewBusy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    player_id: i64,
    generation: u64,
    mutation: bool,
}

/// Result of handing an operation outcome back to the view.
#[derive(Debug, PartialEq)]
pub enum ViewUpdate<E> {
    /// The new loadout replaced the previous one.
    Applied,
    /// The operation failed; the previous loadout is still shown.
    Failed(E),
    /// The result belongs to a superseded operation, another player, or a closed view.
    ///
    /// Failures of a mutation for the current player are never discarded.
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadoutView {
    player_id: i64,
    generation: u64,
    mutation_in_flight: bool,
    closed: bool,
    loadout: Option<LoadoutDto>,
}

impl LoadoutView {
    pub fn new(player_id: i64) -> Self {
        Self {
            player_id,
            generation: 0,
            mutation_in_flight: false,
            closed: false,
            loadout: None,
        }
    }

    pub fn player_id(&self) -> i64 {
        self.player_id
    }

    pub fn loadout(&self) -> Option<&LoadoutDto> {
        self.loadout.as_ref()
    }

    /// Whether equip/unequip triggers should be disabled.
    pub fn is_busy(&self) -> bool {
        self.mutation_in_flight
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Starts a (re)load; any earlier unresolved operation is superseded.
    ///
    /// A superseded mutation still keeps the view busy until its own result arrives.
    pub fn begin_load(&mut self) -> Ticket {
        self.generation += 1;
        self.ticket(false)
    }

    /// Starts an equip or unequip.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - No other mutation is unresolved
    /// - `Err(ViewBusy)` - A mutation is already in flight or the view is closed
    pub fn begin_mutation(&mut self) -> Result<Ticket, ViewBusy> {
        if self.mutation_in_flight || self.closed {
            return Err(ViewBusy);
        }

        self.generation += 1;
        self.mutation_in_flight = true;
        Ok(self.ticket(true))
    }

    /// Applies the outcome of the operation identified by `ticket`.
    pub fn finish<E>(&mut self, ticket: Ticket, result: Result<LoadoutDto, E>) -> ViewUpdate<E> {
        if ticket.mutation && ticket.player_id == self.player_id {
            self.mutation_in_flight = false;
        }

        if self.closed || ticket.player_id != self.player_id {
            return ViewUpdate::Discarded;
        }

        if ticket.generation != self.generation {
            // A superseded mutation still reports its failure.
            return match result {
                Err(err) if ticket.mutation => ViewUpdate::Failed(err),
                _ => ViewUpdate::Discarded,
            };
        }

        match result {
            Ok(loadout) if loadout.player.id == self.player_id => {
                self.loadout = Some(loadout);
                ViewUpdate::Applied
            }
            Ok(_) => ViewUpdate::Discarded,
            Err(err) => ViewUpdate::Failed(err),
        }
    }

    /// Points the view at another player, dropping the current loadout.
    pub fn switch_player(&mut self, player_id: i64) {
        self.player_id = player_id;
        self.generation += 1;
        self.mutation_in_flight = false;
        self.loadout = None;
    }

    /// Tears the view down; later results are discarded.
    pub fn close(&mut self) {
        self.closed = true;
        self.mutation_in_flight = false;
        self.loadout = None;
    }

    fn ticket(&self, mutation: bool) -> Ticket {
        Ticket {
            player_id: self.player_id,
            generation: self.generation,
            mutation,
        }
    }
}
