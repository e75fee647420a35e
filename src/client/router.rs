use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, NotFound, PlayerLoadout},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/players/:player_id/loadout?:token")]
    PlayerLoadout { player_id: i64, token: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
