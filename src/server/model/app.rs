use crate::server::{
    model::{catalog::GearCatalogCache, lock::LoadoutLocks},
    remote::GuildApiClient,
};

#[derive(Clone)]
pub struct AppState {
    pub guild_client: GuildApiClient,
    pub locks: LoadoutLocks,
    pub catalog: GearCatalogCache,
}

impl From<GuildApiClient> for AppState {
    fn from(guild_client: GuildApiClient) -> Self {
        Self {
            guild_client,
            locks: LoadoutLocks::default(),
            catalog: GearCatalogCache::default(),
        }
    }
}
