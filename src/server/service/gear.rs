//! Public gear catalog browsing.

use dioxus_logger::tracing;

use crate::{
    model::{
        filter::{filter_gear, TypeFilter},
        gear::GearDto,
    },
    server::{
        error::{retry::ErrorRetryStrategy, Error},
        model::catalog::GearCatalogCache,
        remote::GuildApiClient,
    },
};

pub struct GearService<'a> {
    client: &'a GuildApiClient,
    catalog: &'a GearCatalogCache,
}

impl<'a> GearService<'a> {
    /// Creates a new instance of [`GearService`]
    pub fn new(client: &'a GuildApiClient, catalog: &'a GearCatalogCache) -> Self {
        Self { client, catalog }
    }

    /// Returns catalog entries matching `search_text` and `type_filter`, in catalog order.
    ///
    /// The catalog is fetched fresh and stored in the shared cache. When the guild API is
    /// temporarily unavailable the last cached catalog is served instead.
    ///
    /// # Returns
    /// - `Ok(Vec<GearDto>)` - Matching gear, possibly empty
    /// - `Err(Error::RemoteError)` - Remote API failed and no catalog has been cached yet
    pub async fn browse(
        &self,
        search_text: &str,
        type_filter: TypeFilter,
    ) -> Result<Vec<GearDto>, Error> {
        let catalog = match self.client.get_gear_catalog().await {
            Ok(catalog) => {
                self.catalog.store(&catalog);
                catalog
            }
            Err(err) if matches!(err.to_retry_strategy(), ErrorRetryStrategy::Retry) => {
                let Some(cached) = self.catalog.get() else {
                    return Err(err);
                };

                tracing::warn!("Serving cached gear catalog: {}", err);

                cached.as_ref().clone()
            }
            Err(err) => return Err(err),
        };

        Ok(filter_gear(&catalog, search_text, type_filter)
            .into_iter()
            .cloned()
            .collect())
    }
}
