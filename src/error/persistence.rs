use sea_orm::DbErr;
use thiserror::Error;

use crate::model::region::RegionIdentifier;

#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The region's local store could not be opened or migrated.
    ///
    /// The application cannot serve this region at all. No service is registered for the
    /// region when this occurs, so a later request will attempt construction again.
    #[error("Failed to initialize local store for region {region}: {source}")]
    StoreInit {
        region: RegionIdentifier,
        #[source]
        source: DbErr,
    },
}
