//! Region-scoped local stores.
//!
//! A [`PersistenceService`] owns the SQLite cache of exactly one OneBusAway region. API
//! responses are written through [`PersistenceService::process_api_response`], which stores
//! the response's entry or list together with everything in its `references` inside one
//! transaction. Services are handed out by the [`region::RegionPersistenceRegistry`].

pub mod region;

#[cfg(test)]
mod tests;

use std::{path::PathBuf, sync::Arc, time::Duration};

use dioxus_logger::tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{
        agency::AgencyRepository, route::RouteRepository, situation::SituationRepository,
        stop::StopRepository, trip::TripRepository, trip_details::TripDetailsRepository,
    },
    error::{persistence::PersistenceError, Error},
    model::{
        api::{
            AgencyDto, AgencyWithCoverageDto, EntryData, ListData, References, RouteDto,
            SituationDto, StopDto, TripDetailsDto, TripDto,
        },
        region::RegionIdentifier,
    },
};

/// Where region stores live.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatabaseLocation {
    /// Each region store is a private in-memory database, lost when the service is dropped.
    #[default]
    Memory,
    /// Each region store is the file `region_<id>.sqlite` inside this directory.
    Directory(PathBuf),
}

impl DatabaseLocation {
    /// Pool options of the store of `region`
    ///
    /// The pool holds a single connection that is never reaped, every SQLite in-memory
    /// connection opens its own database and closing it discards the store.
    pub(crate) async fn connect_options(
        &self,
        region: RegionIdentifier,
    ) -> Result<ConnectOptions, DbErr> {
        let mut opt = ConnectOptions::new(self.connection_url(region).await?);
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .sqlx_logging(false);

        Ok(opt)
    }

    async fn connection_url(&self, region: RegionIdentifier) -> Result<String, DbErr> {
        match self {
            DatabaseLocation::Memory => Ok("sqlite::memory:".to_string()),
            DatabaseLocation::Directory(dir) => {
                tokio::fs::create_dir_all(dir).await.map_err(|e| {
                    DbErr::Custom(format!(
                        "Failed to create store directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;

                let path = dir.join(format!("region_{}.sqlite", region));

                Ok(format!("sqlite://{}?mode=rwc", path.display()))
            }
        }
    }
}

/// Handle to one region's local store.
///
/// Cloning is cheap and every clone refers to the same store.
#[derive(Clone)]
pub struct PersistenceService {
    inner: Arc<PersistenceServiceRef>,
}

struct PersistenceServiceRef {
    region: RegionIdentifier,
    db: DatabaseConnection,
}

impl PersistenceService {
    /// Open the store of `region` at `location` and bring its schema up to date
    pub async fn open(
        region: RegionIdentifier,
        location: &DatabaseLocation,
    ) -> Result<Self, PersistenceError> {
        let store_init = move |source| PersistenceError::StoreInit { region, source };

        let opt = location.connect_options(region).await.map_err(store_init)?;

        let db = Database::connect(opt).await.map_err(store_init)?;

        Self::from_connection(region, db).await
    }

    /// Wrap an existing connection as the store of `region`, running pending migrations
    pub async fn from_connection(
        region: RegionIdentifier,
        db: DatabaseConnection,
    ) -> Result<Self, PersistenceError> {
        Migrator::up(&db, None)
            .await
            .map_err(|source| PersistenceError::StoreInit { region, source })?;

        tracing::debug!("Opened local store for region {}", region);

        Ok(Self {
            inner: Arc::new(PersistenceServiceRef { region, db }),
        })
    }

    pub fn region_identifier(&self) -> RegionIdentifier {
        self.inner.region
    }

    /// Connection to the region's store, for repository reads
    pub fn db(&self) -> &DatabaseConnection {
        &self.inner.db
    }

    /// Whether both handles refer to the same store instance
    pub fn ptr_eq(&self, other: &PersistenceService) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Persist an API response and all of its references in a single transaction
    ///
    /// Every entity is upserted, so processing the same response twice leaves the store
    /// unchanged apart from `updated_at` timestamps.
    pub async fn process_api_response<P: Persistable>(&self, response: P) -> Result<(), Error> {
        let mut batch = PersistBatch::default();
        response.collect_into(&mut batch);

        let txn = self.inner.db.begin().await?;

        if !batch.agencies.is_empty() {
            AgencyRepository::new(&txn).upsert_many(batch.agencies).await?;
        }
        if !batch.routes.is_empty() {
            RouteRepository::new(&txn).upsert_many(batch.routes).await?;
        }
        if !batch.stops.is_empty() {
            StopRepository::new(&txn).upsert_many(batch.stops).await?;
        }
        if !batch.trips.is_empty() {
            TripRepository::new(&txn).upsert_many(batch.trips).await?;
        }
        if !batch.situations.is_empty() {
            SituationRepository::new(&txn)
                .upsert_many(batch.situations)
                .await?;
        }

        let trip_details_repo = TripDetailsRepository::new(&txn);
        for details in batch.trip_details {
            trip_details_repo.upsert(details).await?;
        }

        txn.commit().await?;

        Ok(())
    }
}

/// Entities gathered from an API response, grouped by table.
#[derive(Debug, Default)]
pub struct PersistBatch {
    pub agencies: Vec<AgencyDto>,
    pub routes: Vec<RouteDto>,
    pub stops: Vec<StopDto>,
    pub trips: Vec<TripDto>,
    pub situations: Vec<SituationDto>,
    pub trip_details: Vec<TripDetailsDto>,
}

/// An API payload that can be written to a region store.
pub trait Persistable {
    fn collect_into(self, batch: &mut PersistBatch);
}

impl Persistable for References {
    fn collect_into(self, batch: &mut PersistBatch) {
        batch.agencies.extend(self.agencies);
        batch.routes.extend(self.routes);
        batch.stops.extend(self.stops);
        batch.trips.extend(self.trips);
        batch.situations.extend(self.situations);
    }
}

impl Persistable for StopDto {
    fn collect_into(self, batch: &mut PersistBatch) {
        batch.stops.push(self);
    }
}

impl Persistable for TripDetailsDto {
    fn collect_into(self, batch: &mut PersistBatch) {
        batch.trip_details.push(self);
    }
}

/// Coverage entries carry no agency data of their own, the agencies themselves arrive in
/// the references.
impl Persistable for AgencyWithCoverageDto {
    fn collect_into(self, _batch: &mut PersistBatch) {}
}

impl<E: Persistable> Persistable for EntryData<E> {
    fn collect_into(self, batch: &mut PersistBatch) {
        self.entry.collect_into(batch);
        self.references.collect_into(batch);
    }
}

impl<E: Persistable> Persistable for ListData<E> {
    fn collect_into(self, batch: &mut PersistBatch) {
        for item in self.list {
            item.collect_into(batch);
        }
        self.references.collect_into(batch);
    }
}
