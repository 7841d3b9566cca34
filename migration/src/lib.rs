pub use sea_orm_migration::prelude::*;

mod m20261018_000001_agency;
mod m20261018_000002_route;
mod m20261018_000003_stop;
mod m20261018_000004_trip;
mod m20261018_000005_trip_details;
mod m20261018_000006_stop_time;
mod m20261018_000007_situation;
mod m20261018_000008_situation_window;
mod m20261018_000009_situation_affect;
mod m20261018_000010_trip_situation;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_agency::Migration),
            Box::new(m20261018_000002_route::Migration),
            Box::new(m20261018_000003_stop::Migration),
            Box::new(m20261018_000004_trip::Migration),
            Box::new(m20261018_000005_trip_details::Migration),
            Box::new(m20261018_000006_stop_time::Migration),
            Box::new(m20261018_000007_situation::Migration),
            Box::new(m20261018_000008_situation_window::Migration),
            Box::new(m20261018_000009_situation_affect::Migration),
            Box::new(m20261018_000010_trip_situation::Migration),
        ]
    }
}
