use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

/// One connection pool, one migration run. Every data-access operation in
/// `db::*` hangs off this so the unit of work is always an explicit handle,
/// never process-global state.
#[derive(Clone)]
pub struct DbService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DbService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("connecting to database");
        let database_connection = Database::connect(uri).await?;
        info!("running migrations");
        Migrator::up(&database_connection, None).await?;
        info!("database ready");
        Ok(Self {
            database_connection,
        })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.database_connection
    }
}
