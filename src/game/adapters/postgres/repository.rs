//! `PostgreSQL` repository implementation for game mutations.

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use super::{ConnectionString, schema::games};
use crate::config::DatabaseSettings;
use crate::game::{
    domain::DisableGameOutcome,
    ports::{GameRepository, GameRepositoryError, GameRepositoryResult},
};

/// `PostgreSQL`-backed game repository.
///
/// Every operation opens its own connection and drops it before returning,
/// whatever the outcome. Connections are never pooled or shared.
#[derive(Debug, Clone)]
pub struct PostgresGameRepository {
    connection: ConnectionString,
}

impl PostgresGameRepository {
    /// Creates a repository connecting with `connection`.
    #[must_use]
    pub const fn new(connection: ConnectionString) -> Self {
        Self { connection }
    }

    /// Creates a repository from resolved database settings.
    #[must_use]
    pub fn from_settings(settings: &DatabaseSettings) -> Self {
        Self::new(ConnectionString::from_settings(settings))
    }

    async fn with_connection<F, T>(&self, f: F) -> GameRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> GameRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let connection_string = self.connection.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = PgConnection::establish(connection_string.as_str())
                .map_err(GameRepositoryError::connection)?;
            f(&mut connection)
        })
        .await
        .map_err(GameRepositoryError::execution)?
    }
}

#[async_trait]
impl GameRepository for PostgresGameRepository {
    async fn disable_game(&self, name: &str) -> GameRepositoryResult<DisableGameOutcome> {
        let game_name = name.to_owned();
        let outcome = self
            .with_connection(move |connection| {
                let updated = diesel::update(games::table.filter(games::name.eq(&game_name)))
                    .set(games::disabled.eq(true))
                    .execute(connection)
                    .map_err(GameRepositoryError::execution)?;
                let rows_affected =
                    u64::try_from(updated).map_err(GameRepositoryError::result_inspection)?;
                Ok(DisableGameOutcome::new(rows_affected))
            })
            .await?;

        tracing::debug!(
            game = name,
            rows_affected = outcome.rows_affected(),
            "disable statement executed"
        );
        Ok(outcome)
    }
}
