//! Shared world state for command dispatch BDD scenarios.

use async_trait::async_trait;
use std::sync::Arc;

use gamebot::app::build_router;
use gamebot::command::{
    adapters::memory::RecordedResponse, ports::DispatchOutcome, services::CommandRouter,
};
use gamebot::game::{
    adapters::memory::InMemoryGameRepository,
    domain::DisableGameOutcome,
    ports::{GameRepository, GameRepositoryError, GameRepositoryResult},
    services::MissingGamePolicy,
};
use gamebot::observer::{CommandEventStream, command_event_channel};
use mockable::DefaultClock;
use rstest::fixture;

/// Router type used by the BDD world.
pub type TestRouter = CommandRouter<DefaultClock>;

/// Repository whose connection always fails.
#[derive(Debug, Default)]
pub struct UnreachableGameRepository;

#[async_trait]
impl GameRepository for UnreachableGameRepository {
    async fn disable_game(&self, _name: &str) -> GameRepositoryResult<DisableGameOutcome> {
        Err(GameRepositoryError::connection(std::io::Error::other(
            "connection refused",
        )))
    }
}

/// Scenario world for command dispatch behaviour tests.
#[derive(Default)]
pub struct DispatchWorld {
    pub games: InMemoryGameRepository,
    pub store_unreachable: bool,
    pub policy: MissingGamePolicy,
    pub router: Option<TestRouter>,
    pub events: Option<CommandEventStream>,
    pub last_outcome: Option<DispatchOutcome>,
    pub responses: Vec<RecordedResponse>,
}

impl DispatchWorld {
    /// Returns the router, building it on first use from the scenario setup.
    pub fn router(&mut self) -> Result<&TestRouter, eyre::Report> {
        if self.router.is_none() {
            let (publisher, stream) = command_event_channel(16);
            let clock = Arc::new(DefaultClock);
            let router = if self.store_unreachable {
                build_router(
                    Arc::new(UnreachableGameRepository),
                    self.policy,
                    publisher,
                    clock,
                )
            } else {
                build_router(Arc::new(self.games.clone()), self.policy, publisher, clock)
            }
            .map_err(|err| eyre::eyre!("router failed to build: {err}"))?;
            self.router = Some(router);
            self.events = Some(stream);
        }
        self.router
            .as_ref()
            .ok_or_else(|| eyre::eyre!("router missing from scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
