//! Given steps for command dispatch BDD scenarios.

use super::world::DispatchWorld;
use gamebot::game::{adapters::memory::InMemoryGameRepository, services::MissingGamePolicy};
use rstest_bdd_macros::given;

#[given("a bot with no games")]
fn bot_without_games(world: &mut DispatchWorld) {
    world.games = InMemoryGameRepository::new();
}

#[given(r#"a bot managing the games "{names}""#)]
fn bot_with_games(world: &mut DispatchWorld, names: String) {
    world.games = InMemoryGameRepository::with_games(
        names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty()),
    );
}

#[given("a bot whose games store is unreachable")]
fn bot_with_unreachable_store(world: &mut DispatchWorld) {
    world.store_unreachable = true;
}

#[given("missing games are reported as success")]
fn missing_games_reported_as_success(world: &mut DispatchWorld) {
    world.policy = MissingGamePolicy::ReportSuccess;
}
