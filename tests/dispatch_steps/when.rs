//! When steps for command dispatch BDD scenarios.

use super::world::{DispatchWorld, run_async};
use gamebot::command::{
    adapters::memory::RecordingResponseWriter, domain::CommandContext, ports::CommandDispatcher,
};
use rstest_bdd_macros::when;

#[when(r#"the user sends "{text}""#)]
fn user_sends(world: &mut DispatchWorld, text: String) -> Result<(), eyre::Report> {
    let writer = RecordingResponseWriter::new();
    let context = CommandContext::new()
        .with_channel("C0GAMES")
        .with_user("U0ADMIN");
    let router = world.router()?;
    let outcome = run_async(router.dispatch(&context, &text, &writer));
    world.last_outcome = Some(outcome);
    world.responses = writer.responses();
    Ok(())
}
