//! Then steps for command dispatch BDD scenarios.

use std::time::Duration;

use super::world::{DispatchWorld, run_async};
use gamebot::command::{adapters::memory::RecordedResponse, ports::DispatchOutcome};
use rstest_bdd_macros::then;

#[then(r#"the bot replies "{text}""#)]
fn bot_replies(world: &DispatchWorld, text: String) -> Result<(), eyre::Report> {
    let expected = vec![RecordedResponse::Reply(text)];
    if world.responses != expected {
        return Err(eyre::eyre!(
            "expected {expected:?}, found {:?}",
            world.responses
        ));
    }
    Ok(())
}

#[then(r#"the bot reports the error "{message}""#)]
fn bot_reports_error(world: &DispatchWorld, message: String) -> Result<(), eyre::Report> {
    let expected = vec![RecordedResponse::Error(message)];
    if world.responses != expected {
        return Err(eyre::eyre!(
            "expected {expected:?}, found {:?}",
            world.responses
        ));
    }
    Ok(())
}

#[then("the bot stays silent")]
fn bot_stays_silent(world: &DispatchWorld) -> Result<(), eyre::Report> {
    if world.last_outcome != Some(DispatchOutcome::Ignored) {
        return Err(eyre::eyre!(
            "expected the message to be ignored, found {:?}",
            world.last_outcome
        ));
    }
    if !world.responses.is_empty() {
        return Err(eyre::eyre!("expected no replies, found {:?}", world.responses));
    }
    Ok(())
}

#[then(r#"the game "{name}" is disabled"#)]
fn game_is_disabled(world: &DispatchWorld, name: String) -> Result<(), eyre::Report> {
    let disabled = world
        .games
        .is_disabled(&name)
        .map_err(|err| eyre::eyre!("store read failed: {err}"))?;
    if disabled != Some(true) {
        return Err(eyre::eyre!("expected '{name}' to be disabled, found {disabled:?}"));
    }
    Ok(())
}

#[then(r#"the game "{name}" is still enabled"#)]
fn game_is_still_enabled(world: &DispatchWorld, name: String) -> Result<(), eyre::Report> {
    let disabled = world
        .games
        .is_disabled(&name)
        .map_err(|err| eyre::eyre!("store read failed: {err}"))?;
    if disabled != Some(false) {
        return Err(eyre::eyre!("expected '{name}' to be enabled, found {disabled:?}"));
    }
    Ok(())
}

#[then(r#"a command event records the game "{game}""#)]
fn command_event_records_game(world: &mut DispatchWorld, game: String) -> Result<(), eyre::Report> {
    let stream = world
        .events
        .as_mut()
        .ok_or_else(|| eyre::eyre!("no command event stream in scenario world"))?;
    let event = run_async(tokio::time::timeout(Duration::from_secs(1), stream.recv()))
        .map_err(|_| eyre::eyre!("no command event was published"))?
        .ok_or_else(|| eyre::eyre!("command event stream closed"))?;

    if event.command != "disable game {game}" {
        return Err(eyre::eyre!("unexpected command {}", event.command));
    }
    if event.parameters.get("game") != Some(&game) {
        return Err(eyre::eyre!(
            "expected game parameter '{game}', found {:?}",
            event.parameters
        ));
    }
    Ok(())
}

#[then(r#"the reply mentions "{text}""#)]
fn reply_mentions(world: &DispatchWorld, text: String) -> Result<(), eyre::Report> {
    let mentioned = world.responses.iter().any(|response| {
        matches!(response, RecordedResponse::Reply(reply) if reply.contains(&text))
    });
    if !mentioned {
        return Err(eyre::eyre!("no reply mentions '{text}': {:?}", world.responses));
    }
    Ok(())
}
