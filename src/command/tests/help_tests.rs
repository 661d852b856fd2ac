//! Unit tests for the built-in help listing.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;

use crate::command::{
    adapters::memory::{RecordedResponse, RecordingResponseWriter},
    domain::CommandContext,
    ports::{CommandDefinition, CommandDispatcher},
    services::{CommandRouter, CommandSummary, HELP_PATTERN, HelpHandler},
};
use crate::observer::command_event_channel;

fn summary(pattern: &str, description: Option<&str>, examples: &[&str]) -> CommandSummary {
    CommandSummary {
        pattern: pattern.to_owned(),
        description: description.map(ToOwned::to_owned),
        examples: examples.iter().map(|example| (*example).to_owned()).collect(),
    }
}

#[rstest]
fn listing_includes_descriptions_and_examples() {
    let handler = HelpHandler::new([
        summary("ping", None, &[]),
        summary(
            "disable game {game}",
            Some("Disable the game given!"),
            &["disable game ABC"],
        ),
    ])
    .expect("help should render");

    assert_eq!(
        handler.listing(),
        concat!(
            "*ping*\n",
            "*disable game {game}* - _Disable the game given!_\n",
            "> _Example:_ `disable game ABC`\n",
            "*help* - _List the commands this bot understands_",
        )
    );
}

#[rstest]
fn listing_mentions_help_only_once() {
    let handler = HelpHandler::new([HelpHandler::summary(), summary("ping", None, &[])])
        .expect("help should render");

    assert_eq!(handler.listing().matches("*help*").count(), 1);
    assert!(handler.listing().starts_with("*ping*"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn help_command_replies_with_listing() {
    let (publisher, _stream) = command_event_channel(4);
    let mut router = CommandRouter::new(publisher, Arc::new(DefaultClock));
    let help = HelpHandler::new(router.summaries()).expect("help should render");
    let listing = help.listing().to_owned();
    router
        .register(
            HELP_PATTERN,
            CommandDefinition::new(Arc::new(help)).with_description(HelpHandler::description()),
        )
        .expect("help should register");

    let writer = RecordingResponseWriter::new();
    router.dispatch(&CommandContext::new(), "help", &writer).await;

    assert_eq!(writer.responses(), vec![RecordedResponse::Reply(listing)]);
}
