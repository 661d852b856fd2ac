//! Unit tests for the command event channel and observer task.

use std::collections::{BTreeMap, HashSet};

use mockable::DefaultClock;
use rstest::rstest;
use uuid::Uuid;

use crate::command::domain::{CommandEvent, CommandRequest};
use crate::observer::{
    CommandEventObserver, LoggingObserver, command_event_channel, run_observer,
};

#[derive(Debug, Default)]
struct RecordingObserver {
    events: Vec<CommandEvent>,
}

impl CommandEventObserver for RecordingObserver {
    fn observe(&mut self, event: &CommandEvent) {
        self.events.push(event.clone());
    }
}

fn event(game: &str) -> CommandEvent {
    let request = CommandRequest::new(
        "disable game {game}",
        BTreeMap::from([("game".to_owned(), game.to_owned())]),
    );
    CommandEvent::for_request(&request, &DefaultClock)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn observer_receives_each_event_once_in_order() {
    let (publisher, stream) = command_event_channel(8);
    let published: Vec<CommandEvent> = ["ABC", "DEF", "GHI"].into_iter().map(event).collect();
    for item in &published {
        assert!(publisher.publish(item.clone()));
    }
    drop(publisher);

    let observer = run_observer(stream, RecordingObserver::default()).await;

    assert_eq!(observer.events, published);
    let unique: HashSet<Uuid> = observer.events.iter().map(|item| item.id).collect();
    assert_eq!(unique.len(), published.len());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_buffer_drops_newest_without_blocking() {
    let (publisher, stream) = command_event_channel(2);

    let accepted: Vec<bool> = (0..5)
        .map(|index| publisher.publish(event(&format!("G{index}"))))
        .collect();

    assert_eq!(accepted, vec![true, true, false, false, false]);
    assert_eq!(publisher.dropped(), 3);

    drop(publisher);
    let observer = run_observer(stream, RecordingObserver::default()).await;
    let games: Vec<&str> = observer
        .events
        .iter()
        .filter_map(|item| item.parameters.get("game").map(String::as_str))
        .collect();
    assert_eq!(games, vec!["G0", "G1"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn publishing_after_observer_stops_is_not_counted_as_dropped() {
    let (publisher, stream) = command_event_channel(4);
    drop(stream);

    assert!(!publisher.publish(event("ABC")));
    assert_eq!(publisher.dropped(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn observer_task_ends_when_all_publishers_are_dropped() {
    let (publisher, stream) = command_event_channel(4);
    let second = publisher.clone();
    let task = tokio::spawn(run_observer(stream, LoggingObserver::new()));

    assert!(publisher.publish(event("ABC")));
    assert!(second.publish(event("DEF")));
    drop(publisher);
    drop(second);

    let observer = task.await.expect("observer task should finish");
    assert_eq!(observer.observed(), 2);
}

#[rstest]
fn zero_capacity_is_raised_to_one() {
    let (publisher, _stream) = command_event_channel(0);

    assert!(publisher.publish(event("ABC")));
    assert!(!publisher.publish(event("DEF")));
}

#[rstest]
fn events_serialize_for_downstream_consumers() {
    let published = event("ABC");

    let json = serde_json::to_value(&published).expect("event should serialize");

    assert_eq!(json["command"], "disable game {game}");
    assert_eq!(json["parameters"]["game"], "ABC");
    let decoded: CommandEvent = serde_json::from_value(json).expect("event should deserialize");
    assert_eq!(decoded, published);
}
