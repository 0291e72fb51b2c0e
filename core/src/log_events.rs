use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

use crate::{absent, map, present};

/// Records the level and target of every event.
#[derive(Clone, Default)]
struct RecordEvents(Arc<Mutex<Vec<(Level, String)>>>);

impl<S: Subscriber> Layer<S> for RecordEvents {
  fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
    let metadata = event.metadata();
    self.0.lock().unwrap().push((*metadata.level(), metadata.target().to_string()));
  }
}

fn record(f: impl FnOnce()) -> Vec<(Level, String)> {
  let events = RecordEvents::default();
  let subscriber = tracing_subscriber::registry().with(events.clone());
  tracing::subscriber::with_default(subscriber, f);
  let recorded = events.0.lock().unwrap().clone();
  recorded
}

#[test]
fn absent_get_logs_error() {
  let events = record(|| {
    let result = catch_unwind(AssertUnwindSafe(|| absent::<i32>().get()));
    assert!(result.is_err());
  });
  assert_eq!(events, vec![(Level::ERROR, "opt_core::optional".to_string())]);
}

#[test]
fn absent_try_get_logs_debug() {
  let events = record(|| {
    assert!(absent::<i32>().try_get().is_err());
  });
  assert_eq!(events, vec![(Level::DEBUG, "opt_core::optional".to_string())]);
}

#[test]
fn present_accessors_do_not_log() {
  let events = record(|| {
    assert_eq!(present(1).get(), 1);
    assert_eq!(present(1).try_get(), Ok(1));
  });
  assert!(events.is_empty());
}

#[test]
fn map_logs_trace() {
  let events = record(|| {
    assert_eq!(map(|t| t * 2, present(3)).get(), 6);
    assert!(map(|t: i32| t * 2, absent()).is_empty());
  });
  let map_event = (Level::TRACE, "opt_core::map".to_string());
  assert_eq!(events, vec![map_event.clone(), map_event]);
}
