//! Adapter between the host's ordered change stream and the typed event sink.

use tokio::sync::mpsc::UnboundedReceiver;

use crate::host::TabEventSink;
use crate::types::events::TabEvent;

/// Forwards one event to the matching sink method.
pub fn dispatch<S: TabEventSink>(sink: &mut S, event: TabEvent) {
    match event {
        TabEvent::Created { tab } => sink.on_created(tab),
        TabEvent::Removed { tab_id, info } => sink.on_removed(tab_id, &info),
        TabEvent::Updated { tab_id, delta, tab } => sink.on_updated(tab_id, &delta, tab),
        TabEvent::Moved { tab_id, info } => sink.on_moved(tab_id, &info),
        TabEvent::Activated { info } => sink.on_activated(&info),
        TabEvent::Detached { tab_id, info } => sink.on_detached(tab_id, &info),
        TabEvent::Attached { tab_id, info } => sink.on_attached(tab_id, &info),
        TabEvent::Replaced {
            added_tab_id,
            removed_tab_id,
        } => sink.on_replaced(added_tab_id, removed_tab_id),
    }
}

/// Drains the host's single ordered event stream into a sink, one event at a
/// time. Each handler runs to completion before the next event is delivered,
/// which is the only ordering guarantee the engine relies on.
pub struct EventPump {
    rx: UnboundedReceiver<TabEvent>,
}

impl EventPump {
    pub fn new(rx: UnboundedReceiver<TabEvent>) -> Self {
        Self { rx }
    }

    /// Runs until the host side of the stream closes.
    pub async fn run<S: TabEventSink>(&mut self, sink: &mut S) {
        while let Some(event) = self.rx.recv().await {
            dispatch(sink, event);
        }
    }

    /// Synchronously forwards every event already in the stream. Returns the
    /// number of events delivered.
    pub fn drain<S: TabEventSink>(&mut self, sink: &mut S) -> usize {
        let mut delivered = 0;
        while let Ok(event) = self.rx.try_recv() {
            dispatch(sink, event);
            delivered += 1;
        }
        delivered
    }
}
