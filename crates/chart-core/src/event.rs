// File: crates/chart-core/src/event.rs
// Summary: Outbound configuration-change notifications.

use std::sync::mpsc::Sender;

/// Which part of the plot configuration changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeSource {
    Dataset,
    Axis,
    Renderer,
    Plot,
}

/// A configuration-change notification. Delivery is fire-and-forget with
/// no ordering guarantee relative to an in-flight draw pass; callers that
/// need ordering drain the channel between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    pub source: ChangeSource,
}

/// The outbound end of the notification channel. A disconnected receiver
/// is ignored.
pub type ChangeSink = Sender<ChangeEvent>;

pub(crate) fn notify(sink: &Option<ChangeSink>, source: ChangeSource) {
    if let Some(sink) = sink {
        let _ = sink.send(ChangeEvent { source });
    }
}
