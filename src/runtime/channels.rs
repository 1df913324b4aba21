//! Channel plumbing between data sources and the screen thread
//!
//! Sources never touch the screen directly. Observer callbacks and the
//! background usage load push [`ScreenEvent`]s into an unbounded channel; the
//! thread that owns the screen drains it.

use tokio::sync::mpsc;

use crate::core::{Observable, ScreenResult, SubscriptionId};
use crate::permissions::{AppPermissionUsage, GroupMap};
use crate::screen::HibernationSettingState;

/// A change the screen must react to
#[derive(Debug)]
pub enum ScreenEvent {
    /// New groups-by-category value, `None` for an invalid package
    GroupsChanged(Option<GroupMap>),
    /// New hibernation state
    HibernationChanged(Option<HibernationSettingState>),
    /// Background usage load finished
    UsagesLoaded(ScreenResult<Vec<AppPermissionUsage>>),
}

/// Sender half, cloned into every source
pub type EventSender = mpsc::UnboundedSender<ScreenEvent>;

/// Receiver half, owned by the screen thread
pub type EventReceiver = mpsc::UnboundedReceiver<ScreenEvent>;

/// Create a new event channel pair
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Forward every change of a groups source into the channel
pub fn forward_groups(source: &Observable<Option<GroupMap>>, tx: EventSender) -> SubscriptionId {
    source.subscribe(move |groups: &Option<GroupMap>| {
        if tx.send(ScreenEvent::GroupsChanged(groups.clone())).is_err() {
            tracing::debug!("[Channels] screen gone, dropping groups update");
        }
    })
}

/// Forward every change of a hibernation source into the channel
pub fn forward_hibernation(
    source: &Observable<Option<HibernationSettingState>>,
    tx: EventSender,
) -> SubscriptionId {
    source.subscribe(move |state: &Option<HibernationSettingState>| {
        if tx.send(ScreenEvent::HibernationChanged(state.clone())).is_err() {
            tracing::debug!("[Channels] screen gone, dropping hibernation update");
        }
    })
}
