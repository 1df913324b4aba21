//! Screen runtime and communication
//!
//! - `ScreenEvent` channel types connecting sources to the screen thread
//! - `UsageSource` and the background usage load
//!
//! The screen itself is single-threaded: only the usage load runs as a tokio
//! task, and it reports back through the same channel as observer callbacks.

pub mod channels;
pub mod usage_loader;

pub use channels::{
    create_event_channel, forward_groups, forward_hibernation, EventReceiver, EventSender,
    ScreenEvent,
};
pub use usage_loader::{spawn_usage_load, StaticUsageSource, UsageSource};
