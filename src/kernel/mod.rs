//! Headless fake-input core (instance state/event/effect + host).
//!
//! - `state`: one `FakeInput` instance (text, caret, scroll, options).
//! - `interaction`: `handle_event`, the InteractionController state machine.
//! - `host`: attach/detach registry and the focus manager.

pub mod effect;
pub mod handle;
pub mod host;
pub mod interaction;
pub mod services;
pub mod shared;
pub mod state;

pub use effect::{Effect, Notification, NotificationKind};
pub use handle::{InputHandle, TextInputLike};
pub use host::{DispatchResult, FakeInputHost, InputId};
pub use interaction::{EventContext, Transition};
pub use shared::{SharedCaret, SharedResources};
pub use state::{BoxGeometry, FakeInput, InteractionState};
