//! Chat widget core: the welcome/conversation flow, the transcript, and the
//! HTTP submission path with its apology fallback. No rendering concerns.

pub mod transport;
pub mod widget;

pub use transport::{ChatTransport, HttpChatTransport};
pub use widget::{ChatEntry, ChatWidget, Speaker, Transcript, VisitorDetails, WidgetError};
