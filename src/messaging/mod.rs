//! Cross-domain messaging subsystem.
//!
//! # Data Flow
//! ```text
//! send-msg <selector_str> <payload>
//!     → selector.rs (name → 250-bit selector)
//!     → payload.rs (text → [U256])
//!     → sender.rs (encode sendMessage, attach fixed value)
//!     → request.rs → blockchain::TxBuilder (sign, broadcast once)
//!
//! consume-msg <payload>
//!     → payload.rs
//!     → consumer.rs (encode consumeMessage, no value)
//!     → request.rs → blockchain::TxBuilder
//! ```

pub mod consumer;
pub mod contract;
pub mod payload;
pub mod request;
pub mod selector;
pub mod sender;
pub mod types;

pub use consumer::MessageConsumer;
pub use payload::Payload;
pub use request::{MessageKind, MessageRequest};
pub use selector::Selector;
pub use sender::MessageSender;
pub use types::{MessagingError, MessagingResult};
