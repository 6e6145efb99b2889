//! All Discord-specific output types
//!
//! These mirror the argument shapes of Discord's "send message" and "add files"
//! calls. Field names follow Discord's REST API, so a `SendArguments` can be
//! serialized straight into a message create request body.

pub mod embed;
pub mod payload;

// Re-export main types for convenience
pub use embed::{Embed, EmbedAuthor, EmbedMedia};
pub use payload::{FileUpload, SendArguments};
