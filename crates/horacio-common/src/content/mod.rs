//! User-facing message catalog

mod catalog;
mod messages;

pub use catalog::{
    all_message_keys, get_error_message, get_message, get_messages, has_message, interpolate,
    message, MessageVars,
};
