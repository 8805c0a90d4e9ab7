//! Chat-level views over the message store.
//!
//! Chats are computed from messages on demand; this module only holds the
//! catalog of chats the serving layer advertises.

pub mod catalog;
