//! Fixed demo messages used to seed a fresh store.

use catchat_types::message::NewMessage;

use super::MessageStore;

/// (chat id, sender, text) for each seeded message, in insertion order.
const DEMO_MESSAGES: [(&str, &str, &str); 3] = [
    ("general", "system", "🐱 Welcome to CAT CHAT!"),
    ("general", "system", "Backend is up and ready for messages."),
    (
        "ai",
        "ai",
        "Hello! I am your AI assistant. How can I help you today?",
    ),
];

impl MessageStore {
    /// Append the demo messages. Returns the number of messages added.
    pub fn seed_demo(&self) -> usize {
        DEMO_MESSAGES
            .iter()
            .filter_map(|(chat_id, sender, text)| {
                self.append(NewMessage::new(*chat_id, *text).with_sender(*sender))
                    .ok()
            })
            .count()
    }
}
