//! Deterministic assistant replies used when no provider answers.

use catchat_types::llm::Personality;

/// Build the canned reply for `personality`, quoting the user's text.
///
/// The same inputs always produce the same output.
pub fn canned_reply(personality: Personality, text: &str) -> String {
    match personality {
        Personality::Friendly => format!(
            "😊 Hi there! \"{text}\" sounds interesting! I'm your friendly assistant and I'm happy to help any time."
        ),
        Personality::Professional => format!(
            "📊 Analysis: \"{text}\" raises several points worth considering. Let's work through them step by step."
        ),
        Personality::Witty => format!(
            "😼 Meow! \"{text}\"? That's a purr-fect topic. I'd chase that thought like a laser pointer."
        ),
        Personality::Supportive => format!(
            "🤗 Thank you for sharing \"{text}\". Your thoughts matter, and I'm here to listen."
        ),
        Personality::Default => format!(
            "🐱 I'm your CAT CHAT assistant. Regarding \"{text}\", that's a great topic for our chat!"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_reply_is_deterministic() {
        for p in Personality::ALL {
            assert_eq!(canned_reply(p, "hello"), canned_reply(p, "hello"));
        }
    }

    #[test]
    fn test_canned_reply_quotes_text() {
        for p in Personality::ALL {
            assert!(canned_reply(p, "tuna").contains("\"tuna\""));
        }
    }

    #[test]
    fn test_canned_reply_differs_per_personality() {
        let witty = canned_reply(Personality::Witty, "x");
        let supportive = canned_reply(Personality::Supportive, "x");
        assert_ne!(witty, supportive);
    }
}
