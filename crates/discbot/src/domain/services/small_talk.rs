//! Small-Talk Classifier
//!
//! Answers greetings, thanks and a few meta-questions locally so they never
//! reach the model. Rules are checked in a fixed order and the first hit
//! wins; "thanks, what is discrete math?" is a definition question, not a
//! thank-you.

use crate::domain::value_objects::{SmallTalk, SmallTalkRule};

/// Static phrase lists
const GREETINGS: &[&str] = &["hi", "hello", "hey", "hola", "sup", "good day"];

const GREETING_PUNCTUATION: &[char] = &['!', '.', '?'];

const DISCRETE_MATH_PHRASES: &[&str] = &[
    "what is discrete math",
    "define discrete math",
    "explain discrete math",
];

const GENERAL_MATH_PHRASES: &[&str] = &["what is math", "what is mathematics"];

const THANKS_PHRASES: &[&str] = &["thank you", "thanks"];

const HOW_ARE_YOU: &[&str] = &["how are you", "how are you?"];

/// Classify a message as small talk or hand it off to the model
pub fn classify(message: &str) -> SmallTalk {
    let message = message.trim().to_lowercase();

    if is_greeting(&message) {
        return SmallTalk::Matched(SmallTalkRule::Greeting);
    }

    // Substring rules are intentionally broad.
    if contains_any(&message, DISCRETE_MATH_PHRASES) {
        return SmallTalk::Matched(SmallTalkRule::DiscreteMathDefinition);
    }

    if contains_any(&message, GENERAL_MATH_PHRASES) {
        return SmallTalk::Matched(SmallTalkRule::GeneralMath);
    }

    if contains_any(&message, THANKS_PHRASES) {
        return SmallTalk::Matched(SmallTalkRule::Thanks);
    }

    if HOW_ARE_YOU.contains(&message.as_str()) {
        return SmallTalk::Matched(SmallTalkRule::HowAreYou);
    }

    SmallTalk::NoMatch
}

/// Exact membership, optionally after stripping one kind of trailing
/// punctuation ("hi", "hi!", "hello...", "hey?")
fn is_greeting(message: &str) -> bool {
    GREETINGS.contains(&message)
        || GREETING_PUNCTUATION
            .iter()
            .any(|p| GREETINGS.contains(&message.trim_end_matches(*p)))
}

fn contains_any(message: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| message.contains(phrase))
}
