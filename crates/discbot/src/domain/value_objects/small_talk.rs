//! SmallTalk - Outcome of the small-talk classifier

/// Small-talk rules, listed in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallTalkRule {
    /// "hi", "hello", ... with optional trailing punctuation
    Greeting,
    /// Asks what discrete math is
    DiscreteMathDefinition,
    /// Asks what math in general is
    GeneralMath,
    /// Thanks the bot
    Thanks,
    /// "how are you"
    HowAreYou,
}

impl SmallTalkRule {
    /// Canned reply for this rule
    pub fn reply(&self) -> &'static str {
        match self {
            SmallTalkRule::Greeting => {
                "Hello! I'm DiscBot, your discrete math tutor. \
                 How can I help you with sets, logic, or graphs today?"
            }
            SmallTalkRule::DiscreteMathDefinition => {
                "That's my favorite subject! **Discrete mathematics** is the study of \
                 mathematical structures that are fundamentally **separate** or distinct, \
                 rather than continuous. It includes topics like **logic**, **sets**, \
                 **combinatorics**, and **graph theory**. What specific area interests you?"
            }
            SmallTalkRule::GeneralMath => {
                "Mathematics is the language of science! It's the study of quantity, \
                 structure, space, and change. I focus on the **discrete** parts of math, \
                 like proofs and algorithms. Got any questions on those?"
            }
            SmallTalkRule::Thanks => {
                "You're very welcome! Feel free to ask any more discrete math questions."
            }
            SmallTalkRule::HowAreYou => {
                "I'm a bot, but I'm ready to compute! What discrete math topic is on your mind?"
            }
        }
    }
}

impl std::fmt::Display for SmallTalkRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmallTalkRule::Greeting => write!(f, "greeting"),
            SmallTalkRule::DiscreteMathDefinition => write!(f, "discrete_math_definition"),
            SmallTalkRule::GeneralMath => write!(f, "general_math"),
            SmallTalkRule::Thanks => write!(f, "thanks"),
            SmallTalkRule::HowAreYou => write!(f, "how_are_you"),
        }
    }
}

/// Classifier result: a canned answer, or hand off to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallTalk {
    Matched(SmallTalkRule),
    NoMatch,
}

impl SmallTalk {
    pub fn reply(&self) -> Option<&'static str> {
        match self {
            SmallTalk::Matched(rule) => Some(rule.reply()),
            SmallTalk::NoMatch => None,
        }
    }
}
