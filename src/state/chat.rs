#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// State for the support chat panel on the contact page.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

/// A single support-chat message.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub author: String,
    pub body: String,
    pub from_support: bool,
}

impl ChatState {
    /// Transcript shown when the contact page first opens, oldest first.
    pub fn seeded() -> Self {
        let turns = [
            (
                false,
                "Hi! I ordered two tickets for Aurora Nights but only got one confirmation email.",
            ),
            (
                true,
                "Hello! Both tickets are on your order. The second email sometimes lands in spam; could you check there?",
            ),
            (false, "Found it, thank you!"),
            (true, "Great! Anything else we can help with?"),
        ];

        Self {
            messages: turns
                .into_iter()
                .map(|(from_support, body)| {
                    let author = if from_support { "Support" } else { "You" };
                    ChatMessage {
                        author: author.to_owned(),
                        body: body.to_owned(),
                        from_support,
                    }
                })
                .collect(),
        }
    }

    /// Append a message typed by the visitor.
    pub fn push_visitor(&mut self, body: String) {
        self.messages.push(ChatMessage {
            author: "You".to_owned(),
            body,
            from_support: false,
        });
    }
}
