//! Conversation turns

use ratatui::text::Text;

use crate::markdown::render_markdown;

/// Author of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// Content of a turn
#[derive(Debug, Clone, PartialEq)]
pub enum TurnBody {
    /// Shown verbatim: user messages and the failure notice
    Plain(String),
    /// Markdown answer, rendered once when the turn is created
    Rich { source: String, text: Text<'static> },
}

/// One entry of the transcript; never modified after it is appended
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub role: Role,
    pub body: TurnBody,
}

impl ChatTurn {
    pub fn user(text: &str) -> Self {
        Self {
            role: Role::User,
            body: TurnBody::Plain(text.to_string()),
        }
    }

    pub fn bot_answer(markdown: &str) -> Self {
        Self {
            role: Role::Bot,
            body: TurnBody::Rich {
                source: markdown.to_string(),
                text: render_markdown(markdown),
            },
        }
    }

    pub fn bot_notice(text: &str) -> Self {
        Self {
            role: Role::Bot,
            body: TurnBody::Plain(text.to_string()),
        }
    }

    /// Rendered content without styling, one entry per line
    pub fn plain_text(&self) -> String {
        match &self.body {
            TurnBody::Plain(text) => text.clone(),
            TurnBody::Rich { text, .. } => text
                .lines
                .iter()
                .map(|line| {
                    line.spans
                        .iter()
                        .map(|span| span.content.as_ref())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
