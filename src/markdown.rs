//! Markdown rendering for assistant answers
//!
//! Converts the backend's markdown answer into styled ratatui text. The answer
//! is trusted; nothing is sanitized here.

use std::mem;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

const BULLET: &str = "• ";
const RULE: &str = "────────────────";

/// Render markdown source into styled terminal text
pub fn render_markdown(source: &str) -> Text<'static> {
    let mut renderer = MarkdownRenderer::default();
    for event in Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH) {
        renderer.handle(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct MarkdownRenderer {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    strong: u8,
    emphasis: u8,
    strikethrough: u8,
    link: u8,
    heading: bool,
    in_code_block: bool,
    /// One entry per open list: `Some(n)` is the next ordinal, `None` is bulleted
    lists: Vec<Option<u64>>,
}

impl MarkdownRenderer {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                self.spans
                    .push(Span::styled(code.into_string(), code_style()));
            }
            Event::SoftBreak => self.spans.push(Span::raw(" ")),
            Event::HardBreak => self.break_line(),
            Event::Rule => {
                self.start_block();
                self.lines
                    .push(Line::styled(RULE, Style::default().fg(Color::DarkGray)));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if self.lists.is_empty() {
                    self.start_block();
                }
            }
            Tag::Heading { .. } => {
                self.start_block();
                self.heading = true;
            }
            Tag::CodeBlock(_) => {
                self.start_block();
                self.in_code_block = true;
            }
            Tag::List(first) => {
                if self.lists.is_empty() {
                    self.start_block();
                } else {
                    self.flush_line();
                }
                self.lists.push(first);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => BULLET.to_string(),
                };
                self.spans
                    .push(Span::raw(format!("{}{}", "  ".repeat(depth), marker)));
            }
            Tag::Strong => self.strong += 1,
            Tag::Emphasis => self.emphasis += 1,
            Tag::Strikethrough => self.strikethrough += 1,
            Tag::Link { .. } => self.link += 1,
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::Item => self.flush_line(),
            TagEnd::Heading(_) => {
                self.flush_line();
                self.heading = false;
            }
            TagEnd::CodeBlock => {
                self.flush_line();
                self.in_code_block = false;
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.lists.pop();
            }
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            TagEnd::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            TagEnd::Link => self.link = self.link.saturating_sub(1),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if !self.in_code_block {
            let style = self.inline_style();
            self.spans.push(Span::styled(text.to_string(), style));
            return;
        }

        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.break_line();
            }
            if !part.is_empty() {
                self.spans.push(Span::styled(part.to_string(), code_style()));
            }
        }
    }

    fn inline_style(&self) -> Style {
        let mut style = Style::default();
        if self.heading {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        if self.strong > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.emphasis > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.strikethrough > 0 {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if self.link > 0 {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }

    /// Separate a new top-level block from the previous one with a blank line
    fn start_block(&mut self) {
        self.flush_line();
        if !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
    }

    fn flush_line(&mut self) {
        if !self.spans.is_empty() {
            self.break_line();
        }
    }

    fn break_line(&mut self) {
        let spans = mem::take(&mut self.spans);
        self.lines.push(Line::from(spans));
    }

    fn finish(mut self) -> Text<'static> {
        self.flush_line();
        Text::from(self.lines)
    }
}

fn code_style() -> Style {
    Style::default().fg(Color::Yellow)
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod markdown_tests;
