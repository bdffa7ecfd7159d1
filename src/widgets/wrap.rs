//! Word wrapping for styled lines
//!
//! The transcript needs to know exactly how many rows it occupies to keep the
//! latest turn in view, so wrapping happens here instead of in `Paragraph`.

use std::mem;

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap a styled line into rows no wider than `width` columns
///
/// Breaks between words; a word longer than a full row is split by character.
/// An empty line yields one empty row.
pub fn wrap_line(line: &Line<'_>, width: u16) -> Vec<Line<'static>> {
    let mut wrapper = RowBuilder::new(width.max(1) as usize);

    for span in &line.spans {
        for word in split_words(&span.content) {
            wrapper.push_word(word, span.style);
        }
    }

    wrapper.finish()
}

struct RowBuilder {
    width: usize,
    rows: Vec<Line<'static>>,
    row: Vec<Span<'static>>,
    row_width: usize,
}

impl RowBuilder {
    fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
            row: Vec::new(),
            row_width: 0,
        }
    }

    fn push_word(&mut self, word: &str, style: Style) {
        let visible_width = word.trim_end().width();

        if self.row_width > 0 && self.row_width + visible_width > self.width {
            self.break_row();
        }

        if visible_width <= self.width {
            self.row.push(Span::styled(word.to_string(), style));
            self.row_width += word.width();
            return;
        }

        let mut chunk = String::new();
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if self.row_width + ch_width > self.width && self.row_width > 0 {
                if !chunk.is_empty() {
                    self.row.push(Span::styled(mem::take(&mut chunk), style));
                }
                self.break_row();
            }
            chunk.push(ch);
            self.row_width += ch_width;
        }
        if !chunk.is_empty() {
            self.row.push(Span::styled(chunk, style));
        }
    }

    fn break_row(&mut self) {
        self.rows.push(Line::from(mem::take(&mut self.row)));
        self.row_width = 0;
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.row.is_empty() || self.rows.is_empty() {
            self.break_row();
        }
        self.rows
    }
}

/// Split text into words, each carrying its trailing whitespace
fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut prev_whitespace = false;

    for (i, c) in text.char_indices() {
        if i > start && prev_whitespace && !c.is_whitespace() {
            words.push(&text[start..i]);
            start = i;
        }
        prev_whitespace = c.is_whitespace();
    }
    if start < text.len() {
        words.push(&text[start..]);
    }

    words
}

#[cfg(test)]
#[path = "wrap_tests.rs"]
mod wrap_tests;
