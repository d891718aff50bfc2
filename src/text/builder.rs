// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Indentation-aware code building on top of [`TextBuffer`].
//!
//! The builder tracks a nesting level and applies indentation lazily, only
//! when the first character of a fresh line is appended; appending mid-line
//! never re-indents. Multi-line input is re-split through
//! [`split_lines`](super::split_lines) and every embedded terminator is
//! replaced with the builder's own, whatever form it had in the input.
//!
//! Nested regions are opened through scope guards rather than paired calls:
//! [`CodeBuilder::bracket_block`] emits the delimiters and
//! [`CodeBuilder::nest`] adjusts indentation only. Both restore the nesting
//! level exactly once when dropped, on every exit path. The guards borrow
//! the builder mutably, so a guard without a builder is unrepresentable.

use std::{
    borrow::Cow,
    ops::{Deref, DerefMut}
};

use super::{buffer::TextBuffer, lines::split_lines};

/// Indentation unit: a character repeated `size` times per nesting level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indentation {
    pub character: char,
    pub size: usize
}

/// Nesting-aware text builder for code snippets and whole files.
#[derive(Debug)]
pub struct CodeBuilder {
    buffer: TextBuffer,
    indentation: Indentation,
    level: usize,
    started_line: bool
}

impl CodeBuilder {
    /// Create a builder indenting with `size` repetitions of `character`
    /// per nesting level.
    pub fn new(character: char, size: usize) -> Self {
        Self {
            buffer: TextBuffer::new(),
            indentation: Indentation { character, size },
            level: 0,
            started_line: false
        }
    }

    /// Current nesting level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Set the nesting level directly.
    pub fn set_level(&mut self, level: usize) {
        self.level = level;
    }

    /// The indentation unit this builder was created with.
    pub fn indentation(&self) -> Indentation {
        self.indentation
    }

    /// Replace the line terminator of the underlying buffer.
    pub fn set_newline(&mut self, newline: impl Into<Cow<'static, str>>) {
        self.buffer.set_newline(newline);
    }

    /// Append content without a trailing terminator.
    ///
    /// Embedded line breaks separate lines and are normalized to the
    /// builder's terminator; a trailing break in the input is dropped.
    pub fn append(&mut self, text: &str) {
        let mut separate = false;
        for line in split_lines(text) {
            if separate {
                self.newline();
            }
            self.append_line_content(line);
            separate = true;
        }
    }

    /// Append a single character; `'\n'` becomes the builder's terminator.
    pub fn append_char(&mut self, character: char) {
        if character == '\n' {
            self.newline();
        } else {
            self.append_char_content(character);
        }
    }

    /// Append content where every line, including the last, is terminated.
    pub fn append_line(&mut self, text: &str) {
        for line in split_lines(text) {
            self.append_line_content(line);
            self.newline();
        }
    }

    /// Append the line terminator and begin a fresh line.
    pub fn newline(&mut self) {
        self.buffer.push_newline();
        self.started_line = false;
    }

    /// Open a brace-delimited, indented block.
    ///
    /// Emits `{` and a line break, then raises the nesting level; dropping
    /// the guard lowers it again and emits the closing `}` line.
    pub fn bracket_block(&mut self) -> BracketBlock<'_> {
        self.delimited_block('{', '}')
    }

    /// Open a block with custom delimiters.
    pub fn delimited_block(&mut self, open: char, close: char) -> BracketBlock<'_> {
        BracketBlock::new(self, open, close)
    }

    /// Raise the nesting level without emitting any text.
    pub fn nest(&mut self) -> NestingGuard<'_> {
        NestingGuard::new(self)
    }

    /// Consume the builder and produce the accumulated text.
    pub fn into_text(self) -> String {
        self.buffer.into_text()
    }

    /// View the accumulated text.
    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    fn append_line_content(&mut self, line: &str) {
        if line.is_empty() {
            // Blank lines carry no indentation
            return;
        }

        if !self.started_line {
            self.apply_indentation();
            self.started_line = true;
        }
        self.buffer.push_str(line);
    }

    fn append_char_content(&mut self, character: char) {
        if !self.started_line {
            self.apply_indentation();
            self.started_line = true;
        }
        self.buffer.push(character);
    }

    fn apply_indentation(&mut self) {
        self.buffer
            .push_run(self.indentation.character, self.level * self.indentation.size);
    }
}

/// Scope guard for a delimited, indented block.
///
/// Created through [`CodeBuilder::bracket_block`]; dereferences to the
/// builder so appends go through the guard while the block is open.
#[derive(Debug)]
pub struct BracketBlock<'a> {
    builder: &'a mut CodeBuilder,
    close: char
}

impl<'a> BracketBlock<'a> {
    fn new(builder: &'a mut CodeBuilder, open: char, close: char) -> Self {
        builder.append_char(open);
        builder.newline();
        builder.level += 1;
        Self { builder, close }
    }
}

impl Deref for BracketBlock<'_> {
    type Target = CodeBuilder;

    fn deref(&self) -> &CodeBuilder {
        self.builder
    }
}

impl DerefMut for BracketBlock<'_> {
    fn deref_mut(&mut self) -> &mut CodeBuilder {
        self.builder
    }
}

impl Drop for BracketBlock<'_> {
    fn drop(&mut self) {
        self.builder.level = self.builder.level.saturating_sub(1);
        let close = self.close;
        self.builder.append_char(close);
        self.builder.newline();
    }
}

/// Scope guard that raises the nesting level without emitting delimiters.
///
/// Created through [`CodeBuilder::nest`]; used for indentation-only
/// regions.
#[derive(Debug)]
pub struct NestingGuard<'a> {
    builder: &'a mut CodeBuilder
}

impl<'a> NestingGuard<'a> {
    fn new(builder: &'a mut CodeBuilder) -> Self {
        builder.level += 1;
        Self { builder }
    }
}

impl Deref for NestingGuard<'_> {
    type Target = CodeBuilder;

    fn deref(&self) -> &CodeBuilder {
        self.builder
    }
}

impl DerefMut for NestingGuard<'_> {
    fn deref_mut(&mut self) -> &mut CodeBuilder {
        self.builder
    }
}

impl Drop for NestingGuard<'_> {
    fn drop(&mut self) {
        self.builder.level = self.builder.level.saturating_sub(1);
    }
}
