// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Append-only character buffer with amortized multiplicative growth.
//!
//! The buffer tracks its own logical capacity and grows it by a
//! configurable factor whenever an append would overflow, so growth
//! behavior is observable and testable independently of the indentation
//! layer stacked on top of it.

use std::borrow::Cow;

use crate::error::TextError;

/// Capacity of a buffer created through [`TextBuffer::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Multiplicative growth factor applied when capacity is exhausted.
pub const DEFAULT_GROW_FACTOR: f64 = 2.0;

/// Canonical line terminator. Deliberately not the platform default, so
/// emitted text is reproducible across environments.
pub const DEFAULT_NEWLINE: &str = "\r\n";

/// Growable append-only text sink.
#[derive(Debug)]
pub struct TextBuffer {
    text: String,
    capacity: usize,
    grow_factor: f64,
    newline: Cow<'static, str>
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// Create a buffer with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            grow_factor: DEFAULT_GROW_FACTOR,
            newline: Cow::Borrowed(DEFAULT_NEWLINE)
        }
    }

    /// Create a buffer with the given initial capacity.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidCapacity`] if `initial_capacity` is zero.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, TextError> {
        if initial_capacity == 0 {
            return Err(TextError::InvalidCapacity);
        }

        Ok(Self {
            text: String::with_capacity(initial_capacity),
            capacity: initial_capacity,
            grow_factor: DEFAULT_GROW_FACTOR,
            newline: Cow::Borrowed(DEFAULT_NEWLINE)
        })
    }

    /// Accumulated length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Current logical capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Line terminator appended by [`TextBuffer::push_newline`].
    pub fn newline(&self) -> &str {
        &self.newline
    }

    /// Replace the line terminator.
    pub fn set_newline(&mut self, newline: impl Into<Cow<'static, str>>) {
        self.newline = newline.into();
    }

    /// Replace the growth factor applied on overflow.
    pub fn set_grow_factor(&mut self, grow_factor: f64) {
        self.grow_factor = grow_factor;
    }

    /// Append a single character.
    pub fn push(&mut self, character: char) {
        self.ensure_capacity(character.len_utf8());
        self.text.push(character);
    }

    /// Append `count` repetitions of `character`. Zero repetitions is a no-op.
    pub fn push_run(&mut self, character: char, count: usize) {
        if count == 0 {
            return;
        }

        self.ensure_capacity(character.len_utf8() * count);
        for _ in 0..count {
            self.text.push(character);
        }
    }

    /// Append a string slice.
    pub fn push_str(&mut self, text: &str) {
        self.ensure_capacity(text.len());
        self.text.push_str(text);
    }

    /// Append a string slice followed by the configured terminator.
    pub fn push_line(&mut self, text: &str) {
        self.push_str(text);
        self.push_newline();
    }

    /// Append the configured line terminator.
    pub fn push_newline(&mut self) {
        self.ensure_capacity(self.newline.len());
        self.text.push_str(&self.newline);
    }

    /// View the accumulated text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the buffer and produce the accumulated text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Grow the logical capacity so `additional` more bytes fit.
    ///
    /// The new capacity is the larger of the required length and the
    /// factor-grown capacity; the required length always wins, so a factor
    /// that rounds down to a no-op still makes forward progress.
    fn ensure_capacity(&mut self, additional: usize) {
        let required = self.text.len() + additional;
        if required <= self.capacity {
            return;
        }

        let grown = (self.capacity as f64 * self.grow_factor) as usize;
        let capacity = required.max(grown);
        self.text.reserve(capacity - self.text.len());
        self.capacity = capacity;
    }
}
