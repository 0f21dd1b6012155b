// Prompt input component
//
// Multi-line editor for the assistant request. Holds the text and a cursor
// (in chars); wraps at the panel width itself so the terminal cursor can be
// placed exactly. The text survives closing the dialog and submitting.

use crate::generation::Mode;
use crate::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Default)]
pub struct PromptInput {
    text: String,
    /// Cursor position in chars, 0..=len
    cursor: usize,
    /// First visible wrapped row
    top_row: usize,
}

impl PromptInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Start of the logical line holding the cursor (in chars)
    fn line_start(&self) -> usize {
        let before: Vec<char> = self.text.chars().take(self.cursor).collect();
        before
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// End of the logical line holding the cursor (in chars)
    fn line_end(&self) -> usize {
        self.text
            .chars()
            .skip(self.cursor)
            .position(|c| c == '\n')
            .map(|i| self.cursor + i)
            .unwrap_or_else(|| self.char_len())
    }

    /// Wrap the text into rows of at most `width` columns.
    ///
    /// Returns the rows and the (row, col) of the cursor.
    pub fn layout(&self, width: usize) -> (Vec<String>, (usize, usize)) {
        let width = width.max(1);
        let mut rows = vec![String::new()];
        let mut col = 0usize;
        let mut cursor_at = (0, 0);

        for (i, c) in self.text.chars().enumerate() {
            if i == self.cursor {
                cursor_at = (rows.len() - 1, col);
            }
            if c == '\n' {
                rows.push(String::new());
                col = 0;
                continue;
            }
            let w = c.width().unwrap_or(0);
            if col + w > width {
                rows.push(String::new());
                col = 0;
            }
            if let Some(row) = rows.last_mut() {
                row.push(c);
            }
            col += w;
        }

        if self.cursor >= self.char_len() {
            if col >= width {
                rows.push(String::new());
                col = 0;
            }
            cursor_at = (rows.len() - 1, col);
        }

        (rows, cursor_at)
    }

    /// Render the editor. `focused` shows the terminal cursor.
    pub fn render(&mut self, f: &mut Frame, area: Rect, mode: Mode, theme: &Theme, focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.block_border(focused)));
        let inner = block.inner(area);

        if self.text.is_empty() {
            let placeholder = Paragraph::new(mode.placeholder())
                .style(
                    Style::default()
                        .fg(theme.muted)
                        .add_modifier(Modifier::ITALIC),
                )
                .wrap(Wrap { trim: false })
                .block(block);
            f.render_widget(placeholder, area);
            if focused {
                f.set_cursor_position(Position::new(inner.x, inner.y));
            }
            return;
        }

        let (rows, (row, col)) = self.layout(inner.width as usize);
        let viewport = inner.height.max(1) as usize;

        // Keep the cursor row on screen
        if row < self.top_row {
            self.top_row = row;
        } else if row >= self.top_row + viewport {
            self.top_row = row + 1 - viewport;
        }

        let lines: Vec<Line> = rows
            .into_iter()
            .skip(self.top_row)
            .take(viewport)
            .map(Line::from)
            .collect();

        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(theme.foreground))
            .block(block);
        f.render_widget(paragraph, area);

        if focused {
            f.set_cursor_position(Position::new(
                inner.x + col as u16,
                inner.y + (row - self.top_row) as u16,
            ));
        }
    }
}

impl Interactive for PromptInput {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(c) if !ctrl && !alt => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            KeyCode::Home => self.cursor = self.line_start(),
            KeyCode::End => self.cursor = self.line_end(),
            _ => return Handled::No,
        }
        Handled::Yes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut PromptInput, s: &str) {
        for c in s.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_and_editing_cyrillic() {
        let mut input = PromptInput::new();
        type_str(&mut input, "Кот");
        assert_eq!(input.text(), "Кот");

        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.text(), "Кт");

        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.text(), "т");
    }

    #[test]
    fn control_chords_bubble_up() {
        let mut input = PromptInput::new();
        let chord = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(chord), Handled::No);
        assert_eq!(input.handle_key(key(KeyCode::Enter)), Handled::No);
        assert!(input.text().is_empty());
    }

    #[test]
    fn blank_means_whitespace_only() {
        let mut input = PromptInput::new();
        assert!(input.is_blank());
        type_str(&mut input, "  ");
        input.insert_newline();
        assert!(input.is_blank());
        type_str(&mut input, "x");
        assert!(!input.is_blank());
    }

    #[test]
    fn layout_wraps_and_tracks_cursor() {
        let mut input = PromptInput::new();
        type_str(&mut input, "abcdef");
        input.insert_newline();
        type_str(&mut input, "gh");

        let (rows, cursor) = input.layout(4);
        assert_eq!(rows, vec!["abcd", "ef", "gh"]);
        assert_eq!(cursor, (2, 2));

        input.handle_key(key(KeyCode::Home));
        assert_eq!(input.layout(4).1, (2, 0));
    }

    #[test]
    fn cursor_wraps_after_full_row() {
        let mut input = PromptInput::new();
        type_str(&mut input, "abcd");
        let (rows, cursor) = input.layout(4);
        assert_eq!(rows, vec!["abcd", ""]);
        assert_eq!(cursor, (1, 0));
    }
}
