// Markdown parsing and rendering for TUI components
//
// Used by the assistant's result panel to show text-mode responses.
//
// Uses pulldown-cmark to parse markdown and convert to styled ratatui Spans.
// Supports: headings, inline code, fenced code blocks, bold, italic, lists,
// blockquotes, rules. Source line breaks are kept as line breaks.

use crate::theme::Theme;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A segment of parsed markdown with semantic meaning
#[derive(Debug, Clone, PartialEq)]
pub enum StyledSegment {
    /// Regular text
    Text(String),
    /// Inline code: `like this`
    InlineCode(String),
    /// Fenced code block
    CodeBlock(String),
    /// Line break (soft or hard)
    Break,
    /// End of paragraph (adds blank line for spacing)
    ParagraphEnd,
    /// Heading with level
    Heading { level: u8, text: String },
    /// List item marker (bullet or number)
    ListItemStart {
        ordered: bool,
        number: u64,
        depth: usize,
    },
    /// End of list item
    ListItemEnd,
    /// Bold text: **like this**
    Bold(String),
    /// Italic text: *like this*
    Italic(String),
    /// Start of blockquote (> prefix)
    BlockQuoteStart,
    /// End of blockquote
    BlockQuoteEnd,
    /// Horizontal rule (---)
    Rule,
}

/// Parse markdown into styled segments
pub fn parse_markdown(markdown: &str) -> Vec<StyledSegment> {
    let mut segments = Vec::new();
    let mut in_code_block = false;
    let mut in_heading: Option<u8> = None;
    let mut code_block_content = String::new();
    let mut heading_content = String::new();
    // Stack of (ordered, next_number) for nested lists
    let mut list_stack: Vec<(bool, u64)> = Vec::new();

    // Inline formatting state
    let mut in_bold = false;
    let mut in_italic = false;
    let mut inline_content = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Code(code) => {
                if in_heading.is_some() {
                    heading_content.push_str(&code);
                } else {
                    segments.push(StyledSegment::InlineCode(code.to_string()));
                }
            }

            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = Some(match level {
                    HeadingLevel::H1 => 1,
                    HeadingLevel::H2 => 2,
                    HeadingLevel::H3 => 3,
                    HeadingLevel::H4 => 4,
                    HeadingLevel::H5 => 5,
                    HeadingLevel::H6 => 6,
                });
                heading_content.clear();
            }

            Event::End(TagEnd::Heading(_)) => {
                if let Some(level) = in_heading.take() {
                    segments.push(StyledSegment::Heading {
                        level,
                        text: std::mem::take(&mut heading_content),
                    });
                }
            }

            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                // Language is not highlighted, only recorded by the parser
                if let CodeBlockKind::Fenced(_) | CodeBlockKind::Indented = kind {
                    code_block_content.clear();
                }
            }

            Event::Text(text) if in_code_block => code_block_content.push_str(&text),
            Event::Text(text) if in_heading.is_some() => heading_content.push_str(&text),
            Event::Text(text) if in_bold || in_italic => inline_content.push_str(&text),
            Event::Text(text) => segments.push(StyledSegment::Text(text.to_string())),

            Event::End(TagEnd::CodeBlock) => {
                segments.push(StyledSegment::CodeBlock(std::mem::take(
                    &mut code_block_content,
                )));
                in_code_block = false;
            }

            Event::End(TagEnd::Paragraph) => segments.push(StyledSegment::ParagraphEnd),

            Event::SoftBreak | Event::HardBreak => {
                if in_heading.is_some() {
                    heading_content.push(' ');
                } else {
                    segments.push(StyledSegment::Break);
                }
            }

            Event::Start(Tag::List(first_number)) => {
                list_stack.push((first_number.is_some(), first_number.unwrap_or(1)));
            }

            Event::End(TagEnd::List(_)) => {
                list_stack.pop();
                if list_stack.is_empty() {
                    segments.push(StyledSegment::ParagraphEnd);
                }
            }

            Event::Start(Tag::Item) => {
                let depth = list_stack.len();
                if let Some((ordered, number)) = list_stack.last_mut() {
                    segments.push(StyledSegment::ListItemStart {
                        ordered: *ordered,
                        number: *number,
                        depth,
                    });
                    *number += 1;
                }
            }

            Event::End(TagEnd::Item) => segments.push(StyledSegment::ListItemEnd),

            Event::Start(Tag::Strong) => {
                in_bold = true;
                inline_content.clear();
            }

            Event::End(TagEnd::Strong) => {
                if !inline_content.is_empty() {
                    segments.push(StyledSegment::Bold(std::mem::take(&mut inline_content)));
                }
                in_bold = false;
            }

            Event::Start(Tag::Emphasis) => {
                in_italic = true;
                inline_content.clear();
            }

            Event::End(TagEnd::Emphasis) => {
                if !inline_content.is_empty() {
                    segments.push(StyledSegment::Italic(std::mem::take(&mut inline_content)));
                }
                in_italic = false;
            }

            Event::Start(Tag::BlockQuote) => segments.push(StyledSegment::BlockQuoteStart),
            Event::End(TagEnd::BlockQuote) => segments.push(StyledSegment::BlockQuoteEnd),
            Event::Rule => segments.push(StyledSegment::Rule),

            _ => {}
        }
    }

    segments
}

/// Wrap text to fit within width, breaking at word boundaries
/// (or inside a word that is wider than the whole line)
/// Preserves leading/trailing whitespace to maintain spacing between segments
///
/// Uses unicode display width for correct handling of emojis, CJK, etc.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let leading_space = text.starts_with(char::is_whitespace);
    let trailing_space = text.ends_with(char::is_whitespace);

    let mut result = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0usize;

    if leading_space {
        current_line.push(' ');
        current_width = 1;
    }

    for word in text.split_whitespace() {
        let word_width = word.width();
        let at_start = current_line.trim_start().is_empty();
        let gap = usize::from(!at_start);

        if current_width + gap + word_width <= width {
            if !at_start {
                current_line.push(' ');
            }
            current_line.push_str(word);
            current_width += gap + word_width;
            continue;
        }

        if !at_start {
            result.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        // Words wider than a line are broken at the column limit
        for c in word.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width > 0 && current_width + char_width > width {
                result.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            current_line.push(c);
            current_width += char_width;
        }
    }

    if trailing_space && !current_line.is_empty() && current_width < width {
        current_line.push(' ');
    }

    if !current_line.is_empty() {
        result.push(current_line);
    }

    // Whitespace-only input
    if result.is_empty() {
        result.push(text.to_string());
    }

    result
}

/// Convert parsed segments to ratatui Lines for rendering
///
/// Width controls wrapping so the caller can compute scroll bounds from
/// the returned line count.
pub fn segments_to_lines(
    segments: &[StyledSegment],
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current_spans: Vec<Span<'static>> = Vec::new();
    let mut current_width: usize = 0;

    let flush_line = |lines: &mut Vec<Line<'static>>, spans: &mut Vec<Span<'static>>| {
        if !spans.is_empty() {
            lines.push(Line::from(std::mem::take(spans)));
        }
    };

    let text_style = Style::default().fg(theme.foreground);

    // Inline spans share one wrapping path
    let mut push_inline = |lines: &mut Vec<Line<'static>>,
                           spans: &mut Vec<Span<'static>>,
                           current_width: &mut usize,
                           text: &str,
                           style: Style| {
        for (j, wrapped_line) in wrap_text(text, width).into_iter().enumerate() {
            let line_width = wrapped_line.width();
            if j > 0 || (*current_width > 0 && *current_width + line_width > width) {
                flush_line(lines, spans);
                *current_width = 0;
            }
            *current_width += line_width;
            spans.push(Span::styled(wrapped_line, style));
        }
    };

    for segment in segments {
        match segment {
            StyledSegment::Text(text) => {
                let parts: Vec<&str> = text.split('\n').collect();
                for (i, part) in parts.iter().enumerate() {
                    if !part.is_empty() {
                        push_inline(
                            &mut lines,
                            &mut current_spans,
                            &mut current_width,
                            part,
                            text_style,
                        );
                    }
                    if i < parts.len() - 1 {
                        flush_line(&mut lines, &mut current_spans);
                        current_width = 0;
                    }
                }
            }

            StyledSegment::InlineCode(code) => {
                current_spans.push(Span::styled(
                    code.clone(),
                    Style::default().fg(theme.code_inline),
                ));
                current_width += code.width();
            }

            StyledSegment::CodeBlock(code) => {
                flush_line(&mut lines, &mut current_spans);
                current_width = 0;
                for line in code.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", line),
                        Style::default().fg(theme.code_block),
                    )));
                }
                lines.push(Line::from(""));
            }

            StyledSegment::Break | StyledSegment::ListItemEnd => {
                flush_line(&mut lines, &mut current_spans);
                current_width = 0;
            }

            StyledSegment::ParagraphEnd => {
                flush_line(&mut lines, &mut current_spans);
                lines.push(Line::from(""));
                current_width = 0;
            }

            StyledSegment::Heading { level, text } => {
                flush_line(&mut lines, &mut current_spans);
                current_width = 0;

                let style = match level {
                    1 => Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                    2 => Style::default()
                        .fg(theme.secondary)
                        .add_modifier(Modifier::BOLD),
                    _ => Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                };
                for wrapped in wrap_text(text, width) {
                    lines.push(Line::from(Span::styled(wrapped, style)));
                }
                lines.push(Line::from(""));
            }

            StyledSegment::ListItemStart {
                ordered,
                number,
                depth,
            } => {
                flush_line(&mut lines, &mut current_spans);

                let indent = "  ".repeat(depth.saturating_sub(1));
                let marker = if *ordered {
                    format!("{}{}. ", indent, number)
                } else {
                    format!("{}• ", indent)
                };
                current_width = marker.width();
                current_spans.push(Span::styled(marker, Style::default().fg(theme.muted)));
            }

            StyledSegment::Bold(text) => push_inline(
                &mut lines,
                &mut current_spans,
                &mut current_width,
                text,
                text_style.add_modifier(Modifier::BOLD),
            ),

            StyledSegment::Italic(text) => push_inline(
                &mut lines,
                &mut current_spans,
                &mut current_width,
                text,
                text_style.add_modifier(Modifier::ITALIC),
            ),

            StyledSegment::BlockQuoteStart => {
                flush_line(&mut lines, &mut current_spans);
                current_spans.push(Span::styled(
                    "│ ".to_string(),
                    Style::default().fg(theme.border),
                ));
                current_width = 2;
            }

            StyledSegment::BlockQuoteEnd => {
                flush_line(&mut lines, &mut current_spans);
                current_width = 0;
            }

            StyledSegment::Rule => {
                flush_line(&mut lines, &mut current_spans);
                let rule = "─".repeat(width.saturating_sub(4).max(10));
                lines.push(Line::from(Span::styled(
                    rule,
                    Style::default().fg(theme.border),
                )));
                current_width = 0;
            }
        }
    }

    flush_line(&mut lines, &mut current_spans);

    // Trailing blank lines only pad the scroll range
    while lines.last().is_some_and(|l| l.width() == 0) {
        lines.pop();
    }

    lines
}

/// Strip control characters that can cause TUI rendering artifacts
///
/// Removes carriage returns, backspace, ANSI escape sequences and other
/// ASCII control characters except tab and newline.
pub fn sanitize_for_tui(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' => {
                // ESC [ <params> <letter>
                if chars.peek() == Some(&'[') {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
            }
            '\r' | '\x08' | '\x7f' => {}
            c if c.is_ascii_control() && c != '\t' && c != '\n' => {}
            _ => result.push(ch),
        }
    }

    result
}

/// High-level: parse markdown and convert directly to Lines
pub fn render_markdown(markdown: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let sanitized = sanitize_for_tui(markdown);
    segments_to_lines(&parse_markdown(&sanitized), width, theme)
}
