// Landing view - the whole marketing page as one scrollable column
//
// The page is built as a flat list of lines at the current width, so the
// scroll range and the nav anchors fall out of the line count. Card grids
// are merged side by side line by line; narrow terminals stack them.
//
// Sections, top to bottom:
// - Hero with calls to action and stats
// - Features (anchor 1) with the interactive showcase
// - API (anchor 2): quick start, security, code examples
// - Pricing (anchor 3)
// - About (anchor 4) and the footer

use crate::content::{self, Section, SectionHeader, Stat};
use crate::generation::Mode;
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::components::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::tui::layout::{content_width, Breakpoint};
use crate::tui::markdown::wrap_text;
use crate::tui::traits::Scrollable;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns between side-by-side blocks
const GAP: usize = 2;

/// The built page
pub struct PageLines {
    pub lines: Vec<Line<'static>>,
    /// First line of each nav section, in `Section::ALL` order
    pub anchors: [usize; 4],
}

/// A bordered box in a card grid
struct Card {
    body: Vec<Line<'static>>,
    border: Style,
    badge: Option<Span<'static>>,
}

impl Card {
    fn new(body: Vec<Line<'static>>, border: Style) -> Self {
        Self {
            body,
            border,
            badge: None,
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let bp = Breakpoint::from_width(area.width);
    let width = content_width(area.width).min(area.width);
    let page = build(app, width as usize, bp);

    app.landing.set_anchors(page.anchors);
    app.landing
        .update_dimensions(page.lines.len(), area.height as usize);

    let column = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        width,
        ..area
    };
    let paragraph = Paragraph::new(page.lines).scroll((app.landing.scroll_offset() as u16, 0));
    f.render_widget(paragraph, column);

    render_scrollbar(
        f,
        area,
        app.landing.scroll_state(),
        ScrollbarStyle::Arrows,
        &app.theme,
    );
}

/// Build every line of the page at `width`
pub fn build(app: &App, width: usize, bp: Breakpoint) -> PageLines {
    let theme = &app.theme;
    let mut lines = Vec::new();
    let mut anchors = [0; 4];

    lines.extend(hero(width, bp, theme));

    for (i, section) in Section::ALL.iter().enumerate() {
        anchors[i] = lines.len();
        let body = match section {
            Section::Features => features(app, width, bp),
            Section::Api => api(app, width, bp),
            Section::Pricing => pricing(width, bp, theme),
            Section::About => about(width, bp, theme),
        };
        lines.extend(body);
    }

    lines.extend(footer(width, bp, theme));

    PageLines { lines, anchors }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

fn hero(width: usize, bp: Breakpoint, theme: &Theme) -> Vec<Line<'static>> {
    let hero = &content::HERO;
    let bold = Modifier::BOLD;
    let mut lines = vec![
        blank(),
        Line::from(Span::styled(
            format!("✦ {}", hero.badge),
            Style::default().fg(theme.accent),
        ))
        .centered(),
        blank(),
        Line::from(Span::styled(
            hero.headline,
            Style::default().fg(theme.foreground).add_modifier(bold),
        ))
        .centered(),
        Line::from(Span::styled(
            hero.headline_accent,
            Style::default().fg(theme.primary).add_modifier(bold),
        ))
        .centered(),
        blank(),
    ];

    lines.extend(centered_wrapped(
        hero.subtitle,
        width.min(70),
        Style::default().fg(theme.muted),
    ));
    lines.push(blank());

    lines.push(
        Line::from(vec![
            Span::styled(
                format!("[ Enter: {} ]", hero.primary_cta),
                Style::default().fg(theme.secondary).add_modifier(bold),
            ),
            Span::raw("   "),
            Span::styled(
                format!("[ {} ]", hero.secondary_cta),
                Style::default().fg(theme.muted),
            ),
        ])
        .centered(),
    );
    lines.push(blank());
    lines.extend(stat_rows(&content::HERO_STATS, width, bp, theme));
    lines.push(blank());
    lines
}

fn features(app: &App, width: usize, bp: Breakpoint) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let mut lines = section_header(&content::FEATURES_HEADER, width, theme);

    let columns = bp.card_columns(content::FEATURES.len());
    let inner = card_inner_width(width, columns);
    let cards = content::FEATURES
        .iter()
        .map(|feature| {
            let mut body = wrapped(
                &format!("{} {}", feature.icon, feature.title),
                inner,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            );
            body.push(blank());
            body.extend(wrapped(
                feature.description,
                inner,
                Style::default().fg(theme.foreground),
            ));
            body.push(blank());
            body.push(Line::from(Span::styled(
                content::FEATURE_LINK,
                Style::default().fg(theme.accent),
            )));
            Card::new(body, Style::default().fg(theme.border))
        })
        .collect();
    lines.extend(card_grid(cards, columns, width));

    // Showcase shares the assistant's mode
    let mode = app.session.mode();
    let showcase = content::showcase(mode);
    lines.push(
        Line::from(Span::styled(
            content::SHOWCASE_TITLE,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );
    lines.extend(centered_wrapped(
        content::SHOWCASE_SUBTITLE,
        width,
        Style::default().fg(theme.muted),
    ));
    lines.push(blank());
    lines.push(tabs(mode, Mode::label, "t/T", theme).centered());

    let inner = card_inner_width(width, 1);
    let mut body = wrapped(showcase.prompt_label, inner, Style::default().fg(theme.muted));
    body.extend(wrapped(
        showcase.prompt,
        inner,
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::ITALIC),
    ));
    body.push(blank());
    match mode {
        Mode::Code => body.extend(code_lines(showcase.result, theme)),
        Mode::Text | Mode::Image => body.extend(wrapped(
            showcase.result,
            inner,
            Style::default().fg(theme.foreground),
        )),
    }
    lines.extend(card_grid(
        vec![Card::new(body, Style::default().fg(theme.highlight))],
        1,
        width,
    ));
    lines
}

fn api(app: &App, width: usize, bp: Breakpoint) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let landing = &app.landing;
    let mut lines = section_header(&content::API_HEADER, width, theme);

    let columns = if bp.at_least(Breakpoint::Wide) { 2 } else { 1 };
    let inner = card_inner_width(width, columns);
    let heading = Style::default()
        .fg(theme.foreground)
        .add_modifier(Modifier::BOLD);

    // Quick start accordion and security notes
    let mut steps = wrapped(content::QUICK_START_TITLE, inner, heading);
    steps.extend(wrapped(
        content::QUICK_START_SUBTITLE,
        inner,
        Style::default().fg(theme.muted),
    ));
    steps.push(blank());
    for (i, step) in content::QUICK_START.iter().enumerate() {
        let open = landing.open_step == Some(i);
        let (marker, style) = if open {
            ("▾", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
        } else {
            ("▸", Style::default().fg(theme.foreground))
        };
        steps.extend(wrapped(
            &format!("{} {}. {}", marker, i + 1, step.title),
            inner,
            style,
        ));
        if open {
            steps.extend(
                wrapped(step.body, inner.saturating_sub(4), Style::default().fg(theme.muted))
                    .into_iter()
                    .map(|l| indent(l, 4)),
            );
        }
    }
    steps.push(Line::from(Span::styled(
        "o: следующий шаг",
        Style::default().fg(theme.muted),
    )));
    steps.push(blank());
    steps.extend(wrapped(content::SECURITY_TITLE, inner, heading));
    for note in content::SECURITY_NOTES {
        steps.extend(wrapped(
            &format!("• {}", note),
            inner,
            Style::default().fg(theme.foreground),
        ));
    }

    // Code examples
    let mut examples = wrapped(content::API_EXAMPLES_TITLE, inner, heading);
    examples.push(tabs(landing.api_tab, content::api_tab_label, "a/A", theme));
    examples.push(blank());
    examples.extend(code_lines(content::api_example(landing.api_tab), theme));
    examples.push(blank());
    examples.push(Line::from(Span::styled(
        "y: копировать пример",
        Style::default().fg(theme.muted),
    )));

    let border = Style::default().fg(theme.border);
    lines.extend(card_grid(
        vec![Card::new(steps, border), Card::new(examples, border)],
        columns,
        width,
    ));
    lines
}

fn pricing(width: usize, bp: Breakpoint, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = section_header(&content::PRICING_HEADER, width, theme);

    let columns = bp.card_columns(content::PLANS.len());
    let inner = card_inner_width(width, columns);
    let cards = content::PLANS
        .iter()
        .map(|plan| {
            let mut body = vec![Line::from(Span::styled(
                plan.name,
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ))];
            body.extend(wrapped(
                plan.description,
                inner,
                Style::default().fg(theme.muted),
            ));
            body.push(blank());
            body.push(Line::from(Span::styled(
                plan.price.display(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            body.push(blank());
            for feature in plan.features {
                let mut rows = wrapped(feature, inner.saturating_sub(2), Style::default().fg(theme.foreground))
                    .into_iter();
                if let Some(first) = rows.next() {
                    let mut spans = vec![Span::styled("✓ ", Style::default().fg(theme.success))];
                    spans.extend(first.spans);
                    body.push(Line::from(spans));
                }
                body.extend(rows.map(|l| indent(l, 2)));
            }
            body.push(blank());

            let cta_style = if plan.popular {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.secondary)
            };
            body.push(Line::from(Span::styled(
                format!("[ {} ]", plan.price.cta()),
                cta_style,
            )));

            let mut card = Card::new(body, Style::default().fg(theme.border));
            if plan.popular {
                card.border = Style::default().fg(theme.primary);
                card.badge = Some(Span::styled(
                    content::POPULAR_BADGE,
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            card
        })
        .collect();

    lines.extend(card_grid(cards, columns, width));
    lines
}

fn about(width: usize, bp: Breakpoint, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = section_header(&content::ABOUT_HEADER, width, theme);

    lines.extend(centered_wrapped(
        content::MISSION,
        width.min(80),
        Style::default().fg(theme.foreground),
    ));
    lines.push(blank());

    let columns = bp.card_columns(content::PILLARS.len());
    let inner = card_inner_width(width, columns);
    let cards = content::PILLARS
        .iter()
        .map(|pillar| {
            let mut body = wrapped(
                pillar.title,
                inner,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            );
            body.extend(wrapped(
                pillar.body,
                inner,
                Style::default().fg(theme.foreground),
            ));
            Card::new(body, Style::default().fg(theme.border))
        })
        .collect();
    lines.extend(card_grid(cards, columns, width));

    lines.push(
        Line::from(Span::styled(
            content::ACHIEVEMENTS_TITLE,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );
    lines.push(blank());
    lines.extend(stat_rows(&content::ACHIEVEMENTS, width, bp, theme));
    lines.push(blank());
    lines
}

fn footer(width: usize, bp: Breakpoint, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(theme.border),
    ))];

    lines.push(Line::from(Span::styled(
        format!("✦ {}", content::BRAND),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )));
    lines.extend(wrapped(
        content::TAGLINE,
        width,
        Style::default().fg(theme.muted),
    ));
    lines.push(blank());

    let blocks: Vec<Vec<Line<'static>>> = content::FOOTER_COLUMNS
        .iter()
        .map(|column| {
            let mut block = vec![Line::from(Span::styled(
                column.title,
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ))];
            block.extend(column.links.iter().map(|link| {
                Line::from(Span::styled(*link, Style::default().fg(theme.muted)))
            }));
            block
        })
        .collect();

    let columns = bp.card_columns(blocks.len());
    let col_width = column_width(width, columns);
    for row in blocks.chunks(columns) {
        lines.extend(merge_columns(row, col_width));
        lines.push(blank());
    }

    lines.push(
        Line::from(Span::styled(
            content::SOCIAL_LINKS.join(" · "),
            Style::default().fg(theme.secondary),
        ))
        .centered(),
    );
    lines.push(
        Line::from(Span::styled(
            content::COPYRIGHT,
            Style::default().fg(theme.muted),
        ))
        .centered(),
    );
    lines.push(blank());
    lines
}

// ─────────────────────────────────────────────────────────────────────────────
// Building blocks
// ─────────────────────────────────────────────────────────────────────────────

fn blank() -> Line<'static> {
    Line::default()
}

fn wrapped(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l.trim().to_string(), style)))
        .collect()
}

fn centered_wrapped(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrapped(text, width, style)
        .into_iter()
        .map(Line::centered)
        .collect()
}

fn indent(line: Line<'static>, by: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(by))];
    spans.extend(line.spans);
    Line::from(spans)
}

/// Source code verbatim, one line per source line
fn code_lines(code: &str, theme: &Theme) -> Vec<Line<'static>> {
    code.lines()
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default().fg(theme.code_block),
            ))
        })
        .collect()
}

/// Badge, two-tone title and subtitle over a section
fn section_header(header: &SectionHeader, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let title = Style::default()
        .fg(theme.foreground)
        .add_modifier(Modifier::BOLD);
    let accent = Style::default()
        .fg(theme.primary)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        blank(),
        Line::from(Span::styled(
            format!("◆ {}", header.badge),
            Style::default().fg(theme.accent),
        ))
        .centered(),
    ];

    if header.title.width() + header.title_accent.width() <= width {
        lines.push(
            Line::from(vec![
                Span::styled(header.title, title),
                Span::styled(header.title_accent, accent),
            ])
            .centered(),
        );
    } else {
        lines.extend(centered_wrapped(header.title, width, title));
        lines.extend(centered_wrapped(header.title_accent, width, accent));
    }

    if !header.subtitle.is_empty() {
        lines.extend(centered_wrapped(
            header.subtitle,
            width,
            Style::default().fg(theme.muted),
        ));
    }
    lines.push(blank());
    lines
}

/// Tab strip with the selected tab highlighted and its key hint
fn tabs(
    selected: Mode,
    label: fn(Mode) -> &'static str,
    keys: &'static str,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = Vec::new();
    for mode in Mode::ALL {
        let style = if mode == selected {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!(" {} ", label(mode)), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!("({})", keys),
        Style::default().fg(theme.muted),
    ));
    Line::from(spans)
}

/// Value/label pairs in as many columns as the labels allow
fn stat_rows(stats: &[Stat], width: usize, bp: Breakpoint, theme: &Theme) -> Vec<Line<'static>> {
    let widest = stats
        .iter()
        .map(|s| s.label.width().max(s.value.width()))
        .max()
        .unwrap_or(0);

    let mut columns = if bp == Breakpoint::Compact { 1 } else { stats.len() };
    while columns > 1 && column_width(width, columns) < widest {
        columns -= 1;
    }
    let col_width = column_width(width, columns);

    let mut lines = Vec::new();
    for row in stats.chunks(columns.max(1)) {
        let blocks: Vec<Vec<Line<'static>>> = row
            .iter()
            .map(|stat| {
                vec![
                    Line::from(center_in(
                        stat.value,
                        col_width,
                        Style::default()
                            .fg(theme.primary)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(center_in(
                        stat.label,
                        col_width,
                        Style::default().fg(theme.muted),
                    )),
                ]
            })
            .collect();
        lines.extend(merge_columns(&blocks, col_width));
    }
    lines
}

/// Width of each of `columns` side-by-side blocks
fn column_width(width: usize, columns: usize) -> usize {
    let columns = columns.max(1);
    width.saturating_sub(GAP * (columns - 1)) / columns
}

/// Text width available inside a card
fn card_inner_width(width: usize, columns: usize) -> usize {
    column_width(width, columns).saturating_sub(4).max(1)
}

/// `text` padded on both sides to sit in the middle of `width`
fn center_in(text: &'static str, width: usize, style: Style) -> Vec<Span<'static>> {
    let pad = width.saturating_sub(text.width()) / 2;
    vec![Span::raw(" ".repeat(pad)), Span::styled(text, style)]
}

/// Truncate or pad `spans` to exactly `width` columns
fn fit(spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    let mut used = 0;

    for span in spans {
        let w = span.content.width();
        if used + w <= width {
            used += w;
            out.push(span);
            continue;
        }
        let mut cut = String::new();
        for c in span.content.chars() {
            let cw = c.width().unwrap_or(0);
            if used + cw > width {
                break;
            }
            cut.push(c);
            used += cw;
        }
        out.push(Span::styled(cut, span.style));
        break;
    }

    if used < width {
        out.push(Span::raw(" ".repeat(width - used)));
    }
    out
}

/// Lay blocks side by side, each `col_width` wide
fn merge_columns(blocks: &[Vec<Line<'static>>], col_width: usize) -> Vec<Line<'static>> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            let mut spans = Vec::new();
            for (i, block) in blocks.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" ".repeat(GAP)));
                }
                let line = block.get(row).cloned().unwrap_or_default();
                spans.extend(fit(line.spans, col_width));
            }
            Line::from(spans)
        })
        .collect()
}

/// Draw `card` as a box `width` wide with `height` body rows
fn boxed(card: &Card, width: usize, height: usize) -> Vec<Line<'static>> {
    let width = width.max(4);
    let inner = width - 4;
    let border = card.border;

    let top = match &card.badge {
        Some(badge) => {
            let rest = width.saturating_sub(5 + badge.content.width());
            Line::from(vec![
                Span::styled("╭─ ", border),
                badge.clone(),
                Span::styled(format!(" {}╮", "─".repeat(rest)), border),
            ])
        }
        None => Line::from(Span::styled(
            format!("╭{}╮", "─".repeat(width - 2)),
            border,
        )),
    };

    let mut lines = vec![top];
    for row in 0..height {
        let line = card.body.get(row).cloned().unwrap_or_default();
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(fit(line.spans, inner));
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width - 2)),
        border,
    )));
    lines
}

/// Cards in rows of `columns`, every card in a row the same height
fn card_grid(cards: Vec<Card>, columns: usize, width: usize) -> Vec<Line<'static>> {
    let columns = columns.max(1);
    let col_width = column_width(width, columns);
    let mut lines = Vec::new();

    for row in cards.chunks(columns) {
        let height = row.iter().map(|c| c.body.len()).max().unwrap_or(0);
        let boxes: Vec<Vec<Line<'static>>> =
            row.iter().map(|card| boxed(card, col_width, height)).collect();
        lines.extend(merge_columns(&boxes, col_width));
        lines.push(blank());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::clipboard::MemoryClipboard;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn page_text(page: &PageLines) -> Vec<String> {
        page.lines.iter().map(text).collect()
    }

    fn app() -> App {
        App::for_test(Box::new(MemoryClipboard::default()))
    }

    #[test]
    fn anchors_point_at_section_badges() {
        let app = app();
        let page = build(&app, 100, Breakpoint::Wide);
        let lines = page_text(&page);

        let badges = ["Возможности", "API Документация", "Тарифы", "О проекте"];
        for (anchor, badge) in page.anchors.iter().zip(badges) {
            // Blank line, then the badge
            assert_eq!(lines[anchor + 1], format!("◆ {}", badge));
        }
        assert!(page.anchors.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn pricing_shows_plans_badge_and_ctas() {
        let app = app();
        let all = page_text(&build(&app, 120, Breakpoint::Wide)).join("\n");

        assert!(all.contains("2990 ₽/мес"));
        assert!(all.contains("0 ₽/мес"));
        assert!(all.contains("По запросу"));
        assert!(all.contains("[ Связаться с нами ]"));
        assert_eq!(all.matches("[ Выбрать план ]").count(), 2);
        assert_eq!(all.matches(content::POPULAR_BADGE).count(), 1);
    }

    #[test]
    fn narrow_terminals_stack_plans() {
        let app = app();
        let lines = page_text(&build(&app, 50, Breakpoint::Compact));
        let row_with = |needle: &str| lines.iter().position(|l| l.contains(needle)).unwrap();

        // Stacked: each plan name on its own row
        let starter = row_with("Starter");
        let pro = lines.iter().position(|l| l.contains("│ Pro ")).unwrap();
        assert!(starter < pro);
        assert!(!lines[starter].contains("Enterprise"));

        // Cards never overflow the column, code included
        assert!(lines
            .iter()
            .filter(|l| l.starts_with('╭') || l.starts_with('│') || l.starts_with('╰'))
            .all(|l| l.width() <= 50));
    }

    #[test]
    fn wide_terminals_put_plans_side_by_side() {
        let app = app();
        let lines = page_text(&build(&app, 120, Breakpoint::Wide));
        let row = lines
            .iter()
            .find(|l| l.contains("Starter"))
            .unwrap();
        assert!(row.contains("Pro"));
        assert!(row.contains("Enterprise"));
    }

    #[test]
    fn showcase_follows_the_shared_mode() {
        let mut app = app();
        let before = page_text(&build(&app, 100, Breakpoint::Wide)).join("\n");
        assert!(before.contains("Напиши короткое описание нейросети"));

        app.set_mode(Mode::Code);
        let after = page_text(&build(&app, 100, Breakpoint::Wide)).join("\n");
        assert!(after.contains("function isValidEmail"));
    }

    #[test]
    fn accordion_shows_only_the_open_step() {
        let mut app = app();
        let all = page_text(&build(&app, 120, Breakpoint::Wide)).join("\n");
        assert!(all.contains("▾ 1. Получите API ключ"));
        assert!(!all.contains("npm install @mcrellyworld/ai-sdk"));

        app.landing.cycle_step();
        let all = page_text(&build(&app, 120, Breakpoint::Wide)).join("\n");
        assert!(all.contains("▾ 2. Установите SDK"));
        assert!(all.contains("npm install @mcrellyworld/ai-sdk"));
    }

    #[test]
    fn fit_truncates_and_pads() {
        let spans = fit(vec![Span::raw("Привет"), Span::raw("мир")], 8);
        let joined: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(joined, "Приветми");

        let spans = fit(vec![Span::raw("ok")], 5);
        let joined: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(joined, "ok   ");
    }
}
