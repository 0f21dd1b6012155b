// Landing page component
//
// Owns the page's interactive state: scroll position, the API examples tab,
// the expanded quick-start step and where each nav section starts. Section
// lines are recorded by the landing view on every render, so jumps always
// match the current layout.

use crate::content::{self, Section};
use crate::generation::Mode;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{Copyable, Handled, Interactive, Scrollable, ScrollableInteractive};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug)]
pub struct LandingPage {
    scroll: ScrollState,
    /// Selected tab of the API examples card
    pub api_tab: Mode,
    /// Expanded quick-start step, `None` when all are collapsed
    pub open_step: Option<usize>,
    /// First line of each nav section, in `Section::ALL` order
    anchors: [usize; 4],
}

impl Default for LandingPage {
    fn default() -> Self {
        Self {
            scroll: ScrollState::manual(),
            api_tab: Mode::Text,
            open_step: Some(0),
            anchors: [0; 4],
        }
    }
}

impl LandingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_anchors(&mut self, anchors: [usize; 4]) {
        self.anchors = anchors;
    }

    pub fn anchor(&self, section: Section) -> usize {
        let idx = Section::ALL
            .iter()
            .position(|s| *s == section)
            .unwrap_or(0);
        self.anchors[idx]
    }

    /// Scroll so `section` starts at the top of the viewport
    pub fn jump_to(&mut self, section: Section) {
        let line = self.anchor(section);
        self.scroll.scroll_to(line);
        tracing::debug!(section = section.nav_label(), line, "Jump to section");
    }

    pub fn next_api_tab(&mut self) {
        self.api_tab = self.api_tab.next();
    }

    pub fn prev_api_tab(&mut self) {
        self.api_tab = self.api_tab.prev();
    }

    /// Expand the next quick-start step; after the last one all collapse
    pub fn cycle_step(&mut self) {
        let steps = content::QUICK_START.len();
        self.open_step = match self.open_step {
            None => Some(0),
            Some(i) if i + 1 < steps => Some(i + 1),
            Some(_) => None,
        };
    }
}

impl Scrollable for LandingPage {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for LandingPage {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.jump_to(Section::ALL[idx]);
                Handled::Yes
            }
            KeyCode::Char('a') => {
                self.next_api_tab();
                Handled::Yes
            }
            KeyCode::Char('A') => {
                self.prev_api_tab();
                Handled::Yes
            }
            KeyCode::Char('o') => {
                self.cycle_step();
                Handled::Yes
            }
            _ => self.handle_scroll_keys(key),
        }
    }
}

impl Copyable for LandingPage {
    fn copy_text(&self) -> Option<String> {
        Some(content::api_example(self.api_tab).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_jump_to_recorded_anchors() {
        let mut page = LandingPage::new();
        page.update_dimensions(300, 40);
        page.set_anchors([30, 80, 150, 220]);

        page.handle_key(key('3'));
        assert_eq!(page.scroll_offset(), 150);

        page.handle_key(key('1'));
        assert_eq!(page.scroll_offset(), 30);

        // Clamped to the last full page
        page.handle_key(key('4'));
        assert_eq!(page.scroll_offset(), 220);
        page.set_anchors([30, 80, 150, 290]);
        page.handle_key(key('4'));
        assert_eq!(page.scroll_offset(), 260);
    }

    #[test]
    fn accordion_cycles_through_collapsed() {
        let mut page = LandingPage::new();
        assert_eq!(page.open_step, Some(0));
        page.cycle_step();
        page.cycle_step();
        assert_eq!(page.open_step, Some(2));
        page.cycle_step();
        assert_eq!(page.open_step, None);
        page.cycle_step();
        assert_eq!(page.open_step, Some(0));
    }

    #[test]
    fn copy_follows_the_api_tab() {
        let mut page = LandingPage::new();
        page.handle_key(key('a'));
        page.handle_key(key('a'));
        assert_eq!(page.api_tab, Mode::Code);
        assert_eq!(
            page.copy_text().as_deref(),
            Some(content::api_example(Mode::Code))
        );

        page.handle_key(key('A'));
        assert_eq!(page.api_tab, Mode::Image);
    }

    #[test]
    fn scroll_keys_move_the_page() {
        let mut page = LandingPage::new();
        page.update_dimensions(100, 10);
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        page.handle_key(press(KeyCode::Down));
        assert_eq!(page.scroll_offset(), 1);
        page.handle_key(press(KeyCode::End));
        assert_eq!(page.scroll_offset(), 90);
        page.handle_key(press(KeyCode::PageUp));
        assert_eq!(page.scroll_offset(), 80);
        page.handle_key(press(KeyCode::Home));
        assert_eq!(page.scroll_offset(), 0);
        page.handle_key(key('k'));
        assert_eq!(page.scroll_offset(), 0);
    }

    #[test]
    fn unknown_keys_bubble_up() {
        let mut page = LandingPage::new();
        assert_eq!(page.handle_key(key('x')), Handled::No);
        assert!(page.handle_key(key('j')).was_handled());
    }
}
