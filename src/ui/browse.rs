//! Interactive catalog browser built on ratatui.
//!
//! This is a rendering adapter: every mutation goes through
//! [`BrowserState`], and cards are materialized from [`CardView`] plain
//! data. Keyboard/mouse events map onto the same interactions the catalog
//! page exposes: live search, category/difficulty selection, card preview,
//! and the three equivalent ways of dismissing the preview overlay (close
//! key, Esc, click on the backdrop).

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use anyhow::bail;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::catalog::store::CatalogSource;
use crate::ui::modal::CloseTrigger;
use crate::ui::state::BrowserState;
use crate::view::card::{CardView, EMPTY_RESULT_MESSAGE};

/// Action to take after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    Continue,
}

struct BrowseTui {
    state: BrowserState,
    list_state: ListState,
    search_focused: bool,
    detail_scroll: u16,
    /// Screen region of the modal dialog in the last frame; clicks outside it
    /// land on the backdrop.
    modal_area: Option<Rect>,
    note: Option<String>,
}

impl BrowseTui {
    fn new(state: BrowserState) -> Self {
        let mut list_state = ListState::default();
        if state.visible_count() > 0 {
            list_state.select(Some(0));
        }
        Self {
            state,
            list_state,
            search_focused: false,
            detail_scroll: 0,
            modal_area: None,
            note: None,
        }
    }

    fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key.code, key.modifiers) == Action::Quit {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(&mouse),
                    _ => {}
                }
            }
        }
    }

    // Selection lives in the adapter; any filter change resets it to the top
    // of the (fully re-rendered) visible list.
    fn sync_selection(&mut self) {
        if self.state.visible_count() == 0 {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
        self.detail_scroll = 0;
    }

    fn selected_card(&self) -> Option<CardView> {
        self.state.visible_card(self.list_state.selected()?)
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Action {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        // While the preview is open it captures all input; the list behind it
        // neither scrolls nor refilters.
        if self.state.modal().is_open() {
            self.handle_modal_key(key);
            return Action::Continue;
        }

        if self.search_focused {
            self.handle_search_key(key);
            return Action::Continue;
        }

        match key {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('/') => self.search_focused = true,
            KeyCode::Char('c') => {
                self.state.cycle_category();
                self.sync_selection();
            }
            KeyCode::Char('d') => {
                self.state.cycle_difficulty();
                self.sync_selection();
            }
            KeyCode::Esc => {
                self.state.clear_filters();
                self.sync_selection();
                self.note = Some("Filters cleared".to_string());
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Char('g') => {
                if self.state.visible_count() > 0 {
                    self.list_state.select(Some(0));
                    self.detail_scroll = 0;
                }
            }
            KeyCode::Char('G') => {
                let count = self.state.visible_count();
                if count > 0 {
                    self.list_state.select(Some(count - 1));
                    self.detail_scroll = 0;
                }
            }
            KeyCode::PageDown => self.detail_scroll = self.detail_scroll.saturating_add(3),
            KeyCode::PageUp => self.detail_scroll = self.detail_scroll.saturating_sub(3),
            KeyCode::Enter | KeyCode::Char('p') => {
                if let Some(position) = self.list_state.selected() {
                    if !self.state.open_preview(position) {
                        self.note = Some("No document to preview".to_string());
                    }
                }
            }
            KeyCode::Char('o') => self.open_selected_link(),
            _ => {}
        }
        Action::Continue
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            // The search input filters live on every keystroke.
            KeyCode::Char(c) => {
                let mut term = self.state.criteria().search.clone();
                term.push(c);
                self.state.set_search(term);
                self.sync_selection();
            }
            KeyCode::Backspace => {
                let mut term = self.state.criteria().search.clone();
                term.pop();
                self.state.set_search(term);
                self.sync_selection();
            }
            KeyCode::Enter | KeyCode::Esc => self.search_focused = false,
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.state.close_preview(CloseTrigger::CancelKey),
            KeyCode::Char('x') | KeyCode::Char('q') => {
                self.state.close_preview(CloseTrigger::CloseAction);
            }
            KeyCode::Enter | KeyCode::Char('o') => {
                if let Some(url) = self.state.modal().url() {
                    self.note = match open::that(url) {
                        Ok(()) => Some("Opened in system viewer".to_string()),
                        Err(err) => Some(format!("Could not open viewer: {err}")),
                    };
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if self.state.modal().is_open() {
            let position = Position::new(mouse.column, mouse.row);
            let on_dialog = self
                .modal_area
                .is_some_and(|area| area.contains(position));
            if !on_dialog {
                self.state.close_preview(CloseTrigger::Backdrop);
            }
        }
    }

    fn open_selected_link(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };
        if card.link.is_empty() {
            self.note = Some("No document link".to_string());
            return;
        }
        self.note = match open::that(&card.link) {
            Ok(()) => Some(format!("Opened {}", card.link)),
            Err(err) => Some(format!("Could not open viewer: {err}")),
        };
    }

    fn select_next(&mut self) {
        let count = self.state.visible_count();
        if count == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 >= count => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(next));
        self.detail_scroll = 0;
    }

    fn select_prev(&mut self) {
        let count = self.state.visible_count();
        if count == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(prev));
        self.detail_scroll = 0;
    }

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title + status line
                Constraint::Length(3), // Search bar
                Constraint::Length(1), // Selector line
                Constraint::Min(8),    // Cards
                Constraint::Length(1), // Help bar
            ])
            .split(f.area());

        self.draw_title_bar(f, chunks[0]);
        self.draw_search_bar(f, chunks[1]);
        self.draw_selector_line(f, chunks[2]);
        self.draw_cards(f, chunks[3]);
        self.draw_help_bar(f, chunks[4]);

        if self.state.modal().is_open() {
            self.draw_modal(f);
        } else {
            self.modal_area = None;
        }
    }

    fn draw_title_bar(&self, f: &mut Frame, area: Rect) {
        let note = self
            .note
            .as_ref()
            .map(|n| format!(" | {n}"))
            .unwrap_or_default();
        let title = Line::from(vec![
            Span::styled("brickdex", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" | {}{note}", self.state.status_line())),
        ]);
        f.render_widget(
            Paragraph::new(title).style(Style::default().fg(Color::Cyan)),
            area,
        );
    }

    fn draw_search_bar(&self, f: &mut Frame, area: Rect) {
        let border_style = if self.search_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let term = &self.state.criteria().search;
        let text = if self.search_focused {
            format!("{term}_")
        } else if term.is_empty() {
            "Type / to search...".to_string()
        } else {
            term.clone()
        };

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" Search "),
            )
            .style(if term.is_empty() && !self.search_focused {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            });
        f.render_widget(paragraph, area);
    }

    fn draw_selector_line(&self, f: &mut Frame, area: Rect) {
        let criteria = self.state.criteria();
        let category = criteria.category.as_deref().unwrap_or("any");
        let difficulty = criteria.difficulty.as_deref().unwrap_or("any");
        let line = Line::from(vec![
            Span::raw(" Category: "),
            Span::styled(category, Style::default().fg(Color::Green)),
            Span::raw("  Difficulty: "),
            Span::styled(difficulty, Style::default().fg(Color::Green)),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn draw_cards(&mut self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        self.draw_list_panel(f, columns[0]);
        self.draw_detail_panel(f, columns[1]);
    }

    fn draw_list_panel(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Instructions ");

        if self.state.is_empty_result() {
            let paragraph = Paragraph::new(EMPTY_RESULT_MESSAGE)
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = (0..self.state.visible_count())
            .filter_map(|position| self.state.visible_card(position))
            .map(|card| {
                let marker = if card.has_preview() { "▸ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Blue)),
                    Span::raw(card.title),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn draw_detail_panel(&self, f: &mut Frame, area: Rect) {
        let content = match self.selected_card() {
            Some(card) => card_text(&card),
            None => Text::from("Nothing selected"),
        };
        let paragraph = Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL).title(" Card "))
            .wrap(Wrap { trim: false })
            .scroll((self.detail_scroll, 0));
        f.render_widget(paragraph, area);
    }

    fn draw_help_bar(&self, f: &mut Frame, area: Rect) {
        let help = if self.state.modal().is_open() {
            "o/Enter: open document  x: close  Esc: close  click outside: close"
        } else if self.search_focused {
            "type to filter  Enter/Esc: done"
        } else {
            "j/k: navigate  /: search  c: category  d: difficulty  Enter: preview  o: open link  Esc: clear  q: quit"
        };
        f.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn draw_modal(&mut self, f: &mut Frame) {
        let area = f.area();
        let width = 72.min(area.width.saturating_sub(4));
        let height = 9.min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let dialog = Rect::new(x, y, width, height);

        let header = self.state.modal().header().unwrap_or_default();
        let url = self.state.modal().url().unwrap_or_default().to_string();

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(url, Style::default().fg(Color::Blue))),
            Line::from(""),
            Line::from("The document is embedded here; press o or Enter"),
            Line::from("to hand it to the system viewer."),
        ];

        f.render_widget(Clear, dialog);
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" {header} ")),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, dialog);

        self.modal_area = Some(dialog);
    }
}

fn card_text(card: &CardView) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(card.meta.clone()),
        Line::from(""),
    ];

    for text_line in card.description.lines() {
        lines.push(Line::from(text_line.to_string()));
    }
    lines.push(Line::from(""));

    if !card.tags.is_empty() {
        let badges = card
            .tags
            .iter()
            .map(|tag| format!("[{tag}]"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            badges,
            Style::default().fg(Color::Magenta),
        )));
        lines.push(Line::from(""));
    }

    if let Some(image) = &card.image {
        lines.push(Line::from(format!("Image: {image}")));
    }
    if !card.link.is_empty() {
        lines.push(Line::from(format!("Document: {}", card.link)));
    }

    Text::from(lines)
}

/// RAII guard so the terminal is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Run the interactive browser against the given catalog source.
pub fn run(source: &CatalogSource) -> anyhow::Result<()> {
    if !io::stdout().is_terminal() {
        bail!("the browse command requires an interactive terminal");
    }

    let mut state = BrowserState::new();
    state.load(source);

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    BrowseTui::new(state).run(&mut terminal)
}
