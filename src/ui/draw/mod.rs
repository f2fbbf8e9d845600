//! Drawing functions for the TUI
//!
//! This module contains all rendering logic, split by screen:
//! - `home` - greeting, calendar strip, workout title, card grid
//! - `nutrition` - calories card, macro row, meals list
//! - `profile` - user block, stats, achievements, settings menu
//! - `misc` - Workouts placeholder and the Dashboard splash
//!
//! Every frame returns its hit map so the event loop can translate mouse
//! coordinates back into the targets that were on screen.

mod home;
mod misc;
mod nutrition;
mod profile;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Tab};
use crate::cards::CARD_LIMIT;
use crate::ui::hit::{HitMap, HitTarget};
use crate::ui::theme::Theme;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) -> HitMap {
    let theme = app.theme();
    let mut hits = HitMap::new();

    // Fill background with theme color
    let area = f.area();
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Screen body
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    match app.tab() {
        Tab::Home => home::draw_home(f, app, chunks[0], theme, &mut hits),
        Tab::Workouts => misc::draw_workouts(f, chunks[0], theme),
        Tab::Nutrition => nutrition::draw_nutrition(f, app, chunks[0], theme),
        Tab::Profile => profile::draw_profile(f, app, chunks[0], theme, &mut hits),
        Tab::Dashboard => misc::draw_dashboard(f, chunks[0], theme),
    }

    draw_tab_bar(f, app, chunks[1], theme, &mut hits);
    draw_status_bar(f, app, chunks[2], theme);

    hits
}

/// Draw the bottom tab bar; the active tab gets the primary color
fn draw_tab_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme, hits: &mut HitMap) {
    let buf = f.buffer_mut();
    let mut x = area.x + 1;

    for (index, tab) in Tab::ALL.iter().enumerate() {
        let label = format!(" {} ", tab.title());
        let width = label.width() as u16;
        if x + width > area.x + area.width {
            break;
        }

        let style = if *tab == app.tab() {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.secondary_text)
        };
        buf.set_string(x, area.y, &label, style);
        hits.push(
            Rect {
                x,
                y: area.y,
                width,
                height: 1,
            },
            HitTarget::Tab(index),
        );
        x += width + 1;
    }
}

/// Draw the status bar with key hints for the active screen
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let delete_mode = app.tab() == Tab::Home && app.cards().is_delete_mode();

    let status = if delete_mode {
        " delete mode | Enter/x: remove | click [-]: remove | Esc/background: done".to_string()
    } else {
        match app.tab() {
            Tab::Home => format!(
                " {}/{} cards | a: add | d: delete mode | [ ]: day | Tab: screens | q: quit",
                app.cards().len(),
                CARD_LIMIT
            ),
            Tab::Profile => " ↑↓: menu | Enter/Space: select | Tab: screens | q: quit".to_string(),
            _ => " Tab: screens | 1-5: jump | q: quit".to_string(),
        }
    };

    let color = if delete_mode { theme.error } else { theme.dimmed };
    let status_bar = Paragraph::new(status).style(Style::default().fg(color).bg(theme.background));
    f.render_widget(status_bar, area);
}
