//! Profile screen drawing functions
//!
//! User block, stats row, achievements strip and the settings menu. The
//! menu is the one interactive element: its rows are hit targets and the
//! notifications row renders as a switch.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::data::{ACHIEVEMENTS, PROFILE_MENU};
use crate::ui::hit::{HitMap, HitTarget};
use crate::ui::theme::Theme;

pub(crate) fn draw_profile(f: &mut Frame, app: &App, area: Rect, theme: &Theme, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(3), // User block
            Constraint::Length(3), // Stats row
            Constraint::Length(3), // Achievements
            Constraint::Min(6),    // Settings menu
        ])
        .split(area);

    draw_user_block(f, app, chunks[0], theme);
    draw_stats_row(f, app, chunks[1], theme);
    draw_achievements(f, chunks[2], theme);
    draw_settings(f, app, chunks[3], theme, hits);
}

fn draw_user_block(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let profile = app.profile();
    let block = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("👤 "),
            Span::styled(
                profile.name.as_str(),
                Style::default()
                    .fg(theme.on_background)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(
            format!("   Primary Goal: {}", profile.primary_goal),
            Style::default().fg(theme.secondary_text),
        ),
    ]);
    f.render_widget(block, area);
}

fn draw_stats_row(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let profile = app.profile();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let age = profile.age.to_string();
    let stats = [
        (" Height ", profile.height.as_str()),
        (" Weight ", profile.weight.as_str()),
        (" Age ", age.as_str()),
    ];
    for ((label, value), cell) in stats.into_iter().zip(cells.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.dimmed))
            .title(label);
        let inner = block.inner(*cell);
        f.render_widget(block, *cell);
        if inner.width == 0 || inner.height == 0 {
            continue;
        }
        f.buffer_mut().set_stringn(
            inner.x,
            inner.y,
            value,
            inner.width as usize,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn draw_achievements(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.dimmed))
        .title(" Achievements ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut spans = Vec::with_capacity(ACHIEVEMENTS.len() * 3);
    for (index, achievement) in ACHIEVEMENTS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::raw(achievement.glyph));
        spans.push(Span::styled(
            format!(" {}", achievement.name),
            Style::default().fg(theme.secondary_text),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Draw the settings menu; each row is a hit target. Row 0 carries the
/// notifications switch, the last row is the sign-out in the error color.
fn draw_settings(f: &mut Frame, app: &App, area: Rect, theme: &Theme, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.dimmed))
        .title(" Settings ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let buf = f.buffer_mut();
    for (index, label) in PROFILE_MENU.iter().enumerate() {
        let y = inner.y + index as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let row = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: 1,
        };
        let is_selected = index == app.profile_row();

        if is_selected {
            for x in row.x..row.x + row.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(theme.surface);
                }
            }
        }

        let is_sign_out = index == PROFILE_MENU.len() - 1;
        let fg = if is_sign_out {
            theme.error
        } else {
            theme.on_background
        };
        let style = if is_selected {
            Style::default().fg(fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fg)
        };
        buf.set_stringn(row.x + 1, y, *label, row.width as usize, style);

        // Notifications row renders its switch right-aligned
        if index == 0 {
            let (knob, state_style) = if app.notifications_enabled() {
                ("● on ", Style::default().fg(theme.success))
            } else {
                ("○ off", Style::default().fg(theme.dimmed))
            };
            let width = knob.width() as u16;
            if width + 2 < row.width {
                buf.set_string(row.x + row.width - width - 1, y, knob, state_style);
            }
        }

        hits.push(row, HitTarget::ProfileRow(index));
    }
}
