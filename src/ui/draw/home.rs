//! Home screen drawing functions
//!
//! Top to bottom: greeting, the 15-day calendar strip, the workout title
//! and the two-column card grid. The grid is where all the interaction
//! lives: the trailing add tile, per-card delete badges and the wobble
//! animation while delete mode is on.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::calendar::{day_label, greeting_now};
use crate::ui::card::{badge_area, AddTile, CardTile, TILE_HEIGHT};
use crate::ui::hit::{HitMap, HitTarget};
use crate::ui::theme::Theme;

/// Gap between grid columns
const COLUMN_GAP: u16 = 2;
/// Width of one calendar day chip
const CHIP_WIDTH: u16 = 4;
/// Gap between calendar chips
const CHIP_GAP: u16 = 1;

pub(crate) fn draw_home(f: &mut Frame, app: &App, area: Rect, theme: &Theme, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(1),
            Constraint::Length(2), // Calendar strip
            Constraint::Length(1),
            Constraint::Length(1), // Workout title
            Constraint::Length(1),
            Constraint::Min(1), // Card grid
        ])
        .split(area);

    draw_greeting(f, app, chunks[0], theme);
    draw_calendar(f, app, chunks[2], theme, hits);
    draw_workout_title(f, app, chunks[4], theme);
    draw_card_grid(f, app, chunks[6], theme, hits);
}

fn draw_greeting(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let greeting = Paragraph::new(vec![
        Line::styled(
            format!("{},", greeting_now()),
            Style::default().fg(theme.secondary_text),
        ),
        Line::styled(
            app.profile().name.clone(),
            Style::default()
                .fg(theme.on_background)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(greeting, area);
}

/// Draw the day chips. When the strip is wider than the area, a window
/// around the selected day is shown.
fn draw_calendar(f: &mut Frame, app: &App, area: Rect, theme: &Theme, hits: &mut HitMap) {
    if area.height < 2 {
        return;
    }
    let step = CHIP_WIDTH + CHIP_GAP;
    let capacity = ((area.width + CHIP_GAP) / step) as usize;
    if capacity == 0 {
        return;
    }

    let calendar = app.calendar();
    let days = calendar.days();
    let start = if days.len() <= capacity {
        0
    } else {
        calendar
            .selected_index()
            .saturating_sub(capacity / 2)
            .min(days.len() - capacity)
    };
    let end = (start + capacity).min(days.len());

    let buf = f.buffer_mut();
    for (offset, day) in days[start..end].iter().enumerate() {
        let index = start + offset;
        let selected = index == calendar.selected_index();
        let chip = Rect {
            x: area.x + offset as u16 * step,
            y: area.y,
            width: CHIP_WIDTH,
            height: 2,
        };

        // Selected day is an inverted pill
        if selected {
            for y in chip.y..chip.y + chip.height {
                for x in chip.x..chip.x + chip.width {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_bg(theme.pill_bg);
                    }
                }
            }
        }

        let fg = if selected {
            theme.pill_fg
        } else {
            theme.secondary_text
        };
        let (weekday, number) = day_label(*day);
        buf.set_stringn(
            chip.x,
            chip.y,
            &weekday,
            CHIP_WIDTH as usize,
            Style::default().fg(fg),
        );
        let number_style = if selected {
            Style::default().fg(fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fg)
        };
        buf.set_stringn(
            chip.x,
            chip.y + 1,
            format!("{:>2}", number),
            CHIP_WIDTH as usize,
            number_style,
        );

        hits.push(chip, HitTarget::CalendarDay(*day));
    }
}

fn draw_workout_title(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let title = Paragraph::new(app.calendar().workout_title()).style(
        Style::default()
            .fg(theme.on_background)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, area);
}

/// Draw the card grid plus the trailing add tile, registering a hit
/// target per tile (and per badge in delete mode)
fn draw_card_grid(f: &mut Frame, app: &App, area: Rect, theme: &Theme, hits: &mut HitMap) {
    let cards = app.cards();
    let grid = app.grid();
    let selected = app.selected_tile();
    let delete_mode = cards.is_delete_mode();
    let tile_total = cards.len() + usize::from(app.show_add_tile());

    if area.width == 0 || area.height == 0 || tile_total == 0 {
        return;
    }

    let column_width = if grid.columns > 1 {
        area.width.saturating_sub(COLUMN_GAP * (grid.columns - 1)) / grid.columns
    } else {
        area.width
    };
    if column_width < 2 {
        return;
    }

    let visible = grid.visible_range(selected, tile_total);
    let page_start = visible.start;

    for index in visible {
        let (row, col) = grid.index_to_position(index - page_start);
        let y = area.y + row * TILE_HEIGHT;
        if y + TILE_HEIGHT > area.y + area.height {
            continue;
        }

        let mut tile_area = Rect {
            x: area.x + col * (column_width + COLUMN_GAP),
            y,
            width: column_width,
            height: TILE_HEIGHT,
        };
        let is_selected = index == selected;

        if index < cards.len() {
            let card = &cards.cards()[index];
            if delete_mode {
                // Neighboring tiles jitter out of phase, one cell per tick
                tile_area.x += wobble_offset(app.tick(), index);
                let right = area.x + area.width;
                if tile_area.x + tile_area.width > right {
                    tile_area.width = right.saturating_sub(tile_area.x);
                }
            }
            let tile = CardTile::new(card, theme)
                .selected(is_selected)
                .delete_mode(delete_mode);
            f.render_widget(tile, tile_area);
            hits.push(tile_area, HitTarget::Card(card.id));
            if delete_mode {
                hits.push(badge_area(tile_area), HitTarget::DeleteBadge(card.id));
            }
        } else {
            let tile = AddTile::new(theme).selected(is_selected);
            f.render_widget(tile, tile_area);
            hits.push(tile_area, HitTarget::AddCard);
        }
    }
}

fn wobble_offset(tick: u64, index: usize) -> u16 {
    ((tick as usize + index) % 2) as u16
}
