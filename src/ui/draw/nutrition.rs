//! Nutrition screen drawing functions
//!
//! Static display data: the "Today" calories card with its gauge, the
//! three macro cards and the meals list. Nothing here is interactive.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::card::{format_thousands, render_progress_bar};
use crate::ui::theme::Theme;

pub(crate) fn draw_nutrition(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(4), // Today calories
            Constraint::Length(4), // Macro cards
            Constraint::Min(4),    // Meals
        ])
        .split(area);

    draw_calories(f, app, chunks[0], theme);
    draw_macros(f, app, chunks[1], theme);
    draw_meals(f, app, chunks[2], theme);
}

fn card_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.dimmed))
        .title(title)
        .style(Style::default().bg(theme.card_background))
}

fn draw_calories(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let calories = app.nutrition().calories;
    let block = card_block(" Today ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let line = format!(
        "Calories  {} / {} kcal",
        format_thousands(calories.current),
        format_thousands(calories.goal)
    );
    let buf = f.buffer_mut();
    buf.set_stringn(
        inner.x,
        inner.y,
        line,
        inner.width as usize,
        Style::default().fg(theme.on_surface),
    );
    if inner.height > 1 {
        render_progress_bar(buf, inner.x, inner.y + 1, inner.width, calories.ratio(), theme);
    }
}

fn draw_macros(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let macros = app.nutrition().macros;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let values = [
        (" Protein ", macros.protein_g),
        (" Carbs ", macros.carbs_g),
        (" Fat ", macros.fat_g),
    ];
    for ((title, grams), cell) in values.into_iter().zip(cells.iter()) {
        let block = card_block(title, theme);
        let inner = block.inner(*cell);
        f.render_widget(block, *cell);
        if inner.width == 0 || inner.height == 0 {
            continue;
        }
        f.buffer_mut().set_stringn(
            inner.x,
            inner.y,
            format!("{} g", grams),
            inner.width as usize,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn draw_meals(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let meals = &app.nutrition().meals;
    let block = card_block(" Meals ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let buf = f.buffer_mut();
    let mut y = inner.y;
    let max_y = inner.y + inner.height;
    for (index, meal) in meals.iter().enumerate() {
        if y >= max_y {
            break;
        }
        buf.set_stringn(
            inner.x,
            y,
            meal.name,
            inner.width as usize,
            Style::default().fg(theme.on_surface),
        );

        // Right-aligned calorie count
        let value = format!("{} kcal", meal.calories);
        let value_width = value.width() as u16;
        if value_width < inner.width {
            buf.set_string(
                inner.x + inner.width - value_width,
                y,
                &value,
                Style::default().fg(theme.secondary_text),
            );
        }
        y += 1;

        // Divider between rows, not after the last
        if index + 1 < meals.len() && y < max_y {
            buf.set_string(
                inner.x,
                y,
                "─".repeat(inner.width as usize),
                Style::default().fg(theme.dimmed),
            );
            y += 1;
        }
    }
}
