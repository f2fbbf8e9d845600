//! Card tile widgets for the home grid.
//!
//! Renders each card as a bordered tile:
//! - Steps: title, thousands-separated count, goal line, progress bar
//! - Empty: centered placeholder text
//!
//! Plus the dash-bordered "+" tile that appends a new card. Delete mode
//! overlays a `[-]` badge on the tile's top-left corner; the wobble that
//! goes with it is applied by the caller when positioning the tile.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::cards::{Card, CardKind};

/// Tile height in rows: four content lines inside the border
pub const TILE_HEIGHT: u16 = 6;

/// Dashed rounded border for the add tile
const DASHED_BORDER: symbols::border::Set = symbols::border::Set {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    vertical_left: "┆",
    vertical_right: "┆",
    horizontal_top: "┄",
    horizontal_bottom: "┄",
};

/// Screen region of the delete badge for a tile at `area`
pub fn badge_area(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: 3.min(area.width),
        height: 1.min(area.height),
    }
}

/// One card rendered as a grid tile
pub struct CardTile<'a> {
    card: &'a Card,
    theme: &'a Theme,
    selected: bool,
    delete_mode: bool,
}

impl<'a> CardTile<'a> {
    pub fn new(card: &'a Card, theme: &'a Theme) -> Self {
        Self {
            card,
            theme,
            selected: false,
            delete_mode: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn delete_mode(mut self, delete_mode: bool) -> Self {
        self.delete_mode = delete_mode;
        self
    }
}

impl<'a> Widget for CardTile<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let border_color = if self.selected {
            self.theme.primary
        } else {
            self.theme.dimmed
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.theme.card_background));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width > 0 && inner.height > 0 {
            // One arm per kind; a new kind fails to compile until it
            // gets a renderer here
            match &self.card.kind {
                CardKind::Steps { current, goal } => {
                    self.render_steps(inner, buf, *current, *goal);
                }
                CardKind::Empty => self.render_empty(inner, buf),
            }
        }

        if self.delete_mode {
            let badge = badge_area(area);
            if badge.width == 3 {
                let style = Style::default()
                    .fg(self.theme.on_background)
                    .bg(self.theme.error)
                    .add_modifier(Modifier::BOLD);
                buf.set_string(badge.x, badge.y, "[-]", style);
            }
        }
    }
}

impl<'a> CardTile<'a> {
    fn render_steps(&self, inner: Rect, buf: &mut Buffer, current: u32, goal: u32) {
        let width = inner.width as usize;
        let max_y = inner.y + inner.height;
        let mut y = inner.y;

        let title_style = Style::default()
            .fg(self.theme.on_surface)
            .add_modifier(Modifier::BOLD);
        buf.set_string(
            inner.x,
            y,
            truncate(self.card.kind.title(), width),
            title_style,
        );
        y += 1;

        if y < max_y {
            let value_style = Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD);
            buf.set_string(inner.x, y, truncate(&format_thousands(current), width), value_style);
            y += 1;
        }

        if y < max_y {
            let goal_line = format!("Goal: {}", format_thousands(goal));
            let style = Style::default().fg(self.theme.secondary_text);
            buf.set_string(inner.x, y, truncate(&goal_line, width), style);
            y += 1;
        }

        if y < max_y {
            if let Some(ratio) = self.card.kind.progress() {
                render_progress_bar(buf, inner.x, y, inner.width, ratio, self.theme);
            }
        }
    }

    fn render_empty(&self, inner: Rect, buf: &mut Buffer) {
        let label = self.card.kind.title();
        let label_width = label.width() as u16;
        let x = inner.x + inner.width.saturating_sub(label_width) / 2;
        let y = inner.y + inner.height / 2;
        let style = Style::default().fg(self.theme.dimmed);
        buf.set_string(x, y, truncate(label, inner.width as usize), style);
    }
}

/// The trailing "+" tile. Hidden by the caller at capacity or in delete
/// mode; always renders when asked.
pub struct AddTile<'a> {
    theme: &'a Theme,
    selected: bool,
}

impl<'a> AddTile<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for AddTile<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let border_color = if self.selected {
            self.theme.primary
        } else {
            self.theme.dimmed
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(DASHED_BORDER)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width > 0 && inner.height > 0 {
            let x = inner.x + inner.width / 2;
            let y = inner.y + inner.height / 2;
            let style = Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD);
            buf.set_string(x, y, "+", style);
        }
    }
}

/// Draw a one-line progress bar: filled span in the primary color, the
/// rest as a dimmed track. Shared with the nutrition screen's gauges.
pub(crate) fn render_progress_bar(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    width: u16,
    ratio: f64,
    theme: &Theme,
) {
    if width == 0 {
        return;
    }
    let filled = ((f64::from(width) * ratio).round() as u16).min(width);
    if filled > 0 {
        let style = Style::default().fg(theme.primary);
        buf.set_string(x, y, "━".repeat(filled as usize), style);
    }
    if filled < width {
        let style = Style::default().fg(theme.dimmed);
        buf.set_string(
            x + filled,
            y,
            "─".repeat((width - filled) as usize),
            style,
        );
    }
}

/// Group digits with commas: 6543 -> "6,543"
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncate string to fit within max_width, adding ellipsis if needed
fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        s.to_string()
    } else if max_width <= 1 {
        "…".to_string()
    } else {
        let mut result = String::new();
        let mut current_width = 0;

        for c in s.chars() {
            let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + char_width + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            current_width += char_width;
        }

        result
    }
}
