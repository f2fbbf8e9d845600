//! Placeholder screens: the Workouts tab and the Dashboard splash.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::Theme;

pub(crate) fn draw_workouts(f: &mut Frame, area: Rect, theme: &Theme) {
    let style = Style::default()
        .fg(theme.dimmed)
        .add_modifier(Modifier::BOLD);
    centered_line(f, area, "Workouts", style);
}

pub(crate) fn draw_dashboard(f: &mut Frame, area: Rect, theme: &Theme) {
    let style = Style::default()
        .fg(theme.primary)
        .add_modifier(Modifier::BOLD);
    centered_line(f, area, "Fitness App Dashboard", style);
}

fn centered_line(f: &mut Frame, area: Rect, text: &'static str, style: Style) {
    if area.height == 0 {
        return;
    }
    let middle = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    let line = Paragraph::new(Line::styled(text, style)).alignment(Alignment::Center);
    f.render_widget(line, middle);
}
