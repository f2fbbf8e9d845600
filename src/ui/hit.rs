//! Mouse hit-testing for rendered widgets.
//!
//! Provides:
//! - `HitTarget` - everything on screen a click or press can land on
//! - `HitMap` - rect registry rebuilt each frame by the draw code and
//!   queried by the event loop when a mouse event arrives
//!
//! Targets are pushed in paint order, so the topmost widget at a point
//! wins the lookup.

use chrono::NaiveDate;
use ratatui::layout::Rect;

use crate::cards::CardId;

/// Interactive regions of the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Bottom navigation tab (by index)
    Tab(usize),
    /// One day chip in the calendar strip
    CalendarDay(NaiveDate),
    /// A card tile on the home grid
    Card(CardId),
    /// The trailing "+" tile
    AddCard,
    /// The [-] badge shown on a card in delete mode
    DeleteBadge(CardId),
    /// A row of the profile settings menu
    ProfileRow(usize),
    /// Anything that is not a widget
    Background,
}

/// Frame-local map from screen rects to hit targets
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target. Call in paint order; later pushes cover earlier
    /// ones (badges over cards, cards over the background).
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        self.regions.push((area, target));
    }

    /// Resolve a screen position to the topmost target under it
    pub fn hit(&self, column: u16, row: u16) -> HitTarget {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, target)| *target)
            .unwrap_or(HitTarget::Background)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
