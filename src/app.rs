use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

use crate::calendar::CalendarStrip;
use crate::cards::{CardCollection, CardId};
use crate::config::Config;
use crate::data::{NutritionSummary, UserProfile, PROFILE_MENU};
use crate::gesture::{PressOutcome, PressTracker};
use crate::ui::hit::HitTarget;
use crate::ui::layout::CardGrid;
use crate::ui::theme::Theme;

/// Bottom navigation tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Workouts,
    Nutrition,
    Profile,
    Dashboard,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Workouts,
        Tab::Nutrition,
        Tab::Profile,
        Tab::Dashboard,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Workouts => "Workouts",
            Tab::Nutrition => "Nutrition",
            Tab::Profile => "Profile",
            Tab::Dashboard => "Dashboard",
        }
    }

    fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Workouts => 1,
            Tab::Nutrition => 2,
            Tab::Profile => 3,
            Tab::Dashboard => 4,
        }
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Application state
pub struct App {
    /// Active screen
    tab: Tab,
    /// Home-screen card list and delete-mode flag
    cards: CardCollection,
    /// Date strip on the home screen
    calendar: CalendarStrip,
    /// Static nutrition display data
    nutrition: NutritionSummary,
    /// Static profile display data
    profile: UserProfile,
    /// Notifications switch on the profile screen
    notifications_enabled: bool,
    /// Cursor row in the profile settings menu
    profile_row: usize,
    /// Keyboard cursor over the card grid (cards plus the add tile)
    selected_tile: usize,
    /// Grid geometry for cursor movement
    grid: CardGrid,
    /// In-flight mouse press, for long-press detection
    press: PressTracker<HitTarget>,
    /// Tick counter driving the delete-mode wobble
    tick: u64,
    /// Configuration
    config: Config,
    /// Theme resolved once from config at startup
    theme: Theme,
    /// A frame should be drawn
    dirty: bool,
    /// Event loop should exit
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = config.resolve_theme();
        let profile = UserProfile::sample(config.user.name.clone());

        Self {
            tab: Tab::Home,
            cards: CardCollection::with_sample_cards(),
            calendar: CalendarStrip::around_today(),
            nutrition: NutritionSummary::sample(),
            profile,
            notifications_enabled: true,
            profile_row: 0,
            selected_tile: 0,
            grid: CardGrid::new(2, 2),
            press: PressTracker::new(),
            tick: 0,
            config,
            theme,
            dirty: true,
            should_quit: false,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn cards(&self) -> &CardCollection {
        &self.cards
    }

    pub fn calendar(&self) -> &CalendarStrip {
        &self.calendar
    }

    pub fn nutrition(&self) -> &NutritionSummary {
        &self.nutrition
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    pub fn profile_row(&self) -> usize {
        self.profile_row
    }

    pub fn selected_tile(&self) -> usize {
        self.selected_tile
    }

    pub fn grid(&self) -> CardGrid {
        self.grid
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Consume the redraw request for this frame
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Force a frame (terminal resize, first draw)
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// Whether the trailing "+" tile is part of the grid right now
    pub fn show_add_tile(&self) -> bool {
        self.cards.can_add() && !self.cards.is_delete_mode()
    }

    /// Tiles the grid cursor can land on: cards plus the add tile
    fn tile_count(&self) -> usize {
        self.cards.len() + usize::from(self.show_add_tile())
    }

    fn clamp_selection(&mut self) {
        let total = self.tile_count();
        if total == 0 {
            self.selected_tile = 0;
        } else if self.selected_tile >= total {
            self.selected_tile = total - 1;
        }
    }

    fn set_tile(&mut self, index: usize) {
        if index != self.selected_tile {
            self.selected_tile = index;
            self.dirty = true;
        }
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if tab != self.tab {
            self.tab = tab;
            self.dirty = true;
        }
    }

    /// Redraw when the collection actually changed; no-ops stay invisible
    fn sync_after_cards_change(&mut self, before: u64) {
        if self.cards.revision() != before {
            self.clamp_selection();
            self.dirty = true;
        }
    }

    pub fn add_card(&mut self) {
        let before = self.cards.revision();
        if let Some(id) = self.cards.add_card() {
            tracing::info!("Added card {}", id);
        }
        self.sync_after_cards_change(before);
    }

    pub fn delete_card(&mut self, id: CardId) {
        let before = self.cards.revision();
        if self.cards.delete_card(id) {
            tracing::info!("Deleted card {}", id);
        }
        self.sync_after_cards_change(before);
    }

    pub fn enter_delete_mode(&mut self) {
        let before = self.cards.revision();
        self.cards.enter_delete_mode();
        self.sync_after_cards_change(before);
    }

    pub fn exit_delete_mode(&mut self) {
        let before = self.cards.revision();
        self.cards.exit_delete_mode();
        self.sync_after_cards_change(before);
    }

    /// Delete the card under the grid cursor. Only meaningful in delete
    /// mode; ignored otherwise.
    fn delete_selected_card(&mut self) {
        if !self.cards.is_delete_mode() {
            return;
        }
        if let Some(card) = self.cards.cards().get(self.selected_tile) {
            self.delete_card(card.id);
        }
    }

    /// Enter on the grid: delete in delete mode, add on the "+" tile
    fn activate_selected_tile(&mut self) {
        if self.cards.is_delete_mode() {
            self.delete_selected_card();
        } else if self.show_add_tile() && self.selected_tile == self.cards.len() {
            self.add_card();
        }
        // Card tiles have no activation outside delete mode
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.cards.is_delete_mode() {
                    self.exit_delete_mode();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Tab => self.set_tab(self.tab.next()),
            KeyCode::BackTab => self.set_tab(self.tab.prev()),
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                self.set_tab(Tab::ALL[index]);
            }
            _ => match self.tab {
                Tab::Home => self.handle_home_key(key.code),
                Tab::Profile => self.handle_profile_key(key.code),
                _ => {}
            },
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        let total = self.tile_count();
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.set_tile(self.grid.move_left(self.selected_tile));
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.set_tile(self.grid.move_right(self.selected_tile, total));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.set_tile(self.grid.move_up(self.selected_tile));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.set_tile(self.grid.move_down(self.selected_tile, total));
            }
            KeyCode::Char('[') => {
                self.calendar.select_prev();
                self.dirty = true;
            }
            KeyCode::Char(']') => {
                self.calendar.select_next();
                self.dirty = true;
            }
            KeyCode::Char('a') => self.add_card(),
            KeyCode::Char('d') => self.enter_delete_mode(),
            KeyCode::Enter => self.activate_selected_tile(),
            KeyCode::Char('x') => self.delete_selected_card(),
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.profile_row > 0 {
                    self.profile_row -= 1;
                    self.dirty = true;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.profile_row + 1 < PROFILE_MENU.len() {
                    self.profile_row += 1;
                    self.dirty = true;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_profile_row(self.profile_row),
            _ => {}
        }
    }

    fn activate_profile_row(&mut self, row: usize) {
        match row {
            0 => {
                self.notifications_enabled = !self.notifications_enabled;
                tracing::info!(
                    "Notifications {}",
                    if self.notifications_enabled { "on" } else { "off" }
                );
                self.dirty = true;
            }
            _ => {
                let label = PROFILE_MENU.get(row).copied().unwrap_or("?");
                tracing::debug!("Menu item '{}' has no action", label);
            }
        }
    }

    /// Route a mouse event that landed on `target`
    pub fn handle_mouse(&mut self, kind: MouseEventKind, target: HitTarget, now: Instant) {
        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press.press(target, now);
            }
            MouseEventKind::Up(MouseButton::Left) => match self.press.release(now) {
                Some(PressOutcome::Tap(target)) => self.handle_tap(target),
                Some(PressOutcome::LongPress(target)) => self.handle_long_press(target),
                None => {}
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                // Sliding off the pressed widget abandons the gesture
                if self.press.target().is_some_and(|pressed| pressed != target) {
                    self.press.cancel();
                }
            }
            MouseEventKind::ScrollUp => {
                if self.tab == Tab::Home {
                    self.set_tile(self.grid.move_up(self.selected_tile));
                }
            }
            MouseEventKind::ScrollDown => {
                if self.tab == Tab::Home {
                    let total = self.tile_count();
                    self.set_tile(self.grid.move_down(self.selected_tile, total));
                }
            }
            _ => {}
        }
    }

    fn handle_tap(&mut self, target: HitTarget) {
        match target {
            HitTarget::Tab(index) => {
                if let Some(tab) = Tab::ALL.get(index) {
                    self.set_tab(*tab);
                }
            }
            HitTarget::CalendarDay(day) => {
                if self.calendar.select(day) {
                    self.dirty = true;
                }
            }
            HitTarget::AddCard => self.add_card(),
            HitTarget::DeleteBadge(id) => self.delete_card(id),
            HitTarget::ProfileRow(row) => {
                self.profile_row = row.min(PROFILE_MENU.len().saturating_sub(1));
                self.dirty = true;
                self.activate_profile_row(self.profile_row);
            }
            // Tapping a card does nothing; in delete mode its badge does
            HitTarget::Card(_) => {}
            HitTarget::Background => self.exit_delete_mode(),
        }
    }

    /// A press held past the threshold. Only cards respond: holding one
    /// switches the grid into delete mode.
    fn handle_long_press(&mut self, target: HitTarget) {
        if let HitTarget::Card(_) = target {
            self.enter_delete_mode();
        }
    }

    /// Advance animation time and fire a pending long-press
    pub fn on_tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        if let Some(target) = self.press.poll(now) {
            self.handle_long_press(target);
        }
        // Wobble needs a frame per tick while delete mode is showing
        if self.tab == Tab::Home && self.cards.is_delete_mode() {
            self.dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::LONG_PRESS_THRESHOLD;
    use std::time::Duration;

    fn app() -> App {
        App::new(Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn first_card_id(app: &App) -> CardId {
        app.cards().cards()[0].id
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let mut app = app();
        assert_eq!(app.tab(), Tab::Home);

        for _ in 0..Tab::ALL.len() {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.tab(), Tab::Home);

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.tab(), Tab::Dashboard);

        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.tab(), Tab::Nutrition);
    }

    #[test]
    fn test_long_press_on_card_enters_delete_mode() {
        let mut app = app();
        let id = first_card_id(&app);
        let t0 = Instant::now();

        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), HitTarget::Card(id), t0);
        assert!(!app.cards().is_delete_mode());

        app.on_tick(t0 + LONG_PRESS_THRESHOLD + Duration::from_millis(50));
        assert!(app.cards().is_delete_mode());

        // The release after the fired gesture is swallowed
        app.handle_mouse(
            MouseEventKind::Up(MouseButton::Left),
            HitTarget::Card(id),
            t0 + Duration::from_millis(900),
        );
        assert!(app.cards().is_delete_mode());
    }

    #[test]
    fn test_quick_tap_on_card_is_inert() {
        let mut app = app();
        let id = first_card_id(&app);
        let t0 = Instant::now();

        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), HitTarget::Card(id), t0);
        app.handle_mouse(
            MouseEventKind::Up(MouseButton::Left),
            HitTarget::Card(id),
            t0 + Duration::from_millis(100),
        );
        assert!(!app.cards().is_delete_mode());
        assert_eq!(app.cards().len(), 3);
    }

    #[test]
    fn test_drag_off_card_cancels_the_press() {
        let mut app = app();
        let id = first_card_id(&app);
        let t0 = Instant::now();

        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), HitTarget::Card(id), t0);
        app.handle_mouse(
            MouseEventKind::Drag(MouseButton::Left),
            HitTarget::Background,
            t0 + Duration::from_millis(200),
        );

        // The hold keeps running past the threshold but the press is gone
        app.on_tick(t0 + LONG_PRESS_THRESHOLD + Duration::from_millis(100));
        assert!(!app.cards().is_delete_mode());

        app.handle_mouse(
            MouseEventKind::Up(MouseButton::Left),
            HitTarget::Background,
            t0 + LONG_PRESS_THRESHOLD + Duration::from_millis(200),
        );
        assert!(!app.cards().is_delete_mode());
        assert_eq!(app.cards().len(), 3);
    }

    #[test]
    fn test_background_tap_exits_delete_mode() {
        let mut app = app();
        app.enter_delete_mode();
        assert!(app.cards().is_delete_mode());

        let t0 = Instant::now();
        app.handle_mouse(
            MouseEventKind::Down(MouseButton::Left),
            HitTarget::Background,
            t0,
        );
        app.handle_mouse(
            MouseEventKind::Up(MouseButton::Left),
            HitTarget::Background,
            t0 + Duration::from_millis(80),
        );
        assert!(!app.cards().is_delete_mode());
    }

    #[test]
    fn test_badge_tap_deletes_that_card() {
        let mut app = app();
        app.enter_delete_mode();
        let id = first_card_id(&app);

        let t0 = Instant::now();
        app.handle_mouse(
            MouseEventKind::Down(MouseButton::Left),
            HitTarget::DeleteBadge(id),
            t0,
        );
        app.handle_mouse(
            MouseEventKind::Up(MouseButton::Left),
            HitTarget::DeleteBadge(id),
            t0 + Duration::from_millis(60),
        );

        assert_eq!(app.cards().len(), 2);
        assert!(app.cards().cards().iter().all(|card| card.id != id));
    }

    #[test]
    fn test_add_tile_hides_in_delete_mode_and_at_capacity() {
        let mut app = app();
        assert!(app.show_add_tile());

        app.enter_delete_mode();
        assert!(!app.show_add_tile());
        app.exit_delete_mode();

        while app.cards().can_add() {
            app.add_card();
        }
        assert!(!app.show_add_tile());
    }

    #[test]
    fn test_enter_activates_add_tile() {
        let mut app = app();
        // Cursor onto the add tile (index == len)
        for _ in 0..app.cards().len() {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.selected_tile(), app.cards().len());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.cards().len(), 4);
    }

    #[test]
    fn test_cursor_clamps_when_tiles_disappear() {
        let mut app = app();
        // Park the cursor on the add tile, then enter delete mode; the add
        // tile vanishes and the cursor must stay in bounds
        for _ in 0..app.cards().len() {
            app.handle_key(key(KeyCode::Right));
        }
        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.selected_tile() < app.cards().len());

        // Deleting cards keeps clamping
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.cards().is_empty());
        assert_eq!(app.selected_tile(), 0);
        assert!(!app.cards().is_delete_mode());
    }

    #[test]
    fn test_esc_leaves_delete_mode_before_quitting() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.cards().is_delete_mode());

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.cards().is_delete_mode());
        assert!(!app.should_quit());

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_notifications_toggle() {
        let mut app = app();
        app.set_tab(Tab::Profile);
        assert!(app.notifications_enabled());

        app.handle_key(key(KeyCode::Enter));
        assert!(!app.notifications_enabled());
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.notifications_enabled());

        // Other rows are selectable no-ops
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.profile_row(), 1);
        assert!(app.notifications_enabled());
    }

    #[test]
    fn test_redraws_track_effective_changes() {
        let mut app = app();
        assert!(app.take_dirty(), "first frame always draws");
        assert!(!app.take_dirty());

        // A no-op add at capacity requests no frame
        while app.cards().can_add() {
            app.add_card();
        }
        app.take_dirty();
        app.add_card();
        assert!(!app.take_dirty());

        // An effective change does
        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.take_dirty());
    }
}
