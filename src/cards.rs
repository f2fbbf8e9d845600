//! Home-screen card collection.
//!
//! The only mutable state on the home surface: an ordered list of dashboard
//! cards with a fixed capacity, plus the transient delete-mode flag. Plain
//! owned state with explicit mutation methods - no UI types in here. The
//! draw layer reads the card list and the flag; the event loop watches
//! `revision()` to know when something actually changed.

/// Maximum number of cards the home surface will hold.
pub const CARD_LIMIT: usize = 10;

/// Opaque card identifier, unique within the collection for its lifetime.
///
/// Assigned from a monotonic counter rather than a timestamp so two cards
/// created in the same instant can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(u64);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content variant of a card. Adding a kind means adding one variant here
/// and one arm in the tile renderer's match - existing variants stay as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardKind {
    /// Daily step count against a goal.
    Steps { current: u32, goal: u32 },
    /// Placeholder tile with no content yet.
    Empty,
}

impl CardKind {
    /// Build a steps card payload. The goal is forced to at least 1 so the
    /// progress ratio is always defined.
    pub fn steps(current: u32, goal: u32) -> Self {
        Self::Steps {
            current,
            goal: goal.max(1),
        }
    }

    /// Display title for this kind.
    pub fn title(&self) -> &'static str {
        match self {
            CardKind::Steps { .. } => "Steps",
            CardKind::Empty => "Empty",
        }
    }

    /// Completion ratio for gauge-style kinds, clamped to `0.0..=1.0`.
    pub fn progress(&self) -> Option<f64> {
        match self {
            CardKind::Steps { current, goal } => {
                Some((f64::from(*current) / f64::from(*goal)).min(1.0))
            }
            CardKind::Empty => None,
        }
    }
}

/// One dashboard tile.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
}

/// Ordered card list with a soft capacity and the delete-mode flag.
///
/// Every boundary condition (capacity reached, unknown id, redundant mode
/// toggle) is a defined no-op, not an error - nothing in here can fail in a
/// way a caller must handle.
#[derive(Debug)]
pub struct CardCollection {
    cards: Vec<Card>,
    next_id: u64,
    delete_mode: bool,
    revision: u64,
}

impl CardCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(CARD_LIMIT),
            next_id: 1,
            delete_mode: false,
            revision: 0,
        }
    }

    /// Create the session-start collection: one steps card and two empty
    /// placeholders, matching what the app shows on first launch.
    pub fn with_sample_cards() -> Self {
        let mut collection = Self::new();
        collection.push_card(CardKind::steps(6_543, 10_000));
        collection.push_card(CardKind::Empty);
        collection.push_card(CardKind::Empty);
        // Seeding is construction, not a user-visible change
        collection.revision = 0;
        collection
    }

    /// Cards in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the delete affordances should be shown.
    pub fn is_delete_mode(&self) -> bool {
        self.delete_mode
    }

    /// Whether another card would fit under the capacity limit.
    pub fn can_add(&self) -> bool {
        self.cards.len() < CARD_LIMIT
    }

    /// Counter of effective state changes; unchanged by no-ops. The event
    /// loop redraws when this moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a fresh empty card at the end. Returns the new id, or `None`
    /// when the collection is already at capacity - a soft cap, deliberately
    /// not an error.
    pub fn add_card(&mut self) -> Option<CardId> {
        if !self.can_add() {
            tracing::debug!("card limit reached, add ignored");
            return None;
        }
        let id = self.push_card(CardKind::Empty);
        self.revision += 1;
        Some(id)
    }

    /// Remove the card with the given id. Unknown ids are a no-op (returns
    /// `false`). Removing the last card forces delete mode off.
    pub fn delete_card(&mut self, id: CardId) -> bool {
        let Some(pos) = self.cards.iter().position(|card| card.id == id) else {
            return false;
        };
        self.cards.remove(pos);
        if self.is_empty() {
            self.delete_mode = false;
        }
        self.revision += 1;
        true
    }

    /// Switch the delete affordances on. Idempotent; ignored while the
    /// collection is empty (there is no card the gesture could have come
    /// from, and an empty collection is always in normal mode).
    pub fn enter_delete_mode(&mut self) {
        if self.delete_mode || self.is_empty() {
            return;
        }
        self.delete_mode = true;
        self.revision += 1;
    }

    /// Switch the delete affordances off. Idempotent.
    pub fn exit_delete_mode(&mut self) {
        if !self.delete_mode {
            return;
        }
        self.delete_mode = false;
        self.revision += 1;
    }

    fn push_card(&mut self, kind: CardKind) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        self.cards.push(Card { id, kind });
        id
    }
}

impl Default for CardCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_seed() {
        let collection = CardCollection::with_sample_cards();
        assert_eq!(collection.len(), 3);
        assert!(!collection.is_delete_mode());

        let ids: Vec<String> = collection.cards().iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        assert_eq!(
            collection.cards()[0].kind,
            CardKind::Steps {
                current: 6_543,
                goal: 10_000
            }
        );
        assert_eq!(collection.cards()[1].kind, CardKind::Empty);
        assert_eq!(collection.cards()[2].kind, CardKind::Empty);
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut collection = CardCollection::with_sample_cards();
        let id = collection.add_card().unwrap();
        assert_eq!(collection.len(), 4);
        assert_eq!(collection.cards().last().unwrap().id, id);
        assert_eq!(collection.cards().last().unwrap().kind, CardKind::Empty);
    }

    #[test]
    fn test_capacity_is_a_soft_cap() {
        let mut collection = CardCollection::new();
        let added: Vec<_> = (0..15).map(|_| collection.add_card()).collect();

        assert_eq!(collection.len(), CARD_LIMIT);
        assert_eq!(added.iter().filter(|id| id.is_some()).count(), CARD_LIMIT);
        // The five calls past the limit were rejected, not errors
        assert!(added[CARD_LIMIT..].iter().all(|id| id.is_none()));
    }

    #[test]
    fn test_add_at_exact_limit_changes_nothing() {
        let mut collection = CardCollection::new();
        while collection.can_add() {
            collection.add_card();
        }
        let ids_before: Vec<CardId> = collection.cards().iter().map(|c| c.id).collect();
        let revision_before = collection.revision();

        assert_eq!(collection.add_card(), None);
        let ids_after: Vec<CardId> = collection.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids_before, ids_after);
        assert_eq!(collection.len(), CARD_LIMIT);
        assert_eq!(collection.revision(), revision_before);
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut collection = CardCollection::with_sample_cards();
        let mut seen: HashSet<CardId> = collection.cards().iter().map(|c| c.id).collect();

        // Churn: delete from the front, add at the back, repeatedly
        for _ in 0..20 {
            let front = collection.cards()[0].id;
            collection.delete_card(front);
            if let Some(id) = collection.add_card() {
                assert!(seen.insert(id), "id {id} was reused");
            }
            let live: HashSet<CardId> = collection.cards().iter().map(|c| c.id).collect();
            assert_eq!(live.len(), collection.len());
        }
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut collection = CardCollection::with_sample_cards();
        let id = collection.cards()[1].id;

        assert!(collection.delete_card(id));
        let after_first: Vec<CardId> = collection.cards().iter().map(|c| c.id).collect();
        let revision = collection.revision();

        assert!(!collection.delete_card(id));
        let after_second: Vec<CardId> = collection.cards().iter().map(|c| c.id).collect();
        assert_eq!(after_first, after_second);
        assert_eq!(collection.revision(), revision);
    }

    #[test]
    fn test_emptying_forces_normal_mode() {
        let mut collection = CardCollection::new();
        let id = collection.add_card().unwrap();
        collection.enter_delete_mode();
        assert!(collection.is_delete_mode());

        collection.delete_card(id);
        assert!(collection.is_empty());
        assert!(!collection.is_delete_mode());
    }

    #[test]
    fn test_enter_delete_mode_leaves_cards_alone() {
        let mut collection = CardCollection::with_sample_cards();
        let before: Vec<CardId> = collection.cards().iter().map(|c| c.id).collect();

        collection.enter_delete_mode();
        let after: Vec<CardId> = collection.cards().iter().map(|c| c.id).collect();
        assert_eq!(before, after);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_delete_mode_walkthrough() {
        // Seed [steps, empty, empty], delete the middle card while in delete
        // mode, then empty the collection and watch the mode clear itself.
        let mut collection = CardCollection::with_sample_cards();
        let (first, second, third) = (
            collection.cards()[0].id,
            collection.cards()[1].id,
            collection.cards()[2].id,
        );

        collection.enter_delete_mode();
        assert!(collection.is_delete_mode());

        collection.delete_card(second);
        let remaining: Vec<CardId> = collection.cards().iter().map(|c| c.id).collect();
        assert_eq!(remaining, vec![first, third]);
        assert!(collection.is_delete_mode(), "non-empty collection keeps the mode");

        collection.delete_card(first);
        collection.delete_card(third);
        assert!(collection.is_empty());
        assert!(!collection.is_delete_mode());
    }

    #[test]
    fn test_mode_toggles_are_idempotent() {
        let mut collection = CardCollection::with_sample_cards();

        collection.enter_delete_mode();
        let revision = collection.revision();
        collection.enter_delete_mode();
        assert!(collection.is_delete_mode());
        assert_eq!(collection.revision(), revision);

        collection.exit_delete_mode();
        let revision = collection.revision();
        collection.exit_delete_mode();
        assert!(!collection.is_delete_mode());
        assert_eq!(collection.revision(), revision);
    }

    #[test]
    fn test_enter_delete_mode_on_empty_is_ignored() {
        let mut collection = CardCollection::new();
        collection.enter_delete_mode();
        assert!(!collection.is_delete_mode());
        assert_eq!(collection.revision(), 0);
    }

    #[test]
    fn test_revision_tracks_effective_changes() {
        let mut collection = CardCollection::with_sample_cards();
        assert_eq!(collection.revision(), 0);

        let id = collection.add_card().unwrap();
        assert_eq!(collection.revision(), 1);
        collection.enter_delete_mode();
        assert_eq!(collection.revision(), 2);
        collection.delete_card(id);
        assert_eq!(collection.revision(), 3);

        // No-ops leave the counter alone
        collection.delete_card(id);
        collection.enter_delete_mode();
        let revision = collection.revision();
        collection.enter_delete_mode();
        assert_eq!(collection.revision(), revision);
    }

    #[test]
    fn test_steps_progress_is_clamped() {
        assert_eq!(CardKind::steps(5_000, 10_000).progress(), Some(0.5));
        assert_eq!(CardKind::steps(15_000, 10_000).progress(), Some(1.0));
        // Zero goal is bumped to 1 at construction
        assert_eq!(CardKind::steps(0, 0).progress(), Some(0.0));
        assert_eq!(CardKind::Empty.progress(), None);
    }
}
