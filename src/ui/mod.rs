//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Per-screen draw functions
//! - `theme.rs` - Color themes and presets
//! - `layout.rs` - Card grid layout logic
//! - `card.rs` - Card tile widgets
//! - `hit.rs` - Mouse hit-region map

mod draw;
pub mod card;
pub mod hit;
pub mod layout;
pub mod theme;

// Re-export main draw function
pub use draw::draw;

// Re-export commonly used types
pub use card::{AddTile, CardTile};
pub use hit::{HitMap, HitTarget};
pub use layout::CardGrid;
pub use theme::Theme;
