//! Static display data for the nutrition and profile screens.
//!
//! The app has no data backend; these are the fixed sample values the
//! screens render. Only the card collection on the home screen is live
//! state - everything here is read-only.

/// A current/goal pair for gauge-style display.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    pub current: u32,
    pub goal: u32,
}

impl Progress {
    /// Completion ratio clamped to `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        (f64::from(self.current) / f64::from(self.goal)).min(1.0)
    }
}

/// Macronutrient totals in grams.
#[derive(Debug, Clone, Copy)]
pub struct Macros {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// One meal row in the meals card.
#[derive(Debug, Clone, Copy)]
pub struct Meal {
    pub name: &'static str,
    pub calories: u32,
}

/// Everything the nutrition screen shows.
#[derive(Debug, Clone)]
pub struct NutritionSummary {
    pub calories: Progress,
    pub macros: Macros,
    pub meals: Vec<Meal>,
}

impl NutritionSummary {
    pub fn sample() -> Self {
        Self {
            calories: Progress {
                current: 1_200,
                goal: 2_000,
            },
            macros: Macros {
                protein_g: 120,
                carbs_g: 150,
                fat_g: 50,
            },
            meals: vec![
                Meal {
                    name: "Breakfast",
                    calories: 300,
                },
                Meal {
                    name: "Lunch",
                    calories: 400,
                },
                Meal {
                    name: "Dinner",
                    calories: 500,
                },
                Meal {
                    name: "Snacks",
                    calories: 100,
                },
            ],
        }
    }
}

/// The profile screen's user block and stats row.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub height: String,
    pub weight: String,
    pub primary_goal: String,
}

impl UserProfile {
    /// Sample profile; the name comes from config so the greeting and the
    /// profile header agree.
    pub fn sample(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: 28,
            height: "6'0\"".to_string(),
            weight: "180 lbs".to_string(),
            primary_goal: "Build Muscle".to_string(),
        }
    }
}

/// One badge in the achievements strip.
#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub glyph: &'static str,
    pub name: &'static str,
}

/// Settings menu rows on the profile screen, in display order. Row 0 is
/// the notifications toggle; the rest are selectable but inert.
pub const PROFILE_MENU: &[&str] = &["Notifications", "Edit Profile", "Linked Accounts", "Sign Out"];

/// Badges shown on the profile screen, in display order.
pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        glyph: "🏆",
        name: "First Workout",
    },
    Achievement {
        glyph: "🏃",
        name: "5k Runner",
    },
    Achievement {
        glyph: "🏋",
        name: "New PR",
    },
    Achievement {
        glyph: "⭐",
        name: "30-Day Streak",
    },
    Achievement {
        glyph: "📅",
        name: "Perfect Week",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_clamped() {
        let over = Progress {
            current: 3_000,
            goal: 2_000,
        };
        assert_eq!(over.ratio(), 1.0);

        let zero_goal = Progress {
            current: 100,
            goal: 0,
        };
        assert_eq!(zero_goal.ratio(), 0.0);

        let sample = NutritionSummary::sample();
        assert_eq!(sample.calories.ratio(), 0.6);
    }
}
