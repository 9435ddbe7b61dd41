//! # `sw5e`
//!
//! Typed character-mechanics data for the Star Wars 5e Player's Handbook.
//!
//! SW5e is a d20-derived tabletop ruleset. This crate models the pieces
//! of its character math that everything else hangs off of:
//!
//! - **Proficency tiers**: the seven-step ladder from `Untrained` to
//!   `GrandMastery`, with each tier's bonus share, advantage grant, and
//!   reroll entitlement.
//! - **Abilities and scores**: the six abilities, validated scores, and
//!   the score-to-modifier table.
//! - **Skills**: the eighteen-skill SW5e list with governing abilities.
//! - **Levels**: validated character levels and the proficiency bonus
//!   progression.
//! - **Checks and sheets**: roll modes with advantage/disadvantage
//!   composition, and training sheets that turn all of the above into
//!   check modifiers.
//!
//! Everything here is plain data and pure arithmetic. Nothing rolls
//! dice, touches the filesystem, or talks to the network.
//!
//! ## Example
//!
//! ```
//! use sw5e::{AbilityScores, CharacterLevel, Proficency, Skill, TrainingSheet};
//!
//! let scores = AbilityScores::new(10, 14, 12, 16, 10, 8).unwrap();
//! let level = CharacterLevel::new(5).unwrap();
//! let sheet = TrainingSheet::new()
//!     .with_skill(Skill::Technology, Proficency::Expertise)
//!     .unwrap();
//!
//! // INT +3, plus twice the +3 proficiency bonus.
//! assert_eq!(sheet.skill_modifier(Skill::Technology, &scores, level), 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ability;
pub mod check;
pub mod error;
pub mod level;
pub mod proficency;
pub mod sheet;
pub mod skill;

// Re-export main types
pub use ability::{Ability, AbilityScore, AbilityScores};
pub use check::{check_modifier, RollMode};
pub use error::{Result, Sw5eError};
pub use level::CharacterLevel;
pub use proficency::{Proficency, TrainingKind};
pub use sheet::TrainingSheet;
pub use skill::Skill;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
