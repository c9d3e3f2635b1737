//! Names of the built-in tricks.

pub const TALK: &str = "talk";
pub const FAKE_DEAD: &str = "fake_dead";
pub const CATCH_STICK: &str = "catch_stick";
pub const SHAKE_HAND: &str = "shake_hand";

/// Highest obedience level a dog can reach.
pub const MAX_OBEDIENCE: u8 = 5;

/// Curriculum taught when no configuration overrides it.
pub const DEFAULT_CURRICULUM: &[&str] = &[FAKE_DEAD, CATCH_STICK, SHAKE_HAND];
