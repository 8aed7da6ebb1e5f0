use std::fmt;

/// Identifier of a player, unique for the lifetime of a [`crate::Roster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P#{}", self.0)
    }
}

/// Identifier of a monster. The sequence restarts at 1 whenever combat ends,
/// but an id is never handed out twice within one encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterId(pub u32);

impl MonsterId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M#{}", self.0)
    }
}

/// Which roster an entity belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntityKind {
    Player,
    Monster,
}

/// Sequential id allocator (monotonically increasing, starts at 1).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub const FIRST: u32 = 1;

    pub const fn new() -> Self {
        Self { next: Self::FIRST }
    }

    /// The id the next call to [`Self::allocate`] will return.
    pub const fn peek(&self) -> u32 {
        self.next
    }

    /// Hands out the next id, or `None` once the `u32` space is used up.
    pub fn allocate(&mut self) -> Option<u32> {
        let id = self.next;
        self.next = id.checked_add(1)?;
        Some(id)
    }

    pub fn reset(&mut self) {
        self.next = Self::FIRST;
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Unit adjustment applied by a single "+" or "-" gesture.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Step {
    Up,
    Down,
}

impl Step {
    pub const fn delta(self) -> i32 {
        match self {
            Step::Up => 1,
            Step::Down => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic_and_resettable() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.allocate(), Some(1));
        assert_eq!(seq.allocate(), Some(2));
        assert_eq!(seq.peek(), 3);

        seq.reset();
        assert_eq!(seq.allocate(), Some(1));
    }

    #[test]
    fn sequence_stops_at_u32_max() {
        let mut seq = IdSequence { next: u32::MAX };
        assert_eq!(seq.allocate(), None);
        assert_eq!(seq.peek(), u32::MAX);
    }

    #[test]
    fn ids_display_with_kind_prefix() {
        assert_eq!(PlayerId::new(4).to_string(), "P#4");
        assert_eq!(MonsterId::new(2).to_string(), "M#2");
        assert_eq!(EntityKind::Monster.to_string(), "monster");
    }

    #[test]
    fn step_parses_case_insensitively() {
        assert_eq!("UP".parse::<Step>(), Ok(Step::Up));
        assert_eq!(Step::Down.delta(), -1);
    }
}
