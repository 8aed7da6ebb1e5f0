use super::common::PlayerId;

/// One of the two sides of an encounter.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    #[strum(to_string = "players", serialize = "player")]
    Players,
    #[strum(to_string = "monsters", serialize = "monster")]
    Monsters,
}

/// Combat bookkeeping: who fights on the player side and the flat team mods.
///
/// The monster side has no membership list; the whole monster roster fights.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSession {
    active: bool,
    /// Join order, no duplicates.
    player_team: Vec<PlayerId>,
    player_team_mod: i32,
    monster_team_mod: i32,
}

impl CombatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn player_team(&self) -> &[PlayerId] {
        &self.player_team
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.player_team.contains(&id)
    }

    pub fn team_mod(&self, team: Team) -> i32 {
        match team {
            Team::Players => self.player_team_mod,
            Team::Monsters => self.monster_team_mod,
        }
    }

    /// Opens a fresh session with an empty team and zeroed mods.
    pub fn start(&mut self) {
        self.active = true;
        self.player_team.clear();
        self.player_team_mod = 0;
        self.monster_team_mod = 0;
    }

    /// Team and mods are left for inspection until the next `start`.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Returns `true` if the id was newly added.
    pub fn join(&mut self, id: PlayerId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.player_team.push(id);
        true
    }

    /// Returns `true` if the id was present.
    pub fn leave(&mut self, id: PlayerId) -> bool {
        let before = self.player_team.len();
        self.player_team.retain(|member| *member != id);
        self.player_team.len() != before
    }

    /// Adds `delta` to the team mod and returns the new value.
    pub fn adjust_team_mod(&mut self, team: Team, delta: i32) -> i32 {
        let slot = match team {
            Team::Players => &mut self.player_team_mod,
            Team::Monsters => &mut self.monster_team_mod,
        };
        *slot = slot.saturating_add(delta);
        *slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_is_idempotent() {
        let mut session = CombatSession::new();
        session.start();
        assert!(session.join(PlayerId::new(1)));
        assert!(!session.join(PlayerId::new(1)));
        assert_eq!(session.player_team(), &[PlayerId::new(1)]);
    }

    #[test]
    fn start_clears_previous_session() {
        let mut session = CombatSession::new();
        session.start();
        session.join(PlayerId::new(2));
        session.adjust_team_mod(Team::Players, 3);
        session.adjust_team_mod(Team::Monsters, -4);
        session.end();
        assert!(!session.is_active());

        session.start();
        assert!(session.is_active());
        assert!(session.player_team().is_empty());
        assert_eq!(session.team_mod(Team::Players), 0);
        assert_eq!(session.team_mod(Team::Monsters), 0);
    }

    #[test]
    fn leave_reports_membership() {
        let mut session = CombatSession::new();
        session.join(PlayerId::new(1));
        assert!(session.leave(PlayerId::new(1)));
        assert!(!session.leave(PlayerId::new(1)));
    }

    #[test]
    fn team_parses_singular_and_plural() {
        assert_eq!("monster".parse::<Team>(), Ok(Team::Monsters));
        assert_eq!("Players".parse::<Team>(), Ok(Team::Players));
        assert_eq!(Team::Monsters.to_string(), "monsters");
    }
}
