use std::fmt;
use std::ops::Neg;

use super::board::Cell;

/// The two sides. Purple is player A and always opens; on the board the
/// players are encoded as `+1` and `-1`, so handing over the turn is negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Purple,
    Orange,
}

impl Player {
    pub const FIRST: Player = Player::Purple;

    pub fn other(self) -> Player {
        -self
    }

    /// `+1` for Purple, `-1` for Orange.
    pub fn value(self) -> i8 {
        match self {
            Player::Purple => 1,
            Player::Orange => -1,
        }
    }

    /// Inverse of [`Player::value`]; `0` and anything else is no player.
    pub fn from_value(value: i8) -> Option<Player> {
        match value {
            1 => Some(Player::Purple),
            -1 => Some(Player::Orange),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Purple => "Purple",
            Player::Orange => "Orange",
        }
    }
}

impl Neg for Player {
    type Output = Player;

    fn neg(self) -> Player {
        match self {
            Player::Purple => Player::Orange,
            Player::Orange => Player::Purple,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        match player {
            Player::Purple => Cell::Purple,
            Player::Orange => Cell::Orange,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_handover_is_negation() {
        assert_eq!(-Player::Purple, Player::Orange);
        assert_eq!(Player::Orange.other(), Player::Purple);
        for player in [Player::Purple, Player::Orange] {
            assert_eq!(player.other().value(), -player.value());
            assert_eq!(-(-player), player);
        }
    }

    #[test]
    fn test_value_encoding() {
        assert_eq!(Player::FIRST.value(), 1);
        assert_eq!(Player::from_value(-1), Some(Player::Orange));
        assert_eq!(Player::from_value(0), None);
        assert_eq!(Player::from_value(2), None);
    }

    #[test]
    fn test_cell_matches_player_value() {
        for player in [Player::Purple, Player::Orange] {
            let cell = Cell::from(player);
            assert_eq!(cell.owner(), Some(player));
            assert_eq!(cell.value(), player.value());
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Player::Orange.to_string(), "Orange");
        assert_eq!(format!("{} to move", Player::FIRST), "Purple to move");
    }
}
