use std::fmt;

/// CellState represents one grid position in the two-phase simulation.
///
/// `Zombie` and `Embryo` are transient: they only exist between the mark
/// phase and the cleanup phase of a generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
    /// Alive now, dies at the end of this generation
    Zombie,
    /// Dead now, born at the end of this generation
    Embryo,
}

impl CellState {
    pub const ALL: [CellState; 4] = [
        CellState::Dead,
        CellState::Alive,
        CellState::Zombie,
        CellState::Embryo,
    ];

    /// Whether the cell counts towards a neighbor sum.
    /// A zombie is still alive for the generation it is marked in.
    pub const fn is_live(self) -> bool {
        matches!(self, CellState::Alive | CellState::Zombie)
    }

    /// Zombie or embryo
    pub const fn is_transient(self) -> bool {
        matches!(self, CellState::Zombie | CellState::Embryo)
    }

    /// Next state in the fixed cycle Embryo -> Alive -> Zombie -> Dead -> Embryo
    pub const fn advance(self) -> Self {
        match self {
            CellState::Embryo => CellState::Alive,
            CellState::Alive => CellState::Zombie,
            CellState::Zombie => CellState::Dead,
            CellState::Dead => CellState::Embryo,
        }
    }

    /// Conway's rule expressed as a mark decision: only stable states can be marked.
    pub const fn should_transition(self, neighbors: u8) -> bool {
        match self {
            CellState::Alive => neighbors < 2 || neighbors > 3,
            CellState::Dead => neighbors == 3,
            CellState::Zombie | CellState::Embryo => false,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            CellState::Dead => 'd',
            CellState::Alive => 'a',
            CellState::Zombie => 'z',
            CellState::Embryo => 'e',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'd' => Some(CellState::Dead),
            'a' => Some(CellState::Alive),
            'z' => Some(CellState::Zombie),
            'e' => Some(CellState::Embryo),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parse whitespace-separated rows of cell symbols, e.g. `"dad ddd ada"`.
/// Returns `None` if any symbol is unknown. Row lengths are not checked here;
/// `Grid::set_grid` is responsible for rejecting ragged input.
pub fn parse_rows(text: &str) -> Option<Vec<Vec<CellState>>> {
    text.split_whitespace()
        .map(|row| row.chars().map(CellState::from_symbol).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_states() {
        assert!(CellState::Alive.is_live());
        assert!(CellState::Zombie.is_live());
        assert!(!CellState::Dead.is_live());
        assert!(!CellState::Embryo.is_live());
    }

    #[test]
    fn test_transient_states() {
        assert!(CellState::Zombie.is_transient());
        assert!(CellState::Embryo.is_transient());
        assert!(!CellState::Alive.is_transient());
        assert!(!CellState::Dead.is_transient());
    }

    #[test]
    fn test_advance_cycle() {
        assert_eq!(CellState::Embryo.advance(), CellState::Alive);
        assert_eq!(CellState::Alive.advance(), CellState::Zombie);
        assert_eq!(CellState::Zombie.advance(), CellState::Dead);
        assert_eq!(CellState::Dead.advance(), CellState::Embryo);
    }

    #[test]
    fn test_underpopulation() {
        assert!(CellState::Alive.should_transition(0));
        assert!(CellState::Alive.should_transition(1));
    }

    #[test]
    fn test_survival() {
        assert!(!CellState::Alive.should_transition(2));
        assert!(!CellState::Alive.should_transition(3));
    }

    #[test]
    fn test_overpopulation() {
        assert!(CellState::Alive.should_transition(4));
        assert!(CellState::Alive.should_transition(8));
    }

    #[test]
    fn test_reproduction() {
        assert!(CellState::Dead.should_transition(3));
        for n in (0..=8).filter(|&n| n != 3) {
            assert!(!CellState::Dead.should_transition(n));
        }
    }

    #[test]
    fn test_transient_never_marked() {
        for n in 0..=8 {
            assert!(!CellState::Zombie.should_transition(n));
            assert!(!CellState::Embryo.should_transition(n));
        }
    }

    #[test]
    fn test_symbols() {
        for state in CellState::ALL {
            assert_eq!(CellState::from_symbol(state.symbol()), Some(state));
        }
        assert_eq!(CellState::from_symbol('x'), None);
        assert_eq!(CellState::Zombie.to_string(), "z");
    }

    #[test]
    fn test_parse_rows() {
        let rows = parse_rows("da\nze").unwrap();
        assert_eq!(
            rows,
            vec![
                vec![CellState::Dead, CellState::Alive],
                vec![CellState::Zombie, CellState::Embryo],
            ]
        );
        assert!(parse_rows("dq").is_none());
    }
}
