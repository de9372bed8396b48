//! The fixed Roman numeral catalog behind galactic currency words.
//!
//! This crate holds the only numeral table in the workspace so that the
//! expression validator and the command-line diagnostics agree on values,
//! repetition rules and legal subtractive pairs.

use core::fmt;

/// One of the seven base numeral symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Numeral {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Numeral {
    /// Every numeral, in ascending value order.
    pub const ALL: [Numeral; 7] = [
        Numeral::I,
        Numeral::V,
        Numeral::X,
        Numeral::L,
        Numeral::C,
        Numeral::D,
        Numeral::M,
    ];

    /// Integer value of the numeral.
    pub const fn value(self) -> u64 {
        match self {
            Numeral::I => 1,
            Numeral::V => 5,
            Numeral::X => 10,
            Numeral::L => 50,
            Numeral::C => 100,
            Numeral::D => 500,
            Numeral::M => 1000,
        }
    }

    /// Literal symbol used in currency definitions (`glob is I`).
    pub const fn symbol(self) -> char {
        match self {
            Numeral::I => 'I',
            Numeral::V => 'V',
            Numeral::X => 'X',
            Numeral::L => 'L',
            Numeral::C => 'C',
            Numeral::D => 'D',
            Numeral::M => 'M',
        }
    }

    /// Whether the numeral may appear more than once in an expression.
    ///
    /// The "fives" (V, L, D) are standalone and never repeat.
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Numeral::I | Numeral::X | Numeral::C | Numeral::M)
    }

    /// Whether the numeral may precede a larger numeral in a subtractive pair.
    pub const fn is_subtractable(self) -> bool {
        !self.subtractable_from().is_empty()
    }

    /// Numerals this one may legally precede in a subtractive pair.
    ///
    /// Empty for every numeral that is not subtractable.
    pub const fn subtractable_from(self) -> &'static [Numeral] {
        match self {
            Numeral::I => &[Numeral::V, Numeral::X],
            Numeral::X => &[Numeral::L, Numeral::C],
            Numeral::C => &[Numeral::D, Numeral::M],
            Numeral::V | Numeral::L | Numeral::D | Numeral::M => &[],
        }
    }

    /// Whether `self` followed by `larger` forms a legal subtractive pair.
    pub fn can_subtract_from(self, larger: Numeral) -> bool {
        self.subtractable_from().contains(&larger)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Look up a numeral by its literal symbol.
///
/// Lowercase letters are not accepted: the catalog is case-sensitive.
pub fn lookup(symbol: char) -> Option<Numeral> {
    Numeral::ALL.into_iter().find(|n| n.symbol() == symbol)
}

/// Comma-separated list of accepted symbols, for diagnostics.
pub fn accepted_symbols() -> String {
    Numeral::ALL
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
