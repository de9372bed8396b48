use std::fmt;

use galaxy_numerals::Numeral;
use serde::{Serialize, Serializer};

/// A galactic currency word bound to a base numeral.
///
/// Tokens are owned by a [`CurrencyRegistry`](crate::CurrencyRegistry);
/// expressions borrow them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CurrencyToken {
    symbol: String,
    #[serde(serialize_with = "serialize_numeral")]
    numeral: Numeral,
}

impl CurrencyToken {
    /// Bind a currency word to a numeral.
    pub fn new(symbol: impl Into<String>, numeral: Numeral) -> Self {
        Self {
            symbol: symbol.into(),
            numeral,
        }
    }

    /// The currency word as it appears in the input (`glob`, `prok`, ...).
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn numeral(&self) -> Numeral {
        self.numeral
    }

    /// Shorthand for `self.numeral().value()`.
    pub fn value(&self) -> u64 {
        self.numeral.value()
    }

    pub fn is_repeatable(&self) -> bool {
        self.numeral.is_repeatable()
    }

    /// Whether this token may precede `larger` in a subtractive pair.
    pub fn can_subtract_from(&self, larger: &CurrencyToken) -> bool {
        self.numeral.can_subtract_from(larger.numeral)
    }
}

impl fmt::Display for CurrencyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

fn serialize_numeral<S: Serializer>(numeral: &Numeral, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_char(numeral.symbol())
}
