pub mod input;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use galaxy_numerals::Numeral;
pub use input::{load_lines, sanitize, sanitize_lines};
pub use interpreter::{
    BuildError, CommodityRegistry, CurrencyRegistry, Expression, ExpressionError, FailurePolicy,
    LoadError, Merchant, MerchantError, QueryError, QueryProcessor, Session, UNKNOWN_QUERY_ANSWER,
    compute_suggestions,
};
pub use parser::{Record, RecordKind, classify, classify_lines};
pub use types::{Commodity, CurrencyToken};
