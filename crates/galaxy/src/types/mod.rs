mod commodity;
mod currency;

pub use commodity::Commodity;
pub use currency::CurrencyToken;
