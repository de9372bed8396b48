//! The merchant pipeline: raw lines in, answers out.
//!
//! [`Merchant`] holds configuration only. [`Merchant::prepare`] classifies
//! the input and builds both registries into a [`Session`], which then
//! answers the queries in input order.

use bon::Builder;
use tracing::{debug, warn};

use crate::interpreter::{
    BuildError, CommodityRegistry, CurrencyRegistry, MerchantError, QueryProcessor,
    UNKNOWN_QUERY_ANSWER,
};
use crate::parser::{Record, classify_lines};

/// What to do when a single query cannot be answered.
///
/// Registry errors (unknown numerals, malformed transactions) stop the
/// batch under either policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing query and return its error.
    #[default]
    Abort,
    /// Answer the failing line with the error message and keep going.
    PerLine,
}

/// Configured entry point for converting merchant notes.
///
/// # Example
///
/// ```
/// use galaxy::{FailurePolicy, Merchant};
///
/// let merchant = Merchant::builder()
///     .failure_policy(FailurePolicy::PerLine)
///     .build();
///
/// let answers = merchant
///     .convert([
///         "glob is I",
///         "prok is V",
///         "glob glob Silver is 34 Credits",
///         "how much is prok glob glob ?",
///         "how many Credits is glob prok Silver ?",
///         "how many Credits is glob Gold ?",
///     ])
///     .unwrap();
///
/// assert_eq!(answers[0], "prok glob glob is 7");
/// assert_eq!(answers[1], "glob prok Silver is 68 Credits");
/// assert!(answers[2].starts_with("unknown commodity 'Gold'"));
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Merchant {
    #[builder(default)]
    failure_policy: FailurePolicy,

    /// Answer given to unrecognized lines.
    #[builder(default = UNKNOWN_QUERY_ANSWER.to_string())]
    unknown_answer: String,
}

impl Default for Merchant {
    fn default() -> Self {
        Merchant::builder().build()
    }
}

impl Merchant {
    /// Create a merchant that aborts on the first failing query.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    pub fn unknown_answer(&self) -> &str {
        &self.unknown_answer
    }

    /// Classify `lines` and build both registries.
    ///
    /// All definitions are registered before any transaction is priced,
    /// wherever they appear in the input.
    pub fn prepare<I, S>(&self, lines: I) -> Result<Session, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = classify_lines(lines);
        let currencies = CurrencyRegistry::from_records(&records)?;
        let commodities = CommodityRegistry::from_records(&records, &currencies)?;
        let queries: Vec<Record> = records.into_iter().filter(Record::is_query).collect();
        debug!(
            currencies = currencies.len(),
            commodities = commodities.len(),
            queries = queries.len(),
            "prepared session"
        );

        Ok(Session {
            currencies,
            commodities,
            queries,
            failure_policy: self.failure_policy,
            unknown_answer: self.unknown_answer.clone(),
        })
    }

    /// Run the whole pipeline and return one answer per query line.
    pub fn convert<I, S>(&self, lines: I) -> Result<Vec<String>, MerchantError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prepare(lines)?.answer_all()
    }
}

/// Frozen registries plus the query lines still to answer.
#[derive(Debug, Clone)]
pub struct Session {
    currencies: CurrencyRegistry,
    commodities: CommodityRegistry,
    queries: Vec<Record>,
    failure_policy: FailurePolicy,
    unknown_answer: String,
}

impl Session {
    pub fn currencies(&self) -> &CurrencyRegistry {
        &self.currencies
    }

    pub fn commodities(&self) -> &CommodityRegistry {
        &self.commodities
    }

    /// Query records in input order.
    pub fn queries(&self) -> &[Record] {
        &self.queries
    }

    /// A processor over this session's registries.
    pub fn processor(&self) -> QueryProcessor<'_> {
        QueryProcessor::new(&self.currencies, &self.commodities)
            .with_unknown_answer(&self.unknown_answer)
    }

    /// Answer every query in input order, honoring the failure policy.
    pub fn answer_all(&self) -> Result<Vec<String>, MerchantError> {
        let processor = self.processor();
        let mut answers = Vec::with_capacity(self.queries.len());

        for record in &self.queries {
            match processor.answer(record) {
                Ok(Some(answer)) => answers.push(answer),
                Ok(None) => {}
                Err(source) => match self.failure_policy {
                    FailurePolicy::Abort => {
                        return Err(MerchantError::Query {
                            line: record.line,
                            source,
                        });
                    }
                    FailurePolicy::PerLine => {
                        warn!(line = record.line, error = %source, "query failed");
                        answers.push(source.to_string());
                    }
                },
            }
        }

        Ok(answers)
    }
}
