use std::borrow::Cow;

use typed_builder::TypedBuilder;

use super::transaction::Transaction;

/// A top-level entry of a journal.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry<'a> {
    Commodity(CommodityDirective<'a>),
    Transaction(Transaction<'a>),
}

impl<'a> From<CommodityDirective<'a>> for Entry<'a> {
    fn from(commodity: CommodityDirective<'a>) -> Self {
        Entry::Commodity(commodity)
    }
}

impl<'a> From<Transaction<'a>> for Entry<'a> {
    fn from(txn: Transaction<'a>) -> Self {
        Entry::Transaction(txn)
    }
}

/// Represents a `commodity` directive, which declares a commodity by way of a sample amount.
///
/// ```text
/// commodity $1000.00
/// ```
///
/// Only the text following the keyword is kept. Interpreting the sample amount (symbol
/// placement, precision, thousands separators) is left to the consumer.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct CommodityDirective<'a> {
    /// Everything after the `commodity` keyword and its whitespace, up to the end of the line.
    pub text: Cow<'a, str>,

    /// The source string from the parsed input, including the line terminator.
    #[builder(default)]
    pub source: Option<&'a str>,
}
