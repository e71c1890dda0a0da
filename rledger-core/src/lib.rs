use typed_builder::TypedBuilder;

pub use date::SimpleDate;
pub use directives::{CommodityDirective, Entry};
pub use posting::Posting;
pub use status::Status;
pub use transaction::{Comment, Transaction, TransactionLine};

mod date;
pub mod directives;
pub mod posting;
pub mod status;
pub mod transaction;

/// Represents a complete journal: the top-level entries of a file in source order.
///
/// Blank lines between entries are not represented.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Journal<'a> {
    pub entries: Vec<Entry<'a>>,
}

impl<'a> Journal<'a> {
    /// Iterates over the transactions of the journal, skipping other entries.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction<'a>> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Transaction(txn) => Some(txn),
            _ => None,
        })
    }

    /// Iterates over the commodity directives of the journal.
    pub fn commodities(&self) -> impl Iterator<Item = &CommodityDirective<'a>> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Commodity(commodity) => Some(commodity),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
