//! Parsing and rendering of ledger journals.
//!
//! ```text
//! commodity $1000.00
//!
//! 2008/01/01 income
//!     assets:bank:checking   $1
//!     income:salary         $-1
//! ```
//!
//! [`parse_journal`] turns such text into a [`Journal`] of borrowed parse-tree nodes, and
//! [`render`] writes a journal back out.

pub use rledger_core::*;
pub use rledger_parser::error::{ParseError, ParseErrorKind, ParseResult};
pub use rledger_parser::{
    parse_commodity_directive, parse_commodity_directive_prefix, parse_journal, parse_posting,
    parse_posting_prefix, parse_simple_date, parse_simple_date_prefix, parse_transaction,
    parse_transaction_prefix, JournalParser, Rule,
};
pub use rledger_render::{render, BasicRenderer, BasicRendererError, Renderer};
