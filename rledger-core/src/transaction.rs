use std::borrow::Cow;

use typed_builder::TypedBuilder;

use super::date::SimpleDate;
use super::posting::Posting;
use super::status::Status;

/// Represents a transaction: a dated header line followed by indented postings and comments.
///
/// The general format of a transaction is:
///
/// ```text
/// DATE [STATUS] [(CODE)] [DESCRIPTION] [; COMMENT]
///     ACCOUNT  [AMOUNT]  [; COMMENT]
///     ; COMMENT
/// ```
///
/// For example:
///
/// ```text
/// 2012/5/14 * (1042) something  ; a transaction comment
///     ; the transaction comment, continued
///     posting1  1  ; a comment for posting 1
///     posting2
/// ```
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Transaction<'a> {
    /// Date of the transaction as written. The year may be missing.
    pub date: SimpleDate<'a>,

    /// Status marker following the date.
    #[builder(default)]
    pub status: Option<Status>,

    /// Code written in parentheses, without the parentheses.
    #[builder(default)]
    pub code: Option<Cow<'a, str>>,

    /// Free text up to the end of the line or the first `;`, untrimmed.
    #[builder(default)]
    pub description: Option<Cow<'a, str>>,

    /// Comment on the header line, without the leading `;`.
    #[builder(default)]
    pub comment: Option<Cow<'a, str>>,

    /// Indented lines following the header, in source order.
    #[builder(default)]
    pub lines: Vec<TransactionLine<'a>>,

    /// The source string from the parsed input.
    #[builder(default)]
    pub source: Option<&'a str>,
}

impl<'a> Transaction<'a> {
    /// Iterates over the postings of the transaction, skipping comment lines.
    pub fn postings(&self) -> impl Iterator<Item = &Posting<'a>> {
        self.lines.iter().filter_map(|line| match line {
            TransactionLine::Posting(posting) => Some(posting),
            TransactionLine::Comment(_) => None,
        })
    }
}

/// One indented line under a transaction header.
///
/// Comment lines are never folded into a neighbouring posting, even when they visually continue
/// its comment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TransactionLine<'a> {
    Posting(Posting<'a>),
    Comment(Comment<'a>),
}

impl<'a> From<Posting<'a>> for TransactionLine<'a> {
    fn from(posting: Posting<'a>) -> Self {
        TransactionLine::Posting(posting)
    }
}

impl<'a> From<Comment<'a>> for TransactionLine<'a> {
    fn from(comment: Comment<'a>) -> Self {
        TransactionLine::Comment(comment)
    }
}

/// An indented comment line that is not attached to a posting.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Comment<'a> {
    /// Text following the `;`, untrimmed.
    pub text: Cow<'a, str>,
}
