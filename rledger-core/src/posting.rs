use std::borrow::Cow;

use typed_builder::TypedBuilder;

use super::status::Status;

/// Represents a transaction posting. A posting is one indented line under a transaction header
/// naming an account and, optionally, the amount being posted to it.
///
/// ```text
/// 2008/01/01 income
///     assets:bank:checking   $1
///     income:salary         $-1  ; paid monthly
/// ```
///
/// The account name runs up to the first pair of consecutive spaces or tabs; whatever follows
/// the separator up to a `;` is the amount, and the rest of the line is the comment. Fields that
/// were not written in the source are `None`.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Posting<'a> {
    /// Status marker written before the account name.
    #[builder(default)]
    pub status: Option<Status>,

    /// Account being posted to.
    pub account_name: Cow<'a, str>,

    /// The amount being posted, exactly as written.
    #[builder(default)]
    pub amount: Option<Cow<'a, str>>,

    /// Trailing comment, without the leading `;`.
    #[builder(default)]
    pub comment: Option<Cow<'a, str>>,
}
