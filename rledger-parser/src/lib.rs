use std::borrow::Cow;
use std::convert::TryFrom;

use log::{debug, trace};
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser as PestParser;

use rledger_core as rc;

use error::{ParseError, ParseResult};

pub mod error;

#[derive(PestParser)]
#[grammar = "ledger.pest"]
pub struct JournalParser;

fn optional_rule<'i>(rule: Rule, pairs: &mut Pairs<'i, Rule>) -> Option<Pair<'i, Rule>> {
    match pairs.peek() {
        Some(ref p) if p.as_rule() == rule => pairs.next(),
        _ => None,
    }
}

/// Matches `rule` at the start of `input`, returning its pair and the unconsumed remainder.
fn match_prefix<'i>(rule: Rule, input: &'i str) -> ParseResult<(Pair<'i, Rule>, &'i str)> {
    debug!("parsing {:?} from {} bytes of input", rule, input.len());
    let pair = JournalParser::parse(rule, input)
        .map_err(|err| {
            let err = ParseError::from(err);
            debug!(
                "{:?} failed at line {} column {}",
                rule, err.location.0, err.location.1
            );
            err
        })?
        .next()
        .ok_or_else(|| ParseError::invalid_state("non-empty parse result"))?;
    let end = pair.as_span().end();
    Ok((pair, &input[end..]))
}

/// Like `match_prefix`, but the whole of `input` has to be consumed.
fn match_complete<'i>(rule: Rule, input: &'i str) -> ParseResult<Pair<'i, Rule>> {
    let (pair, rest) = match_prefix(rule, input)?;
    if !rest.is_empty() {
        let matched = input.len() - rest.len();
        debug!("{:?} left {} bytes unconsumed", rule, rest.len());
        return Err(ParseError::incomplete_match(input, matched));
    }
    Ok(pair)
}

/// Parses a complete journal.
///
/// A line that matches neither a commodity directive, a transaction nor a blank line fails the
/// whole parse; no partial journal is returned.
pub fn parse_journal(input: &str) -> ParseResult<rc::Journal<'_>> {
    let parsed = match_complete(Rule::journal, input)?;

    let mut entries = Vec::new();
    for entry_pair in parsed.into_inner() {
        match entry_pair.as_rule() {
            Rule::EOI => break,
            Rule::commodity_directive => {
                entries.push(rc::Entry::Commodity(commodity_directive(entry_pair)?));
            }
            Rule::transaction => {
                entries.push(rc::Entry::Transaction(transaction(entry_pair)?));
            }
            rule => {
                return Err(ParseError::invalid_state_with_span(
                    format!("journal entry, found {:?}", rule),
                    entry_pair.as_span(),
                ));
            }
        }
    }

    debug!("parsed journal with {} entries", entries.len());
    Ok(rc::Journal::builder().entries(entries).build())
}

/// Parses a single transaction: the header line and its indented lines. The input has to end
/// with the transaction.
pub fn parse_transaction(input: &str) -> ParseResult<rc::Transaction<'_>> {
    transaction(match_complete(Rule::transaction, input)?)
}

/// Parses a transaction at the start of `input` and returns it with the remaining input.
pub fn parse_transaction_prefix(input: &str) -> ParseResult<(rc::Transaction<'_>, &str)> {
    let (pair, rest) = match_prefix(Rule::transaction, input)?;
    Ok((transaction(pair)?, rest))
}

/// Parses the content of a posting line, without its indentation.
pub fn parse_posting(input: &str) -> ParseResult<rc::Posting<'_>> {
    posting(match_complete(Rule::posting, input)?)
}

pub fn parse_posting_prefix(input: &str) -> ParseResult<(rc::Posting<'_>, &str)> {
    let (pair, rest) = match_prefix(Rule::posting, input)?;
    Ok((posting(pair)?, rest))
}

/// Parses a date such as `2010-01-31`, `2010/1/31` or `1.31`.
pub fn parse_simple_date(input: &str) -> ParseResult<rc::SimpleDate<'_>> {
    simple_date(match_complete(Rule::simple_date, input)?)
}

pub fn parse_simple_date_prefix(input: &str) -> ParseResult<(rc::SimpleDate<'_>, &str)> {
    let (pair, rest) = match_prefix(Rule::simple_date, input)?;
    Ok((simple_date(pair)?, rest))
}

/// Parses a `commodity` directive line.
pub fn parse_commodity_directive(input: &str) -> ParseResult<rc::CommodityDirective<'_>> {
    commodity_directive(match_complete(Rule::commodity_directive, input)?)
}

pub fn parse_commodity_directive_prefix(
    input: &str,
) -> ParseResult<(rc::CommodityDirective<'_>, &str)> {
    let (pair, rest) = match_prefix(Rule::commodity_directive, input)?;
    Ok((commodity_directive(pair)?, rest))
}

fn commodity_directive<'i>(pair: Pair<'i, Rule>) -> ParseResult<rc::CommodityDirective<'i>> {
    debug_assert!(pair.as_rule() == Rule::commodity_directive);
    let source = pair.as_str();
    let span = pair.as_span();
    let text = pair
        .into_inner()
        .next()
        .map(as_cow)
        .ok_or_else(|| ParseError::invalid_state_with_span("commodity text", span))?;
    trace!("commodity directive {:?}", text);
    Ok(rc::CommodityDirective::builder()
        .text(text)
        .source(Some(source))
        .build())
}

fn transaction<'i>(pair: Pair<'i, Rule>) -> ParseResult<rc::Transaction<'i>> {
    debug_assert!(pair.as_rule() == Rule::transaction);
    let source = pair.as_str();
    let span = pair.as_span();
    let mut inner = pair.into_inner();
    let date = inner
        .next()
        .map(simple_date)
        .transpose()?
        .ok_or_else(|| ParseError::invalid_state_with_span("transaction date", span))?;
    let status = optional_rule(Rule::status, &mut inner)
        .map(status)
        .transpose()?;
    let code = optional_rule(Rule::code, &mut inner)
        .map(code)
        .transpose()?;
    let description = optional_rule(Rule::description, &mut inner).map(as_cow);
    let comment = optional_rule(Rule::comment, &mut inner)
        .map(comment)
        .transpose()?;
    let lines = inner
        .map(transaction_line)
        .collect::<ParseResult<Vec<_>>>()?;
    trace!("transaction {} with {} lines", date, lines.len());
    Ok(rc::Transaction::builder()
        .date(date)
        .status(status)
        .code(code)
        .description(description)
        .comment(comment)
        .lines(lines)
        .source(Some(source))
        .build())
}

fn transaction_line<'i>(pair: Pair<'i, Rule>) -> ParseResult<rc::TransactionLine<'i>> {
    match pair.as_rule() {
        Rule::posting => Ok(rc::TransactionLine::Posting(posting(pair)?)),
        Rule::comment_line => {
            let span = pair.as_span();
            let text = pair
                .into_inner()
                .next()
                .map(comment)
                .transpose()?
                .ok_or_else(|| ParseError::invalid_state_with_span("comment", span))?;
            Ok(rc::TransactionLine::Comment(
                rc::Comment::builder().text(text).build(),
            ))
        }
        rule => Err(ParseError::invalid_state_with_span(
            format!("posting or comment line, found {:?}", rule),
            pair.as_span(),
        )),
    }
}

fn posting<'i>(pair: Pair<'i, Rule>) -> ParseResult<rc::Posting<'i>> {
    debug_assert!(pair.as_rule() == Rule::posting);
    let span = pair.as_span();
    let mut inner = pair.into_inner();
    let status = optional_rule(Rule::status, &mut inner)
        .map(status)
        .transpose()?;
    let account_name = optional_rule(Rule::account_name, &mut inner)
        .map(as_cow)
        .ok_or_else(|| ParseError::invalid_state_with_span("account name", span))?;
    let amount = optional_rule(Rule::amount, &mut inner).map(as_cow);
    let comment = optional_rule(Rule::comment, &mut inner)
        .map(comment)
        .transpose()?;
    Ok(rc::Posting::builder()
        .status(status)
        .account_name(account_name)
        .amount(amount)
        .comment(comment)
        .build())
}

fn simple_date<'i>(pair: Pair<'i, Rule>) -> ParseResult<rc::SimpleDate<'i>> {
    debug_assert!(pair.as_rule() == Rule::simple_date);
    Ok(rc::SimpleDate::from_str_unchecked(pair.as_str()))
}

fn status(pair: Pair<'_, Rule>) -> ParseResult<rc::Status> {
    let span = pair.as_span();
    rc::Status::try_from(pair.as_str())
        .map_err(|_| ParseError::invalid_state_with_span("status character", span))
}

fn code<'i>(pair: Pair<'i, Rule>) -> ParseResult<Cow<'i, str>> {
    debug_assert!(pair.as_rule() == Rule::code);
    let span = pair.as_span();
    pair.into_inner()
        .next()
        .map(as_cow)
        .ok_or_else(|| ParseError::invalid_state_with_span("code text", span))
}

fn comment<'i>(pair: Pair<'i, Rule>) -> ParseResult<Cow<'i, str>> {
    debug_assert!(pair.as_rule() == Rule::comment);
    let span = pair.as_span();
    pair.into_inner()
        .next()
        .map(as_cow)
        .ok_or_else(|| ParseError::invalid_state_with_span("comment text", span))
}

fn as_cow<'i>(pair: Pair<'i, Rule>) -> Cow<'i, str> {
    Cow::Borrowed(pair.as_str())
}
