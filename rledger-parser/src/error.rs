use std::error::Error;
use std::fmt;

use pest::error::{ErrorVariant, InputLocation, LineColLocation};
use pest::{Position, Span};

use super::Rule;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorKind {
    /// The input does not match the grammar.
    SyntaxError { message: String },
    /// The rule matched, but only a prefix of the input; `matched` bytes were consumed.
    IncompleteMatch { matched: usize },
    /// Parser has reached an invalid state (most likely a bug in the parser).
    InvalidParserState { message: String },
}

#[derive(Debug)]
pub struct ParseError {
    /// The type of error.
    pub kind: ParseErrorKind,
    /// The (line, column) location of the error in the input, both 1-based.
    pub location: (usize, usize),
    /// Byte offset of the error in the input.
    pub offset: usize,
    /// Names of the grammar rules attempted at the failing position, in the order pest reports
    /// them.
    pub expected: Vec<String>,
    source: Option<Box<dyn Error + 'static + Send + Sync>>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::SyntaxError { message } => {
                write!(f, "Invalid input: {}", message)?;
            }
            ParseErrorKind::IncompleteMatch { matched } => {
                write!(f, "Unexpected trailing input after {} bytes", matched)?;
            }
            ParseErrorKind::InvalidParserState { message } => {
                write!(f, "Parser has reached an invalid state (please report this as a bug): expected {}", message)?;
            }
        }
        write!(f, " at line {} column {}", self.location.0, self.location.1)
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl ParseError {
    pub(crate) fn invalid_state<T: ToString>(msg: T) -> ParseError {
        ParseError {
            kind: ParseErrorKind::InvalidParserState {
                message: msg.to_string(),
            },
            location: (0, 0),
            offset: 0,
            expected: Vec::new(),
            source: None,
        }
    }

    pub(crate) fn invalid_state_with_span<T: ToString>(msg: T, span: Span) -> ParseError {
        ParseError {
            kind: ParseErrorKind::InvalidParserState {
                message: msg.to_string(),
            },
            location: span.start_pos().line_col(),
            offset: span.start(),
            expected: Vec::new(),
            source: None,
        }
    }

    pub(crate) fn incomplete_match(input: &str, matched: usize) -> ParseError {
        let location = Position::new(input, matched)
            .map(|pos| pos.line_col())
            .unwrap_or((0, 0));
        ParseError {
            kind: ParseErrorKind::IncompleteMatch { matched },
            location,
            offset: matched,
            expected: Vec::new(),
            source: None,
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self.kind, ParseErrorKind::SyntaxError { .. })
    }

    pub fn is_incomplete_match(&self) -> bool {
        matches!(self.kind, ParseErrorKind::IncompleteMatch { .. })
    }
}

/// Human-readable name of a grammar rule, used in diagnostics.
#[allow(unreachable_patterns)]
pub(crate) fn rule_name(rule: &Rule) -> &'static str {
    match *rule {
        Rule::EOI => "end of input",
        Rule::journal => "journal",
        Rule::comment => "comment",
        Rule::comment_text => "comment text",
        Rule::comment_line => "indented comment line",
        Rule::year => "4-digit year",
        Rule::month => "month (1-12)",
        Rule::day => "day of month (1-31)",
        Rule::date_dash => "'-' date separator",
        Rule::date_slash => "'/' date separator",
        Rule::date_dot => "'.' date separator",
        Rule::simple_date => "date",
        Rule::status => "status ('*' or '!')",
        Rule::code => "code in parentheses",
        Rule::code_text => "code",
        Rule::description => "description",
        Rule::transaction => "transaction",
        Rule::account_name => "account name",
        Rule::amount => "amount",
        Rule::posting => "posting",
        Rule::commodity_text => "commodity sample amount",
        Rule::commodity_directive => "commodity directive",
        // Silent rules never show up in reported attempts.
        _ => "input",
    }
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        let expected = match &err.variant {
            ErrorVariant::ParsingError { positives, .. } => positives
                .iter()
                .map(|rule| rule_name(rule).to_string())
                .collect(),
            _ => Vec::new(),
        };
        let offset = match err.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        let err = err.renamed_rules(|rule| rule_name(rule).to_string());
        let location = match &err.line_col {
            LineColLocation::Pos(ref p) => *p,
            LineColLocation::Span(ref p, _) => *p,
        };
        ParseError {
            kind: ParseErrorKind::SyntaxError {
                message: format!("{}", err),
            },
            location,
            offset,
            expected,
            source: Some(Box::new(err)),
        }
    }
}
