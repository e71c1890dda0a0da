use rledger_core::*;
use std::{io, io::Write};
use thiserror::Error;


const INDENT: &str = "    ";
const SEPARATOR: &str = "  ";

#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct BasicRenderer {}

impl BasicRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Writes `journal` to `w`, one entry after another with a blank line after each.
pub fn render<W: Write>(w: &mut W, journal: &Journal<'_>) -> Result<(), BasicRendererError> {
    BasicRenderer::default().render(journal, w)
}

#[derive(Error, Debug)]
pub enum BasicRendererError {
    #[error("an io error occurred")]
    Io(#[from] io::Error),
}

pub trait Renderer<T, W: Write> {
    type Error;
    fn render(&self, renderable: T, write: &mut W) -> Result<(), Self::Error>;
}

impl<'a, W: Write> Renderer<&'a Journal<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, journal: &'a Journal<'_>, write: &mut W) -> Result<(), Self::Error> {
        for entry in &journal.entries {
            self.render(entry, write)?;
            writeln!(write)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Entry<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, entry: &'a Entry<'_>, write: &mut W) -> Result<(), Self::Error> {
        match entry {
            Entry::Commodity(commodity) => self.render(commodity, write),
            Entry::Transaction(transaction) => self.render(transaction, write),
        }
    }
}

impl<'a, W: Write> Renderer<&'a CommodityDirective<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, commodity: &'a CommodityDirective<'_>, w: &mut W) -> Result<(), Self::Error> {
        writeln!(w, "commodity {}", commodity.text)?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Transaction<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, transaction: &'a Transaction<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(w, "{}", transaction.date)?;
        if let Some(status) = transaction.status {
            write!(w, " {}", status)?;
        }
        if let Some(code) = &transaction.code {
            write!(w, " ({})", code)?;
        }
        if let Some(description) = &transaction.description {
            write!(w, " {}", description)?;
        }
        if let Some(comment) = &transaction.comment {
            // A description keeps its own trailing blanks, if it had any.
            if transaction.description.is_none() {
                write!(w, " ")?;
            }
            write!(w, ";{}", comment)?;
        }
        writeln!(w)?;
        for line in &transaction.lines {
            self.render(line, w)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a TransactionLine<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, line: &'a TransactionLine<'_>, w: &mut W) -> Result<(), Self::Error> {
        match line {
            TransactionLine::Posting(posting) => self.render(posting, w),
            TransactionLine::Comment(comment) => {
                writeln!(w, "{};{}", INDENT, comment.text)?;
                Ok(())
            }
        }
    }
}

impl<'a, W: Write> Renderer<&'a Posting<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, posting: &'a Posting<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(w, "{}", INDENT)?;
        if let Some(status) = posting.status {
            write!(w, "{} ", status)?;
        }
        write!(w, "{}", posting.account_name)?;
        if let Some(amount) = &posting.amount {
            write!(w, "{}{}", SEPARATOR, amount)?;
        }
        if let Some(comment) = &posting.comment {
            if posting.amount.is_none() {
                write!(w, "{}", SEPARATOR)?;
            }
            write!(w, ";{}", comment)?;
        }
        writeln!(w)?;
        Ok(())
    }
}
