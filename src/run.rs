use std::io::Write;

use clap::ValueEnum;
use set::{Address, Element, Set, Text};
use tracing::{debug, trace};

use crate::err::{miette, Diag, Result};
use crate::script::{Command, Lit, Literal, Stmt};

/// Element type held by the driver's set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Text,
    Address,
}

trait FromLiteral: Element + Clone + Sized {
    const KIND: &'static str;

    fn from_literal(literal: &Literal) -> Option<Self>;

    fn lower(Lit(literal, span): &Lit) -> Result<Self> {
        Self::from_literal(literal).ok_or_else(|| Diag::KindMismatch {
            loc: miette(*span),
            expected: Self::KIND,
            found: literal.kind(),
        })
    }
}

impl FromLiteral for Text {
    const KIND: &'static str = "a string";

    fn from_literal(literal: &Literal) -> Option<Self> {
        match literal {
            Literal::Text(text) => Some(Text::from(text.as_str())),
            Literal::Address { .. } => None,
        }
    }
}

impl FromLiteral for Address {
    const KIND: &'static str = "an address";

    fn from_literal(literal: &Literal) -> Option<Self> {
        match literal {
            Literal::Address { name, street, zip } => Some(Address::new(name, street, *zip)),
            Literal::Text(_) => None,
        }
    }
}

/// Executes `stmts` against a fresh set of `kind`, writing query results to `out`.
pub fn run(stmts: &[Stmt], kind: Kind, out: &mut dyn Write) -> Result<()> {
    match kind {
        Kind::Text => execute::<Text>(stmts, out),
        Kind::Address => execute::<Address>(stmts, out),
    }
}

fn execute<E: FromLiteral>(stmts: &[Stmt], out: &mut dyn Write) -> Result<()> {
    let mut set = Set::<E>::default();
    for Stmt(command, span) in stmts {
        debug!(?span, "executing {command:?}");
        match command {
            Command::New(lits) => {
                set = lits.iter().map(E::lower).collect::<Result<Set<E>>>()?;
                trace!(len = set.len(), "constructed");
            }
            Command::Add(lit) => {
                let inserted = set.insert(E::lower(lit)?);
                trace!(inserted, len = set.len());
            }
            Command::Remove(lit) => {
                let removed = set.remove(&E::lower(lit)?);
                trace!(removed, len = set.len());
            }
            Command::Contains(lit) => writeln!(out, "{}", set.contains(&E::lower(lit)?))?,
            Command::Size => writeln!(out, "{}", set.len())?,
            Command::Slice => {
                for element in set.to_vec() {
                    writeln!(out, "{element}")?;
                }
            }
            Command::Print => writeln!(out, "{set}")?,
            // Only produced alongside a syntax error, which stops execution before this point.
            Command::Error => {}
        }
    }
    Ok(())
}
