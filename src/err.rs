use chumsky::{error::RichReason, prelude::Rich};
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::script::Span;

pub type Result<T> = std::result::Result<T, Diag>;

#[derive(Error, Debug, Diagnostic)]
#[diagnostic(severity = "error")]
pub enum Diag {
    #[error("{reason}")]
    SyntaxError {
        #[label("error occured here")]
        loc: SourceSpan,
        reason: String,
    },

    #[error("Expected {expected}, found {found}")]
    KindMismatch {
        #[label("does not fit this set")]
        loc: SourceSpan,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to write output")]
    Output(#[from] std::io::Error),
}

#[derive(Diagnostic, Debug, Error)]
#[error("{message}")]
#[diagnostic()]
pub struct Diags {
    message: String,
    #[source_code]
    src: String,
    #[related]
    diags: Vec<Diag>,
}

impl Diags {
    pub fn new(src: String, diags: Vec<Diag>) -> Self {
        let message = match diags.len() {
            1 => "Could not parse script".to_owned(),
            n => format!("Could not parse script ({n} errors)"),
        };
        Self { message, src, diags }
    }
}

pub fn miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start.into(), (span.end - span.start).into())
}

// Diag is a fn so every syntax error is emitted, but they can also be collected for lib usage
pub fn syntax_errors_to_report(syntax_errs: Vec<Rich<char>>, diag: &mut dyn FnMut(Diag)) {
    fn report(loc: SourceSpan, err: RichReason<char>, diag: &mut dyn FnMut(Diag)) {
        match err {
            RichReason::ExpectedFound { expected, found } => diag(Diag::SyntaxError {
                loc,
                reason: {
                    let expected = match &expected[..] {
                        [] => "something else".to_owned(),
                        [one] => one.to_string(),
                        many => format!(
                            "one of {}",
                            many.iter()
                                .map(|e| e.to_string())
                                .collect::<Vec<_>>()
                                .join(", ")
                        ),
                    };
                    if let Some(found) = found {
                        format!("found {found:?}, expected {expected}")
                    } else {
                        format!("expected {expected}")
                    }
                },
            }),
            RichReason::Custom(reason) => diag(Diag::SyntaxError { loc, reason }),
            RichReason::Many(errs) => errs.into_iter().for_each(|err| report(loc, err, diag)),
        }
    }
    for err in syntax_errs {
        report(miette(*err.span()), err.into_reason(), diag);
    }
}
