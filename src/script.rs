use chumsky::prelude::*;

pub type Span = chumsky::span::SimpleSpan<usize>;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Text(String),
    Address {
        name: String,
        street: String,
        zip: i64,
    },
}

impl Literal {
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Text(_) => "a string",
            Literal::Address { .. } => "an address",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lit(pub Literal, pub Span);

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    New(Vec<Lit>),
    Add(Lit),
    Remove(Lit),
    Contains(Lit),
    Size,
    Slice,
    Print,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt(pub Command, pub Span);

type Extra<'a> = extra::Full<Rich<'a, char>, (), ()>;

pub fn parse(src: &str) -> ParseResult<Vec<Stmt>, Rich<'_, char>> {
    parser().parse(src)
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Stmt>, Extra<'a>> {
    let escape = just('\\').ignore_then(one_of("\\\""));

    let quoted = just('"')
        .ignore_then(
            escape
                .or(none_of("\\\""))
                .repeated()
                .collect::<String>(),
        )
        .then_ignore(just('"'))
        .labelled("string");

    // Plain digit run so leading zeros are accepted.
    let zip = text::digits(10)
        .collect::<String>()
        .labelled("zip code")
        .try_map(|digits, span| {
            digits
                .parse::<i64>()
                .map_err(|err| Rich::custom(span, format!("invalid zip code: {err}")))
        });

    let address = quoted
        .clone()
        .padded()
        .then_ignore(just(','))
        .then(quoted.clone().padded())
        .then_ignore(just(','))
        .then(zip.padded())
        .delimited_by(just('('), just(')'))
        .map(|((name, street), zip)| Literal::Address { name, street, zip });

    let literal = choice((quoted.map(Literal::Text), address))
        .map_with(|lit, e| Lit(lit, e.span()))
        .padded()
        .labelled("element");

    let elements = literal
        .clone()
        .separated_by(just(','))
        .collect::<Vec<_>>();

    let op = |kw| just(kw).padded();

    let command = choice((
        op("new").ignore_then(elements).map(Command::New),
        op("add").ignore_then(literal.clone()).map(Command::Add),
        op("remove").ignore_then(literal.clone()).map(Command::Remove),
        op("contains").ignore_then(literal).map(Command::Contains),
        op("size").to(Command::Size),
        op("slice").to(Command::Slice),
        op("print").to(Command::Print),
    ))
    .labelled("command");

    let stmt = command
        .map_with(|command, e| Stmt(command, e.span()))
        .then_ignore(just(';'))
        .padded()
        .recover_with(via_parser(
            none_of(';')
                .repeated()
                .at_least(1)
                .then(just(';'))
                .padded()
                .map_with(|_, e| Stmt(Command::Error, e.span())),
        ));

    stmt.repeated()
        .collect::<Vec<_>>()
        .padded()
        .then_ignore(end())
}
