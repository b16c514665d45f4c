//! Textual notation for terms: `(+ x 0 y)`, `(- 3 x)`, `{1 z}` for a wrapper, bare
//! identifiers for variables and decimal literals for numbers.

use crate::error::{ReductError, Result};
use crate::operator::OperatorKind;
use crate::term::Term;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{take_while, take_while1};
use nom::character::complete::{char, multispace0, one_of};
use nom::combinator::{all_consuming, map, map_res, recognize};
use nom::error::VerboseError;
use nom::multi::many0;
use nom::number::complete::recognize_float;
use nom::sequence::{delimited, pair};

enum Node<'a> {
    Number(f64),
    Symbol(&'a str),
    Apply(&'a str, Vec<Node<'a>>),
    Bag(Vec<Node<'a>>),
}

pub fn parse_term(input: &str) -> Result<Term> {
    match all_consuming(ws(parse_node))(input) {
        Ok((_, node)) => build(node),
        Err(e) => Err(ReductError::Parse(format!("{e:?}"))),
    }
}

fn build(node: Node<'_>) -> Result<Term> {
    match node {
        Node::Number(value) => Ok(Term::number(value)),
        Node::Symbol(name) => Ok(Term::var(name)),
        Node::Apply(head, args) => {
            let op: OperatorKind = head.parse()?;
            let operands = args.into_iter().map(build).collect::<Result<Vec<_>>>()?;
            Term::composite(op, operands)
        }
        Node::Bag(items) => Ok(Term::wrapper(
            items.into_iter().map(build).collect::<Result<Vec<_>>>()?,
        )),
    }
}

fn parse_node(input: &str) -> IResult<&str, Node<'_>, VerboseError<&str>> {
    alt((parse_apply, parse_bag, parse_number, parse_symbol))(input)
}

fn parse_apply(input: &str) -> IResult<&str, Node<'_>, VerboseError<&str>> {
    map(
        delimited(
            ws(char('(')),
            pair(ws(parse_head), many0(ws(parse_node))),
            ws(char(')')),
        ),
        |(head, args)| Node::Apply(head, args),
    )(input)
}

fn parse_bag(input: &str) -> IResult<&str, Node<'_>, VerboseError<&str>> {
    map(
        delimited(ws(char('{')), many0(ws(parse_node)), ws(char('}'))),
        Node::Bag,
    )(input)
}

fn parse_head(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    alt((recognize(one_of("+-*/")), parse_identifier))(input)
}

fn parse_number(input: &str) -> IResult<&str, Node<'_>, VerboseError<&str>> {
    map(map_res(recognize_float, str::parse::<f64>), Node::Number)(input)
}

fn parse_symbol(input: &str) -> IResult<&str, Node<'_>, VerboseError<&str>> {
    map(parse_identifier, Node::Symbol)(input)
}

fn parse_identifier(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_' || c == '$'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}
