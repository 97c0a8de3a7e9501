// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Parser for composite attribute type tokens
//!
//! The server describes attribute types as compact tokens following the
//! grammar `ident ('<' token (',' token)? '>')?`. Parsing happens in two
//! stages: a nom pass builds the raw token tree, then resolution maps names
//! onto [`AttributeType`] and checks parameter arity.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, multispace0},
    combinator::{all_consuming, opt, recognize},
    multi::{many0, separated_list1},
    sequence::{delimited, pair, preceded},
    IResult,
};

use super::{AttributeType, TypeError, TypeResult};

/// Raw token tree before base-type resolution.
#[derive(Debug)]
struct RawToken<'a> {
    name: &'a str,
    params: Vec<RawToken<'a>>,
}

pub(super) fn parse_token(token: &str) -> TypeResult<AttributeType> {
    let (_, raw) = all_consuming(delimited(multispace0, raw_token, multispace0))(token)
        .map_err(|_: nom::Err<nom::error::Error<&str>>| {
            TypeError::UnsupportedType(token.to_string())
        })?;
    resolve(&raw, token)
}

fn raw_token(input: &str) -> IResult<&str, RawToken<'_>> {
    let (input, name) = identifier(input)?;
    let (input, params) = opt(delimited(
        preceded(multispace0, char('<')),
        separated_list1(
            char(','),
            delimited(multispace0, raw_token, multispace0),
        ),
        char('>'),
    ))(input)?;
    Ok((
        input,
        RawToken {
            name,
            params: params.unwrap_or_default(),
        },
    ))
}

/// Parse identifiers
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}

fn resolve(raw: &RawToken<'_>, token: &str) -> TypeResult<AttributeType> {
    let name = raw.name.to_ascii_uppercase();
    let base = match name.as_str() {
        "STRING" => Some(AttributeType::String),
        "INT" => Some(AttributeType::Int),
        "UINT" => Some(AttributeType::Uint),
        "FLOAT" => Some(AttributeType::Float),
        "DOUBLE" => Some(AttributeType::Double),
        "BOOL" => Some(AttributeType::Bool),
        "DATETIME" => Some(AttributeType::Datetime),
        _ => None,
    };
    if let Some(base) = base {
        if !raw.params.is_empty() {
            return Err(TypeError::UnsupportedType(token.to_string()));
        }
        return Ok(base);
    }

    match name.as_str() {
        "LIST" | "SET" => match raw.params.len() {
            1 => {
                let element = Box::new(resolve(&raw.params[0], token)?);
                if name == "LIST" {
                    Ok(AttributeType::List(element))
                } else {
                    Ok(AttributeType::Set(element))
                }
            }
            0 => Err(TypeError::UnparametrizedCollection(token.to_string())),
            _ => Err(TypeError::UnsupportedType(token.to_string())),
        },
        "MAP" => match raw.params.len() {
            2 => Ok(AttributeType::Map(
                Box::new(resolve(&raw.params[0], token)?),
                Box::new(resolve(&raw.params[1], token)?),
            )),
            0 | 1 => Err(TypeError::UnparametrizedCollection(token.to_string())),
            _ => Err(TypeError::UnsupportedType(token.to_string())),
        },
        // Unknown identifiers are user-defined tuple types; the server owns
        // their definitions, the client only carries the name through.
        _ => {
            if raw.params.is_empty() {
                Ok(AttributeType::Udt(raw.name.to_string()))
            } else {
                Err(TypeError::UnsupportedType(token.to_string()))
            }
        }
    }
}
