use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_till1, take_while, take_while1, take_while_m_n},
    character::complete::{char, space0},
    combinator::{eof, opt, peek, rest},
    sequence::{preceded, terminated},
    IResult,
};

use crate::{Line, Parameters};

fn is_space(c: char) -> bool {
    c == ' '
}

// prefix ::= ':' <servername / nick [['!' user] '@' host]> SPACE
fn parse_prefix(buf: &str) -> IResult<&str, &str> {
    let (buf, prefix) = preceded(char(':'), take_till1(is_space))(buf)?;
    let (buf, _spaces) = take_while1(is_space)(buf)?;
    Ok((buf, prefix))
}

// command ::= letter+ / 3digit
fn parse_command(buf: &str) -> IResult<&str, &str> {
    let letters = take_while1(|c: char| c.is_ascii_alphabetic());
    let digits = take_while_m_n(3, 3, |c: char| c.is_ascii_digit());

    let (buf, command) = terminated(alt((letters, digits)), peek(alt((eof, tag(" ")))))(buf)?;
    Ok((buf, command))
}

// returns the parameters and whether the last one was a trailing parameter
fn parse_parameters(mut buf: &str) -> IResult<&str, (Parameters<'_>, bool)> {
    let mut params: Parameters<'_> = smallvec::smallvec!();
    loop {
        let (buf_, _spaces) = take_while(is_space)(buf)?;
        buf = buf_;

        if buf.is_empty() {
            return Ok((buf, (params, false)));
        }

        if let Ok((buf_, trailing)) = preceded(char::<_, nom::error::Error<&str>>(':'), rest)(buf)
        {
            params.push(trailing);
            return Ok((buf_, (params, true)));
        }

        let (buf_, param) = take_till(is_space)(buf)?;
        params.push(param);
        buf = buf_;
    }
}

// line ::= [':' <prefix> SPACE] <command> <parameters>
pub(crate) fn parse_line(buf: &str) -> IResult<&str, Line<'_>> {
    let (buf, _) = space0(buf)?;
    let (buf, prefix) = opt(parse_prefix)(buf)?;
    let (buf, command) = parse_command(buf)?;
    let (buf, (parameters, has_trailing)) = parse_parameters(buf)?;
    Ok((
        buf,
        Line {
            prefix,
            command,
            parameters,
            has_trailing,
        },
    ))
}
