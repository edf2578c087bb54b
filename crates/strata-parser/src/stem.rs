//! File-name stem parser.
//!
//! A stem is the file name up to its first `.`, and encodes exactly one BEM
//! entity. Recognized shapes:
//!
//! - `block`
//! - `block__elem`
//! - `block_mod` / `block_mod_val`
//! - `block__elem_mod` / `block__elem_mod_val`
//!
//! Name segments are non-empty runs of `[A-Za-z0-9-]`; `__` introduces the
//! element part and single `_` the modifier parts. The whole stem must be
//! consumed.
//!
//! The public entry point is [`parse_stem`].

use winnow::{
    Parser as _,
    combinator::{eof, opt, preceded},
    error::ModalResult,
    token::take_while,
};

use strata_core::ident::BemIdent;

use crate::error::ParseError;

type Input<'a> = &'a str;
type IResult<O> = ModalResult<O>;

/// Parse one name segment: letters, digits, and hyphens.
fn segment<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-').parse_next(input)
}

/// Parse the element part: `__` followed by a segment.
fn elem_part<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    preceded("__", segment).parse_next(input)
}

/// Parse the modifier part: `_name`, optionally followed by `_value`.
///
/// A lone `_name` is the boolean (flag) form.
fn mod_part<'a>(input: &mut Input<'a>) -> IResult<(&'a str, Option<&'a str>)> {
    preceded('_', (segment, opt(preceded('_', segment)))).parse_next(input)
}

/// Parse a complete stem into its identifier parts.
///
/// Segment characters never include `_`, so the separators are unambiguous
/// and no backtracking past a matched part is needed.
fn bem_stem(input: &mut Input<'_>) -> IResult<BemIdent> {
    let (block, elem, modifier, _) =
        (segment, opt(elem_part), opt(mod_part), eof).parse_next(input)?;

    let mut ident = BemIdent::block(block);
    if let Some(elem) = elem {
        ident = ident.with_elem(elem);
    }
    match modifier {
        Some((name, Some(value))) => ident = ident.with_mod(name, value),
        Some((name, None)) => ident = ident.with_flag(name),
        None => {}
    }
    Ok(ident)
}

/// Parse a file-name stem into a BEM entity identifier.
///
/// # Returns
///
/// - `Ok(ident)` - The stem follows one of the recognized shapes
/// - `Err(ParseError::InvalidNaming)` - Any other stem, including empty
///   segments, stray separators, and characters outside `[A-Za-z0-9-]`
///
/// # Example
///
/// ```
/// # use strata_core::ident::BemIdent;
/// # use strata_parser::parse_stem;
///
/// let ident = parse_stem("popup__tail_theme_dark").unwrap();
/// assert_eq!(
///     ident,
///     BemIdent::block("popup").with_elem("tail").with_mod("theme", "dark")
/// );
///
/// assert!(parse_stem("popup___tail").is_err());
/// ```
pub fn parse_stem(stem: &str) -> Result<BemIdent, ParseError> {
    let mut input = stem;
    bem_stem(&mut input).map_err(|_| ParseError::InvalidNaming(stem.to_string()))
}
