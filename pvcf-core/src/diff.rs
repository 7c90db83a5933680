//! Parser for the compact diff notation of haplotype callers.
//!
//! A diff token is a position followed by an operation:
//!
//! | token      | meaning                                   |
//! |------------|-------------------------------------------|
//! | `12A>T`    | substitution of `A` by `T` at 12          |
//! | `5del{3}`  | deletion of 3 residues starting at 5      |
//! | `5del{x}`  | deletion with a non-numeric extent        |
//!
//! Tokens that don't fit the grammar are dropped, not reported as errors.

use log::debug;

use crate::consts::{DELETION_ALLELE, DELETION_OPERATOR, SUBSTITUTION_OPERATOR};
use crate::errors::{PvcfError, Result};
use crate::models::Diff;

/// The operation part of a diff token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp<'a> {
    Substitution { ref_allele: &'a str, alt: &'a str },
    Deletion { extent: &'a str },
}

/// A diff token split into its position prefix and operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffToken<'a> {
    pub pos: &'a str,
    pub op: DiffOp<'a>,
}

impl<'a> DiffToken<'a> {
    ///
    /// Split a token into position and operation. Returns `None` when the
    /// token has no leading digits, no known operator, or the operator
    /// doesn't split the remainder into exactly two parts.
    ///
    pub fn tokenize(token: &'a str) -> Option<Self> {
        let digits = token.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let (pos, rest) = token.split_at(digits);

        // substitution takes precedence over deletion
        let op = if rest.contains(SUBSTITUTION_OPERATOR) {
            let (ref_allele, alt) = split_exactly_once(rest, SUBSTITUTION_OPERATOR)?;
            DiffOp::Substitution { ref_allele, alt }
        } else if rest.contains(DELETION_OPERATOR) {
            let (_, extent) = split_exactly_once(rest, DELETION_OPERATOR)?;
            let extent = extent.strip_prefix('{').unwrap_or(extent);
            let extent = extent.strip_suffix('}').unwrap_or(extent);
            DiffOp::Deletion { extent }
        } else {
            return None;
        };

        Some(DiffToken { pos, op })
    }
}

fn split_exactly_once<'a>(s: &'a str, operator: &str) -> Option<(&'a str, &'a str)> {
    let (head, tail) = s.split_once(operator)?;
    if tail.contains(operator) {
        None
    } else {
        Some((head, tail))
    }
}

///
/// Parse one diff token against the haplotype's reference sequence.
///
/// Deletions take their reference allele from `reference` at the 0-based
/// token position; a position past the end of the sequence is an error.
///
/// # Arguments
///
/// - token: the diff token, possibly absent
/// - reference: the reference sequence of the haplotype
///
/// # Returns
///
/// `Ok(None)` for absent, empty or unparseable tokens.
///
pub fn parse_diff(token: Option<&str>, reference: &str) -> Result<Option<Diff>> {
    let token = match token {
        Some(token) if !token.is_empty() => token,
        _ => return Ok(None),
    };

    let Some(parsed) = DiffToken::tokenize(token) else {
        debug!("Dropping unparsed diff token: {:?}", token);
        return Ok(None);
    };

    let diff = match parsed.op {
        DiffOp::Substitution { ref_allele, alt } => Diff {
            pos: parsed.pos.to_string(),
            ref_allele: ref_allele.to_string(),
            alt: alt.to_string(),
            info: String::new(),
        },
        DiffOp::Deletion { extent } => {
            let pos: usize = parsed
                .pos
                .parse()
                .map_err(|_| PvcfError::InvalidPosition(parsed.pos.to_string()))?;

            let ref_allele = reference
                .chars()
                .nth(pos)
                .ok_or_else(|| PvcfError::ReferenceOutOfRange {
                    pos,
                    len: reference.chars().count(),
                })?;

            Diff {
                pos: parsed.pos.to_string(),
                ref_allele: ref_allele.to_string(),
                alt: DELETION_ALLELE.to_string(),
                info: deletion_info(parsed.pos, pos, extent),
            }
        }
    };

    Ok(Some(diff))
}

fn deletion_info(pos_text: &str, pos: usize, extent: &str) -> String {
    let end = extent
        .trim()
        .parse::<i128>()
        .ok()
        .and_then(|n| i128::try_from(pos).ok()?.checked_add(n));

    match end {
        Some(end) => format!("SVTYPE=DEL;END={}", end),
        None => format!("SVTYPE=DEL; SVID={}del{}", pos_text, extent),
    }
}
