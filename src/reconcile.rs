use crate::error::NameError;
use crate::matcher::{find_span, MatchMode, MatchResult, NameRole};
use crate::order::LexicalOrder;
use crate::segment::{Token, Tokens};
use smallvec::{smallvec, SmallVec};

/// The structurally-known components of a person's name, tokenized.
#[derive(Debug)]
pub struct DeclaredName<'a> {
    pub first: Tokens<'a>,
    pub last: Tokens<'a>,
}

impl<'a> DeclaredName<'a> {
    /// A declared component with zero words is a caller error.
    pub fn new(first: Tokens<'a>, last: Tokens<'a>) -> Result<DeclaredName<'a>, NameError> {
        if first.is_empty() {
            return Err(NameError::InvalidArgument("a first name must be provided"));
        }
        if last.is_empty() {
            return Err(NameError::InvalidArgument("a last name must be provided"));
        }

        Ok(DeclaredName { first, last })
    }
}

pub type RoleTokens<'t, 'a> = SmallVec<[(NameRole, &'t Token<'a>); 10]>;

/// Partition a name into a last-name group and a first/middle-name group,
/// ordered according to `order`.
///
/// Without a full name, the declared components are emitted as given.
/// With one, the last name claims its words first, as one unbroken run
/// where possible, and the first name claims its words wherever they are
/// found; whatever it leaves unclaimed is carried along as middle names.
/// In strict mode any declared word absent from the full name is an
/// error; in lenient mode it is dropped.
pub fn reconcile<'t, 'a>(
    declared: &'t DeclaredName<'a>,
    order: LexicalOrder,
    full_name: Option<&'t [Token<'a>]>,
    strict: bool,
) -> Result<RoleTokens<'t, 'a>, NameError> {
    let full = match full_name {
        Some(tokens) => tokens,
        None => return Ok(declared_only(declared, order)),
    };

    let mut claimed: SmallVec<[Option<NameRole>; 10]> = smallvec![None; full.len()];

    let mut last_match = find_span(
        &declared.last,
        full,
        &mut claimed,
        NameRole::Last,
        MatchMode::Contiguous,
    );
    if !last_match.fully_matched() {
        if strict {
            return Err(missing_error(&last_match, &declared.last));
        }
        last_match = find_span(
            &declared.last,
            full,
            &mut claimed,
            NameRole::Last,
            MatchMode::Scattered,
        );
    }

    let first_match = find_span(
        &declared.first,
        full,
        &mut claimed,
        NameRole::First,
        MatchMode::Scattered,
    );
    if strict && !first_match.fully_matched() {
        return Err(missing_error(&first_match, &declared.first));
    }

    // The last-name group is re-emitted adjacently wherever the order puts
    // it; everything else, matched first-name words and undeclared middle
    // names alike, keeps its original relative order.
    let last_group = last_match
        .matched_positions
        .iter()
        .map(|&position| (NameRole::Last, &full[position]));
    let rest_group = full
        .iter()
        .filter(|token| claimed[token.position] != Some(NameRole::Last))
        .map(|token| (NameRole::First, token));

    let mut parts = RoleTokens::new();
    match order {
        LexicalOrder::Western => {
            parts.extend(rest_group);
            parts.extend(last_group);
        }
        LexicalOrder::Eastern => {
            parts.extend(last_group);
            parts.extend(rest_group);
        }
    }

    Ok(parts)
}

fn declared_only<'t, 'a>(declared: &'t DeclaredName<'a>, order: LexicalOrder) -> RoleTokens<'t, 'a> {
    let first = declared.first.iter().map(|t| (NameRole::First, t));
    let last = declared.last.iter().map(|t| (NameRole::Last, t));

    let mut parts = RoleTokens::new();
    match order {
        LexicalOrder::Western => {
            parts.extend(first);
            parts.extend(last);
        }
        LexicalOrder::Eastern => {
            parts.extend(last);
            parts.extend(first);
        }
    }

    parts
}

fn missing_error(result: &MatchResult, needle: &[Token]) -> NameError {
    NameError::MissingNameComponents {
        role: result.role,
        words: result
            .missing
            .iter()
            .map(|&i| needle[i].surface.to_string())
            .collect(),
    }
}
