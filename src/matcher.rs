use crate::segment::Token;
use smallvec::SmallVec;

/// Which declared component a word of the full name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum NameRole {
    First,
    Last,
}

impl NameRole {
    pub fn label(&self) -> &'static str {
        match self {
            NameRole::First => "first",
            NameRole::Last => "last",
        }
    }
}

/// How the needle is required to appear in the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Every needle token, as one unbroken run of adjacent positions.
    Contiguous,
    /// Each needle token independently, at the leftmost unclaimed position
    /// where its folded form occurs.
    Scattered,
}

/// Outcome of searching for one declared component in the full name.
#[derive(Debug)]
pub struct MatchResult {
    pub role: NameRole,
    /// Haystack positions covered, in ascending order.
    pub matched_positions: SmallVec<[usize; 4]>,
    /// Needle indices that were not found.
    pub missing: SmallVec<[usize; 4]>,
}

impl MatchResult {
    pub fn fully_matched(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Locate `needle` inside `haystack`, comparing folded forms and skipping
/// positions already claimed by a higher-priority role. Matched positions
/// are recorded in `claimed`, except that a failed contiguous search claims
/// nothing and only reports the closest span found for diagnostics.
pub fn find_span(
    needle: &[Token],
    haystack: &[Token],
    claimed: &mut [Option<NameRole>],
    role: NameRole,
    mode: MatchMode,
) -> MatchResult {
    debug_assert!(claimed.len() == haystack.len());

    match mode {
        MatchMode::Contiguous => find_contiguous(needle, haystack, claimed, role),
        MatchMode::Scattered => find_scattered(needle, haystack, claimed, role),
    }
}

// Leftmost start of an unbroken, unclaimed run equal to `pattern`.
fn find_run(
    pattern: &[Token],
    haystack: &[Token],
    claimed: &[Option<NameRole>],
) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > haystack.len() {
        return None;
    }

    (0..=haystack.len() - pattern.len()).find(|&start| {
        pattern.iter().enumerate().all(|(i, token)| {
            claimed[start + i].is_none() && haystack[start + i].normalized == token.normalized
        })
    })
}

fn find_contiguous(
    needle: &[Token],
    haystack: &[Token],
    claimed: &mut [Option<NameRole>],
    role: NameRole,
) -> MatchResult {
    if let Some(start) = find_run(needle, haystack, claimed) {
        let matched_positions: SmallVec<[usize; 4]> = (start..start + needle.len()).collect();
        for &position in &matched_positions {
            claimed[position] = Some(role);
        }
        return MatchResult {
            role,
            matched_positions,
            missing: SmallVec::new(),
        };
    }

    // No full run: report the longest prefix or suffix of the needle that
    // does appear contiguously, so the caller can name the words absent
    // from the span. Prefix wins over an equally long suffix.
    for len in (1..needle.len()).rev() {
        if let Some(start) = find_run(&needle[..len], haystack, claimed) {
            return MatchResult {
                role,
                matched_positions: (start..start + len).collect(),
                missing: (len..needle.len()).collect(),
            };
        }
        if let Some(start) = find_run(&needle[needle.len() - len..], haystack, claimed) {
            return MatchResult {
                role,
                matched_positions: (start..start + len).collect(),
                missing: (0..needle.len() - len).collect(),
            };
        }
    }

    MatchResult {
        role,
        matched_positions: SmallVec::new(),
        missing: (0..needle.len()).collect(),
    }
}

fn find_scattered(
    needle: &[Token],
    haystack: &[Token],
    claimed: &mut [Option<NameRole>],
    role: NameRole,
) -> MatchResult {
    let mut matched_positions: SmallVec<[usize; 4]> = SmallVec::new();
    let mut missing: SmallVec<[usize; 4]> = SmallVec::new();

    for (i, token) in needle.iter().enumerate() {
        let found = haystack
            .iter()
            .find(|h| claimed[h.position].is_none() && h.normalized == token.normalized);

        match found {
            Some(h) => {
                claimed[h.position] = Some(role);
                matched_positions.push(h.position);
            }
            None => missing.push(i),
        }
    }

    matched_positions.sort_unstable();

    MatchResult {
        role,
        matched_positions,
        missing,
    }
}
