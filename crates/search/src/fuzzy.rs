//! Fuzzy matching algorithms.

/// Calculate Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Best approximate occurrence of a pattern inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    /// Edits needed to turn the matched span into the pattern
    pub errors: usize,
    /// Char offset in the text where the matched span begins
    pub start: usize,
}

/// Find the cheapest place `pattern` occurs in `text`, allowing edits.
///
/// Semi-global edit distance: the match may begin and end anywhere in
/// `text`, so leading and trailing text is free. Among equally cheap
/// matches the leftmost start wins.
///
/// # Returns
/// `None` only when `text` is empty and `pattern` is not.
pub fn approximate_find(text: &str, pattern: &str) -> Option<Alignment> {
    let t: Vec<char> = text.chars().collect();
    let p: Vec<char> = pattern.chars().collect();

    if p.is_empty() {
        return Some(Alignment { errors: 0, start: 0 });
    }
    if t.is_empty() {
        return None;
    }

    let n = t.len();

    // Each cell holds (cost, start offset of the alignment ending here).
    let mut prev: Vec<(usize, usize)> = (0..=n).map(|j| (0, j)).collect();
    let mut curr = vec![(0, 0); n + 1];

    for (i, &pc) in p.iter().enumerate() {
        curr[0] = (i + 1, 0);
        for j in 1..=n {
            let cost = usize::from(t[j - 1] != pc);
            let diag = (prev[j - 1].0 + cost, prev[j - 1].1);
            let up = (prev[j].0 + 1, prev[j].1);
            let left = (curr[j - 1].0 + 1, curr[j - 1].1);

            let mut best = diag;
            for candidate in [up, left] {
                if candidate.0 < best.0 {
                    best = candidate;
                }
            }
            curr[j] = best;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[1..]
        .iter()
        .min_by_key(|&&(errors, start)| (errors, start))
        .map(|&(errors, start)| Alignment { errors, start })
}
