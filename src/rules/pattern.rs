//! Pattern rules - reject repetitive and sequential runs.

use crate::rule::Rule;

const MAX_REPEAT: usize = 2;
const SEQUENCE_RUN: usize = 4;

/// `noRepetition`: no character repeated 3 or more times in a row.
pub fn no_repetition() -> Rule {
    Rule::builtin(
        "noRepetition",
        "Password must not contain repetitive patterns".to_string(),
        |pwd: &str| !has_repeated_run(pwd),
    )
}

/// `noSequence`: no run of 4 consecutive code points, ascending or descending
/// (`abcd`, `4321`).
pub fn no_sequence() -> Rule {
    Rule::builtin(
        "noSequence",
        "Password must not contain sequential patterns".to_string(),
        |pwd: &str| !has_sequential_run(pwd),
    )
}

fn has_repeated_run(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    chars
        .windows(MAX_REPEAT + 1)
        .any(|w| w.iter().all(|&c| c == w[0]))
}

fn has_sequential_run(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    chars.windows(SEQUENCE_RUN).any(|window| {
        let step = |w: &[char]| w[1] as i64 - w[0] as i64;
        let first = step(&window[..2]);
        (first == 1 || first == -1) && window.windows(2).all(|w| step(w) == first)
    })
}
