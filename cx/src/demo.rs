//! The swap-the-algorithm demonstration, independent of process arguments

use std::io::Write;

use tracing::{debug, info};

use crate::algorithm::AlgorithmKind;
use crate::context::Context;
use crate::error::ContextError;

/// Letter used to announce the n-th algorithm (A, B, ...)
fn label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => format!("#{}", index + 1),
    }
}

/// Build a context with the first algorithm, then swap through the rest
///
/// Each algorithm is announced, run on `(a, b)` and followed by a blank line
/// before the next one. Returns the results in order.
pub fn run<W: Write + ?Sized>(
    a: i64,
    b: i64,
    algorithms: &[AlgorithmKind],
    out: &mut W,
) -> Result<Vec<String>, ContextError> {
    debug!(%a, %b, ?algorithms, "demo::run: called");
    let (first, rest) = algorithms.split_first().ok_or(ContextError::NoAlgorithms)?;

    let mut context = Context::new(first.build());
    writeln!(out, "Choosing algorithm {}", label(0))?;
    let mut results = vec![context.run(a, b, out)?];

    for (offset, kind) in rest.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "Choosing algorithm {}", label(offset + 1))?;
        context.set_algorithm(kind.build());
        results.push(context.run(a, b, out)?);
    }

    info!(runs = results.len(), "Demonstration complete");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_demo_transcript() {
        let mut out = Vec::new();
        let results = run(23, 34, &[AlgorithmKind::Sum, AlgorithmKind::Concat], &mut out).unwrap();
        assert_eq!(results, vec!["57", "2334"]);

        let expected = "\
Choosing algorithm A
Taking two numbers 23 and 34
using the summation algorithm
result: 57

Choosing algorithm B
Taking two numbers 23 and 34
using the concatenation algorithm
result: 2334
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_single_algorithm() {
        let mut out = Vec::new();
        let results = run(1, 2, &[AlgorithmKind::Concat], &mut out).unwrap();
        assert_eq!(results, vec!["12"]);
        assert!(!String::from_utf8(out).unwrap().contains("algorithm B"));
    }

    #[test]
    fn test_empty_list_rejected() {
        let mut out = Vec::new();
        let err = run(1, 2, &[], &mut out).unwrap_err();
        assert!(matches!(err, ContextError::NoAlgorithms));
        assert!(out.is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(label(0), "A");
        assert_eq!(label(1), "B");
        assert_eq!(label(25), "Z");
        assert_eq!(label(26), "#27");
    }
}
