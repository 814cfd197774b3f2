pub mod error;
pub mod resolve;
pub mod values;

pub use error::*;
pub use resolve::*;
pub use values::*;

/// Parse a document and resolve every variable it defines.
pub fn evaluate(text: &str) -> Result<Values> {
    let definitions = eqn_surface::parse(text)?;
    resolve(&definitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        let values = evaluate("a = 1\nb = a + 2\nc = b + a").unwrap();
        let pairs: Vec<(String, u64)> = values.into_iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_owned(), 1),
                ("b".to_owned(), 3),
                ("c".to_owned(), 4)
            ]
        );
    }

    #[test]
    fn test_evaluate_malformed() {
        assert!(matches!(evaluate("a = 1\nb"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_evaluate_empty_document() {
        assert!(evaluate("").unwrap().is_empty());
    }
}
