use eqn_core::Values;

/// One `name = value` line per variable, in name order.
pub(crate) fn render(values: &Values) -> String {
    values
        .iter()
        .map(|(name, value)| format!("{name} = {value}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eqn_core::evaluate;

    #[test]
    fn test_render_sorted() {
        let values = evaluate("c = b + a\nb = a + 2\na = 1").unwrap();
        assert_eq!(render(&values), "a = 1\nb = 3\nc = 4\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&evaluate("").unwrap()), "");
    }

    #[test]
    fn test_render_byte_order() {
        let values = evaluate("b = 1\nB = 2\naa = 3\na = 4").unwrap();
        assert_eq!(render(&values), "B = 2\na = 4\naa = 3\nb = 1\n");
    }
}
