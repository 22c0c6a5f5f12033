use crate::field::{FIELD_COUNT, WILDCARD};

/// Join five field values into the canonical expression.
///
/// Empty values become `*`; no validation happens here.
pub fn synthesize<S: AsRef<str>>(values: &[S; FIELD_COUNT]) -> String {
    values
        .iter()
        .map(|v| {
            let v = v.as_ref();
            if v.is_empty() { WILDCARD } else { v }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split an expression typed as one string into field values.
///
/// Missing trailing fields are left empty; anything beyond the fifth field is
/// folded into the weekday value so nothing the user typed is dropped silently.
pub fn split_fields(expression: &str) -> [String; FIELD_COUNT] {
    let mut values: [String; FIELD_COUNT] = Default::default();
    let parts: Vec<&str> = expression.split_whitespace().collect();

    for (i, part) in parts.iter().enumerate().take(FIELD_COUNT - 1) {
        values[i] = (*part).to_string();
    }
    if parts.len() >= FIELD_COUNT {
        values[FIELD_COUNT - 1] = parts[FIELD_COUNT - 1..].join(" ");
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_all_empty() {
        assert_eq!(synthesize(&["", "", "", "", ""]), "* * * * *");
    }

    #[test]
    fn test_synthesize_mixed() {
        assert_eq!(synthesize(&["20", "4", "", "*", "MON"]), "20 4 * * MON");
        let owned = ["*/5".to_string(), String::new(), String::new(), String::new(), String::new()];
        assert_eq!(synthesize(&owned), "*/5 * * * *");
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields("20 4 * * *"), ["20", "4", "*", "*", "*"]);
        assert_eq!(split_fields("  5  "), ["5", "", "", "", ""]);
        assert_eq!(split_fields("1 2 3 4 5 6"), ["1", "2", "3", "4", "5 6"]);
        assert_eq!(split_fields(""), ["", "", "", "", ""]);
    }
}
