pub mod leave_request;
pub mod loan;

use serde::Deserialize;

/// A form value as the browser sends it: usually a string, sometimes a bare
/// JSON number when the input was typed as numeric.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Number(serde_json::Number),
}

/// Raw text of an optional form value; absent and `null` both read as "".
pub fn raw_text(value: &Option<RawValue>) -> String {
    match value {
        Some(RawValue::Text(s)) => s.clone(),
        Some(RawValue::Number(n)) => number_text(n),
        None => String::new(),
    }
}

// Numeric inputs may arrive as `12.0`; whole values read as integers so the
// count parser accepts them.
fn number_text(n: &serde_json::Number) -> String {
    const EXACT_INT: f64 = 9_007_199_254_740_992.0; // 2^53
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() <= EXACT_INT => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(json: &str) -> Option<RawValue> {
        Some(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn whole_floats_read_as_integers() {
        assert_eq!(raw_text(&number("12.0")), "12");
        assert_eq!(raw_text(&number("-3.0")), "-3");
        assert_eq!(raw_text(&number("1e3")), "1000");
    }

    #[test]
    fn other_numbers_keep_their_text() {
        assert_eq!(raw_text(&number("12")), "12");
        assert_eq!(raw_text(&number("12.5")), "12.5");
        assert_eq!(raw_text(&number("\"12.0\"")), "12.0");
        assert_eq!(raw_text(&None), "");
    }
}
