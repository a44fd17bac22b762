use serde::{Deserialize, Serialize};

/// A hospital classification: category, function type and ward.
///
/// Answers have no identity of their own; two answers are the same answer
/// when all three fields match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub category: String,
    pub function_type: String,
    pub ward: String,
}

impl Answer {
    pub fn new(
        category: impl Into<String>,
        function_type: impl Into<String>,
        ward: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            function_type: function_type.into(),
            ward: ward.into(),
        }
    }
}

/// Returns true when `selected` matches `correct` field by field
/// (case-sensitive).
pub fn is_correct(selected: &Answer, correct: &Answer) -> bool {
    selected.category == correct.category
        && selected.function_type == correct.function_type
        && selected.ward == correct.ward
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acute() -> Answer {
        Answer::new("一般病院", "急性期", "一般病棟")
    }

    #[test]
    fn identical_answers_are_correct() {
        assert!(is_correct(&acute(), &acute()));
    }

    #[test]
    fn any_differing_field_is_incorrect() {
        let base = acute();

        let mut other = base.clone();
        other.category = "特定機能病院".into();
        assert!(!is_correct(&other, &base));

        let mut other = base.clone();
        other.function_type = "回復期".into();
        assert!(!is_correct(&other, &base));

        let mut other = base.clone();
        other.ward = "療養病棟".into();
        assert!(!is_correct(&other, &base));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let lower = Answer::new("general", "acute", "ward");
        let upper = Answer::new("General", "acute", "ward");
        assert!(!is_correct(&lower, &upper));
    }

    #[test]
    fn deserializes_camel_case_keys() {
        let json = r#"{"category":"一般病院","functionType":"急性期","ward":"一般病棟"}"#;
        let answer: Answer = serde_json::from_str(json).unwrap();
        assert_eq!(answer, acute());
    }
}
