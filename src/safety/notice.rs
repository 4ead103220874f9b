use serde::Serialize;

pub const SAFETY_MESSAGE: &str = "It looks like you may be in crisis or feeling unsafe. \
Please reach out to a helpline or trusted person immediately.";

pub const EMERGENCY_FOOTER: &str =
    "If you are in immediate danger, contact emergency services in your country.";

const HELPLINES: &[(&str, &str)] = &[
    ("India (NIMHANS)", "080-4611-0007"),
    ("iCall India", "+91 9152987821"),
    ("US (988)", "988"),
    (
        "International (if available)",
        "Contact local emergency services / national lifeline",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Helpline {
    pub label: String,
    pub contact: String,
}

/// What the front end shows whenever a message is flagged. The content does
/// not depend on which keywords matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyNotice {
    pub message: String,
    pub helplines: Vec<Helpline>,
    pub footer: String,
}

impl SafetyNotice {
    pub fn standard() -> Self {
        Self {
            message: SAFETY_MESSAGE.to_string(),
            helplines: HELPLINES
                .iter()
                .map(|(label, contact)| Helpline {
                    label: (*label).to_string(),
                    contact: (*contact).to_string(),
                })
                .collect(),
            footer: EMERGENCY_FOOTER.to_string(),
        }
    }
}

impl Default for SafetyNotice {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helplines_keep_table_order() {
        let notice = SafetyNotice::standard();
        let labels: Vec<&str> = notice.helplines.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "India (NIMHANS)",
                "iCall India",
                "US (988)",
                "International (if available)"
            ]
        );
        assert_eq!(notice.helplines[2].contact, "988");
    }
}
