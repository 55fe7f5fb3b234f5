#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("validation failed: field `{field}` violates rule `{rule}`")]
    Validation {
        field: &'static str,
        rule: &'static str,
    },
    #[error("malformed {kind} value: `{text}`")]
    Format { kind: &'static str, text: String },
    #[error("unknown custom rule `{0}`")]
    UnknownRule(&'static str),
}
