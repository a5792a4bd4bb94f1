use super::resource::Record;

/// Editable state behind a create/edit dialog.
///
/// Field values are kept as the user typed them; `to_draft` validates the
/// required fields and produces the request body.
pub trait FormModel: Clone + Default + PartialEq {
    type Record: Record + Clone;
    type Draft;

    /// Pre-populate the form from an existing row.
    fn from_record(record: &Self::Record) -> Self;

    /// Validate and convert. `editing` is the row being edited, `None` when creating.
    fn to_draft(&self, editing: Option<&Self::Record>) -> Result<Self::Draft, String>;
}

/// Fails with `message` when `value` is blank.
pub fn require(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Blank input becomes `None`, anything else is trimmed.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Numeric text typed with a comma decimal separator is normalised to `.`.
pub fn normalize_decimal_input(value: &str) -> String {
    value.trim().replace(',', ".")
}
