use super::error::{ValidationError, CLIPBOARD_NAME_MAX_LEN};

/// Validates a clipboard name and returns it trimmed.
pub fn validate_clipboard_name(name: &str) -> Result<String, ValidationError> {
    let name = trimmed_non_empty(name)?;
    if name.chars().count() > CLIPBOARD_NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong {
            max: CLIPBOARD_NAME_MAX_LEN,
        });
    }
    Ok(name)
}

/// Validates an item name and returns it trimmed.
pub fn validate_item_name(name: &str) -> Result<String, ValidationError> {
    trimmed_non_empty(name)
}

fn trimmed_non_empty(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}
