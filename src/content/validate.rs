//! Content-type name validation

use crate::content::{pluralize, slugify};
use crate::error::ValidationError;
use crate::types::PagesList;

/// Form field holding the content-type name
pub const NAME_FIELD: &str = "name";

/// Validate a content-type name against the pages already known
///
/// Checks, in order: present, letters and spaces only, not reserved. A name
/// is reserved when it, its plural or its slug matches an existing page,
/// ignoring case.
pub fn validate_name(name: &str, pages: &PagesList) -> Result<(), ValidationError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::new(NAME_FIELD, "Content name is required"));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Err(ValidationError::new(
            NAME_FIELD,
            "Only alphabets are allowed for this field",
        ));
    }

    let plural = pluralize(name);
    let reserved = [name.to_string(), slugify(name), plural.clone(), slugify(&plural)]
        .iter()
        .any(|candidate| pages.contains(candidate));

    if reserved {
        return Err(ValidationError::new(
            NAME_FIELD,
            format!("The word {plural} is reserved"),
        ));
    }

    Ok(())
}
