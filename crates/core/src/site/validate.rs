//! Canonical section validation, applied before anything is persisted.

use thiserror::Error;

use super::model::Section;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("section list cannot be empty")]
    EmptyList,
    #[error("section at index {0} has an empty id")]
    EmptyId(usize),
    #[error("section at index {0} has an empty type")]
    EmptyType(usize),
}

/// Validate that a section list is safe to write over existing data:
/// non-empty, with every entry carrying an id and a type.
pub fn validate_sections(sections: &[Section]) -> Result<(), ValidationError> {
    if sections.is_empty() {
        return Err(ValidationError::EmptyList);
    }
    for (index, section) in sections.iter().enumerate() {
        if section.id.is_empty() {
            return Err(ValidationError::EmptyId(index));
        }
        if section.section_type.is_empty() {
            return Err(ValidationError::EmptyType(index));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_sections() {
        let sections = vec![Section::new("s1", "hero-centered")];
        assert!(validate_sections(&sections).is_ok());
    }

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(
            validate_sections(&[]),
            Err(ValidationError::EmptyList)
        ));
    }

    #[test]
    fn rejects_blank_id_and_type() {
        let sections = vec![Section::new("s1", "about"), Section::new("", "faq")];
        assert!(matches!(
            validate_sections(&sections),
            Err(ValidationError::EmptyId(1))
        ));

        let sections = vec![Section::new("s1", "")];
        assert!(matches!(
            validate_sections(&sections),
            Err(ValidationError::EmptyType(0))
        ));
    }
}
