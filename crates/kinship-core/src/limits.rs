//! Input limits for record ids and query depth

/// Maximum length for a record id (64 chars)
pub const MAX_RECORD_ID_LEN: usize = 64;

/// Maximum cousin degree accepted by the relationship engine (32)
pub const MAX_COUSIN_DEGREE: u32 = 32;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyRecordId,
    RecordIdTooLong { len: usize, max: usize },
    CousinDegreeTooLarge { degree: u32, max: u32 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRecordId => write!(f, "Record id cannot be empty"),
            Self::RecordIdTooLong { len, max } => {
                write!(f, "Record id too long: {} chars (max {})", len, max)
            }
            Self::CousinDegreeTooLarge { degree, max } => {
                write!(f, "Cousin degree too large: {} (max {})", degree, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a record id after its delimiters have been stripped
pub fn validate_record_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyRecordId);
    }
    if id.len() > MAX_RECORD_ID_LEN {
        return Err(ValidationError::RecordIdTooLong {
            len: id.len(),
            max: MAX_RECORD_ID_LEN,
        });
    }
    Ok(())
}

/// Validate cousin degree
pub fn validate_cousin_degree(degree: u32) -> Result<(), ValidationError> {
    if degree > MAX_COUSIN_DEGREE {
        return Err(ValidationError::CousinDegreeTooLarge {
            degree,
            max: MAX_COUSIN_DEGREE,
        });
    }
    Ok(())
}
