use crate::utils::error::{NormalizeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 輸出檔名只能是單純的檔名，不可夾帶目錄
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(NormalizeError::InvalidConfig {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name cannot be empty".to_string(),
        });
    }

    if name.contains('\0') {
        return Err(NormalizeError::InvalidConfig {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name contains null bytes".to_string(),
        });
    }

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(NormalizeError::InvalidConfig {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Output is always written next to the input, use a bare file name"
                .to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(NormalizeError::InvalidConfig {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(NormalizeError::InvalidConfig {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
