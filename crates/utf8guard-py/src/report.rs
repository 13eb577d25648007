use pyo3::prelude::*;

use utf8guard::{Utf8Range, ValidationError, ValidationMode, validate_with};

/// Python view of a `ValidationResult`.
///
/// Python cannot hold a borrow of the input, so the validated prefix is
/// copied out.
#[pyclass(frozen, module = "utf8guard", name = "ValidationReport")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyValidationReport {
    error: Option<ValidationError>,
    prefix: Vec<u8>,
    codepoint_count: usize,
}

impl PyValidationReport {
    pub(crate) fn scan(data: &[u8], mode: ValidationMode) -> Self {
        let result = validate_with(data, mode);
        Self {
            error: result.error,
            prefix: result.range.as_bytes().to_vec(),
            codepoint_count: result.codepoint_count,
        }
    }

    /// The kind of the first defect, if any.
    pub fn kind(&self) -> Option<ValidationError> {
        self.error
    }
}

#[pymethods]
impl PyValidationReport {
    #[getter]
    fn error(&self) -> Option<&'static str> {
        self.error.map(ValidationError::name)
    }

    #[getter]
    fn ok(&self) -> bool {
        self.error.is_none()
    }

    #[getter]
    fn valid_up_to(&self) -> usize {
        self.prefix.len()
    }

    #[getter]
    fn codepoint_count(&self) -> usize {
        self.codepoint_count
    }

    /// Codepoints of the validated prefix.
    fn codepoints(&self) -> Vec<u32> {
        Utf8Range::assume_valid(&self.prefix).codepoints().collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "ValidationReport(error={}, valid_up_to={}, codepoint_count={})",
            self.error.map_or("None", ValidationError::name),
            self.prefix.len(),
            self.codepoint_count
        )
    }
}
