mod report;

pub use report::PyValidationReport;

use ::utf8guard::ValidationMode;
use pyo3::{exceptions::PyValueError, prelude::*};

/// Strictly validates `data`, returning a report instead of raising.
#[pyfunction]
pub fn validate(data: &[u8]) -> PyValidationReport {
    PyValidationReport::scan(data, ValidationMode::Strict)
}

/// Structure-only validation; overlong and out of range sequences pass.
#[pyfunction]
pub fn validate_quick(data: &[u8]) -> PyValidationReport {
    PyValidationReport::scan(data, ValidationMode::Quick)
}

/// Decodes `data` to a list of codepoints, raising `ValueError` at the first
/// defect.
#[pyfunction]
pub fn codepoints(data: &[u8]) -> PyResult<Vec<u32>> {
    let range = ::utf8guard::validate(data)
        .into_result()
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(range.codepoints().collect())
}

#[pymodule]
#[pyo3(name = "utf8guard")]
pub fn py_utf8guard(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyValidationReport>()?;
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    m.add_function(wrap_pyfunction!(validate_quick, m)?)?;
    m.add_function(wrap_pyfunction!(codepoints, m)?)?;
    Ok(())
}
