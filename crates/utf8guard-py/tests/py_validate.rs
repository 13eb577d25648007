use pyo3::{
    Python,
    exceptions::PyValueError,
    types::{PyAnyMethods, PyBytes, PyModule},
};
use utf8guard::ValidationError;
use utf8guard_py::{codepoints, py_utf8guard, validate, validate_quick};

#[test]
fn reports_match_the_core() {
    let report = validate(b"A\xFF");
    assert_eq!(report.kind(), Some(ValidationError::InvalidByte));

    let quick = validate_quick(b"\xC0\x80");
    assert_eq!(quick.kind(), None);

    assert_eq!(codepoints("€".as_bytes()).unwrap(), vec![0x20AC]);
}

#[test]
fn module_exposes_reports() {
    Python::with_gil(|py| {
        let module = PyModule::new(py, "utf8guard").unwrap();
        py_utf8guard(&module).unwrap();

        let data = PyBytes::new(py, b"ok\xC0\x80");
        let report = module.getattr("validate").unwrap().call1((data,)).unwrap();

        let error: Option<String> = report.getattr("error").unwrap().extract().unwrap();
        assert_eq!(error.as_deref(), Some("overlong_encoding"));
        assert!(!report.getattr("ok").unwrap().extract::<bool>().unwrap());
        assert_eq!(report.getattr("valid_up_to").unwrap().extract::<usize>().unwrap(), 2);
        assert_eq!(report.getattr("codepoint_count").unwrap().extract::<usize>().unwrap(), 2);

        let cps: Vec<u32> = report.call_method0("codepoints").unwrap().extract().unwrap();
        assert_eq!(cps, vec![0x6F, 0x6B]);

        let repr: String = report.repr().unwrap().extract().unwrap();
        assert_eq!(
            repr,
            "ValidationReport(error=overlong_encoding, valid_up_to=2, codepoint_count=2)"
        );
    });
}

#[test]
fn codepoints_raises_value_error() {
    Python::with_gil(|py| {
        let module = PyModule::new(py, "utf8guard").unwrap();
        py_utf8guard(&module).unwrap();

        let data = PyBytes::new(py, b"ab\xE2\x82");
        let err = module
            .getattr("codepoints")
            .unwrap()
            .call1((data,))
            .unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));
        assert_eq!(err.value(py).to_string(), "unexpected end of input at byte 2");
    });
}
