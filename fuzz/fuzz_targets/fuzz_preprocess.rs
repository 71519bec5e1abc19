#![no_main]

use libfuzzer_sys::fuzz_target;

// Arbitrary bytes → preprocess(). Goal: no panics, and any output must
// re-parse with nothing left to rewrite.
fuzz_target!(|data: &[u8]| {
    let options = openapi_preprocess_core::PreprocessOptions::default();
    if let Ok(result) = openapi_preprocess_core::preprocess(data, &options) {
        let again = openapi_preprocess_core::preprocess(&result.output, &options)
            .expect("normalized output should re-parse");
        assert!(again.report.is_empty());
    }
});
