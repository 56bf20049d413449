#![no_main]

use cppify::{dispatch, tokenize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The scanner must terminate on any input
        let _ = tokenize(s);
        // Translators either succeed or report a malformed output call; never panic
        for dialect in ["python", "javascript", "java"] {
            let _ = dispatch(dialect, s);
        }
    }
});
