#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either parse or fail gracefully; the parser
    // should NEVER panic. Errors (bad UTF-8, malformed fields) are fine.
    let _ = mgfpeak::mgf::MgfParser::new().parse(Cursor::new(data), Some(data.len() as u64));
});
