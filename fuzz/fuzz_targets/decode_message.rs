#![no_main]

use iso15118_2_exi::document::decode_message;
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must never panic the decoder: every malformed input has to
// surface as a `CodecError`, never a corrupted `Message` or a crash.
fuzz_target!(|data: &[u8]| {
    let _ = decode_message(data);
});
