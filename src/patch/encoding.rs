use encoding_rs::{Encoding, UTF_8_INIT, WINDOWS_1252_INIT};

/// Tried in order; first clean decode wins. `windows-1252` is what the WHATWG
/// encoding standard (and so `encoding_rs`) means by "latin-1", and it maps
/// every byte, so it always succeeds as a last resort.
pub static FALLBACK_CHAIN: &[&Encoding] = &[&UTF_8_INIT, &WINDOWS_1252_INIT];

#[derive(Debug, Clone)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
}

/// Decode `bytes` with the first encoding in `chain` that accepts them
/// without replacement characters.
pub fn decode(bytes: &[u8], chain: &[&'static Encoding]) -> Option<Decoded> {
    chain.iter().find_map(|&encoding| {
        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| Decoded { text: text.into_owned(), encoding })
    })
}

/// Encode back to `encoding`; `None` when `text` holds characters the
/// encoding can't represent.
pub fn encode(text: &str, encoding: &'static Encoding) -> Option<Vec<u8>> {
    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors { None } else { Some(bytes.into_owned()) }
}

pub fn names(chain: &[&'static Encoding]) -> Vec<&'static str> {
    chain.iter().map(|e| e.name()).collect()
}
