use std::borrow::Cow;

use encoding_rs::Encoding;

use super::error::{QRError, QRResult};

/// Serializes `content` into `charset` bytes, refusing lossy substitutions.
///
/// `encoding_rs` only encodes into ASCII compatible charsets; UTF-16 requests fall back to
/// UTF-8 output, which is reported through the returned encoding and accepted here.
pub fn encode_content<'a>(content: &'a str, charset: &'static Encoding) -> QRResult<Cow<'a, [u8]>> {
    let (bytes, _used, had_errors) = charset.encode(content);
    if had_errors {
        return Err(QRError::EncodingError { charset: charset.name() });
    }
    Ok(bytes)
}

/// Interprets a raw payload in `charset`. `None` if the bytes are malformed for it.
pub fn decode_payload(payload: &[u8], charset: &'static Encoding) -> Option<String> {
    charset.decode_without_bom_handling_and_without_replacement(payload).map(Cow::into_owned)
}
