//! JSON string literal escaping.

use std::io;

use serde::Serializer as _;
use serde_json::ser::{CompactFormatter, Serializer};

/// Converts `text` into a JSON string literal, surrounded with double quotes.
///
/// For example `"b\nb"` becomes `"\"b\\nb\""`.
pub fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    escape_string_into(&mut out, text);
    out
}

/// Appends the JSON string literal for `text` onto `out`.
///
/// Quote, backslash and the control characters U+0000..U+001F are escaped;
/// everything else is copied as is.
pub fn escape_string_into(out: &mut String, text: &str) {
    out.reserve(text.len() + 2);
    let written = Serializer::with_formatter(StrSink(out), CompactFormatter).serialize_str(text);
    debug_assert!(written.is_ok(), "escaping a str yields UTF-8");
}

/// `io::Write` over a `String`. serde_json splits its output only around
/// ASCII escapes, so every chunk is valid UTF-8.
struct StrSink<'a>(&'a mut String);

impl io::Write for StrSink<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk =
            std::str::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.0.push_str(chunk);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
