use wintrace_types::{Error, Result};

/// Canonicalize mixed-base numeric payload text to a decimal string.
///
/// Providers report the same logical quantity as `0x1A` in one event family
/// and `1,024` in another. A literal `x` selects base-16 for the digits that
/// follow it; everything else parses as base-10 with `,` grouping separators
/// tolerated. The result is always the parsed 64-bit unsigned value in plain
/// decimal form.
///
/// Malformed text fails with [`Error::Payload`]. That propagates to the
/// caller: a payload this function cannot parse means a classification bug
/// or an upstream schema change, and the offending event should be skipped
/// loudly rather than written wrong.
pub fn normalize(text: &str) -> Result<String> {
    let parsed = match text.find('x') {
        Some(pos) => u64::from_str_radix(&text[pos + 1..], 16),
        None => text.replace(',', "").parse::<u64>(),
    };

    match parsed {
        Ok(value) => Ok(value.to_string()),
        Err(_) => Err(Error::Payload {
            value: text.to_string(),
        }),
    }
}
