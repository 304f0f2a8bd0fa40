/// Copies `s` into a fixed size UTF-16 buffer.
///
/// The result is always NUL terminated: overlong text is truncated and
/// encoding stops at an embedded NUL. Remaining units are zeroed.
pub fn encode_into(dst: &mut [u16], s: &str) {
    let Some(capacity) = dst.len().checked_sub(1) else {
        return;
    };
    let mut len = 0;
    for (slot, c) in dst
        .iter_mut()
        .zip(s.encode_utf16().take_while(|&c| c != 0).take(capacity))
    {
        *slot = c;
        len += 1;
    }
    // never leave half of a surrogate pair behind
    if len > 0 && (0xd800..0xdc00).contains(&dst[len - 1]) {
        len -= 1;
    }
    dst[len..].fill(0);
}

/// Reads a NUL terminated UTF-16 buffer back into a `String`.
pub fn decode(src: &[u16]) -> String {
    let len = src.iter().position(|&c| c == 0).unwrap_or(src.len());
    String::from_utf16_lossy(&src[..len])
}
