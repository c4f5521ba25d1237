//! Joining register lines into one clipboard buffer.

/// Concatenates `lines` with `sep` between consecutive lines.
///
/// No separator is written before the first line or after the last, so
/// `n` lines produce `n - 1` separators and an empty slice produces an
/// empty buffer.
///
/// # Examples
///
/// ```
/// use neoclip::join;
///
/// assert_eq!(join(&["a", "b", "c"], b","), b"a,b,c");
/// assert_eq!(join::<&str>(&[], b","), b"");
/// ```
#[must_use]
pub fn join<L: AsRef<[u8]>>(lines: &[L], sep: &[u8]) -> Vec<u8> {
    let Some((last, rest)) = lines.split_last() else {
        return Vec::new();
    };

    let content: usize = lines.iter().map(|l| l.as_ref().len()).sum();
    let mut out = Vec::with_capacity(content + sep.len() * rest.len());
    for line in rest {
        out.extend_from_slice(line.as_ref());
        out.extend_from_slice(sep);
    }
    out.extend_from_slice(last.as_ref());

    tracing::trace!(lines = lines.len(), bytes = out.len(), "joined register lines");
    out
}
