use crate::{Error, Result};
use serde_json::Value;

/// Recovers the JSON object embedded in free-form model output.
///
/// The span runs from the first `{` to the last `}` that follows it, which
/// tolerates leading prose and trailing text or code-fence closers. A literal
/// `}` inside a string followed by more trailing content is not handled: the
/// last `}` of the whole text is taken to close the object.
///
/// The returned slice is the original text, not a re-serialization, so field
/// order and inner whitespace survive.
pub fn extract_json(text: &str) -> Result<&str> {
    let start = text.find('{').ok_or(Error::InvalidJson)?;
    let tail = &text[start..];
    let end = tail.rfind('}').ok_or(Error::InvalidJson)?;
    let candidate = &tail[..=end];

    serde_json::from_str::<Value>(candidate).map_err(|_| Error::InvalidJson)?;

    Ok(candidate)
}
