mod extractor;
mod prompt;
mod record;

pub use extractor::extract_json;
pub use prompt::{ID_CARD_PROMPT, extraction_prompt};
pub use record::IdCardRecord;
