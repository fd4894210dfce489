/// Instruction sent alongside every ID card image.
pub const ID_CARD_PROMPT: &str = "\
Extract the data from this Croatian identity card (osobna iskaznica). \
Respond with a single JSON object and nothing else, using exactly these keys: \
\"ime\" (first name), \"prezime\" (last name), \"datumRodenja\" (date of birth, \
as printed on the card, e.g. 12.03.1985.), \"mjestoRodenja\" (place of birth) and \
\"brojOsobneIskaznice\" (identity card number). \
Every value is a string. Use null for any field you cannot read with confidence. \
No explanations.";

pub fn extraction_prompt(custom: Option<&str>) -> &str {
    match custom {
        Some(prompt) if !prompt.trim().is_empty() => prompt,
        _ => ID_CARD_PROMPT,
    }
}
