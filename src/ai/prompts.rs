//! Prompts sent to the generation model.
//!
//! Centralizing these strings makes it easy to tweak how user descriptions
//! are interpreted without digging through the extraction code.

/// Build the keyword-extraction prompt around a user's free-form description.
///
/// The model is told to answer with nothing but 3-5 comma-separated English
/// keywords; the one-line example anchors the expected shape.
pub fn keyword_extraction_prompt(user_message: &str) -> String {
    format!(
        "You are an art museum search assistant.\n\
         Your task is to extract English search keywords from the user's description of a painting.\n\n\
         User's description (in any language): \"{user_message}\"\n\n\
         Extract and return ONLY 3-5 English keywords that would help find similar artworks in a museum database.\n\
         Focus on:\n\
         - Style (e.g., impressionism, baroque, modern)\n\
         - Subject matter (e.g., landscape, portrait, flowers, sea)\n\
         - Mood/atmosphere (e.g., dark, bright, peaceful, dramatic)\n\
         - Colors (e.g., blue, red, colorful)\n\
         - Artists (if mentioned)\n\n\
         Return ONLY keywords separated by commas, nothing else.\n\
         Example output: landscape, peaceful, blue, impressionism\n\n\
         Keywords:"
    )
}
