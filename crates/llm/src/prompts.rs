//! Prompt template for formatting and summarization

/// Fixed instruction block sent to every backend
pub const FORMAT_INSTRUCTIONS: &str = r#"You are a writing specialist. I will be sending you a text which might not have any punctuation and might be in all lower case.

You are tasked to:
1. STRICTLY and ONLY to recognize the sentence boundaries and format the text with the proper punctuation and proper capitalization. NO MORE, NO LESS. Include line break as line break escape key.
2. Summarize the text.

You will send your response in the following string format:
"{"text": "", "summary": ""}""#;

/// Build the full prompt for a raw input text
///
/// The raw text is interpolated verbatim; no escaping is performed, and
/// empty input passes through unchanged.
pub fn format_prompt(text: &str) -> String {
    format!("{}\n\nGiven text: {}", FORMAT_INSTRUCTIONS, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_raw_text() {
        let prompt = format_prompt("hello world this is a test");
        assert!(prompt.starts_with(FORMAT_INSTRUCTIONS));
        assert!(prompt.ends_with("Given text: hello world this is a test"));
    }

    #[test]
    fn test_prompt_names_both_reply_keys() {
        assert!(FORMAT_INSTRUCTIONS.contains(r#""text""#));
        assert!(FORMAT_INSTRUCTIONS.contains(r#""summary""#));
    }

    #[test]
    fn test_empty_text_passes_through() {
        let prompt = format_prompt("");
        assert!(prompt.ends_with("Given text: "));
    }

    #[test]
    fn test_no_escaping_of_raw_text() {
        // Known limitation: raw text lands in the prompt verbatim
        let prompt = format_prompt(r#"a "quoted" {fragment}"#);
        assert!(prompt.contains(r#"a "quoted" {fragment}"#));
    }
}
