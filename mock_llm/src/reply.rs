use llm_client::prompt::{
    CODED_FORMAT_HEADER, CODED_MESSAGE_LABEL, DECODE_STEPS_HEADER, DECODING_INSTRUCTION_LABEL,
    NATIVE_CLOSING_LINE, NATIVE_MESSAGE_LABEL, ORIGINAL_MESSAGE_LABEL,
};
use serde_json::{json, Value};

pub const REVERSE_INSTRUCTION: &str =
    "Reverse the order of the characters of the coded message to read the original text.";

fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

fn mock_answer(message: &str) -> String {
    format!("Mock reply to: {}", message)
}

/// Returns the text between `start` and the last occurrence of `end`.
fn between<'a>(prompt: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = prompt.find(start)? + start.len();
    let to = prompt.rfind(end)?;
    prompt.get(from..to)
}

/// Reply of the encoding target.
pub fn llm_a(prompt: &str) -> Option<Value> {
    if let Some(message) = between(prompt, ORIGINAL_MESSAGE_LABEL, &format!("\n\n{CODED_FORMAT_HEADER}")) {
        return Some(json!({
            "coded_message": reverse(message),
            "coding_instruction": REVERSE_INSTRUCTION,
        }));
    }
    let message = between(prompt, NATIVE_MESSAGE_LABEL, &format!("\n\n{NATIVE_CLOSING_LINE}"))?;
    Some(json!({ "response": mock_answer(message) }))
}

/// Reply of the decoding target. Only understands reversal.
pub fn llm_b(prompt: &str) -> Option<Value> {
    let coded = between(prompt, CODED_MESSAGE_LABEL, &format!("\n{DECODING_INSTRUCTION_LABEL}"))?;
    // Make sure the rest of the prompt is there too.
    between(prompt, DECODING_INSTRUCTION_LABEL, &format!("\n\n{DECODE_STEPS_HEADER}"))?;

    let decoded = reverse(coded);
    let response = mock_answer(&decoded);
    Some(json!({
        "decoded_message": decoded,
        "coded_response": reverse(&response),
        "response": response,
    }))
}
