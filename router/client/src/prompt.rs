//! Prompt templates for the two downstream exchanges.
//!
//! Labels are public so that stand-in servers can pick the inputs back out of
//! a prompt.

use crate::Mode;

pub const ORIGINAL_MESSAGE_LABEL: &str = "Original message: ";
pub const NATIVE_MESSAGE_LABEL: &str = "Message: ";
pub const CODED_MESSAGE_LABEL: &str = "Coded message: ";
pub const DECODING_INSTRUCTION_LABEL: &str = "Decoding instruction: ";

/// First line after the embedded message in the coded template.
pub const CODED_FORMAT_HEADER: &str = "Respond in JSON format with:";
/// First line after the embedded message in the native template.
pub const NATIVE_CLOSING_LINE: &str = "Provide a helpful and informative answer.";
/// Line opening the numbered steps of the decode-and-reply template.
pub const DECODE_STEPS_HEADER: &str = "Please:";

/// Prompt for exchange A.
pub fn call_a(message: &str, mode: Mode) -> String {
    match mode {
        Mode::Coded => format!(
            "Please encode the message below using a creative encoding technique.\n\
             Provide both the encoded message and a precise instruction on how to decode it.\n\
             The decoding instruction must be clear enough that another LLM, given only\n\
             that instruction, can reverse the encoding.\n\
             \n\
             {ORIGINAL_MESSAGE_LABEL}{message}\n\
             \n\
             {CODED_FORMAT_HEADER}\n\
             - 'coded_message': the encoded message\n\
             - 'coding_instruction': a clear instruction on how to decode it (not encoded)\n"
        ),
        Mode::Native => format!(
            "Please answer the following message directly and naturally:\n\
             \n\
             {NATIVE_MESSAGE_LABEL}{message}\n\
             \n\
             {NATIVE_CLOSING_LINE}\n"
        ),
    }
}

/// Prompt for exchange B. Both inputs are embedded verbatim.
pub fn call_b(coded_message: &str, coding_instruction: &str) -> String {
    format!(
        "{CODED_MESSAGE_LABEL}{coded_message}\n\
         {DECODING_INSTRUCTION_LABEL}{coding_instruction}\n\
         \n\
         {DECODE_STEPS_HEADER}\n\
         1. Decode the message according to the instruction\n\
         2. Answer the message appropriately\n\
         3. Encode your answer using exactly the same encoding technique"
    )
}
