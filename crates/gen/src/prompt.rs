//! Prompt templating for the AI enhancement pass.
//!
//! The network call itself lives with the caller; this module only
//! assembles the prompt string. The enhancer's output is untrusted and
//! goes back through the sanitizer before being written anywhere.

/// Shared system context prepended to every enhancement prompt.
const SYSTEM_CONTEXT: &str = "You are a technical documentation specialist helping to improve \
software documentation. Your job is to enhance the provided documentation while maintaining \
factual accuracy. Improve clarity, organization, and comprehensiveness. Add examples where \
helpful. Format using markdown.";

/// Section-specific enhancement instruction, with a generic fallback for
/// unknown section ids.
fn section_instruction(section_id: &str) -> &'static str {
    match section_id {
        "overview" => {
            "Enhance this project overview to be more comprehensive and user-friendly while \
             maintaining accuracy. Add clear sections for features, use cases, and key concepts \
             if they're not already present:"
        }
        "installation" => {
            "Improve this installation guide by adding clear prerequisites, troubleshooting \
             tips, and platform-specific instructions while maintaining accuracy:"
        }
        "api" => {
            "Enhance this API documentation by adding more detailed descriptions, usage \
             examples, and parameter explanations while maintaining technical accuracy:"
        }
        "development" => {
            "Improve this development guide by adding more context, best practices, and \
             workflow descriptions while maintaining accuracy:"
        }
        "contributing" => {
            "Enhance these contributing guidelines by adding more specific examples, workflow \
             descriptions, and best practices while maintaining accuracy:"
        }
        _ => "Enhance this documentation while maintaining accuracy and improving clarity:",
    }
}

/// Build the full enhancement prompt for a section's content.
pub fn enhancement_prompt(section_id: &str, content: &str) -> String {
    format!(
        "{SYSTEM_CONTEXT}\n\n{}\n\n{content}",
        section_instruction(section_id)
    )
}
