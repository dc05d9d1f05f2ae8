//! Prompt templates for grounded tutoring answers

/// Prompt builder for tutor queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the fixed tutor instruction prompt.
    ///
    /// The constraints here are structural, part of the contract with the
    /// generation service: the tutor role, answering only from the
    /// provided context, and declaring inability when the context is
    /// insufficient.
    pub fn build_tutor_prompt(question: &str, context: &str) -> String {
        format!(
            r#"You are a helpful high school tutor. Answer based ONLY on the provided textbook context.

Context from textbook:
{context}

Student question: {question}

Instructions:
- Answer clearly and concisely
- Use simple language appropriate for high school
- If the context doesn't contain the answer, say "I don't have information about this in the textbook"
- Reference specific concepts from the context
- Break down complex topics step-by-step

Answer:"#,
            context = context,
            question = question
        )
    }
}
