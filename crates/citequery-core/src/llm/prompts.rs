//! Citation prompt templates

use super::ChatMessage;

const SYSTEM_PROMPT: &str = "You are a careful analyst who answers strictly from numbered sources.";

const CITATION_QA_TEMPLATE: &str = "Use ONLY the numbered sources to answer.
Each time you use information, cite it inline as [Source N]. If multiple sources support a claim, include multiple citations.

Sources:
{context}

Question:
{query}

Rules:
- Never invent citations or source numbers that do not exist above.
- If the answer is not fully supported by the sources, say you don't know.
- Keep the answer concise but complete.

Answer with inline citations:";

const CITATION_REFINE_TEMPLATE: &str = "We are refining an existing answer using NEW numbered sources.
Use the new sources to improve or correct the answer. Preserve correct parts.

Question:
{query}

Existing answer:
{existing_answer}

New sources:
{context}

Rules:
- Cite using [Source N] from the new sources when you add or modify content.
- Keep citations already present in the existing answer unchanged.
- If the new sources are not helpful, return the existing answer unchanged.

Refined answer with inline citations:";

/// Messages for the first pass over the sources
pub fn citation_qa_messages(query: &str, context: &str) -> Vec<ChatMessage> {
    let prompt = CITATION_QA_TEMPLATE
        .replace("{context}", context)
        .replace("{query}", query);
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)]
}

/// Messages for refining an answer with a further batch of sources
pub fn citation_refine_messages(
    query: &str,
    existing_answer: &str,
    context: &str,
) -> Vec<ChatMessage> {
    let prompt = CITATION_REFINE_TEMPLATE
        .replace("{existing_answer}", existing_answer)
        .replace("{context}", context)
        .replace("{query}", query);
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)]
}
