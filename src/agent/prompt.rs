//! System prompt templates for the research and drafting steps.

/// Build the researcher prompt as a (system, user) pair.
pub fn build_research_prompt(question: &str, research_context: &str) -> (String, String) {
    let system = format!(
        r#"You are a highly skilled research assistant. Your goal is to gather comprehensive and relevant information from the web based on the user's question.
Use the provided web search tool (by explicitly outputting 'CALL_TOOL: [search query]') to find information.
After searching, summarize your findings.
If you believe enough information has been gathered to answer the question, state 'RESEARCH_COMPLETE'.
If more research is needed, state 'RESEARCH_NEEDED' followed by what specific information you are looking for, or another 'CALL_TOOL: [search query]' to refine your search.

Current research context: {research_context}
Current question: {question}"#
    );

    let user = format!(
        "{question}\n\nBased on the current context, what should be the next step (e.g., 'CALL_TOOL: [query]', 'RESEARCH_COMPLETE', or 'RESEARCH_NEEDED [explanation]')?"
    );

    (system, user)
}

/// Build the drafter prompt as a (system, user) pair.
pub fn build_drafting_prompt(question: &str, research_context: &str) -> (String, String) {
    let system = format!(
        r#"You are an expert answer drafter. Your task is to synthesize the provided research results into a clear, comprehensive, and well-structured answer to the user's question.
Ensure all relevant points from the research are covered. If the research is insufficient, state that more information is needed.

Original question: {question}

Research results:
{research_context}

Draft your answer below, starting with "Final Answer:"."#
    );

    (system, question.to_string())
}
