//! Assistant Stub
//!
//! Placeholder for a future retrieval/generation integration. Nothing here
//! calls a model; submissions are echoed into a fixed template.

/// Echo a submitted query into the placeholder response
pub fn echo_response(query: &str) -> String {
    format!("RAG-based response for \"{}\" will be generated here.", query)
}

/// Consume the pending query, leaving the input empty, and return the echo
pub fn submit_query(input: &mut String) -> String {
    echo_response(&std::mem::take(input))
}

/// Placeholder text for the query textarea
pub fn query_placeholder(function_name: &str) -> String {
    format!("Enter your question about {} here...", function_name)
}

/// Static copy describing the planned assistant, one entry per paragraph
pub fn assistant_blurb(function_name: &str) -> [String; 3] {
    [
        format!(
            "This AI Assistant uses Retrieval-Augmented Generation (RAG) to provide insights and answers related to {}. \
             RAG combines the power of a large language model with a specialized knowledge base, allowing for more accurate and \
             context-aware responses.",
            function_name
        ),
        "The assistant draws data from a vector database containing specific information about private equity practices, \
         market trends, and historical data. It can provide analysis, answer questions, and offer recommendations based on \
         this curated knowledge."
            .to_string(),
        "Multiple AI agents specializing in different aspects of private equity can collaborate to provide comprehensive insights. \
         These agents can interact with each other to cross-reference information and provide well-rounded answers to complex queries."
            .to_string(),
    ]
}
