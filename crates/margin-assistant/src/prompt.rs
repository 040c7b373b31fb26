//! Question construction for the hosted assistant

/// Standing preamble sent with every question.
///
/// The assistant answers better when it knows the dataset's shape and the
/// audience; callers can replace this with their own preamble.
const DEFAULT_PREAMBLE: &str = "Context: You are analyzing data for a fast-casual restaurant \
chain. The data includes store performance, P&L metrics, operational data, and regional \
comparisons.";

const STANDING_INSTRUCTIONS: &str = "If you execute a SQL query, please include the query in \
your response.\nIf you return data, please format it clearly as a table.\nFocus on actionable \
insights for restaurant operations and management.";

/// Builds the full question text sent to the assistant: standing preamble,
/// optional caller-supplied context, the user's question, and the standing
/// output instructions.
pub struct QuestionBuilder {
    question: String,
    context: Option<String>,
    preamble: String,
}

impl QuestionBuilder {
    /// Create a builder for the given user question
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: None,
            preamble: DEFAULT_PREAMBLE.to_string(),
        }
    }

    /// Add caller-supplied context, prefixed ahead of the question
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Replace the standing preamble
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    /// Build the complete question text
    pub fn build(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.preamble);
        out.push_str("\n\n");

        if let Some(context) = &self.context {
            out.push_str(&format!("Additional context: {}\n\n", context));
        }

        out.push_str(&format!("Question: {}\n\n", self.question));
        out.push_str(STANDING_INSTRUCTIONS);
        out
    }
}
