//! Stage request and result types

/// Words kept when digesting stage instructions into a summary
const SUMMARY_WORDS: usize = 10;

/// Description of one pipeline stage
///
/// A typed request instead of an agent object: everything the runner needs to
/// execute the stage is declared here up front.
#[derive(Debug, Clone)]
pub struct StageRequest {
    /// Role the LLM plays (e.g. "Financial Data Collector")
    pub role: String,

    /// Persona and goal text appended to the system prompt
    pub persona: String,

    /// Task instructions (the user message)
    pub instructions: String,

    /// Template describing the expected output shape, appended to the task
    pub expected_output: Option<String>,

    /// Name of the capability this stage may call, if any
    pub capability: Option<String>,

    /// Reasoning iteration bound (LLM round trips)
    pub max_iterations: usize,

    /// Output of the prior stage, fed in as context
    pub context: Option<String>,
}

impl StageRequest {
    /// Create a builder for stage requests
    pub fn builder(role: impl Into<String>) -> StageRequestBuilder {
        StageRequestBuilder::new(role)
    }

    /// System prompt composed from role and persona
    pub fn system_prompt(&self) -> String {
        format!("You are a {}. {}", self.role, self.persona)
    }

    /// Full user message: instructions, expected output, prior context
    pub fn user_message(&self) -> String {
        let mut message = self.instructions.clone();

        if let Some(expected) = &self.expected_output {
            message.push_str("\n\nExpected output:\n");
            message.push_str(expected);
        }

        if let Some(context) = &self.context {
            message.push_str("\n\nContext from the previous step:\n");
            message.push_str(context);
        }

        message
    }
}

/// Builder for [`StageRequest`]
pub struct StageRequestBuilder {
    role: String,
    persona: String,
    instructions: String,
    expected_output: Option<String>,
    capability: Option<String>,
    max_iterations: usize,
    context: Option<String>,
}

impl StageRequestBuilder {
    /// Create a new builder
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            persona: String::new(),
            instructions: String::new(),
            expected_output: None,
            capability: None,
            max_iterations: 1,
            context: None,
        }
    }

    /// Set the persona text
    pub fn persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    /// Set the task instructions
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Set the expected output template
    pub fn expected_output(mut self, expected: impl Into<String>) -> Self {
        self.expected_output = Some(expected.into());
        self
    }

    /// Reference a capability by name
    pub fn capability(mut self, name: impl Into<String>) -> Self {
        self.capability = Some(name.into());
        self
    }

    /// Set the reasoning iteration bound
    pub fn max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Set the prior-stage context
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Build the stage request
    pub fn build(self) -> StageRequest {
        StageRequest {
            role: self.role,
            persona: self.persona,
            instructions: self.instructions,
            expected_output: self.expected_output,
            capability: self.capability,
            max_iterations: self.max_iterations,
            context: self.context,
        }
    }
}

/// Result of one completed stage
#[derive(Debug, Clone)]
pub struct TaskResult {
    /// Raw stage output (the final artifact for the last stage)
    pub raw: String,

    /// Short digest of the stage, for progress reporting
    pub summary: String,
}

impl TaskResult {
    /// Create a result; the summary is digested from the stage instructions
    pub fn new(raw: impl Into<String>, instructions: &str) -> Self {
        Self {
            raw: raw.into(),
            summary: summarize(instructions),
        }
    }

    /// Whether the stage produced any output
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Line for the progress callback: the summary, or a placeholder when
    /// the stage produced nothing
    pub fn progress_message(&self) -> &str {
        if self.is_empty() {
            "No output"
        } else {
            &self.summary
        }
    }
}

fn summarize(instructions: &str) -> String {
    let words: Vec<&str> = instructions.split_whitespace().collect();
    if words.len() <= SUMMARY_WORDS {
        words.join(" ")
    } else {
        format!("{}...", words[..SUMMARY_WORDS].join(" "))
    }
}
