//! User prompt composition: template substitution with `{problem}` and `{tools}`.

use thiserror::Error;

/// Default system prompt: sets behavior, audience, and the JSON output contract.
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"You are an AI assistant specializing in creating practical, user-friendly conversation starters that help everyday people use AI tools to solve real-life problems.

CONTEXT:
- Target Audience: Regular people who are AI beginners, not tech experts
- Goal: Inspire users to see how AI can help them TODAY with specific problems
- Style: Friendly, approachable, jargon-free
- Output: Conversation starters that users can copy-paste into their AI assistant

AVAILABLE TOOLS:
You have access to tool descriptors representing apps and devices people already use (Apple Watch, Spotify, Google Maps, etc.). Your job is to creatively combine these tools with AI capabilities.

REQUIREMENTS:
1. Generate exactly 5 distinct solutions for each problem
2. Each solution should reference 1-3 specific tools when relevant
3. Use everyday language, avoid technical terms
4. Focus on immediate, practical value
5. Be creative but realistic - don't oversell AI's capabilities

QUALITY STANDARDS:
- Actionable: User can immediately try this with their AI assistant
- Specific: References real tools and clear actions
- Varied: Each of the 5 solutions takes a different approach
- Appropriate: Matches the user's maturity level (1=beginner, 5=advanced)

Format your response as JSON:
{
  "solutions": [
    {
      "title": "Brief descriptive title (5-8 words)",
      "prompt": "Full conversation starter that users can copy-paste to their LLM",
      "tools_used": ["tool_id_1", "tool_id_2"],
      "tags": ["motivational_tag", "complexity_tag", "domain_tag"]
    }
  ]
}

IMPORTANT:
- Each prompt should be 2-4 sentences
- Be specific about HOW to use each tool (e.g., "Take a screenshot of...", "Export your data as...")
- Don't assume integrations that don't exist yet
- Make it feel like helpful advice from a friend, not a technical manual
- Include tools when they genuinely enhance the solution
- Some solutions may use 2-3 tools, others may use none
- Do NOT force tool mentions if they don't add value
- Pure AI solutions are perfectly acceptable when appropriate
- Aim for a natural mix: perhaps 3-4 solutions with tools, 1-2 without"#;

/// Default user prompt template. Placeholders: `{problem}`, `{tools}`.
pub const DEFAULT_USER_PROMPT: &str = r#"
Problem to Solve:
{problem}

Available Tools and Their Capabilities:
{tools}

Your Task:
Generate exactly 5 distinct solution approaches that address this problem.
Each solution should be formatted as specified in your system instructions.

Remember:
- Be specific about HOW to use each tool (screenshots, exports, manual steps)
- Don't assume integrations that don't exist
- Make it feel like advice from a helpful friend
- Each prompt should be immediately usable by copying to an LLM
- Include tools when they genuinely enhance the solution
- Some solutions may use 2-3 tools, others may use none
- Pure AI solutions are perfectly acceptable when appropriate
"#;

/// Template problems detected before any network call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template references undefined placeholder `{0}`")]
    UndefinedPlaceholder(String),
    #[error("template has an unclosed `{{` placeholder")]
    UnclosedPlaceholder,
    #[error("template has a stray `}}` outside any placeholder")]
    StrayBrace,
}

/// Builds the final user message from the problem text and rendered tool text.
///
/// When `template` is `None` or empty, [`DEFAULT_USER_PROMPT`] is used. Both
/// paths share the same placeholder contract: `{problem}` and `{tools}` are
/// substituted, `{{` / `}}` are literal braces, and a template may legally
/// omit one or both placeholders. Deterministic; same inputs yield the same
/// string.
pub fn compose_user_prompt(
    problem: &str,
    tool_text: &str,
    template: Option<&str>,
) -> Result<String, TemplateError> {
    let template = match template {
        Some(template) if !template.is_empty() => template,
        _ => DEFAULT_USER_PROMPT,
    };
    substitute(template, problem, tool_text)
}

/// Single-pass placeholder substitution. Any placeholder name other than
/// `problem` or `tools` is an error, so a bad template fails fast instead of
/// wasting a model call.
fn substitute(template: &str, problem: &str, tools: &str) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + problem.len() + tools.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(TemplateError::UnclosedPlaceholder);
                }
                match name.as_str() {
                    "problem" => out.push_str(problem),
                    "tools" => out.push_str(tools),
                    _ => return Err(TemplateError::UndefinedPlaceholder(name)),
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(TemplateError::StrayBrace);
                }
            }
            c => out.push(c),
        }
    }

    Ok(out)
}
