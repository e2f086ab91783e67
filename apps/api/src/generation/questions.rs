//! Interview question sanitizer — turns free-text model output into a question list.
//!
//! Strategies, in priority order:
//! 1. structured: fenced or bare JSON array of strings
//! 2. heuristic: one question per line, list markers stripped (non-bracketed text only)
//! 3. fallback: fixed generic question list
//!
//! A strategy "wins" only if it yields at least `MIN_QUESTIONS` questions.

/// Fewer surviving questions than this and the fallback list is used.
pub const MIN_QUESTIONS: usize = 3;

/// Questions must be strictly longer than this (in characters).
const MIN_QUESTION_CHARS: usize = 10;

/// Characters trimmed from both ends of a line by the heuristic parser.
const LINE_MARKERS: &str = "- 0123456789.\"'";

pub const FALLBACK_QUESTIONS: [&str; 5] = [
    "Tell me about your relevant experience for this role.",
    "What interests you about this position?",
    "Describe a challenging project you've worked on.",
    "What are your salary expectations?",
    "Where do you see yourself in 3 years?",
];

/// Which strategy produced the question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSource {
    Json,
    Lines,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuestions {
    pub questions: Vec<String>,
    pub source: QuestionSource,
}

/// Parses raw model output into interview questions. Never fails.
pub fn parse_questions(raw: &str) -> ParsedQuestions {
    let text = strip_code_fence(raw);

    let (questions, source) = match parse_json_array(text) {
        Some(questions) => (questions, QuestionSource::Json),
        None => (parse_lines(text), QuestionSource::Lines),
    };

    if questions.len() >= MIN_QUESTIONS {
        return ParsedQuestions { questions, source };
    }

    ParsedQuestions {
        questions: fallback_questions(),
        source: QuestionSource::Fallback,
    }
}

pub fn fallback_questions() -> Vec<String> {
    FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

/// Removes a leading "```lang" line and a trailing "```", if present.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // The whole opening line goes, including any language tag.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => text,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// `None` when the text is not bracket-delimited. Bracketed text that is not
/// valid JSON yields no questions, so it ends in the fallback list.
fn parse_json_array(text: &str) -> Option<Vec<String>> {
    if !(text.starts_with('[') && text.ends_with(']')) {
        return None;
    }

    let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(text) else {
        return Some(Vec::new());
    };

    Some(
        values
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|q| is_long_enough(q))
            .map(str::to_string)
            .collect(),
    )
}

fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_matches(|c| LINE_MARKERS.contains(c)))
        .filter(|q| is_long_enough(q) && !q.to_lowercase().starts_with("json"))
        .map(str::to_string)
        .collect()
}

fn is_long_enough(question: &str) -> bool {
    question.chars().count() > MIN_QUESTION_CHARS
}
