// All LLM prompt templates for the Generation module.
// Placeholders are `{name}` tokens filled by `fill` before sending.

/// Upwork proposal prompt.
/// Replace: {title}, {description}, {budget}
pub const PROPOSAL_PROMPT_TEMPLATE: &str = r#"You are an expert freelance proposal writer. Write a compelling, professional Upwork proposal for the following job.

Job Title: {title}

Job Description: {description}

Budget: {budget}

Write a personalized proposal that:
1. Directly addresses the client's needs
2. Highlights relevant experience and skills
3. Explains your approach to the project
4. Shows enthusiasm and professionalism
5. Includes a brief call-to-action
6. Is concise (200-300 words)

Do not include placeholder text like [Your Name] or generic statements. Write as if you are a skilled freelancer with relevant experience."#;

/// Cover letter prompt.
/// Replace: {title}, {description}, {resume}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are an expert career coach. Write a compelling, professional cover letter for this job application.

Job Title: {title}

Job Description: {description}

Candidate's Resume:
{resume}

Write a personalized cover letter that:
1. Directly addresses the job requirements
2. Highlights relevant experience from the resume
3. Shows genuine interest in the role
4. Is professional yet personable
5. Is concise (250-350 words)

Write the cover letter in first person, ready to copy and paste. Do not include placeholders like [Date] or [Company Name]."#;

/// Interview question prompt. The model is asked for a bare JSON array,
/// but `questions::parse_questions` copes when it ignores that.
/// Replace: {title}, {description}
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"You are an expert interviewer. Based on this job description, generate 5 common interview questions that would likely be asked.

Job Title: {title}

Job Description: {description}

Generate 5 realistic interview questions that:
1. Focus on key skills and requirements from the job description
2. Are commonly asked in real interviews
3. Are specific to this role
4. Range from technical to behavioral

Return ONLY a JSON array of questions, like this:
["Question 1", "Question 2", "Question 3", "Question 4", "Question 5"]"#;

/// Interview answer prompt, one call per question.
/// Replace: {question}, {resume}
pub const ANSWER_PROMPT_TEMPLATE: &str = r#"You are helping a job candidate prepare for an interview. Based on their resume, generate a strong, concise answer to this interview question.

Interview Question: {question}

Candidate's Resume:
{resume}

Generate a professional, concise answer (2-3 sentences) that:
1. Directly answers the question
2. References specific experience from the resume when relevant
3. Is confident and professional
4. Uses first person ("I have...")

Return ONLY the answer text, no introduction or explanation."#;

pub fn proposal_prompt(title: &str, description: &str, budget: &str) -> String {
    fill(
        PROPOSAL_PROMPT_TEMPLATE,
        &[("title", title), ("description", description), ("budget", budget)],
    )
}

pub fn cover_letter_prompt(title: &str, description: &str, resume: &str) -> String {
    fill(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[("title", title), ("description", description), ("resume", resume)],
    )
}

pub fn questions_prompt(title: &str, description: &str) -> String {
    fill(
        QUESTIONS_PROMPT_TEMPLATE,
        &[("title", title), ("description", description)],
    )
}

pub fn answer_prompt(question: &str, resume: &str) -> String {
    fill(
        ANSWER_PROMPT_TEMPLATE,
        &[("question", question), ("resume", resume)],
    )
}

/// Replaces `{name}` placeholders in a single left-to-right pass over the
/// template. Substituted values are never rescanned, so user text containing
/// `{resume}` stays literal. Unknown `{...}` tokens are kept as-is.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_prompt_fills_every_placeholder() {
        let prompt = proposal_prompt("Rust dev", "Build an API", "$500");
        assert!(prompt.contains("Job Title: Rust dev"));
        assert!(prompt.contains("Job Description: Build an API"));
        assert!(prompt.contains("Budget: $500"));
        assert!(!prompt.contains("{title}"));
        assert!(!prompt.contains("{budget}"));
    }

    #[test]
    fn test_answer_prompt_embeds_question_and_resume() {
        let prompt = answer_prompt("Why Rust?", "10 years of systems work");
        assert!(prompt.contains("Interview Question: Why Rust?"));
        assert!(prompt.contains("10 years of systems work"));
        assert!(!prompt.contains("{resume}"));
    }

    #[test]
    fn test_placeholders_in_user_text_stay_literal() {
        let prompt = cover_letter_prompt("{description} wanted", "Ship {resume}", "My {title}");
        assert!(prompt.contains("Job Title: {description} wanted"));
        assert!(prompt.contains("Job Description: Ship {resume}"));
        assert!(prompt.contains("My {title}"));
    }

    #[test]
    fn test_fill_keeps_unknown_and_unclosed_braces() {
        assert_eq!(fill("a {x} {y} {", &[("x", "1")]), "a 1 {y} {");
        assert_eq!(fill("[\"Q1\", \"Q2\"]", &[]), "[\"Q1\", \"Q2\"]");
    }

    #[test]
    fn test_questions_prompt_asks_for_json_array() {
        let prompt = questions_prompt("Backend Engineer", "Postgres, Kafka");
        assert!(prompt.contains("Return ONLY a JSON array"));
        assert!(prompt.contains("Job Description: Postgres, Kafka"));
    }
}
