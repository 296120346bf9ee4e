use crate::ui::widgets::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    ShortAnswer,
}

/// One prompt in the fixed sequence. The answer stays empty until the user
/// confirms it; afterwards it is never edited again.
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub answer: String,
    pub input: TextField,
}

impl Question {
    pub fn short(prompt: &'static str, placeholder: &'static str) -> Self {
        Self {
            prompt,
            kind: QuestionKind::ShortAnswer,
            answer: String::new(),
            input: TextField::new(prompt, placeholder),
        }
    }
}

/// Name, redirect URL, then the y/n confirmation. The confirmation must be
/// last; the controller enters it through an explicit transition.
pub fn application_questions() -> Vec<Question> {
    vec![
        Question::short("Name", "Name"),
        Question::short("Authorized redirect URL", "Authorized redirect URL"),
        Question::short(
            "Are you sure you want to create the application? (y/n)",
            "Are you sure you want to create the application? (Y/n)",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_has_three_short_answers_ending_in_confirmation() {
        let questions = application_questions();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.kind == QuestionKind::ShortAnswer));
        assert!(questions.iter().all(|q| q.answer.is_empty()));
        assert!(questions.last().unwrap().prompt.contains("(y/n)"));
    }
}
