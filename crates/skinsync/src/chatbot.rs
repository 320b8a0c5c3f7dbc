use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatbotStatus {
    ComingSoon,
}

/// Informational panel for the ingredient chatbot. It accepts no questions.
#[derive(Debug, Clone, Serialize)]
pub struct ChatbotPanel {
    pub status: ChatbotStatus,
    pub heading: &'static str,
    pub sample_questions: Vec<&'static str>,
    pub notice: &'static str,
}

impl ChatbotPanel {
    pub fn coming_soon() -> Self {
        Self {
            status: ChatbotStatus::ComingSoon,
            heading: "💬 Ingredient Chatbot (Coming Soon)",
            sample_questions: vec![
                "What does azelaic acid do?",
                "Is niacinamide safe for sensitive skin?",
            ],
            notice: "This feature will use GenAI to explain ingredients based on your concerns.",
        }
    }
}
