// src/profile.rs
//! Fixed portfolio content the chat widget sends and shows.

/// Biography prepended to every question sent to the relay.
pub const BIO_CONTEXT: &str = "You are an AI assistant representing Kamogelo Mosia's portfolio. \
He is a Full Stack Developer and UI/UX Designer with 10+ years of experience in C#, C++, Node.js, \
JavaScript, HTML, CSS, React, Next.js, and .NET. He's completing his BSc in Information Technology \
at University of Johannesburg with excellent grades including 90% in Informatics 1A. He speaks \
English and Afrikaans, has experience with Git and Postman, and excels in teamwork, problem-solving, \
communication, adaptability, and time management. Provide helpful, detailed responses about his \
skills and experience.";

/// Shorter-answer variant used by the landing-page chat preview.
pub const PREVIEW_CONTEXT: &str = "You are an AI assistant representing Kamogelo Mosia's portfolio. \
He is a Full Stack Developer and UI/UX Designer with 10+ years of experience in C#, C++, Node.js, \
JavaScript, HTML, CSS, React, Next.js, and .NET. He's completing his BSc in Information Technology \
at University of Johannesburg with excellent grades including 90% in Informatics 1A. He speaks \
English and Afrikaans, has experience with Git and Postman, and excels in teamwork, problem-solving, \
communication, adaptability, and time management. Provide helpful, concise responses about his \
skills and experience.";

pub const GREETING: &str = "Welcome to my dedicated chat space! I'm here to answer any questions \
about Kamogelo's skills, experience, projects, or anything else you'd like to know. What would you \
like to learn about?";

pub const PREVIEW_GREETING: &str =
    "Hi! I'm Kamogelo's AI assistant. Ask me anything about his skills and experience!";

pub const APOLOGY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    TechnicalSkills,
    Projects,
    Education,
    Unique,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::TechnicalSkills,
        QuickAction::Projects,
        QuickAction::Education,
        QuickAction::Unique,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::TechnicalSkills => "Technical Skills",
            QuickAction::Projects => "Projects",
            QuickAction::Education => "Education",
            QuickAction::Unique => "What makes him unique?",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            QuickAction::TechnicalSkills => "💻",
            QuickAction::Projects => "💼",
            QuickAction::Education => "🎓",
            QuickAction::Unique => "⭐",
        }
    }

    /// Question placed in the input field when the action is picked.
    pub fn prompt(self) -> String {
        format!("Tell me about Kamogelo's {}", self.label().to_lowercase())
    }
}
