//! Fixed prompt templates, one per route.

pub const DAILY_INSPIRATION: &str = "Generate daily inspiration with the following:\n\
1. A motivational quote.\n\
2. A short productivity tip.\n\
3. A reflective journaling prompt.\n\
Respond in this format:\n\
- Quote: <quote>\n\
- Tip: <tip>\n\
- Prompt: <journaling prompt>";

pub fn summary(text: &str) -> String {
    format!("Summarize the following passage in a few sentences:\n\n{}", text)
}

pub fn correction(sentence: &str) -> String {
    format!(
        "Correct the grammar and suggest improvements for this sentence: '{}'",
        sentence
    )
}

pub fn quiz(text: &str) -> String {
    format!(
        "Generate 3 multiple-choice quiz questions (with 4 options each) and their correct answers based on the following text:\n\n{}",
        text
    )
}

pub fn reminder(goal: &str, time: &str) -> String {
    format!(
        "You are a friendly AI assistant helping someone stay on track with personal growth.\n\
User's Goal: {}\n\
Target Time: {}\n\n\
Generate:\n\
1. A motivational nudge.\n\
2. A gentle reminder to do one small task that moves them closer to their goal.\n\
Format:\n\
- Reminder: <message>\n\
- Goal Tip: <suggestion>\n\
Tone: friendly, warm, casual.",
        goal, time
    )
}

pub fn conversation(message: &str) -> String {
    format!(
        "You are a friendly and thoughtful AI assistant for personal growth and well-being.\n\
Given this user message, respond supportively:\n\
User: '{}'\n\nAI:",
        message
    )
}
