//! Fixed system instructions and prompt builders for the three AI
//! operations.

use crate::core::models::ChatMessage;

pub const CHAT_SYSTEM_PROMPT: &str =
    "你是一位专业的内容创作顾问，擅长提供视频创作建议、内容策略和创意灵感。请提供有用、具体且专业的回答。";

pub const INSPIRATION_SYSTEM_PROMPT: &str =
    "你是一位创意灵感生成器。请针对给定主题，生成3-5个具体、有创意且实用的内容创作灵感建议。\
每个建议应包含标题、简短描述和相关标签。以JSON格式返回。";

pub const ANALYSIS_SYSTEM_PROMPT: &str =
    "你是一位内容分析专家。请分析提供的内容，并给出内容优势、需要改进的地方和具体的改进建议。\
以JSON格式返回，包含strengths、weaknesses和suggestions三个数组。";

/// System instruction, prior history, then the new user message.
#[must_use]
pub fn build_chat_prompt(message: &str, history: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(CHAT_SYSTEM_PROMPT));
    messages.extend_from_slice(history);
    messages.push(ChatMessage::user(message));
    messages
}

#[must_use]
pub fn build_inspiration_prompt(topic: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(INSPIRATION_SYSTEM_PROMPT),
        ChatMessage::user(format!("请为以下创作主题提供灵感建议: {topic}")),
    ]
}

#[must_use]
pub fn build_analysis_prompt(content: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(ANALYSIS_SYSTEM_PROMPT),
        ChatMessage::user(format!("请分析以下内容:\n\n{content}")),
    ]
}
