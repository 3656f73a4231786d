//! Canned provider replies used when no credential is configured.
//!
//! Selection is keyword sniffing over the latest user message, so the
//! same message always yields the same text.

use crate::core::models::{ChatMessage, ChatRole};

/// Numbered-list reply returned for inspiration-flavored messages.
pub const MOCK_INSPIRATION_REPLY: &str = "以下是一些创作灵感建议：\n\n\
1. 如何制作吸引人的视频开场 - 开场白对于吸引观众至关重要，建议使用悬念或有趣的问题开场。\n\
2. 视频内容结构优化 - 使用三段式结构：引入问题、展示解决方案、总结关键点。\n\
3. 增加观众互动的方法 - 在视频中提出问题，鼓励观众在评论区分享看法。";

/// Sectioned reply returned for analysis-flavored messages.
pub const MOCK_ANALYSIS_REPLY: &str = "以下是内容分析结果：\n\n\
优势:\n\
- 内容结构清晰\n\
- 主题明确\n\
- 视觉效果好\n\n\
不足:\n\
- 可以增加更多互动元素\n\
- 结尾部分可以更加吸引人\n\n\
改进建议:\n\
- 考虑添加号召性用语\n\
- 增加一些数据支持论点\n\
- 优化缩略图以提高点击率";

/// General content advice returned for everything else.
pub const MOCK_GENERIC_REPLY: &str = "作为内容创作顾问，我建议你可以尝试以下方法来提升视频质量：\n\n\
1. 确保前30秒抓住观众注意力，这是决定观众是否继续观看的关键时间段。\n\
2. 使用数据和故事相结合的方式，增强内容的可信度和感染力。\n\
3. 保持一致的发布频率，帮助建立稳定的观众群。\n\n\
希望这些建议对你有所帮助！如果有更具体的问题，欢迎继续咨询。";

/// Picks the canned reply for a prompt by sniffing the latest user
/// message for inspiration, creativity, or analysis keywords.
#[must_use]
pub fn mock_completion(messages: &[ChatMessage]) -> String {
    let user_message = messages
        .iter()
        .rev()
        .find(|message| message.role == ChatRole::User)
        .map(|message| message.content.as_str())
        .unwrap_or("");

    if user_message.contains("灵感") || user_message.contains("创意") {
        MOCK_INSPIRATION_REPLY.to_string()
    } else if user_message.contains("分析") {
        MOCK_ANALYSIS_REPLY.to_string()
    } else {
        MOCK_GENERIC_REPLY.to_string()
    }
}
