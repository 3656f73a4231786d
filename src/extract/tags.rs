/// Fixed vocabulary of content-creation topic labels used to decorate
/// extracted suggestions.
pub const COMMON_TAGS: [&str; 15] = [
    "视频制作",
    "内容创作",
    "脚本编写",
    "剪辑技巧",
    "镜头语言",
    "叙事技巧",
    "视觉效果",
    "音频处理",
    "观众互动",
    "营销策略",
    "标题优化",
    "缩略图设计",
    "内容结构",
    "开场技巧",
    "结尾设计",
];

pub const MAX_TAGS: usize = 3;

/// Picks up to three vocabulary labels whose first two characters appear
/// in the fragment. Coarse substring matching, ties broken by vocabulary
/// order.
#[must_use]
pub fn extract_tags(text: &str) -> Vec<String> {
    COMMON_TAGS
        .iter()
        .filter(|tag| {
            let prefix: String = tag.chars().take(2).collect();
            text.contains(&prefix)
        })
        .take(MAX_TAGS)
        .map(|tag| (*tag).to_string())
        .collect()
}
