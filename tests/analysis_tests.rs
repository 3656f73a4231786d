use creator_center::ai::mock::MOCK_ANALYSIS_REPLY;
use creator_center::core::models::ContentAnalysis;
use creator_center::extract::analysis::{
    DEFAULT_STRENGTH, DEFAULT_SUGGESTION, DEFAULT_WEAKNESS,
};
use creator_center::extract::parse_analysis;

fn assert_sections_non_empty(analysis: &ContentAnalysis) {
    assert!(!analysis.strengths.is_empty(), "Strengths must never be empty");
    assert!(!analysis.weaknesses.is_empty(), "Weaknesses must never be empty");
    assert!(
        !analysis.suggestions.is_empty(),
        "Suggestions must never be empty"
    );
}

#[test]
fn test_complete_json_object_is_accepted() {
    let raw = "```json\n{\"strengths\": [\"节奏明快\"], \"weaknesses\": [\"时长偏长\"], \
\"suggestions\": [\"剪掉重复片段\"]}\n```";

    let analysis = parse_analysis(raw);

    assert_eq!(analysis.strengths, vec!["节奏明快".to_string()]);
    assert_eq!(analysis.weaknesses, vec!["时长偏长".to_string()]);
    assert_eq!(analysis.suggestions, vec!["剪掉重复片段".to_string()]);
}

#[test]
fn test_json_with_empty_sections_gets_defaults() {
    // The provider answered with the right shape but nothing in it;
    // every section is backfilled so the caller never sees an empty list.
    let raw = r#"{"strengths": [], "weaknesses": [], "suggestions": []}"#;

    let analysis = parse_analysis(raw);

    assert_eq!(analysis.strengths, vec![DEFAULT_STRENGTH.to_string()]);
    assert_eq!(analysis.weaknesses, vec![DEFAULT_WEAKNESS.to_string()]);
    assert_eq!(analysis.suggestions, vec![DEFAULT_SUGGESTION.to_string()]);
}

#[test]
fn test_chinese_labeled_sections() {
    let analysis = parse_analysis(MOCK_ANALYSIS_REPLY);

    assert_eq!(
        analysis.strengths,
        vec![
            "内容结构清晰".to_string(),
            "主题明确".to_string(),
            "视觉效果好".to_string(),
        ]
    );
    assert_eq!(
        analysis.weaknesses,
        vec![
            "可以增加更多互动元素".to_string(),
            "结尾部分可以更加吸引人".to_string(),
        ]
    );
    assert_eq!(
        analysis.suggestions,
        vec![
            "考虑添加号召性用语".to_string(),
            "增加一些数据支持论点".to_string(),
            "优化缩略图以提高点击率".to_string(),
        ]
    );
}

#[test]
fn test_english_labels_are_case_insensitive() {
    let raw = "Strengths:\n1. Clear hook\n2. Good pacing\nWeaknesses:\n- Slow middle\n\
Suggestions:\na) Add a call to action";

    let analysis = parse_analysis(raw);

    assert_eq!(
        analysis.strengths,
        vec!["Clear hook".to_string(), "Good pacing".to_string()]
    );
    assert_eq!(analysis.weaknesses, vec!["Slow middle".to_string()]);
    assert_eq!(analysis.suggestions, vec!["Add a call to action".to_string()]);
}

#[test]
fn test_section_items_are_deduplicated_and_capped() {
    let raw = "优势:\n- 画面干净\n- 画面干净\n- 选题新颖\n- 节奏明快\n- 封面好看\n- 字幕清楚\n- 配乐合适";

    let analysis = parse_analysis(raw);

    assert_eq!(analysis.strengths.len(), 5);
    assert_eq!(
        analysis.strengths,
        vec![
            "画面干净".to_string(),
            "选题新颖".to_string(),
            "节奏明快".to_string(),
            "封面好看".to_string(),
            "字幕清楚".to_string(),
        ]
    );
    // The other two sections have no anchors in the text and fall back
    // to their defaults
    assert_eq!(analysis.weaknesses, vec![DEFAULT_WEAKNESS.to_string()]);
    assert_eq!(analysis.suggestions, vec![DEFAULT_SUGGESTION.to_string()]);
}

#[test]
fn test_unmarked_lines_are_used_when_no_list_markers_match() {
    let raw = "优点:\n画面很扎实\n叙述完整";

    let analysis = parse_analysis(raw);

    assert_eq!(
        analysis.strengths,
        vec!["画面很扎实".to_string(), "叙述完整".to_string()]
    );
}

#[test]
fn test_empty_input_yields_synthetic_default() {
    let analysis = parse_analysis("");

    assert_eq!(analysis.strengths, vec![DEFAULT_STRENGTH.to_string()]);
    assert_eq!(analysis.weaknesses, vec![DEFAULT_WEAKNESS.to_string()]);
    assert_eq!(analysis.suggestions, vec![DEFAULT_SUGGESTION.to_string()]);
}

#[test]
fn test_sections_are_never_empty_for_adversarial_input() {
    let inputs = [
        "",
        "###\n---\n===",
        "no labels here at all",
        "{\"strengths\": \"not an array\"}",
        "优势:",
        "1)",
    ];

    for raw in inputs {
        let analysis = parse_analysis(raw);
        assert_sections_non_empty(&analysis);
    }
}

#[test]
fn test_parse_analysis_is_idempotent() {
    for raw in [MOCK_ANALYSIS_REPLY, "优势:\n- 不错", ""] {
        assert_eq!(
            parse_analysis(raw),
            parse_analysis(raw),
            "Extraction should be deterministic for {raw}"
        );
    }
}
