//! Tests for question bank parsing, validation, and context building.

use super::context::{BLANK_MARKER, PromptParts};
use super::*;
use crate::config::Config;

const MCQ_BLOCK: &str = "### \nid: 1\ntype: MCQ\nquestion: 2+2=?\noption1: 3\n*option2: 4\ntitle: Sum\ntopic: Math\ntags: easy, arithmetic";

const BANK: &str = r#"Question bank for week 3.

###
id: 1
type: MCQ
question: 2+2=?
option1: 3
*option2: 4
title: Sum
topic: Math
tags: easy, arithmetic

###
id: 2
type: String Input
question: The capital of France is ___ and it is lovely.
answer: Paris
title: Capital City
topic: Geography
tags: europe

###
id: 3
type: MCQ
question: Pick the primes
*option1: 2
*option2: 3
option3: 4
title: Primes
topic: Math
tags: primes, number theory
"#;

fn parse(text: &str) -> Vec<QuestionRecord> {
    parse_bank(text, &mut SequentialIds::new("q"))
}

fn route(kind: &str) -> KindRoute {
    Config::default().route(kind).cloned().unwrap()
}

// ============================================================================
// Parser
// ============================================================================

#[test]
fn test_parse_example_block() {
    let records = parse(MCQ_BLOCK);
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.id(), "1");
    assert_eq!(record.kind(), "MCQ");
    assert_eq!(record.prompt(), "2+2=?");
    assert_eq!(record.title(), "Sum");
    assert_eq!(record.topic(), "Math");
    assert_eq!(record.tags(), Some("easy, arithmetic"));
    assert_eq!(record.answer(), None);
    assert_eq!(record.line(), 1);
    assert_eq!(record.instance_id(), "q-1");

    let options = record.options();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].label, "option1");
    assert_eq!(options[0].text, "3");
    assert!(!options[0].is_correct());
    assert_eq!(options[1].label, "*option2");
    assert_eq!(options[1].text, "4");
    assert!(options[1].is_correct());
}

#[test]
fn test_parse_multiple_blocks() {
    let records = parse(BANK);
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].title(), "Sum");
    assert_eq!(records[1].kind(), "String Input");
    assert_eq!(records[1].answer(), Some("Paris"));
    assert!(records[1].options().is_empty());
    assert_eq!(records[2].options().len(), 3);
}

#[test]
fn test_last_block_runs_to_end_of_text() {
    let records = parse("###\nid: 1\n###\nid: 2\ntitle: Last");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].title(), "Last");
}

#[test]
fn test_block_line_numbers() {
    let records = parse(BANK);
    assert_eq!(records[0].line(), 3);
    assert_eq!(records[1].line(), 13);
    assert_eq!(records[2].line(), 22);
}

#[test]
fn test_instance_ids_are_assigned_in_order() {
    let records = parse(BANK);
    let ids: Vec<&str> = records.iter().map(|r| r.instance_id()).collect();
    assert_eq!(ids, vec!["q-1", "q-2", "q-3"]);
}

#[test]
fn test_parse_empty_text() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n  \n").is_empty());
}

#[test]
fn test_text_before_first_marker_is_ignored() {
    let records = parse("id: 0\ntitle: Preamble\n###\nid: 1\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), "1");
}

#[test]
fn test_marker_only_yields_empty_record() {
    let records = parse("###\n");
    assert_eq!(records.len(), 1);
    assert!(records[0].fields().is_empty());
    assert!(records[0].options().is_empty());
    assert_eq!(records[0].title(), "");
}

#[test]
fn test_lines_without_separator_are_skipped() {
    let records = parse("###\nid: 1\nfree text line\ntitle:NoSpace\ntitle: Kept\n");
    assert_eq!(
        records[0].fields(),
        &[
            ("id".to_string(), "1".to_string()),
            ("title".to_string(), "Kept".to_string())
        ]
    );
}

#[test]
fn test_empty_values_are_kept() {
    let records = parse("###\noption1: \n*option2: 4\nanswer: \ntags: \n");
    let record = &records[0];

    assert_eq!(
        record.options(),
        &[
            ChoiceOption {
                label: "option1".to_string(),
                text: String::new()
            },
            ChoiceOption {
                label: "*option2".to_string(),
                text: "4".to_string()
            },
        ]
    );
    assert_eq!(record.answer(), Some(""));
    assert_eq!(record.tags(), Some(""));
}

#[test]
fn test_empty_option_keeps_later_option_positions() {
    let records = parse("###\ntype: MCQ\noption1: \n*option2: 4\n");
    let vars = QuestionContext::from_record(&records[0], &route("MCQ")).to_template_vars();

    assert_eq!(vars.get("option1"), Some(&String::new()));
    assert_eq!(vars.get("flag1"), Some(&"false".to_string()));
    assert_eq!(vars.get("option2"), Some(&"4".to_string()));
    assert_eq!(vars.get("flag2"), Some(&"true".to_string()));
}

#[test]
fn test_value_split_on_first_separator_only() {
    let records = parse("###\nquestion: Ratio: 1: 2?\n");
    assert_eq!(records[0].prompt(), "Ratio: 1: 2?");
}

#[test]
fn test_repeated_key_replaces_value_in_place() {
    let records = parse("###\ntitle: First\nid: 7\ntitle: Second\n");
    assert_eq!(
        records[0].fields(),
        &[
            ("title".to_string(), "Second".to_string()),
            ("id".to_string(), "7".to_string())
        ]
    );
}

#[test]
fn test_star_prefixed_key_is_an_option() {
    let records = parse("###\n*: yes\nanswerA: no\n");
    assert_eq!(records[0].options().len(), 1);
    assert!(records[0].options()[0].is_correct());
    assert_eq!(records[0].field("answerA"), Some("no"));
}

#[test]
fn test_unknown_scalar_keys_are_kept() {
    let records = parse("###\ndifficulty: hard\nid: 1\n");
    assert_eq!(records[0].field("difficulty"), Some("hard"));
}

#[test]
fn test_crlf_line_endings() {
    let records = parse("###\r\nid: 1\r\ntitle: Windows\r\n");
    assert_eq!(records[0].title(), "Windows");
}

#[test]
fn test_load_bank_missing_file() {
    let err = load_bank("/nonexistent/bank.md", &mut SequentialIds::new("q")).unwrap_err();
    assert!(err.to_string().contains("failed to read question bank"));
}

// ============================================================================
// Re-serialization
// ============================================================================

#[test]
fn test_scalar_fields_round_trip() {
    for record in parse(BANK) {
        let reparsed = parse(&record.to_block_text());
        assert_eq!(reparsed.len(), 1);
        assert_eq!(reparsed[0].fields(), record.fields());
        assert_eq!(reparsed[0].options(), record.options());
    }
}

#[test]
fn test_to_block_text_format() {
    let records = parse(MCQ_BLOCK);
    let record = &records[0];
    assert_eq!(
        record.to_block_text(),
        "###\nid: 1\ntype: MCQ\nquestion: 2+2=?\ntitle: Sum\ntopic: Math\ntags: easy, arithmetic\noption1: 3\n*option2: 4\n"
    );
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_well_formed_records() {
    let records = parse(BANK);
    for record in &records {
        assert_eq!(record.validate(&route(record.kind())), Ok(()));
    }
}

#[test]
fn test_validate_missing_title() {
    let records = parse("###\ntype: MCQ\nquestion: q\ntopic: t\noption1: a\n");
    let record = &records[0];
    assert_eq!(
        record.validate(&route("MCQ")),
        Err(RecordError::MissingField(TITLE_KEY))
    );
}

#[test]
fn test_validate_blank_topic() {
    let records = parse("###\ntype: MCQ\nquestion: q\ntitle: t\ntopic:  \noption1: a\n");
    let record = &records[0];
    assert_eq!(
        record.validate(&route("MCQ")),
        Err(RecordError::MissingField(TOPIC_KEY))
    );
}

#[test]
fn test_validate_choice_without_options() {
    let records = parse("###\ntype: MCQ\nquestion: q\ntitle: t\ntopic: x\n");
    let record = &records[0];
    assert_eq!(
        record.validate(&route("MCQ")),
        Err(RecordError::NoOptions("MCQ".to_string()))
    );
}

#[test]
fn test_validate_string_input_without_answer() {
    let records = parse("###\ntype: String Input\nquestion: q\ntitle: t\ntopic: x\n");
    let record = &records[0];
    let err = record.validate(&route("String Input")).unwrap_err();
    assert_eq!(err, RecordError::MissingAnswer("String Input".to_string()));
    assert_eq!(
        err.to_string(),
        "kind 'String Input' requires an 'answer' field"
    );
}

// ============================================================================
// Context
// ============================================================================

#[test]
fn test_context_for_example_block() {
    let records = parse(MCQ_BLOCK);
    let record = &records[0];
    let vars = QuestionContext::from_record(record, &route("MCQ")).to_template_vars();

    assert_eq!(vars.get("question"), Some(&"2+2=?".to_string()));
    assert_eq!(vars.get("title"), Some(&"Sum".to_string()));
    assert_eq!(vars.get("type"), Some(&"MCQ".to_string()));
    assert_eq!(vars.get("topic"), Some(&"Math".to_string()));
    assert_eq!(vars.get("id"), Some(&"1".to_string()));
    assert_eq!(vars.get("uuid"), Some(&"q-1".to_string()));
    assert_eq!(
        vars.get("tags"),
        Some(&r#"["easy","arithmetic"]"#.to_string())
    );
    assert_eq!(vars.get("option1"), Some(&"3".to_string()));
    assert_eq!(vars.get("flag1"), Some(&"false".to_string()));
    assert_eq!(vars.get("option2"), Some(&"4".to_string()));
    assert_eq!(vars.get("flag2"), Some(&"true".to_string()));
    assert!(!vars.contains_key("answer"));
    assert!(!vars.contains_key("option3"));
}

#[test]
fn test_context_blank_prompt_uses_two_keys() {
    let records = parse(BANK);
    let vars = QuestionContext::from_record(&records[1], &route("String Input")).to_template_vars();

    assert_eq!(
        vars.get("question1"),
        Some(&"The capital of France is".to_string())
    );
    assert_eq!(vars.get("question2"), Some(&"and it is lovely.".to_string()));
    assert!(!vars.contains_key("question"));
}

#[test]
fn test_context_whole_prompt_uses_one_key() {
    for record in parse(BANK) {
        let vars = QuestionContext::from_record(&record, &route(record.kind())).to_template_vars();
        let has_blank = record.prompt().contains(BLANK_MARKER);

        assert_eq!(vars.contains_key("question"), !has_blank);
        assert_eq!(vars.contains_key("question1"), has_blank);
        assert_eq!(vars.contains_key("question2"), has_blank);
    }
}

#[test]
fn test_prompt_split_once() {
    assert_eq!(
        PromptParts::from_prompt(" a ___ b ___ c "),
        PromptParts::Blank {
            before: "a".to_string(),
            after: "b ___ c".to_string()
        }
    );
    assert_eq!(
        PromptParts::from_prompt("  plain  "),
        PromptParts::Whole("plain".to_string())
    );
}

#[test]
fn test_context_includes_answer_for_answer_kinds() {
    let records = parse("###\nid: 9\ntype: String Input\nquestion: 6*7\nanswer: 42\ntitle: T\ntopic: X\n");
    let record = &records[0];
    let vars = QuestionContext::from_record(record, &route("String Input")).to_template_vars();
    assert_eq!(vars.get("answer"), Some(&"42".to_string()));
}

#[test]
fn test_context_flags_match_correct_markers() {
    for record in parse(BANK) {
        let vars = QuestionContext::from_record(&record, &route(record.kind())).to_template_vars();
        let options = record.options();

        let option_keys = vars.keys().filter(|k| k.starts_with("option")).count();
        let flag_keys = vars.keys().filter(|k| k.starts_with("flag")).count();
        assert_eq!(option_keys, options.len());
        assert_eq!(flag_keys, options.len());

        for (i, option) in options.iter().enumerate() {
            let flag = vars.get(&format!("flag{}", i + 1)).unwrap();
            assert_eq!(flag == "true", option.is_correct());
        }
    }
}

#[test]
fn test_context_missing_tags_serialize_as_empty_array() {
    let records = parse("###\nid: 1\ntype: MCQ\n");
    let record = &records[0];
    let vars = QuestionContext::from_record(record, &route("MCQ")).to_template_vars();
    assert_eq!(vars.get("tags"), Some(&"[]".to_string()));
}

#[test]
fn test_context_splits_tags_verbatim() {
    let records = parse("###\ntags: a,  b, c,d\n");
    let vars = QuestionContext::from_record(&records[0], &route("MCQ")).to_template_vars();
    assert_eq!(vars.get("tags"), Some(&r#"["a"," b","c,d"]"#.to_string()));
}

#[test]
fn test_context_escapes_tags_as_json() {
    let records = parse("###\ntags: say \"hi\", ok\n");
    let record = &records[0];
    let vars = QuestionContext::from_record(record, &route("MCQ")).to_template_vars();
    assert_eq!(vars.get("tags"), Some(&r#"["say \"hi\"","ok"]"#.to_string()));
}
