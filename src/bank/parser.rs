//! Line-oriented scanner for question bank files.

use super::{CORRECT_MARKER, ChoiceOption, IdGenerator, QuestionRecord};
use crate::error::{QbError, Result};
use std::path::Path;

/// Prefix of the line that opens a record block.
const BLOCK_MARKER: &str = "###";

/// Separates a key from its value within a block.
const KEY_VALUE_SEPARATOR: &str = ": ";

/// Key prefix that marks a choice option.
const OPTION_PREFIX: &str = "option";

/// Load and parse a question bank file.
pub fn load_bank<P: AsRef<Path>>(
    path: P,
    ids: &mut impl IdGenerator,
) -> Result<Vec<QuestionRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        QbError::InputError(format!(
            "failed to read question bank '{}': {}",
            path.display(),
            e
        ))
    })?;

    let records = parse_bank(&content, ids);
    log::info!("parsed {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Parse question bank text into records.
///
/// Every line starting with `###` opens a new block; text before the first
/// marker is ignored and the last block runs to the end of the text. Parsing
/// never fails: malformed lines are skipped and missing fields are left for
/// validation.
pub fn parse_bank(text: &str, ids: &mut impl IdGenerator) -> Vec<QuestionRecord> {
    let mut records = Vec::new();
    let mut state = ScanState::Outside;

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;

        if line.trim_start().starts_with(BLOCK_MARKER) {
            if let ScanState::InBlock(block) = std::mem::replace(&mut state, ScanState::Outside) {
                records.push(block.finish(ids));
            }
            state = ScanState::InBlock(BlockBuilder::new(line_num));
            continue;
        }

        match &mut state {
            ScanState::Outside => {
                if !line.trim().is_empty() {
                    log::debug!("line {}: ignoring text before first block", line_num);
                }
            }
            ScanState::InBlock(block) => block.push_line(line, line_num),
        }
    }

    if let ScanState::InBlock(block) = state {
        records.push(block.finish(ids));
    }

    records
}

enum ScanState {
    Outside,
    InBlock(BlockBuilder),
}

struct BlockBuilder {
    start_line: usize,
    fields: Vec<(String, String)>,
    options: Vec<ChoiceOption>,
}

impl BlockBuilder {
    fn new(start_line: usize) -> Self {
        Self {
            start_line,
            fields: Vec::new(),
            options: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str, line_num: usize) {
        if line.trim().is_empty() {
            return;
        }

        // Split before trimming so `key: ` keeps its separator and an empty value.
        let Some((key, value)) = line.split_once(KEY_VALUE_SEPARATOR) else {
            log::debug!(
                "line {}: no '{}' separator, skipping",
                line_num,
                KEY_VALUE_SEPARATOR
            );
            return;
        };
        let (key, value) = (key.trim(), value.trim());

        if key.starts_with(OPTION_PREFIX) || key.starts_with(CORRECT_MARKER) {
            match self.options.iter_mut().find(|o| o.label == key) {
                Some(option) => option.text = value.to_string(),
                None => self.options.push(ChoiceOption {
                    label: key.to_string(),
                    text: value.to_string(),
                }),
            }
        } else {
            // A repeated key keeps its original position.
            match self.fields.iter_mut().find(|(k, _)| k == key) {
                Some((_, v)) => *v = value.to_string(),
                None => self.fields.push((key.to_string(), value.to_string())),
            }
        }
    }

    fn finish(self, ids: &mut impl IdGenerator) -> QuestionRecord {
        QuestionRecord {
            line: self.start_line,
            instance_id: ids.next_id(),
            fields: self.fields,
            options: self.options,
        }
    }
}
