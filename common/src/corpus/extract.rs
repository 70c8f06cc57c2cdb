use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{info, warn};

use super::CorpusEntry;
use crate::error::AppError;

const DEFAULT_FOCUS: &str = "General";

// Text-bearing elements we care about inside a MedQuAD document.
enum Field {
    Focus,
    Question,
    Answer,
}

/// Walks a MedQuAD directory tree and collects every complete Q&A pair.
/// Documents that fail to parse are logged and skipped; extraction itself
/// never fails.
pub fn extract_corpus(root: &Path) -> Vec<CorpusEntry> {
    let mut entries = Vec::new();
    let mut failures = 0usize;
    walk(root, &mut entries, &mut failures);

    info!(
        entries = entries.len(),
        failures,
        root = %root.display(),
        "MedQuAD extraction finished"
    );
    entries
}

fn walk(dir: &Path, entries: &mut Vec<CorpusEntry>, failures: &mut usize) {
    let children = match std::fs::read_dir(dir) {
        Ok(children) => children,
        Err(e) => {
            warn!(dir = %dir.display(), "Unreadable directory, skipping: {e}");
            *failures += 1;
            return;
        }
    };

    for child in children.flatten() {
        let path = child.path();
        if path.is_dir() {
            walk(&path, entries, failures);
        } else if path.extension().is_some_and(|ext| ext == "xml") {
            match parse_document(&path) {
                Ok(mut pairs) => entries.append(&mut pairs),
                Err(e) => {
                    warn!(file = %path.display(), "Failed to parse document: {e}");
                    *failures += 1;
                }
            }
        }
    }
}

/// Parses one MedQuAD document: a `Focus` element plus any number of
/// `QAPair` elements holding `Question`/`Answer` children. Pairs missing
/// either side are dropped; a missing focus falls back to "General".
pub fn parse_document(path: &Path) -> Result<Vec<CorpusEntry>, AppError> {
    let mut reader = Reader::from_file(path)?;
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut focus = String::new();
    let mut question = String::new();
    let mut answer = String::new();
    let mut in_pair = false;
    let mut current: Option<Field> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => match start.name().as_ref() {
                b"Focus" => current = Some(Field::Focus),
                b"QAPair" => {
                    in_pair = true;
                    question.clear();
                    answer.clear();
                }
                b"Question" if in_pair => current = Some(Field::Question),
                b"Answer" if in_pair => current = Some(Field::Answer),
                _ => {}
            },
            Event::Text(text) => {
                if let Some(field) = &current {
                    let value = text.unescape().map_err(quick_xml::Error::from)?;
                    let target = match field {
                        Field::Focus => &mut focus,
                        Field::Question => &mut question,
                        Field::Answer => &mut answer,
                    };
                    target.push_str(&value);
                }
            }
            Event::End(end) => match end.name().as_ref() {
                b"Focus" | b"Question" | b"Answer" => current = None,
                b"QAPair" => {
                    in_pair = false;
                    let question = question.trim();
                    let answer = answer.trim();
                    if !question.is_empty() && !answer.is_empty() {
                        let focus = focus.trim();
                        entries.push(CorpusEntry {
                            focus: if focus.is_empty() {
                                DEFAULT_FOCUS.to_string()
                            } else {
                                focus.to_string()
                            },
                            question: question.to_string(),
                            answer: answer.to_string(),
                        });
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}
