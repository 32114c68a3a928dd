//! Feeds a JSON-lines action stream into a session.
use std::io::BufRead;

use anyhow::{Context, Result};
use planner_core::PlannerError;
use planner_session::BuildSession;

/// Outcome counts of one replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub applied: usize,
    pub rejected: usize,
}

/// Dispatches every non-blank line of `reader` as one action.
///
/// Validation rejections are logged and skipped. Any other error stops the
/// replay and is returned with its line number.
pub fn replay(session: &mut BuildSession, reader: impl BufRead) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read action line {}", line_no))?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match session.dispatch_json(text) {
            Ok(_) => stats.applied += 1,
            Err(err) if err.severity().is_recoverable() => {
                tracing::warn!(line = line_no, code = err.error_code(), "skipping action: {}", err);
                stats.rejected += 1;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Action on line {} failed", line_no));
            }
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_content::{ContentFactory, bundled_data_dir};
    use std::sync::Arc;

    fn session() -> BuildSession {
        let content = ContentFactory::new(bundled_data_dir()).load_all(None).unwrap();
        BuildSession::new(
            Arc::new(content.catalog),
            Arc::new(content.locale),
            &content.config,
        )
        .unwrap()
    }

    #[test]
    fn validation_rejections_are_skipped() {
        let mut session = session();
        let input = r#"{"type": "career", "payload": "es_huntsman"}

{"type": "career", "payload": "dr_slayer"}
{"type": "equip", "payload": {"slot_index": 1, "item": "es_longbow"}}
"#;
        let stats = replay(&mut session, input.as_bytes()).unwrap();

        assert_eq!(stats, ReplayStats { applied: 2, rejected: 1 });
        assert_eq!(session.build().career, "es_huntsman");
        assert_eq!(session.build().equipped(1).unwrap(), "es_longbow");
    }

    #[test]
    fn unknown_action_aborts_with_line_number() {
        let mut session = session();
        let input = "{\"type\": \"talent\", \"payload\": {\"row_index\": 0, \"talent_index\": 0}}\n\
                     {\"type\": \"rename\", \"payload\": \"Tank\"}\n";
        let err = replay(&mut session, input.as_bytes()).unwrap_err();

        assert!(err.to_string().contains("line 2"));
        assert_eq!(session.build().talent(0), Some(0));
    }

    #[test]
    fn invalid_json_aborts() {
        let mut session = session();
        assert!(replay(&mut session, "{not json".as_bytes()).is_err());
        assert_eq!(session.revision(), 0);
    }
}
