//! Record store: reading interaction logs and deriving filtered record sets.
//!
//! An interaction log is line oriented, one `sender receiver time` triple per
//! line separated by any run of whitespace. Filters are pure: they copy the
//! matching records in source order and never deduplicate.

use crate::error::{MailflowError, Result};
use crate::types::{ActorId, Interaction, Timestamp};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Parse one log line.
///
/// Returns `Ok(None)` for blank lines. `line_no` is 1-based and only used in
/// error messages.
pub fn parse_line(line_no: usize, text: &str) -> Result<Option<Interaction>> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() != 3 {
        return Err(MailflowError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let parse = |token: &str| -> Result<u64> {
        token
            .parse::<u64>()
            .map_err(|_| MailflowError::InvalidInteger {
                line: line_no,
                token: token.to_string(),
            })
    };

    Ok(Some(Interaction::new(
        parse(fields[0])?,
        parse(fields[1])?,
        parse(fields[2])?,
    )))
}

/// Read every interaction from a reader, stopping at the first malformed line.
pub fn read_interactions<R: Read>(reader: R) -> Result<Vec<Interaction>> {
    let mut records = Vec::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if let Some(record) = parse_line(idx + 1, &line)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Load an interaction log from disk.
pub fn load_interactions(path: &Path) -> Result<Vec<Interaction>> {
    let file = File::open(path)?;
    let records = read_interactions(file)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded interaction log");
    Ok(records)
}

/// Keep records sent in `t0 <= time <= t1`. An inverted window keeps nothing.
pub fn filter_by_time(records: &[Interaction], t0: Timestamp, t1: Timestamp) -> Vec<Interaction> {
    records
        .iter()
        .filter(|r| t0 <= r.time && r.time <= t1)
        .copied()
        .collect()
}

/// Keep records whose sender or receiver is in `actors`.
pub fn filter_by_actors<I>(records: &[Interaction], actors: I) -> Vec<Interaction>
where
    I: IntoIterator<Item = ActorId>,
{
    let wanted: HashSet<ActorId> = actors.into_iter().collect();
    records
        .iter()
        .filter(|r| wanted.contains(&r.sender) || wanted.contains(&r.receiver))
        .copied()
        .collect()
}
