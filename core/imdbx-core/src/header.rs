//! Header Validator: the first line must match the schema's column list exactly.

use tracing::debug;

use crate::error::{ImdbxError, ImdbxResult};
use crate::record::FIELD_DELIMITER;
use crate::source::LineSource;

/// Consumes the first line of `source` and compares it with `expected`.
///
/// Same values, same order, same count. Fails with `Format` naming the file when the
/// content is empty or the header differs.
pub fn validate_header(source: &mut LineSource, expected: &[&str]) -> ImdbxResult<()> {
    let path = source.path().to_path_buf();
    let line = source
        .next_line()?
        .ok_or_else(|| ImdbxError::format(&path, "header not found"))?;

    if !line.text.split(FIELD_DELIMITER).eq(expected.iter().copied()) {
        let found: Vec<&str> = line.text.split(FIELD_DELIMITER).collect();
        return Err(ImdbxError::format(
            &path,
            format!(
                "format not recognized: expected header [{}], found [{}]",
                expected.join(", "),
                found.join(", ")
            ),
        ));
    }

    debug!(path = %path.display(), columns = expected.len(), "header validated");
    Ok(())
}
