//! Message-layout file parsing.

use ubx2c_core::{
    resolve_type_token, sanitize, Catalogs, FieldRow, IcdError, MessageRegistry, MsgType,
};

use crate::{
    block::{extract_block, BlockKind},
    table::{split_cells, RawTable},
};

/// Parse one message-layout file into the registry.
///
/// The file is attributed to a directory entry by the longest known name
/// contained in its heading plus the sanitized value of its `Type` row.
/// Files resolving to the key already accumulating continue that message;
/// anything else finalizes the previous message first (see
/// [`MessageRegistry::get_or_create`]). A file without a byte-offset table
/// contributes no fields.
pub fn parse_message_table(
    lines: &[String],
    catalogs: &Catalogs,
    registry: &mut MessageRegistry,
) -> Result<(), IcdError> {
    let heading = lines.first().map(String::as_str).unwrap_or("");
    let name = catalogs.messages.find_owning_name(heading)?.to_string();

    let type_value = find_type_value(lines).ok_or_else(|| IcdError::BadTypeName {
        name: name.clone(),
        detail: "no 'Type' row found".to_string(),
    })?;
    let msg_type = MsgType::from(type_value.as_str());
    let (key, entry) =
        catalogs
            .resolve(&name, msg_type.clone())
            .ok_or_else(|| IcdError::BadTypeName {
                name: name.clone(),
                detail: format!("no directory entry for type '{msg_type}'"),
            })?;

    let message = registry.get_or_create(key, entry);

    // Everything from the byte-offset header row to end-of-file is the
    // structured field table; without one this file is metadata-only.
    let Some(marker) = lines.iter().position(|l| is_byte_offset_header(l)) else {
        return Ok(());
    };
    let mut table = RawTable::from_lines(&lines[marker..]);
    table.drop_empty_columns();

    let mut rows = std::mem::take(&mut table.rows);
    let repeated = extract_block(&mut rows, BlockKind::Repeated);
    let optional = extract_block(&mut rows, BlockKind::Optional);

    if let Some(var) = repeated.repeat_var {
        message.set_repeat_count_var(var);
    }
    message
        .repeated_block
        .extend(rows_to_fields(&table.header, repeated.block_rows));
    message
        .optional_block
        .extend(rows_to_fields(&table.header, optional.block_rows));
    message
        .base_fields
        .extend(rows_to_fields(&table.header, rows));
    Ok(())
}

/// The sanitized value following the first cell that is exactly `Type`.
fn find_type_value(lines: &[String]) -> Option<String> {
    for line in lines {
        let cells = split_cells(line);
        let Some(idx) = cells.iter().position(|c| c.trim() == "Type") else {
            continue;
        };
        let value = cells.get(idx + 1).map(|c| sanitize(c)).unwrap_or_default();
        if value.is_empty() {
            return None;
        }
        return Some(value);
    }
    None
}

/// The fixed phrase opening the structured sub-table. The second cell
/// varies between `Number of Bytes` and the split `Number / Format` page
/// layouts, so only its `Number` prefix is significant.
fn is_byte_offset_header(line: &str) -> bool {
    let cells = split_cells(line);
    cells.first().is_some_and(|c| c.trim() == "Byte Offset")
        && cells.get(1).is_some_and(|c| c.trim().starts_with("Number"))
}

/// Convert raw table rows into field rows using this file's header.
///
/// The type token is the first cell left of the `Name` column containing a
/// recognized code; scanning stops at `Name` so a code can never be picked
/// out of description text.
fn rows_to_fields(header: &[String], rows: Vec<Vec<String>>) -> Vec<FieldRow> {
    let name_col = header.iter().position(|h| h.trim() == "Name");
    let desc_col = header.iter().position(|h| h.trim() == "Description");
    rows.into_iter()
        .map(|row| {
            let name = cell_at(&row, name_col);
            let comment = cell_at(&row, desc_col);
            let limit = name_col.unwrap_or(row.len());
            let type_token = row
                .iter()
                .take(limit)
                .find(|cell| resolve_type_token(cell).is_some())
                .map(|cell| cell.trim().to_string())
                .unwrap_or_default();
            FieldRow::new(name, type_token, comment)
        })
        .collect()
}

fn cell_at(row: &[String], col: Option<usize>) -> String {
    col.and_then(|i| row.get(i))
        .map(|c| c.trim().to_string())
        .unwrap_or_default()
}
