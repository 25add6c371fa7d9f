//! Parsers for the four catalog tables.
//!
//! Catalog rows are best-effort: a row missing a required cell or carrying
//! an unparsable id is skipped, never an error. The MsgID directory uses
//! last-write-wins on key collisions, matching the ICD's own habit of
//! listing a mnemonic once per document section.

use ubx2c_core::{sanitize, Catalogs, ClassEntry, MessageKey, MsgEntry, MsgType};

use crate::{
    classify::CatalogKind,
    table::RawTable,
};

/// Parse a classified catalog file into the matching map.
pub fn parse_catalog(kind: CatalogKind, lines: &[String], catalogs: &mut Catalogs) {
    let table = RawTable::from_lines(lines);
    match kind {
        // Reserved for future type documentation; validated and dropped.
        CatalogKind::VarType => {}
        CatalogKind::GnssId => parse_gnss_id(&table, catalogs),
        CatalogKind::MsgClass => parse_msg_class(&table, catalogs),
        CatalogKind::MsgId => parse_msg_id(&table, catalogs),
    }
}

/// Rows are `gnssId,GNSS`; the map is keyed by system name.
fn parse_gnss_id(table: &RawTable, catalogs: &mut Catalogs) {
    for row in &table.rows {
        let (Some(id), Some(name)) = (row.first(), row.get(1)) else {
            continue;
        };
        let Ok(id) = id.trim().parse::<u8>() else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        catalogs.gnss.insert(name.to_string(), id);
    }
}

/// Rows are `Name,Class,Description`; the class cell is a hex byte.
fn parse_msg_class(table: &RawTable, catalogs: &mut Catalogs) {
    for row in &table.rows {
        let (Some(name), Some(class)) = (row.first(), row.get(1)) else {
            continue;
        };
        let Some(class_id) = parse_hex_byte(class) else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        catalogs.classes.insert(
            name.to_string(),
            ClassEntry {
                class_id,
                description: row.get(2).map(|c| c.trim().to_string()).unwrap_or_default(),
            },
        );
    }
}

/// Rows are `Page,Mnemonic,Cls/ID,Length,Type,Description`.
///
/// A row with any empty required cell or an unparsable `Cls/ID` pair is
/// dropped. Keys are the sanitized `(mnemonic, type)` pair.
fn parse_msg_id(table: &RawTable, catalogs: &mut Catalogs) {
    for row in &table.rows {
        let (Some(page), Some(mnemonic), Some(cls_id), Some(length), Some(msg_type)) = (
            row.first(),
            row.get(1),
            row.get(2),
            row.get(3),
            row.get(4),
        ) else {
            continue;
        };
        if [page, mnemonic, cls_id, length, msg_type]
            .iter()
            .any(|c| c.trim().is_empty())
        {
            continue;
        }
        let Some((class_id, msg_id)) = parse_cls_id(cls_id) else {
            continue;
        };
        let name = sanitize(mnemonic);
        let msg_type = MsgType::from(sanitize(msg_type).as_str());
        catalogs.messages.insert(
            MessageKey::new(name, msg_type),
            MsgEntry {
                page: page.trim().to_string(),
                class_id,
                msg_id,
                length: length.trim().to_string(),
                description: row.get(5).map(|c| c.trim().to_string()).unwrap_or_default(),
            },
        );
    }
}

/// `Cls/ID` cells hold two hex bytes, `01 02` or `0x01 0x02`.
fn parse_cls_id(cell: &str) -> Option<(u8, u8)> {
    let mut parts = cell.split_whitespace();
    let class_id = parse_hex_byte(parts.next()?)?;
    let msg_id = parse_hex_byte(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((class_id, msg_id))
}

fn parse_hex_byte(cell: &str) -> Option<u8> {
    let cell = cell.trim();
    let cell = cell.strip_prefix("0x").unwrap_or(cell);
    u8::from_str_radix(cell, 16).ok()
}
