//! File classification by exact first-line signature.

/// The four catalog tables recognized in the input directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// Type documentation table; parsed but not retained.
    VarType,
    /// GNSS system name to gnssId map.
    GnssId,
    /// Message class directory.
    MsgClass,
    /// Message-ID directory.
    MsgId,
}

/// The `\r` inside the quoted `Size (Bytes)` cell is the PDF extractor's
/// intra-cell line break and is part of the signature.
const VAR_TYPE_HEADER: &str = "\"\",Short,Type,\"Size\r(Bytes)\",Comment,Min/Max,Resolution";
const GNSS_ID_HEADER: &str = "gnssId,GNSS";
const MSG_CLASS_HEADER: &str = "Name,Class,Description";
const MSG_ID_HEADER: &str = "Page,Mnemonic,Cls/ID,Length,Type,Description";

/// Classify a file by its first logical line (trailing CRLF stripped).
///
/// `None` means the file is a message-layout candidate; whether it can
/// actually be attributed to a message is decided by the layout parser.
pub fn classify(first_line: &str) -> Option<CatalogKind> {
    match first_line {
        VAR_TYPE_HEADER => Some(CatalogKind::VarType),
        GNSS_ID_HEADER => Some(CatalogKind::GnssId),
        MSG_CLASS_HEADER => Some(CatalogKind::MsgClass),
        MSG_ID_HEADER => Some(CatalogKind::MsgId),
        _ => None,
    }
}
