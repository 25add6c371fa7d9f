//! C text rendering for message records.
//!
//! One header and (for payload-carrying variants) one source file per
//! message. Structs are `__packed__` so a received payload can be parsed by
//! a bounds-checked cast, which is all the source functions do.

use std::fmt::Write;

use ubx2c_core::{sanitize, FieldDescriptor, Message, MessageKey};

use crate::builder::MessageRecord;

/// `ubx_navposllh_output` for `NAVPOSLLH/Output`.
pub fn full_name(key: &MessageKey) -> String {
    format!(
        "ubx_{}_{}",
        key.name.to_lowercase(),
        key.msg_type.as_str().to_lowercase()
    )
}

/// `ubx_navposllh`; class/id defines are shared across a name's variants.
pub fn name_without_type(key: &MessageKey) -> String {
    format!("ubx_{}", key.name.to_lowercase())
}

pub fn header_file_name(key: &MessageKey) -> String {
    format!("{}.h", full_name(key))
}

pub fn source_file_name(key: &MessageKey) -> String {
    format!("{}.c", full_name(key))
}

/// The packed struct type for a message, `suffix` one of ``, `_rep`, `_opt`.
fn c_type(key: &MessageKey, suffix: &str) -> String {
    format!(
        "struct __attribute__((__packed__)) {}{}_s",
        full_name(key),
        suffix
    )
}

fn write_struct(out: &mut String, key: &MessageKey, suffix: &str, fields: &[FieldDescriptor]) {
    writeln!(out, "{} {{", c_type(key, suffix)).unwrap();
    for field in fields {
        if field.array_len == 1 {
            writeln!(out, "    {} {};", field.primitive.c_name(), field.name).unwrap();
        } else {
            writeln!(
                out,
                "    {} {}[{}];",
                field.primitive.c_name(),
                field.name,
                field.array_len
            )
            .unwrap();
        }
    }
    writeln!(out, "}};").unwrap();
}

/// Render the message header: banner, guarded class/id defines, packed
/// structs, and parse declarations for payload-carrying variants.
pub fn render_header(message: &Message, record: &MessageRecord) -> String {
    let key = &message.key;
    let full = full_name(key);
    let guard_base = name_without_type(key).to_uppercase();
    let has_body = key.msg_type.has_payload_body();

    let mut out = String::new();
    writeln!(out, "/*").unwrap();
    writeln!(out, " * Msg: {}", key.name).unwrap();
    writeln!(out, " * MsgType: {}", key.msg_type).unwrap();
    writeln!(out, " * MsgClassId: 0x{:02X}", message.entry.class_id).unwrap();
    writeln!(out, " * MsgId: 0x{:02X}", message.entry.msg_id).unwrap();
    writeln!(out, " * Length: {}", message.entry.length).unwrap();
    if !message.entry.description.is_empty() {
        writeln!(out, " * Description: {}", message.entry.description).unwrap();
    }
    writeln!(out, " */").unwrap();
    writeln!(out, "#pragma once").unwrap();
    writeln!(out, "#include <stdbool.h>").unwrap();
    writeln!(out, "#include <stdint.h>").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "#ifndef {guard_base}_CLASS_ID").unwrap();
    writeln!(
        out,
        "#define {guard_base}_CLASS_ID 0x{:02X}",
        message.entry.class_id
    )
    .unwrap();
    writeln!(out, "#endif").unwrap();
    writeln!(out, "#ifndef {guard_base}_MSG_ID").unwrap();
    writeln!(
        out,
        "#define {guard_base}_MSG_ID 0x{:02X}",
        message.entry.msg_id
    )
    .unwrap();
    writeln!(out, "#endif").unwrap();

    if !record.fields.is_empty() {
        writeln!(out).unwrap();
        write_struct(&mut out, key, "", &record.fields);
        if has_body {
            writeln!(
                out,
                "{}* ubx_parse_{full}(const uint8_t* buffer, uint8_t buflen);",
                c_type(key, "")
            )
            .unwrap();
        }
    }

    if !record.repeated_fields.is_empty() {
        writeln!(out).unwrap();
        write_struct(&mut out, key, "_rep", &record.repeated_fields);
        if has_body {
            writeln!(
                out,
                "{}* ubx_parse_{full}_rep(const uint8_t* buffer, uint8_t buflen, uint8_t *num_repeat_blocks);",
                c_type(key, "_rep")
            )
            .unwrap();
        }
    }

    if !record.optional_fields.is_empty() {
        writeln!(out).unwrap();
        write_struct(&mut out, key, "_opt", &record.optional_fields);
        if has_body {
            writeln!(
                out,
                "{}* ubx_parse_{full}_opt(const uint8_t* buffer, uint8_t buflen);",
                c_type(key, "_opt")
            )
            .unwrap();
        }
    }

    out
}

/// Render the parse functions. Returns an empty string when the record has
/// no fields at all, so the caller can skip the file.
pub fn render_source(message: &Message, record: &MessageRecord) -> String {
    let key = &message.key;
    if record.fields.is_empty()
        && record.repeated_fields.is_empty()
        && record.optional_fields.is_empty()
    {
        return String::new();
    }

    let full = full_name(key);
    let main_ty = c_type(key, "");
    let rep_ty = c_type(key, "_rep");
    let opt_ty = c_type(key, "_opt");

    let mut out = String::new();
    writeln!(out, "#include <{}>", header_file_name(key)).unwrap();
    writeln!(out, "#include <stddef.h>").unwrap();

    if !record.fields.is_empty() {
        writeln!(out).unwrap();
        writeln!(
            out,
            "{main_ty}* ubx_parse_{full}(const uint8_t* buffer, uint8_t buflen)"
        )
        .unwrap();
        writeln!(out, "{{").unwrap();
        writeln!(out, "    if (buflen < sizeof({main_ty})) {{").unwrap();
        writeln!(out, "        return NULL;").unwrap();
        writeln!(out, "    }}").unwrap();
        writeln!(out, "    return ({main_ty}*)buffer;").unwrap();
        writeln!(out, "}}").unwrap();
    }

    if !record.repeated_fields.is_empty() {
        writeln!(out).unwrap();
        writeln!(
            out,
            "{rep_ty}* ubx_parse_{full}_rep(const uint8_t* buffer, uint8_t buflen, uint8_t *num_repeat_blocks)"
        )
        .unwrap();
        writeln!(out, "{{").unwrap();
        writeln!(out, "    uint8_t main_size = 0;").unwrap();
        if !record.fields.is_empty() {
            writeln!(
                out,
                "    {main_ty}* main_struct = ubx_parse_{full}(buffer, buflen);"
            )
            .unwrap();
            writeln!(out, "    if (main_struct == NULL) {{").unwrap();
            writeln!(out, "        return NULL;").unwrap();
            writeln!(out, "    }}").unwrap();
            writeln!(out, "    main_size = sizeof({main_ty});").unwrap();
        }
        match repeat_count_field(message, record) {
            Some(var) => {
                writeln!(out, "    *num_repeat_blocks = main_struct->{var};").unwrap();
                writeln!(
                    out,
                    "    if (buflen < main_size + sizeof({rep_ty})*(*num_repeat_blocks)) {{"
                )
                .unwrap();
                writeln!(out, "        return NULL;").unwrap();
                writeln!(out, "    }}").unwrap();
            }
            None => {
                writeln!(
                    out,
                    "    *num_repeat_blocks = (buflen - main_size) / sizeof({rep_ty});"
                )
                .unwrap();
                writeln!(out, "    if (*num_repeat_blocks == 0) {{").unwrap();
                writeln!(out, "        return NULL;").unwrap();
                writeln!(out, "    }}").unwrap();
            }
        }
        writeln!(out).unwrap();
        writeln!(out, "    return ({rep_ty}*)(buffer + main_size);").unwrap();
        writeln!(out, "}}").unwrap();
    }

    if !record.optional_fields.is_empty() {
        writeln!(out).unwrap();
        writeln!(
            out,
            "{opt_ty}* ubx_parse_{full}_opt(const uint8_t* buffer, uint8_t buflen)"
        )
        .unwrap();
        writeln!(out, "{{").unwrap();
        writeln!(
            out,
            "    {main_ty}* main_struct = ubx_parse_{full}(buffer, buflen);"
        )
        .unwrap();
        writeln!(out, "    if (main_struct == NULL) {{").unwrap();
        writeln!(out, "        return NULL;").unwrap();
        writeln!(out, "    }}").unwrap();
        if !record.repeated_fields.is_empty() {
            writeln!(out, "    uint8_t num_repeat_blocks = 0;").unwrap();
            writeln!(
                out,
                "    ubx_parse_{full}_rep(buffer, buflen, &num_repeat_blocks);"
            )
            .unwrap();
            writeln!(
                out,
                "    if (buflen < sizeof({main_ty}) + sizeof({rep_ty})*(num_repeat_blocks) + sizeof({opt_ty})) {{"
            )
            .unwrap();
            writeln!(out, "        return NULL;").unwrap();
            writeln!(out, "    }}").unwrap();
            writeln!(
                out,
                "    return ({opt_ty}*)(buffer + sizeof({main_ty}) + sizeof({rep_ty})*(num_repeat_blocks));"
            )
            .unwrap();
        } else {
            writeln!(
                out,
                "    if (buflen < sizeof({main_ty}) + sizeof({opt_ty})) {{"
            )
            .unwrap();
            writeln!(out, "        return NULL;").unwrap();
            writeln!(out, "    }}").unwrap();
            writeln!(out, "    return ({opt_ty}*)(buffer + sizeof({main_ty}));").unwrap();
        }
        writeln!(out, "}}").unwrap();
    }

    out
}

/// The repeat count is read from the main struct only when the captured
/// variable actually names a resolved main field; otherwise the count is
/// derived from the remaining buffer length.
fn repeat_count_field(message: &Message, record: &MessageRecord) -> Option<String> {
    if record.fields.is_empty() {
        return None;
    }
    let var = sanitize(&message.repeat_count_var);
    record
        .fields
        .iter()
        .find(|f| f.name == var)
        .map(|f| f.name.clone())
}
