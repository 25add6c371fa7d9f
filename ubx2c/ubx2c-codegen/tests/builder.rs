use ubx2c_codegen::build_record;
use ubx2c_core::{
    FieldRow, IcdError, Message, MessageKey, MsgEntry, MsgType, Primitive,
};

fn message(name: &str, msg_type: MsgType) -> Message {
    Message::new(MessageKey::new(name, msg_type), MsgEntry::default())
}

#[test]
fn resolves_rows_into_descriptors() {
    let mut msg = message("NAVPOSLLH", MsgType::Output);
    msg.base_fields.push(FieldRow::new("iTOW", "U4", "ms"));
    msg.base_fields.push(FieldRow::new("lon", "I4", "deg"));
    let record = build_record(&msg).unwrap();
    assert_eq!(record.fields.len(), 2);
    assert_eq!(record.fields[0].primitive, Primitive::U32);
    assert_eq!(record.fields[0].name, "iTOW");
    assert_eq!(record.fields[0].array_len, 1);
    assert_eq!(record.fields[1].primitive, Primitive::I32);
    assert!(record.repeated_fields.is_empty());
    assert!(record.optional_fields.is_empty());
}

#[test]
fn unresolvable_rows_are_dropped_without_placeholders() {
    let mut msg = message("NAVPOSLLH", MsgType::Output);
    msg.base_fields.push(FieldRow::new("iTOW", "U4", ""));
    msg.base_fields.push(FieldRow::new("spacer", "", ""));
    msg.base_fields.push(FieldRow::new("note", "see text", ""));
    let record = build_record(&msg).unwrap();
    let names: Vec<&str> = record.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["iTOW"]);
}

#[test]
fn rows_without_a_name_are_dropped() {
    let mut msg = message("NAVPOSLLH", MsgType::Output);
    msg.base_fields.push(FieldRow::new("", "U4", ""));
    msg.base_fields.push(FieldRow::new("---", "U4", ""));
    let record = build_record(&msg).unwrap();
    assert!(record.fields.is_empty());
}

#[test]
fn field_names_are_sanitized_before_resolution() {
    let mut msg = message("NAVPOSLLH", MsgType::Output);
    msg.base_fields.push(FieldRow::new("i_TOW (ms)", "U4", ""));
    let record = build_record(&msg).unwrap();
    assert_eq!(record.fields[0].name, "iTOWms");
}

#[test]
fn array_tokens_carry_their_length() {
    let mut msg = message("MONVER", MsgType::Output);
    msg.base_fields.push(FieldRow::new("swVersion", "CH[30]", ""));
    let record = build_record(&msg).unwrap();
    assert_eq!(record.fields[0].primitive, Primitive::I8);
    assert_eq!(record.fields[0].array_len, 30);
}

#[test]
fn repeated_block_without_count_variable_fails() {
    let mut msg = message("NAVSVINFO", MsgType::Output);
    msg.repeated_block.push(FieldRow::new("svid", "U1", ""));
    let err = build_record(&msg).unwrap_err();
    assert!(matches!(err, IcdError::BadRepeatBlock { .. }));
}

#[test]
fn count_variable_without_repeated_block_fails() {
    let mut msg = message("NAVSVINFO", MsgType::Output);
    msg.set_repeat_count_var("numCh");
    let err = build_record(&msg).unwrap_err();
    assert!(matches!(err, IcdError::BadRepeatBlock { .. }));
}

#[test]
fn matching_repeat_block_and_variable_build_cleanly() {
    let mut msg = message("NAVSVINFO", MsgType::Output);
    msg.base_fields.push(FieldRow::new("numCh", "U1", ""));
    msg.set_repeat_count_var("numCh");
    msg.repeated_block.push(FieldRow::new("svid", "U1", ""));
    let record = build_record(&msg).unwrap();
    assert_eq!(record.repeated_fields.len(), 1);

    // Both absent is equally fine.
    let empty = message("NAVPOSLLH", MsgType::Output);
    assert!(build_record(&empty).is_ok());
}
