use ubx2c_icd::{logical_lines, split_cells, RawTable};

#[test]
fn logical_lines_strip_crlf_but_keep_interior_cr() {
    let text = "a,b\r\nc,\"d\re\"\r\nf\n";
    let lines = logical_lines(text);
    assert_eq!(lines, ["a,b", "c,\"d\re\"", "f"]);
}

#[test]
fn logical_lines_drop_trailing_blank_records() {
    assert_eq!(logical_lines("a\n\n\n"), ["a"]);
    assert!(logical_lines("").is_empty());
}

#[test]
fn split_cells_handles_plain_rows() {
    assert_eq!(split_cells("a,b,c"), ["a", "b", "c"]);
    assert_eq!(split_cells("a,,c"), ["a", "", "c"]);
    assert_eq!(split_cells(""), [""]);
}

#[test]
fn split_cells_honors_quoted_commas_and_cr() {
    assert_eq!(split_cells("\"a,b\",c"), ["a,b", "c"]);
    assert_eq!(split_cells("\"Size\r(Bytes)\",x"), ["Size\r(Bytes)", "x"]);
}

#[test]
fn split_cells_unescapes_doubled_quotes() {
    assert_eq!(split_cells("\"say \"\"hi\"\"\",b"), ["say \"hi\"", "b"]);
    assert_eq!(split_cells("\"\",b"), ["", "b"]);
}

#[test]
fn raw_table_splits_header_and_rows() {
    let lines: Vec<String> = ["Name,Class,Description", "NAV,0x01,Navigation"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let table = RawTable::from_lines(&lines);
    assert_eq!(table.header, ["Name", "Class", "Description"]);
    assert_eq!(table.rows, [["NAV", "0x01", "Navigation"]]);
    assert_eq!(table.column("Class"), Some(1));
    assert_eq!(table.column("Missing"), None);
}

#[test]
fn drop_empty_columns_removes_all_empty_columns_only() {
    let lines: Vec<String> = ["a,b,c,d", "1,,x,", "2,,y,"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let mut table = RawTable::from_lines(&lines);
    table.drop_empty_columns();
    assert_eq!(table.header, ["a", "c"]);
    assert_eq!(table.rows, [["1", "x"], ["2", "y"]]);
}

#[test]
fn drop_empty_columns_without_rows_is_a_no_op() {
    let lines: Vec<String> = vec!["a,b".to_string()];
    let mut table = RawTable::from_lines(&lines);
    table.drop_empty_columns();
    assert_eq!(table.header, ["a", "b"]);
}
