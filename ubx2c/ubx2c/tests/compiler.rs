use std::fs;
use std::path::Path;

use ubx2c::{core::MsgType, CompileError, IcdCompiler};

const MSG_ID_CATALOG: &str = "\
Page,Mnemonic,Cls/ID,Length,Type,Description\r
1,NAV-POSLLH,01 02,28,Output,Geodetic Position Solution\r
2,NAV-SVINFO,01 30,8 + 12*numCh,Output,Space Vehicle Information\r
3,CFG-PRT,06 00,0,PollRequest,Poll Port Configuration\r
4,CFG-PRT,06 00,20,Set,Port Configuration\r
";

const GNSS_CATALOG: &str = "gnssId,GNSS\r\n0,GPS\r\n6,GLONASS\r\n";

const CLASS_CATALOG: &str = "Name,Class,Description\r\nNAV,0x01,Navigation Results\r\n";

fn write_inputs(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn posllh_page() -> String {
    "32.17.14.1 NAV-POSLLH,Message,\r\n\
     Type,Output,\r\n\
     Byte Offset,\"Number\rFormat\",Scaling,Name,Unit,Description\r\n\
     0,U4,-,iTOW,ms,GPS time of week\r\n\
     4,I4,1e-7,lon,deg,Longitude\r\n"
        .to_string()
}

#[test]
fn end_to_end_nav_posllh_scenario() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_inputs(
        input.path(),
        &[
            ("000_msg_ids.csv", MSG_ID_CATALOG),
            ("010_nav_posllh.csv", &posllh_page()),
        ],
    );

    let compiler = IcdCompiler::from_dir(input.path()).unwrap();
    let message = compiler
        .messages()
        .find(|m| m.key.name == "NAVPOSLLH")
        .unwrap();
    assert_eq!(message.key.msg_type, MsgType::Output);
    assert_eq!(message.base_fields.len(), 2);
    assert!(message.repeated_block.is_empty());
    assert!(message.optional_block.is_empty());

    let mut built = Vec::new();
    let summary = compiler
        .generate(output.path(), None, |m| built.push(m.key.to_string()))
        .unwrap();
    assert_eq!(summary.messages_built, 1);
    assert_eq!(summary.headers_written, 1);
    assert_eq!(summary.sources_written, 1);
    assert_eq!(built, ["NAVPOSLLH/Output"]);

    let header =
        fs::read_to_string(output.path().join("include/ubx_navposllh_output.h")).unwrap();
    assert!(header.contains("uint32_t iTOW;"));
    assert!(header.contains("int32_t lon;"));

    let manifest = fs::read_to_string(output.path().join("include/ubx_msgs.h")).unwrap();
    assert_eq!(manifest, "#include <ubx_navposllh_output.h>\n");
}

#[test]
fn continuation_pages_accumulate_in_natural_order() {
    let input = tempfile::tempdir().unwrap();
    // Page 10 must sort after page 9, not between 1 and 2.
    let page1 = "32.17.20.1 NAV-SVINFO,Message,\r\n\
                 Type,Output,\r\n\
                 Byte Offset,\"Number\rFormat\",Scaling,Name,Unit,Description\r\n\
                 0,U4,-,iTOW,ms,GPS time of week\r\n\
                 4,U1,-,numCh,-,Number of channels\r\n\
                 ,Start of repeated block (numCh times),,,,\r\n\
                 5,U1,-,svid,-,Satellite ID\r\n\
                 ,End of repeated block,,,,\r\n";
    let page2 = "32.17.20.1 NAV-SVINFO continued,Message,\r\n\
                 Type,Output,\r\n\
                 Byte Offset,\"Number\rFormat\",Scaling,Name,Unit,Description\r\n\
                 8,U4,-,reserved,-,Reserved\r\n";
    write_inputs(
        input.path(),
        &[
            ("0_msg_ids.csv", MSG_ID_CATALOG),
            ("page_9_svinfo.csv", page1),
            ("page_10_svinfo.csv", page2),
        ],
    );

    let compiler = IcdCompiler::from_dir(input.path()).unwrap();
    let message = compiler
        .messages()
        .find(|m| m.key.name == "NAVSVINFO")
        .unwrap();
    assert_eq!(message.repeat_count_var, "numCh");
    assert_eq!(message.repeated_block.len(), 1);
    let base: Vec<&str> = message.base_fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(base, ["iTOW", "numCh", "reserved"]);
}

#[test]
fn generate_skips_zero_length_messages() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    // CFG-PRT/PollRequest has length "0" in the catalog.
    let poll_page = "32.10.2.1 CFG-PRT,Message,\r\nType,Poll Request,\r\n";
    write_inputs(
        input.path(),
        &[
            ("0_msg_ids.csv", MSG_ID_CATALOG),
            ("1_cfg_prt_poll.csv", poll_page),
        ],
    );

    let compiler = IcdCompiler::from_dir(input.path()).unwrap();
    let summary = compiler.generate(output.path(), None, |_| {}).unwrap();
    assert_eq!(summary.messages_built, 0);
}

#[test]
fn build_filter_limits_and_reports_missing_names() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_inputs(
        input.path(),
        &[
            ("0_msg_ids.csv", MSG_ID_CATALOG),
            ("1_nav_posllh.csv", &posllh_page()),
        ],
    );
    let compiler = IcdCompiler::from_dir(input.path()).unwrap();

    let filter = vec!["NAVPOSLLH".to_string()];
    let summary = compiler
        .generate(output.path(), Some(&filter), |_| {})
        .unwrap();
    assert_eq!(summary.messages_built, 1);

    let filter = vec!["NAVPOSLLH".to_string(), "NAVNOSUCH".to_string()];
    let err = compiler
        .generate(output.path(), Some(&filter), |_| {})
        .unwrap_err();
    match err {
        CompileError::BuildNamesNotFound { names } => assert_eq!(names, ["NAVNOSUCH"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn catalog_files_populate_the_lookup_maps() {
    let input = tempfile::tempdir().unwrap();
    write_inputs(
        input.path(),
        &[
            ("0_gnss.csv", GNSS_CATALOG),
            ("1_classes.csv", CLASS_CATALOG),
            ("2_msg_ids.csv", MSG_ID_CATALOG),
        ],
    );
    let compiler = IcdCompiler::from_dir(input.path()).unwrap();
    let catalogs = compiler.catalogs();
    assert_eq!(catalogs.gnss.get("GPS"), Some(&0));
    assert_eq!(catalogs.classes.get("NAV").unwrap().class_id, 0x01);
    assert_eq!(catalogs.messages.len(), 4);
}

#[test]
fn non_directory_input_is_rejected() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let err = IcdCompiler::from_dir(file.path()).unwrap_err();
    assert!(matches!(err, CompileError::NotADirectory { .. }));
}

#[test]
fn natural_cmp_orders_digit_runs_numerically() {
    let mut names = vec!["page_10.csv", "page_2.csv", "page_1.csv", "page_9.csv"];
    names.sort_by(|a, b| ubx2c::natural_cmp(a, b));
    assert_eq!(
        names,
        ["page_1.csv", "page_2.csv", "page_9.csv", "page_10.csv"]
    );
}
