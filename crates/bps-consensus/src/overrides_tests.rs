use crate::chainparams::ChainParams;
use crate::deployments::DeploymentPos;
use crate::error::ErrorCode;
use crate::overrides::{apply_overrides, parse_segwit_height, parse_vbparams, ArgLookup, MapArgs};

fn regtest_with(args: &MapArgs) -> Result<ChainParams, crate::error::ParamsError> {
    ChainParams::regtest(args)
}

#[test]
fn map_args_lookup() {
    let args = MapArgs::new()
        .with("vbparams", "a")
        .with("vbparams", "b")
        .with("segwitheight", "5");
    assert!(args.is_arg_set("vbparams"));
    assert!(!args.is_arg_set("missing"));
    assert_eq!(args.get_arg("vbparams").as_deref(), Some("b"));
    assert_eq!(args.get_args("vbparams"), vec!["a".to_string(), "b".to_string()]);
    assert!(args.get_args("missing").is_empty());
}

#[test]
fn segwit_height_minus_one_disables() {
    assert_eq!(parse_segwit_height("-1").expect("parse"), i32::MAX);
    let p = regtest_with(&MapArgs::new().with("segwitheight", "-1")).expect("regtest");
    assert_eq!(p.consensus.segwit_height, i32::MAX);
}

#[test]
fn segwit_height_in_range() {
    let p = regtest_with(&MapArgs::new().with("segwitheight", "432")).expect("regtest");
    assert_eq!(p.consensus.segwit_height, 432);
    assert_eq!(parse_segwit_height("0").expect("parse"), 0);
    assert_eq!(parse_segwit_height("2147483646").expect("parse"), i32::MAX - 1);
}

#[test]
fn segwit_height_out_of_range() {
    for raw in [
        "2147483647",
        "9999999999",
        "99999999999999999999",
        "-99999999999999999999",
        "-2",
    ] {
        let err = parse_segwit_height(raw).unwrap_err();
        assert_eq!(err.code, ErrorCode::ParamsErrActivationHeightOutOfRange, "{raw}");
        assert!(err.msg.contains(raw), "{}", err.msg);
        assert!(!err.is_fatal());
    }
    let err = regtest_with(&MapArgs::new().with("segwitheight", "2147483647")).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrActivationHeightOutOfRange);
}

#[test]
fn segwit_height_not_an_integer() {
    let err = parse_segwit_height("soon").unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrInvalidActivationHeight);
    assert!(err.msg.contains("soon"));
}

#[test]
fn segwit_last_value_wins() {
    let args = MapArgs::new()
        .with("segwitheight", "10")
        .with("segwitheight", "20");
    let p = regtest_with(&args).expect("regtest");
    assert_eq!(p.consensus.segwit_height, 20);
}

#[test]
fn vbparams_sets_window() {
    let p = regtest_with(&MapArgs::new().with("vbparams", "testdummy:100:200")).expect("regtest");
    let d = p.consensus.deployment(DeploymentPos::TestDummy);
    assert_eq!((d.start_time, d.timeout), (100, 200));
    assert_eq!(d.bit, 28);
}

#[test]
fn vbparams_last_write_wins() {
    let args = MapArgs::new()
        .with("vbparams", "testdummy:100:200")
        .with("vbparams", "testdummy:300:400");
    let p = regtest_with(&args).expect("regtest");
    let d = p.consensus.deployment(DeploymentPos::TestDummy);
    assert_eq!((d.start_time, d.timeout), (300, 400));
}

#[test]
fn vbparams_unknown_deployment() {
    let err = parse_vbparams("bogus:100:200").unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrUnknownDeployment);
    assert!(err.msg.contains("bogus"));

    // names are case-sensitive
    let err = parse_vbparams("TestDummy:100:200").unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrUnknownDeployment);
}

#[test]
fn vbparams_malformed() {
    for entry in ["testdummy:100", "testdummy:1:2:3", "testdummy", ""] {
        let err = parse_vbparams(entry).unwrap_err();
        assert_eq!(err.code, ErrorCode::ParamsErrVbParamsMalformed, "{entry:?}");
    }
}

#[test]
fn vbparams_bad_numbers_name_the_field() {
    let err = parse_vbparams("testdummy:abc:200").unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrInvalidStartTime);
    assert!(err.msg.contains("abc"));

    let err = parse_vbparams("testdummy:100:xyz").unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrInvalidTimeout);
    assert!(err.msg.contains("xyz"));

    let err = parse_vbparams("testdummy:99999999999999999999:1").unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrInvalidStartTime);
}

#[test]
fn first_bad_entry_aborts() {
    let mut rules = regtest_with(&MapArgs::new()).expect("regtest").consensus.clone();
    let args = MapArgs::new()
        .with("vbparams", "testdummy:1:2")
        .with("vbparams", "bogus:3:4");
    let err = apply_overrides(&args, &mut rules).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrUnknownDeployment);

    let err = regtest_with(&args).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrUnknownDeployment);
}

#[test]
fn overrides_only_reach_regtest() {
    let args = MapArgs::new()
        .with("segwitheight", "-1")
        .with("vbparams", "testdummy:100:200");
    let main = crate::chainparams::create_chain_params("main", &args).expect("main");
    assert_eq!(main.consensus.segwit_height, 1);
    let d = main.consensus.deployment(DeploymentPos::TestDummy);
    assert_eq!(d.start_time, 1_199_145_601);
}

#[test]
fn no_overrides_is_a_no_op() {
    let base = regtest_with(&MapArgs::new()).expect("regtest");
    let mut rules = base.consensus.clone();
    apply_overrides(&MapArgs::new(), &mut rules).expect("apply");
    assert_eq!(rules, base.consensus);
}
