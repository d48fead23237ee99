use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bps-node"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn bps-node")
}

fn stdout_json(out: &Output) -> serde_json::Value {
    serde_json::from_slice(&out.stdout).expect("json stdout")
}

#[test]
fn params_regtest_applies_overrides() {
    let out = run(&["params", "-regtest", "-segwitheight=-1", "-vbparams=testdummy:100:200"]);
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    let v = stdout_json(&out);
    assert_eq!(v["network"], "regtest");
    assert_eq!(v["segwit_height"], i64::from(i32::MAX));
    assert_eq!(v["deployments"][0]["start_time"], 100);
    assert_eq!(v["deployments"][0]["timeout"], 200);
}

#[test]
fn genesis_main() {
    let out = run(&["genesis"]);
    assert_eq!(out.status.code(), Some(0));
    let v = stdout_json(&out);
    assert_eq!(
        v["hash"],
        "0000091185a04dbbcee63ad911d786ef77e4d9c2a06d51c2eaecd17234a6bb4c"
    );
    assert_eq!(v["nonce"], 2_044_995);
}

#[test]
fn user_errors_exit_2() {
    let out = run(&["params", "-chain=nonsense"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown chain: nonsense"));

    let out = run(&["params", "-regtest", "-vbparams=bogus:1:2"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("PARAMS_ERR_UNKNOWN_DEPLOYMENT"));

    let out = run(&["params", "-regtest", "-testnet"]);
    assert_eq!(out.status.code(), Some(2));

    let out = run(&["frobnicate"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn check_pow_outcomes() {
    let out = run(&[
        "check-pow",
        "-hash=0000091185a04dbbcee63ad911d786ef77e4d9c2a06d51c2eaecd17234a6bb4c",
        "-bits=0x1e0fffff",
    ]);
    assert_eq!(out.status.code(), Some(0));
    let v = stdout_json(&out);
    assert_eq!(v["meets_target"], true);
    assert_eq!(v["negative"], false);
    assert_eq!(v["overflow"], false);
    assert_eq!(v["bits"], "0x1e0fffff");
    assert!(v["target"].as_str().is_some_and(|t| t.starts_with("00000fffff")));

    let out = run(&["check-pow", "-hash=ff", "-bits=0x207fffff"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_json(&out)["meets_target"], false);

    let out = run(&["check-pow", "-bits=0x1e0fffff"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn check_pow_invalid_bits_omit_target() {
    let out = run(&["check-pow", "-hash=00", "-bits=0x04923456"]);
    assert_eq!(out.status.code(), Some(1));
    let v = stdout_json(&out);
    assert_eq!(v["meets_target"], false);
    assert_eq!(v["negative"], true);
    assert_eq!(v["overflow"], false);
    assert!(v.get("target").is_none());
    assert!(v.get("bits").is_none());

    let out = run(&["check-pow", "-hash=00", "-bits=0xff123456"]);
    assert_eq!(out.status.code(), Some(1));
    let v = stdout_json(&out);
    assert_eq!(v["overflow"], true);
    assert!(v.get("target").is_none());
}

#[test]
fn mine_genesis_finds_published_nonce() {
    let out = run(&[
        "mine-genesis",
        "-time=1602160971",
        "-start-nonce=2044990",
        "-max-nonce=2045000",
    ]);
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    let v = stdout_json(&out);
    assert_eq!(v["nonce"], 2_044_995);
}
