use bps_consensus::{
    decode_compact, encode_compact, hash256_from_hex, meets_target, select_params, ArgLookup,
    ChainParams,
};
use bps_node::config::{parse_u32, required_arg};
use bps_node::{
    genesis_report, init_logging, mine_genesis, params_summary, ArgsManager, NodeConfig, NodeError,
};
use serde::Serialize;

fn usage() {
    eprintln!("usage: bps-node <command> [options]");
    eprintln!("network options: -chain=<main|test|regtest> | -testnet | -regtest");
    eprintln!("regtest options: -segwitheight=<n> -vbparams=<name:start:timeout> (repeatable)");
    eprintln!("commands:");
    eprintln!("  version");
    eprintln!("  params");
    eprintln!("  genesis");
    eprintln!("  check-pow -hash=<hex64> -bits=<u32>");
    eprintln!("  mine-genesis -time=<u32> [-bits=<u32>] [-start-nonce=<u32>] [-max-nonce=<u32>]");
}

struct Startup {
    args: ArgsManager,
    cfg: NodeConfig,
    params: &'static ChainParams,
}

/// Parses options, installs logging and selects the network.
fn startup(args: &[String]) -> Result<Startup, NodeError> {
    let args = ArgsManager::parse(args)?;
    let cfg = NodeConfig::from_args(&args)?;
    init_logging(&cfg.log_filter)?;
    let params = select_params(cfg.network.as_str(), &args)?;
    Ok(Startup { args, cfg, params })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), NodeError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_params(args: &[String]) -> Result<(), NodeError> {
    let s = startup(args)?;
    print_json(&params_summary(s.params))
}

fn cmd_genesis(args: &[String]) -> Result<(), NodeError> {
    let s = startup(args)?;
    print_json(&genesis_report(&s.params.genesis))
}

#[derive(Serialize)]
struct PowCheck {
    meets_target: bool,
    negative: bool,
    overflow: bool,
    // Absent when the bits decode negative or overflowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bits: Option<String>,
}

fn cmd_check_pow(args: &[String]) -> Result<bool, NodeError> {
    let s = startup(args)?;
    let hash = hash256_from_hex(&required_arg(&s.args, "hash")?)
        .map_err(|e| NodeError::Usage(format!("-hash: {e}")))?;
    let bits = parse_u32("bits", &required_arg(&s.args, "bits")?)?;

    let ok = meets_target(&hash, bits, &s.params.consensus.pow_limit);
    let target = decode_compact(bits);
    let valid = !target.negative && !target.overflow;
    print_json(&PowCheck {
        meets_target: ok,
        negative: target.negative,
        overflow: target.overflow,
        target: valid.then(|| format!("{:064x}", target.value)),
        bits: valid.then(|| format!("{:#010x}", encode_compact(&target.value))),
    })?;
    Ok(ok)
}

fn cmd_mine_genesis(args: &[String]) -> Result<bool, NodeError> {
    let Startup { args, cfg, params } = startup(args)?;
    let time = parse_u32("time", &required_arg(&args, "time")?)?;
    let bits = match args.get_arg("bits") {
        Some(raw) => parse_u32("bits", &raw)?,
        None => params.genesis.header.bits,
    };

    match mine_genesis(
        time,
        bits,
        cfg.mine_start_nonce,
        cfg.mine_max_nonce,
        &params.consensus.pow_limit,
    ) {
        Some(block) => {
            print_json(&genesis_report(&block))?;
            Ok(true)
        }
        None => {
            eprintln!(
                "no nonce in {}..={} satisfies bits {bits:#010x} at time {time}",
                cfg.mine_start_nonce, cfg.mine_max_nonce
            );
            Ok(false)
        }
    }
}

fn report(cmd: &str, result: Result<(), NodeError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{cmd} error: {e}");
            e.exit_code()
        }
    }
}

fn report_outcome(cmd: &str, result: Result<bool, NodeError>) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("{cmd} error: {e}");
            e.exit_code()
        }
    }
}

fn cmd_version() -> i32 {
    println!("bps-node (rust) {}", env!("CARGO_PKG_VERSION"));
    0
}

fn dispatch(cmd: &str, args: &[String]) -> i32 {
    match cmd {
        "version" => cmd_version(),
        "params" => report(cmd, cmd_params(args)),
        "genesis" => report(cmd, cmd_genesis(args)),
        "check-pow" => report_outcome(cmd, cmd_check_pow(args)),
        "mine-genesis" => report_outcome(cmd, cmd_mine_genesis(args)),
        _ => {
            eprintln!("unknown command: {cmd}");
            2
        }
    }
}

fn main() {
    let mut args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        usage();
        std::process::exit(2);
    }
    let cmd = args.remove(0);
    let exit_code = dispatch(&cmd, &args);
    if exit_code != 0 {
        if exit_code == 2 {
            usage();
        }
        std::process::exit(exit_code);
    }
}
