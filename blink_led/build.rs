use std::env;

/// Blink period used when `BLINK_PERIOD_MS` is not set
const DEFAULT_PERIOD_MS: &str = "500";

/// Heartbeat interval used when `BLINK_HEARTBEAT` is not set
const DEFAULT_HEARTBEAT: &str = "10";

fn main() {
    println!("cargo:rustc-link-arg-tests=-Tembedded-test.x");
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    // make sure linkall.x is the last linker script
    println!("cargo:rustc-link-arg=-Tlinkall.x");

    blink_config();
}

/// Reads the blink settings from the environment and bakes them into the firmware.
///
/// Invalid values fail the build instead of producing firmware that refuses to
/// start.
fn blink_config() {
    println!("cargo:rerun-if-env-changed=BLINK_PERIOD_MS");
    println!("cargo:rerun-if-env-changed=BLINK_HEARTBEAT");

    let period = env::var("BLINK_PERIOD_MS").unwrap_or_else(|_| DEFAULT_PERIOD_MS.to_string());
    match period.trim().parse::<u32>() {
        Ok(0) => panic!("BLINK_PERIOD_MS must be non-zero"),
        Ok(ms) => {
            if period.trim() != DEFAULT_PERIOD_MS {
                println!("cargo:warning=Using BLINK_PERIOD_MS from environment: {}", ms);
            }
            println!("cargo:rustc-env=BLINK_PERIOD_MS={}", ms);
        }
        Err(e) => panic!("BLINK_PERIOD_MS={:?} is not a millisecond count: {}", period, e),
    }

    let heartbeat = env::var("BLINK_HEARTBEAT").unwrap_or_else(|_| DEFAULT_HEARTBEAT.to_string());
    match heartbeat.trim().parse::<u32>() {
        Ok(ticks) => println!("cargo:rustc-env=BLINK_HEARTBEAT={}", ticks),
        Err(e) => panic!("BLINK_HEARTBEAT={:?} is not a tick count: {}", heartbeat, e),
    }
}
