// ============================================================================
// Render Amounts Example
// ============================================================================
//
// cargo run --example render_amounts --features logging
// RUST_LOG=debug shows the truncation events.

use amount_fmt::prelude::*;

fn show(label: &str, result: FormatResult<usize>, buf: &[u8]) {
    match result {
        Ok(_) => println!("{:<18} {}", label, terminated_str(buf).unwrap_or("<invalid>")),
        Err(err) => println!("{:<18} <{}>", label, err),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Amount Formatting Example ===\n");

    let mut buf = [0u8; 96];

    let r = nano_avax_to_string(12_340_000_000, &mut buf);
    show("nAVAX → AVAX", r, &buf);

    let r = wei_to_gwei_string(25_000_000_000, &mut buf);
    show("wei → gwei", r, &buf);

    let r = wei_to_navax_string(25_000_000_000, &mut buf);
    show("wei → navax", r, &buf);

    let r = wei_to_avax_string_256(&U256::MAX, &mut buf);
    show("max wei → AVAX", r, &buf);

    let r = delegation_fee_to_string(20_000, &mut buf);
    show("delegation fee", r, &buf);

    let r = bin_to_hex_lc(&[0xde, 0xad, 0xbe, 0xef], &mut buf);
    show("hex", r, &buf);

    println!("\nA 12-byte screen line:");
    let mut line = [0u8; 12];
    let r = wei_to_avax_string_256(&U256::MAX, &mut line);
    show("max wei → AVAX", r, &line);

    let r = copy_string("Cross-chain export", &mut line);
    show("label", r, &line);
}
