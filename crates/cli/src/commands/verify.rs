use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use citadel_harness::verify::run_genesis_verification;
use citadel_harness::NetworkContext;

pub async fn run(ctx: &NetworkContext) -> anyhow::Result<()> {
    let report = run_genesis_verification(ctx).await?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Field", "Expected", "Actual", "Status"]);

    for check in &report.checks {
        table.add_row(vec![
            check.accessor.to_string(),
            check.expected.clone(),
            check.actual.clone(),
            if check.ok { "✅".to_string() } else { "❌".to_string() },
        ]);
    }

    println!("\nGenesis verification of {}\n", report.contract);
    println!("{table}\n");
    let checked_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    match report.ensure_ok() {
        Ok(()) => {
            println!("✅ VERIFIED\n");
            println!("Deployer:   {}", report.deployer);
            println!("Checked at: {checked_at}\n");
            Ok(())
        }
        Err(err) => {
            println!("❌ MISMATCH\n");
            println!("Checked at: {checked_at}\n");
            Err(err.into())
        }
    }
}
