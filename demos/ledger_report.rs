//! Ledger walkthrough: seed sample orders, edit one, print every view
//!
//! ```sh
//! RUST_LOG=kodhiyas=debug cargo run --example ledger_report
//! KODHIYAS_CONFIG=ledger.yaml cargo run --example ledger_report --features lmdb
//! ```

use anyhow::Result;
use kodhiyas::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_groups(title: &str, groups: &[Group]) {
    println!("\n{}", title);
    if groups.is_empty() {
        println!("  (no orders)");
    }
    for group in groups {
        let unit = group.unit().map(|u| u.as_str()).unwrap_or("");
        println!(
            "  {} / {}  total {} {}  given {}  pending {} ({:?})",
            group.broker,
            group.party,
            group.totals.total,
            unit,
            group.totals.given,
            group.totals.pending,
            group.totals.status()
        );
        for order in &group.items {
            println!(
                "    - [{}] {} {} {}, given {}, rate {}",
                order.id,
                order.commodity,
                order.quantity,
                order.unit,
                order.quantity_given,
                order.rate.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string())
            );
        }
    }
}

fn print_outstanding(report: &OutstandingReport) {
    for (title, rows) in [("Sales", &report.sales), ("Purchase", &report.purchase)] {
        println!("\nOutstanding: {}", title);
        for row in rows {
            println!(
                "  {:<12} {:<22} total {:>8} given {:>8} pending {:>8}",
                row.party, row.commodity, row.total, row.given, row.pending
            );
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::var("KODHIYAS_CONFIG") {
        Ok(path) => LedgerConfig::from_yaml_file(&path)?,
        Err(_) => LedgerConfig::default_config(),
    };
    let mut repo = LedgerBuilder::from_config(&config)?.build();

    if repo.is_empty() {
        repo.add_sample_data();
    }

    // Record a delivery against the most recent sales order
    let latest_sale = repo
        .orders_of(OrderType::Sales)
        .first()
        .map(|o| o.id.clone());
    if let Some(mut draft) = latest_sale.and_then(|id| repo.edit_draft(&id)) {
        draft.quantity_given = "150".to_string();
        repo.save(draft)?;
    }

    match repo.save(OrderDraft::purchase().party("   ")) {
        Err(e) => println!("Rejected blank party: {}", e),
        Ok(order) => println!("Unexpectedly saved {}", order.id),
    }

    let query = std::env::args().nth(1).unwrap_or_default();
    let dashboard = Dashboard::build(repo.iter(), &query);

    print_groups("Sales Dashboard", &dashboard.sales);
    print_groups("Purchase Dashboard", &dashboard.purchase);
    print_outstanding(&dashboard.outstanding);

    Ok(())
}
