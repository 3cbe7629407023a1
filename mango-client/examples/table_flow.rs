// mango-client/examples/table_flow.rs
// Open or close a table: available tables get opened (QR printed),
// occupied tables get a bill preview and are closed on confirmation.

use std::io::Write;
use std::sync::Arc;

use mango_client::{ClientConfig, OrderingApi, TableLifecycle};

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush().ok();
    let mut line = String::new();
    std::io::stdin().read_line(&mut line).ok();
    line.trim().eq_ignore_ascii_case("y")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <username> <password> <table-number>", args[0]);
        return Ok(());
    }

    let config = ClientConfig::from_env();
    let ordering_base_url = config.ordering_base_url.clone();
    let mut client = config.build_client();
    client.authenticate(&args[1], &args[2]).await?;

    let api = Arc::new(client);
    let lifecycle = TableLifecycle::new(api.clone(), ordering_base_url);

    let tables = api.list_tables().await?;
    let table = tables
        .iter()
        .find(|t| t.number == args[3])
        .ok_or_else(|| anyhow::anyhow!("no table numbered {}", args[3]))?;

    if table.is_available() {
        let pending = lifecycle.open(table)?;
        println!("{}", pending.qr_code()?);
        println!("{}", pending.order_url());

        if confirm(&format!("Confirm open table {}?", pending.table_number())) {
            pending.confirm().await?;
            println!("Table {} opened", table.number);
        } else {
            println!("Cancelled");
        }
    } else {
        let preview = lifecycle.close(table).await?;
        for order in &preview.session().orders {
            println!(
                "{:<24} x{:<3} {:>8.2}",
                order.menu.name,
                order.quantity,
                order.price_at_time * order.quantity as f64
            );
        }
        println!("Grand total: {:.2}", preview.total());

        if confirm(&format!("Confirm close table {}?", preview.table_number())) {
            preview.confirm().await?;
            println!("Table {} closed", table.number);
        } else {
            println!("Cancelled");
        }
    }

    Ok(())
}
