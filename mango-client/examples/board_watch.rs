// mango-client/examples/board_watch.rs
// Watch the kitchen board from a terminal

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use mango_client::{ClientConfig, OrderBoard};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <username> <password>", args[0]);
        return Ok(());
    }

    let mut client = ClientConfig::from_env().build_client();
    client.authenticate(&args[1], &args[2]).await?;
    tracing::info!("logged in as {}", args[1]);

    let shutdown = CancellationToken::new();
    let board = Arc::new(OrderBoard::new(Arc::new(client), shutdown.clone()));

    let runner = tokio::spawn({
        let board = board.clone();
        async move { board.run().await }
    });

    let mut ticker = tokio::time::interval(Duration::from_secs(10));
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,

            _ = ticker.tick() => {
                let lanes = board.lanes().await;
                println!("\n=== Kitchen board ===");
                for (title, lane) in [
                    ("Pending", &lanes.pending),
                    ("Cooking", &lanes.cooking),
                    ("Ready to Serve", &lanes.ready_to_serve),
                ] {
                    println!("{} ({})", title, lane.len());
                    for order in lane {
                        let table = order
                            .session
                            .as_ref()
                            .map(|s| s.table.number.as_str())
                            .unwrap_or("?");
                        println!("  table {} — {} x{}", table, order.menu.name, order.quantity);
                    }
                }
            }
        }
    }

    shutdown.cancel();
    runner.await?;
    Ok(())
}
