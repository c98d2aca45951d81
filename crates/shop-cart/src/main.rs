//! Command-line front end for the cart.
//!
//! ```bash
//! RUST_LOG=info shop-cart add 1 add 1 update 1 3 remove 2 show
//! ```
//!
//! Commands run in order against the cart stored at `CART_STORAGE_PATH`. A rejected
//! command is logged and the remaining ones still run.

use shop_cart::clients::CartClient;
use shop_cart::config::CartConfig;
use shop_cart::lifecycle::CartSystem;
use shop_cart::model::{Cart, ProductId};
use snapshot_actor::tracing::setup_tracing;
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[derive(Debug, PartialEq)]
enum Command {
    Add(ProductId),
    Remove(ProductId),
    Update(ProductId, u32),
    Show,
}

fn parse_commands(args: &[String]) -> Result<Vec<Command>, String> {
    let mut commands = Vec::new();
    let mut args = args.iter();

    while let Some(word) = args.next() {
        let mut number = |what: &str| -> Result<u32, String> {
            let raw = args
                .next()
                .ok_or_else(|| format!("`{word}` expects {what}"))?;
            raw.parse()
                .map_err(|_| format!("`{word}`: {raw:?} is not {what}"))
        };

        let command = match word.as_str() {
            "add" => Command::Add(ProductId(number("a product id")?)),
            "remove" => Command::Remove(ProductId(number("a product id")?)),
            "update" => {
                let id = ProductId(number("a product id")?);
                Command::Update(id, number("an amount")?)
            }
            "show" => Command::Show,
            other => return Err(format!("Unknown command `{other}`")),
        };
        commands.push(command);
    }

    Ok(commands)
}

async fn run(client: &CartClient, command: Command) -> Result<Arc<Cart>, String> {
    let result = match command {
        Command::Add(id) => client.add_product(id).await,
        Command::Remove(id) => client.remove_product(id).await,
        Command::Update(id, amount) => client.update_product_amount(id, amount).await,
        Command::Show => client.cart().await,
    };
    result.map_err(|e| e.to_string())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Cart is empty");
        return;
    }
    for item in cart {
        println!(
            "{:>4}  {:<40} {:>3} x {:>9.2} = {:>10.2}",
            item.id.0,
            item.title,
            item.amount,
            item.price,
            item.subtotal()
        );
    }
    println!("{} item(s), total {:.2}", cart.total_items(), cart.total());
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut commands = parse_commands(&args)?;
    if commands.is_empty() {
        commands.push(Command::Show);
    }

    let config = CartConfig::from_env().map_err(|e| e.to_string())?;
    info!(api_url = %config.api_url, storage = %config.storage_path.display(), "Starting shop-cart");

    let system = CartSystem::from_config(&config).map_err(|e| e.to_string())?;

    let mut last = None;
    for command in commands {
        let span = tracing::info_span!("cart_command", ?command);
        match run(&system.cart_client, command).instrument(span).await {
            Ok(cart) => last = Some(cart),
            Err(e) => error!(error = %e, "Command failed"),
        }
    }

    let cart = match last {
        Some(cart) => cart,
        None => system.cart_client.cart().await.map_err(|e| e.to_string())?,
    };
    print_cart(&cart);

    system.shutdown().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_commands() {
        let commands = parse_commands(&args("add 1 update 1 3 remove 2 show")).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Add(ProductId(1)),
                Command::Update(ProductId(1), 3),
                Command::Remove(ProductId(2)),
                Command::Show,
            ]
        );
        assert!(parse_commands(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_commands(&args("add 1 checkout")).unwrap_err();
        assert!(err.contains("checkout"));
    }

    #[test]
    fn test_missing_amount() {
        let err = parse_commands(&args("update 1")).unwrap_err();
        assert!(err.contains("an amount"));
    }

    #[test]
    fn test_non_numeric_id() {
        let err = parse_commands(&args("remove abc")).unwrap_err();
        assert!(err.contains("is not a product id"));
        assert!(parse_commands(&args("update 1 -2")).is_err());
    }
}
