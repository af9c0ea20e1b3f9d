use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tokenbank_client::bank::units::{eth_to_wei, wei_to_eth};
use tokenbank_client::bank::TokenBank;
use tokenbank_client::blockchain::{RpcClient, Wallet};
use tokenbank_client::config::{default_config, load_config};
use tokenbank_client::observability;

#[derive(Parser)]
#[command(name = "tokenbank")]
#[command(about = "CLI client for a TokenBank contract on a local EVM node", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Built-in defaults are used
    /// when the file does not exist.
    #[arg(short, long, default_value = "tokenbank.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the account's bank balance
    Balance,
    /// Deposit an ether amount into the bank
    Deposit { amount: String },
    /// Withdraw an ether amount from the bank
    Withdraw { amount: String },
    /// Run the fixed demo sequence: balance, deposit 1, balance,
    /// withdraw 0.5, balance
    Demo,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        default_config()?
    };

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        config = %cli.config.display(),
        rpc_url = %config.rpc.url,
        contract = %config.contract.address,
        "tokenbank-client starting"
    );

    // Connectivity is asserted here; an unreachable node aborts the run
    // before any contract call.
    let client = RpcClient::connect(&config).await?;
    let wallet = Wallet::from_env(config.rpc.chain_id)?;
    let bank = TokenBank::load(&config, client, wallet)?;

    match cli.command {
        Commands::Balance => {
            print_balance(&bank).await?;
        }
        Commands::Deposit { amount } => {
            deposit(&bank, &amount).await?;
        }
        Commands::Withdraw { amount } => {
            withdraw(&bank, &amount).await?;
        }
        Commands::Demo => {
            print_balance(&bank).await?;
            deposit(&bank, "1").await?;
            print_balance(&bank).await?;
            withdraw(&bank, "0.5").await?;
            print_balance(&bank).await?;
        }
    }

    Ok(())
}

async fn print_balance(bank: &TokenBank) -> Result<(), Box<dyn std::error::Error>> {
    let balance = bank.balance().await?;
    println!("Current bank balance: {} ETH", wei_to_eth(balance));
    Ok(())
}

async fn deposit(bank: &TokenBank, amount: &str) -> Result<(), Box<dyn std::error::Error>> {
    let wei = eth_to_wei(amount)?;
    let receipt = bank.deposit(wei).await?;
    println!("Deposited {} ETH (tx {})", amount, receipt.transaction_hash);
    Ok(())
}

async fn withdraw(bank: &TokenBank, amount: &str) -> Result<(), Box<dyn std::error::Error>> {
    let wei = eth_to_wei(amount)?;
    let receipt = bank.withdraw(wei).await?;
    println!("Withdrew {} ETH (tx {})", amount, receipt.transaction_hash);
    Ok(())
}
