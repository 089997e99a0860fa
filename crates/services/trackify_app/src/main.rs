// File: services/trackify_app/src/main.rs
mod navigator;
mod render;

use clap::{Parser, Subcommand};
use std::sync::Arc;

use trackify_bookings::presenter::TrackCell;
use trackify_bookings::{track_driver, BookingListView, HttpBookingService};
use trackify_common::logging;
use trackify_config::load_config;
use trackify_store::JsonFileStore;

use crate::navigator::TerminalNavigator;

#[derive(Parser)]
#[command(
    name = "trackify",
    about = "Your transportation bookings, from the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List your bookings
    List,
    /// Hand a booking off to the driver-tracking view
    Track {
        /// 1-based row number as shown by `trackify list`
        row: usize,
    },
}

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let store = Arc::new(JsonFileStore::open(&config.storage.path)?);
    let service = HttpBookingService::new(&config.api);
    let view = BookingListView::new(service, store.clone());

    // One activation per invocation: resolve identity, fetch, present.
    let presentation = view.activate().await;

    match cli.command.unwrap_or(Command::List) {
        Command::List => render::print_presentation(&presentation),
        Command::Track { row } => {
            let Some(selected) = presentation.rows.iter().find(|r| r.index == row) else {
                return Err(format!("no booking at row {row}").into());
            };
            match &selected.track {
                TrackCell::Unavailable => {
                    println!(
                        "Booking at row {} is still pending; tracking is not available yet.",
                        selected.index
                    );
                }
                TrackCell::Track { booking_id } => {
                    track_driver(store.as_ref(), &TerminalNavigator, booking_id)?;
                }
            }
        }
    }

    Ok(())
}
