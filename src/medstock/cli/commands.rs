//! # CLI Layer
//!
//! This module is **one possible UI client** for medstock. It is the only
//! place that knows about stdout/stderr, argument parsing and exit codes.
//!
//! Each invocation is one session: build the API over a `FileStore`, load the
//! collections, run one command, print the `CmdResult`.
//!
//! Rows given to `edit` and `delete` are the row numbers printed by `list`.
//! When `--search` is passed, rows are resolved against that filtered listing,
//! so `medstock list -s asp` followed by `medstock rm 1 -s asp` removes the
//! first medicine that listing showed.

use super::render::{
    print_messages, render_medicine_detail, render_medicines, render_orders, render_summary,
};
use super::setup::{Cli, Commands, MedicineFields};
use clap::Parser;
use directories::ProjectDirs;
use medstock::api::{ConfigAction, PharmacyApi};
use medstock::config::PharmacyConfig;
use medstock::error::{PharmacyError, Result};
use medstock::model::{MedicineDraft, MedicinePatch, OrderDraft};
use medstock::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: PharmacyApi<FileStore>,
    config: PharmacyConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        command => {
            ctx.api.load()?;
            match command {
                Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
                Some(Commands::List { search }) => handle_list(&mut ctx, search),
                Some(Commands::Search { query }) => handle_list(&mut ctx, Some(query)),
                Some(Commands::Edit {
                    row,
                    search,
                    fields,
                }) => handle_edit(&mut ctx, row, search, fields),
                Some(Commands::Delete { row, search }) => handle_delete(&mut ctx, row, search),
                Some(Commands::Order {
                    medicine,
                    quantity,
                    price,
                }) => handle_order(&mut ctx, medicine, quantity, price),
                Some(Commands::Sales) => handle_sales(&ctx),
                Some(Commands::Summary) => handle_summary(&ctx),
                Some(Commands::Config { .. }) | None => handle_list(&mut ctx, None),
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "medstock=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let config = PharmacyConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let api = PharmacyApi::new(store, data_dir);

    Ok(AppContext { api, config })
}

fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "medstock", "medstock").ok_or_else(|| {
        PharmacyError::Config("Could not determine a data directory; pass --data-dir".into())
    })?;
    Ok(dirs.data_dir().to_path_buf())
}

fn handle_add(ctx: &mut AppContext, fields: MedicineFields) -> Result<()> {
    let draft = MedicineDraft {
        name: fields.name.unwrap_or_default(),
        quantity: fields.quantity.unwrap_or_default(),
        id: fields.id.unwrap_or_default(),
        usage: fields.usage.unwrap_or_default(),
        side_effects: fields.side_effects.unwrap_or_default(),
    };
    let result = ctx.api.add_medicine(draft)?;
    print_messages(&result.messages);
    for medicine in &result.affected_medicines {
        print!("{}", render_medicine_detail(medicine));
    }
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    if let Some(query) = search {
        ctx.api.search_medicines(&query)?;
    }
    let result = ctx.api.list_medicines()?;
    print!("{}", render_medicines(&result.listed_medicines, &ctx.config));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    row: usize,
    search: Option<String>,
    fields: MedicineFields,
) -> Result<()> {
    let patch = MedicinePatch {
        name: fields.name,
        quantity: fields.quantity,
        id: fields.id,
        usage: fields.usage,
        side_effects: fields.side_effects,
    };
    if let Some(query) = search {
        ctx.api.search_medicines(&query)?;
    }
    let result = ctx.api.update_medicine(row, &patch)?;
    print_messages(&result.messages);
    for medicine in &result.affected_medicines {
        print!("{}", render_medicine_detail(medicine));
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, row: usize, search: Option<String>) -> Result<()> {
    if let Some(query) = search {
        ctx.api.search_medicines(&query)?;
    }
    let result = ctx.api.delete_medicine(row)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_order(
    ctx: &mut AppContext,
    medicine: String,
    quantity: String,
    price: String,
) -> Result<()> {
    let draft = OrderDraft::new(medicine, quantity, price);
    let result = ctx.api.record_order(&draft)?;
    print_messages(&result.messages);
    if let Some(order) = result.listed_orders.first() {
        println!("Total: {}", ctx.config.money(order.total_revenue));
    }
    Ok(())
}

fn handle_sales(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_orders()?;
    print!("{}", render_orders(&result.listed_orders, &ctx.config));
    Ok(())
}

fn handle_summary(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.sales_summary()?;
    if let Some(summary) = &result.summary {
        print!("{}", render_summary(summary, &ctx.config));
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("currency = {}", config.currency);
        println!("low-stock = {}", config.low_stock_threshold);
    }
    print_messages(&result.messages);
    Ok(())
}
