//! # CLI Layer
//!
//! This module is **one possible UI client** for prodcat, not the application itself.
//!
//! The CLI layer is the **only** place that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Handles argument parsing
//! - Decides where log output goes
//! - Formats output for human consumption
//!
//! ## Session View
//!
//! An interactive client keeps its view (sort, filters, manual order) in
//! memory. The CLI emulates that by saving the API's view to `view.json` after
//! every command that changes it, so `prodcat sort price` twice flips the
//! direction just like clicking a column header twice.
//!
//! ## Confirmation
//!
//! `delete` and `move` print what they are about to do and wait for `Y` on
//! stdin unless `--yes` is given. The commands themselves never prompt.

use super::render::{
    print_categories, print_config, print_full_products, print_messages, print_products,
    print_view_header, RenderOptions,
};
use super::setup::{
    Cli, Commands, CoreCommands, DataCommands, MiscCommands, ProductCommands, ProductFields,
    ViewCommands,
};
use clap::Parser;
use prodcat::api::{CatalogApi, ConfigAction, ExportTarget, ProductPatch, ViewFilter};
use prodcat::config::CatalogConfig;
use prodcat::error::{CatalogError, Result};
use prodcat::init::initialize;
use prodcat::model::{Price, ProductDraft};
use prodcat::store::fs::FileAdapter;
use prodcat::store::product_store::ImportMode;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: CatalogApi<FileAdapter>,
    config: CatalogConfig,
}

impl AppContext {
    fn render_options(&self) -> RenderOptions {
        RenderOptions::from(&self.config)
    }

    fn save_view(&self) -> Result<()> {
        self.api.view().save(&self.api.paths().data_dir)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Create { fields } => handle_create(&mut ctx, fields),
            CoreCommands::List {
                search,
                category,
                bestseller,
                reset,
            } => {
                let filter = ViewFilter {
                    search,
                    category,
                    bestseller: bestseller.map(|b| b.as_filter()),
                };
                handle_list(&mut ctx, filter, reset)
            }
        },
        Some(Commands::Product(cmd)) => match cmd {
            ProductCommands::View { selectors } => handle_view(&mut ctx, selectors),
            ProductCommands::Edit {
                selector,
                fields,
                clear_images,
                clear_sizes,
            } => handle_edit(&mut ctx, selector, fields, clear_images, clear_sizes),
            ProductCommands::Delete { selectors, yes } => handle_delete(&mut ctx, selectors, yes),
            ProductCommands::Move { from, to, yes } => handle_move(&mut ctx, from, to, yes),
        },
        Some(Commands::View(cmd)) => match cmd {
            ViewCommands::Sort { field } => {
                let result = ctx.api.sort_by(field.into());
                ctx.save_view()?;
                print_messages(&result.messages);
                handle_list(&mut ctx, ViewFilter::default(), false)
            }
            ViewCommands::Manual => {
                let result = ctx.api.toggle_manual_order();
                ctx.save_view()?;
                print_messages(&result.messages);
                handle_list(&mut ctx, ViewFilter::default(), false)
            }
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Export { output, stdout } => handle_export(&mut ctx, output, stdout),
            DataCommands::Import { path, replace } => handle_import(&mut ctx, path, replace),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Categories => handle_categories(&mut ctx),
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
        },
        None => handle_list(&mut ctx, ViewFilter::default(), false),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "prodcat=debug" } else { "prodcat=warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data_dir.clone())?;
    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

fn handle_create(ctx: &mut AppContext, fields: ProductFields) -> Result<()> {
    let name = fields
        .name
        .clone()
        .ok_or_else(|| CatalogError::Api("--name is required".into()))?;
    let price = match &fields.price {
        Some(text) => text.parse::<Price>()?,
        None => return Err(CatalogError::Api("--price is required".into())),
    };

    let draft = ProductDraft::new(name, price)
        .with_description(fields.description.unwrap_or_default())
        .with_category(fields.category.unwrap_or_default())
        .with_subcategory(fields.subcategory.unwrap_or_default())
        .with_images(fields.images)
        .with_sizes(fields.sizes)
        .with_bestseller(fields.bestseller.unwrap_or(false))
        .with_product_code(fields.code.unwrap_or_default());

    let result = ctx.api.create_product(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filter: ViewFilter, reset: bool) -> Result<()> {
    let mut changed = false;
    if reset {
        let result = ctx.api.reset_view();
        print_messages(&result.messages);
        changed = true;
    }
    if !filter.is_empty() {
        ctx.api.set_filters(filter);
        changed = true;
    }
    if changed {
        ctx.save_view()?;
    }

    let result = ctx.api.list_products()?;
    print_view_header(ctx.api.view());
    print_products(&result.listed_products, &ctx.render_options());
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_products(&selectors)?;
    print_full_products(&result.listed_products, &ctx.render_options());
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: String,
    fields: ProductFields,
    clear_images: bool,
    clear_sizes: bool,
) -> Result<()> {
    let price = fields
        .price
        .as_deref()
        .map(str::parse::<Price>)
        .transpose()?;

    let patch = ProductPatch {
        name: fields.name,
        description: fields.description,
        price,
        images: non_empty_or_cleared(fields.images, clear_images),
        category: fields.category,
        subcategory: fields.subcategory,
        sizes: non_empty_or_cleared(fields.sizes, clear_sizes),
        bestseller: fields.bestseller,
        product_code: fields.code,
    };

    let result = ctx.api.update_product(&selector, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn non_empty_or_cleared(values: Vec<String>, clear: bool) -> Option<Vec<String>> {
    if clear {
        Some(Vec::new())
    } else if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    if !yes {
        let targets = ctx.api.view_products(&selectors)?;
        println!("This will permanently remove the following products:");
        for dp in &targets.listed_products {
            println!("  {} {}", dp.position, dp.product.name);
        }
        if !confirm("[Y] To delete: ")? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_products(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: usize, to: usize, yes: bool) -> Result<()> {
    if !ctx.api.view().manual_order {
        return Err(CatalogError::InvalidOrder(
            "switch to manual order first (prodcat manual)".into(),
        ));
    }

    if !yes {
        let target = ctx.api.view_products(&[from.to_string()])?;
        if let Some(dp) = target.listed_products.first() {
            println!("Move {} from position {} to {}?", dp.product.name, from, to);
        }
        if !confirm("[Y] To move: ")? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.move_product(from, to)?;
    print_messages(&result.messages);
    print_products(&result.listed_products, &ctx.render_options());
    Ok(())
}

fn handle_export(ctx: &mut AppContext, output: Option<PathBuf>, stdout: bool) -> Result<()> {
    let target = if stdout {
        ExportTarget::Stdout
    } else {
        ExportTarget::File(output.unwrap_or_else(|| PathBuf::from(&ctx.config.export_file)))
    };

    let result = ctx.api.export_products(target)?;
    if let Some(text) = &result.exported {
        println!("{}", text);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf, replace: bool) -> Result<()> {
    let mode = if replace {
        ImportMode::Replace
    } else {
        ImportMode::Append
    };
    let result = ctx.api.import_products(&path, mode)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print_categories(&result.categories);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
        ctx.config = config.clone();
    }
    print_messages(&result.messages);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush().map_err(CatalogError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(CatalogError::Io)?;
    Ok(input.trim() == "Y")
}
