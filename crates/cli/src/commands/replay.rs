//! `replay` command: apply a recorded action script to a fresh store.
//!
//! A script is a JSON array. Each entry is either a store action
//! (`{"type": "login", "user": {...}}`) or a catalog shortcut
//! (`{"type": "add_from_catalog", "product_id": 101, "quantity": 2}`) that is
//! resolved against the loaded catalog before dispatch.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize, de};
use serde_json::Value;
use tiffin_core::ProductId;
use tiffin_storefront::config::StorefrontConfig;
use tiffin_storefront::store::CartProduct;
use tiffin_storefront::views::{CartView, OrderSummaryView};
use tiffin_storefront::{Action, Catalog, Result, Store, StoreState};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum CatalogStep {
    AddFromCatalog {
        product_id: ProductId,
        #[serde(default)]
        quantity: Option<u32>,
    },
}

#[derive(Debug)]
enum ScriptStep {
    Catalog(CatalogStep),
    Action(Action),
}

impl ScriptStep {
    const CATALOG_TAG: &'static str = "add_from_catalog";

    /// Parse one step as the type its `type` tag names.
    fn from_value(value: Value) -> serde_json::Result<Self> {
        if value.get("type").and_then(Value::as_str) == Some(Self::CATALOG_TAG) {
            serde_json::from_value(value).map(Self::Catalog)
        } else {
            serde_json::from_value(value).map(Self::Action)
        }
    }
}

/// Parse a script, naming the offending step in errors.
fn parse_script(json: &str) -> serde_json::Result<Vec<ScriptStep>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            ScriptStep::from_value(value).map_err(|e| {
                <serde_json::Error as de::Error>::custom(format!("step {index}: {e}"))
            })
        })
        .collect()
}

/// Final state printed after a replay.
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    pub applied: usize,
    pub skipped: usize,
    pub revision: u64,
    pub cart: CartView,
    pub orders: Vec<OrderSummaryView>,
    pub state: &'a StoreState,
}

/// Read a script file, replay it and print the report as JSON.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed, or output fails.
pub fn replay_file(
    path: &Path,
    catalog: &Catalog,
    config: &StorefrontConfig,
    out: &mut impl Write,
) -> Result<()> {
    let json = std::fs::read_to_string(path)?;
    replay_str(&json, catalog, config, out)
}

/// Replay a script held in memory and print the report as JSON.
///
/// # Errors
///
/// Returns an error if the script is not valid JSON or output fails.
pub fn replay_str(
    json: &str,
    catalog: &Catalog,
    config: &StorefrontConfig,
    out: &mut impl Write,
) -> Result<()> {
    let steps = parse_script(json)?;
    let mut store = Store::new();
    let mut applied = 0;
    let mut skipped = 0;

    for (index, step) in steps.into_iter().enumerate() {
        let Some(action) = resolve(step, catalog) else {
            tracing::warn!(step = index, "Unknown product in script, skipping");
            skipped += 1;
            continue;
        };
        if store.dispatch(action) {
            applied += 1;
        } else {
            skipped += 1;
        }
    }
    tracing::info!(applied, skipped, "Replay finished");

    let symbol = &config.currency_symbol;
    let report = ReplayReport {
        applied,
        skipped,
        revision: store.revision(),
        cart: CartView::new(store.cart(), symbol),
        orders: store
            .orders()
            .orders()
            .iter()
            .map(|order| OrderSummaryView::new(order, symbol))
            .collect(),
        state: store.state(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn resolve(step: ScriptStep, catalog: &Catalog) -> Option<Action> {
    match step {
        ScriptStep::Action(action) => Some(action),
        ScriptStep::Catalog(CatalogStep::AddFromCatalog {
            product_id,
            quantity,
        }) => CartProduct::from_catalog(catalog, product_id).map(|product| Action::AddItem {
            product,
            quantity: quantity.unwrap_or(1),
        }),
    }
}
