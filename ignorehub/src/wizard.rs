//! Interactive template picker.

use dialoguer::{MultiSelect, theme::ColorfulTheme};
use eyre::{Context, Result};
use ignorehub_core::TemplateRecord;

/// Present the index as a multi-select and return the chosen records in
/// index order.
pub fn select_templates(index: &[TemplateRecord]) -> Result<Vec<TemplateRecord>> {
    let items: Vec<String> = index
        .iter()
        .map(|record| format!("{} ({})", record.name, record.kind))
        .collect();

    let picked = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select templates (space to toggle, enter to confirm)")
        .items(&items)
        .interact()
        .wrap_err("Failed to read template selection")?;

    Ok(picked.into_iter().map(|i| index[i].clone()).collect())
}
