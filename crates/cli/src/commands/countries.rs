//! `sportshop countries`

use std::io::{self, Write};

use sportshop_storefront::StorefrontConfig;

/// Print one country per line.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub async fn run(config: &StorefrontConfig) -> io::Result<()> {
    let countries = super::country_list(config).await;
    let mut out = io::stdout().lock();
    for country in &countries {
        writeln!(out, "{country}")?;
    }
    Ok(())
}
