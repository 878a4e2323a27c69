use wingwatch_core::ClientConfig;
use wingwatch_ebird::{EbirdClient, MIN_QUERY_LEN};

/// Print up to ten species common names containing `query`.
///
/// # Errors
///
/// Returns an error with a short user-facing message if the lookup fails.
pub(crate) async fn run_species(config: &ClientConfig, query: &str) -> anyhow::Result<()> {
    if query.trim().chars().count() < MIN_QUERY_LEN {
        println!("Type at least {MIN_QUERY_LEN} characters to search species.");
        return Ok(());
    }

    let client = EbirdClient::from_config(config)?;
    let names = client.search_species(query).await.map_err(|e| {
        tracing::error!(error = %e, "error searching species");
        anyhow::anyhow!(e.user_message())
    })?;

    if names.is_empty() {
        println!("no species match '{query}'");
        return Ok(());
    }
    for name in &names {
        println!("{name}");
    }
    Ok(())
}
