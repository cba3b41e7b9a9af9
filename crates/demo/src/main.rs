fn main() -> anyhow::Result<()> {
    ledgerbank_observability::init();

    let stdout = std::io::stdout();
    let bank = ledgerbank_demo::run(&mut stdout.lock()).inspect_err(|err| {
        tracing::error!("demo scenario failed: {err:#}");
    })?;

    tracing::info!(accounts = bank.len(), "demo scenario finished");
    Ok(())
}
