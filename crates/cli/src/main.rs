fn main() -> anyhow::Result<()> {
    let config = prodreg_cli::Config::from_env()?;
    prodreg_observability::init(config.log_format, "warn");

    let session = prodreg_cli::run(&config, std::io::stdin().lock(), std::io::stdout().lock())?;

    tracing::info!(products = session.products().len(), "session ended");
    Ok(())
}
