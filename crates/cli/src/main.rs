use gilded_rose_cli::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse_args();
    gilded_rose_observability::init_with(config.log_format);

    let stdout = std::io::stdout();
    gilded_rose_cli::run(&config, &mut stdout.lock())?;
    Ok(())
}
