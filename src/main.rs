use clap::Parser;
use package_depends::utils::{logger, validation::Validate};
use package_depends::{
    parse_dependency_file, plan, CliConfig, DependsEngine, DependsError, LocalStorage,
    TomlConfig,
};
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(message) => println!("{}", message),
        Err(e) => {
            tracing::error!("{}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            println!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}

fn run(config: &CliConfig) -> Result<String, DependsError> {
    let settings = match &config.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    settings.validate()?;

    let dependency_file = Path::new(&config.dependency_file);

    if config.dry_run {
        let model = parse_dependency_file(dependency_file)?;
        for entry in plan(&model) {
            println!(
                "{} [{}, level {}]: {}",
                entry.path,
                entry.layer,
                entry.level,
                entry.dependencies.join(", ")
            );
        }
        return Ok("Dry run finished; no files were written".to_string());
    }

    let base_dir = dependency_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = dependency_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| DependsError::ConfigError {
            message: format!("'{}' is not a file path", config.dependency_file),
        })?;

    let output_file = settings.output_file_name().to_string();
    let generator = settings.generator();
    let engine = DependsEngine::new(LocalStorage::new(base_dir), generator, settings);
    let written = engine.run(&file_name)?;

    Ok(format!(
        "Generated {} {} files successfully",
        written.len(),
        output_file
    ))
}
