use clap::Parser;
use course_advisor::app::{
    CareerInfoView, ComparisonView, CourseDetailsView, CourseInfoView, CourseListView,
    DiscoveryView, NotFoundView, RecommendationView,
};
use course_advisor::core::discovery::menu;
use course_advisor::utils::error::ErrorSeverity;
use course_advisor::utils::logger;
use course_advisor::{
    Advice, AdvisorEngine, AdvisorError, Catalog, CliConfig, Command, Result, Settings,
};
use serde::Serialize;
use std::fmt::Display;

fn emit<V: Serialize + Display>(view: &V, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print!("{}", view);
    }
    Ok(())
}

async fn load_catalog(settings: &Settings) -> Result<Catalog> {
    let source = settings.open_catalog_source()?;
    Catalog::load(source.as_ref()).await
}

async fn run(config: &CliConfig, settings: &Settings) -> Result<()> {
    match &config.command {
        // discover 不需要載入課程目錄
        Command::Discover { experience } => {
            let view = DiscoveryView::build(menu(experience.as_deref()), experience.as_deref());
            emit(&view, config.json)
        }
        Command::List => {
            let catalog = load_catalog(settings).await?;
            emit(&CourseListView::build(&catalog), config.json)
        }
        Command::Compare => {
            let catalog = load_catalog(settings).await?;
            emit(&ComparisonView::build(&catalog), config.json)
        }
        Command::Info { query } => {
            let catalog = load_catalog(settings).await?;
            let engine = AdvisorEngine::new(&catalog);
            let query = query.join(" ");
            match engine.lookup(&query) {
                Ok(found) => emit(
                    &CourseInfoView::build(&found, settings.skills_preview),
                    config.json,
                ),
                Err(AdvisorError::NotFound {
                    best_confidence, ..
                }) => {
                    tracing::info!(
                        "No course matched '{}' (best {}%)",
                        query,
                        best_confidence
                    );
                    emit(&NotFoundView::build(&query, best_confidence), config.json)
                }
                Err(e) => Err(e),
            }
        }
        Command::Recommend(args) => {
            let catalog = load_catalog(settings).await?;
            let engine = AdvisorEngine::new(&catalog);
            let profile = args.to_profile();
            tracing::debug!("Profile: {:?}", profile);

            match engine.recommend(&profile)? {
                Advice::Recommend(recommendation) => {
                    tracing::info!(
                        "Recommended '{}' ({}%)",
                        recommendation.course_name(),
                        recommendation.selection.top.score
                    );
                    let view = RecommendationView::build(
                        &recommendation,
                        settings.alternative_gap,
                        settings.skills_preview,
                    );
                    emit(&view, config.json)
                }
                Advice::Discover(options) => {
                    emit(&DiscoveryView::build(options, profile.experience()), config.json)
                }
            }
        }
        Command::Details { name } => {
            let catalog = load_catalog(settings).await?;
            let course = AdvisorEngine::new(&catalog).course(&name.join(" "))?;
            emit(&CourseDetailsView::build(course), config.json)
        }
        Command::Careers { name } => {
            let catalog = load_catalog(settings).await?;
            let course = AdvisorEngine::new(&catalog).course(&name.join(" "))?;
            emit(&CareerInfoView::build(course), config.json)
        }
    }
}

fn report(e: &AdvisorError) -> i32 {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting course-advisor");
    tracing::debug!("CLI config: {:?}", config);

    // 合併並驗證配置
    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            std::process::exit(report(&e).max(1));
        }
    };
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = run(&config, &settings).await {
        let exit_code = report(&e);
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
