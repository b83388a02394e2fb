use anyhow::Result;
use course_advisor::app::{DiscoveryView, RecommendationView};
use course_advisor::core::discovery::DiscoveryTarget;
use course_advisor::core::scorer;
use course_advisor::core::selector::needs_discovery;
use course_advisor::{Advice, AdvisorEngine, Catalog, LocalCatalogSource, MatchLevel, Profile};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/course_data.csv");

async fn fixture_catalog() -> Result<Catalog> {
    Ok(Catalog::load(&LocalCatalogSource::new(FIXTURE)).await?)
}

/// 以興趣與經驗推薦：Data Science 勝出，AI 為差距 20 分內的備選
#[tokio::test]
async fn test_interest_and_experience_profile() -> Result<()> {
    let catalog = fixture_catalog().await?;
    let engine = AdvisorEngine::new(&catalog);
    let profile = Profile::new()
        .with_interest("I love patterns and numbers")
        .with_experience("beginner");

    let Advice::Recommend(recommendation) = engine.recommend(&profile)? else {
        panic!("expected a recommendation");
    };

    assert_eq!(recommendation.course_name(), "Data Science");
    assert_eq!(recommendation.selection.top.score, 60);
    assert_eq!(recommendation.match_level, MatchLevel::Great);

    let runner_up = recommendation.selection.runner_up.unwrap();
    assert_eq!(runner_up.course.name, "Artificial Intelligence & Machine Learning");
    assert_eq!(runner_up.score, 43);

    let view = RecommendationView::build(&recommendation, 20, 5);
    assert_eq!(view.alternative.unwrap().score, 43);
    assert_eq!(view.key_skills.len(), 5);
    assert_eq!(
        view.reasons,
        vec![
            "Matches your interest in I love patterns and numbers".to_string(),
            "Designed for complete beginners".to_string(),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_role_only_profile_prefers_primary_category() -> Result<()> {
    let catalog = fixture_catalog().await?;
    let engine = AdvisorEngine::new(&catalog);
    let profile = Profile::new().with_career_role("Data Scientist");

    let Advice::Recommend(recommendation) = engine.recommend(&profile)? else {
        panic!("expected a recommendation");
    };

    assert_eq!(
        recommendation.course_name(),
        "Artificial Intelligence & Machine Learning"
    );
    assert_eq!(recommendation.selection.top.score, 45);
    assert_eq!(recommendation.selection.runner_up.unwrap().score, 40);

    Ok(())
}

#[tokio::test]
async fn test_unsure_interest_is_inferred_from_role() -> Result<()> {
    let catalog = fixture_catalog().await?;
    let engine = AdvisorEngine::new(&catalog);
    let profile = Profile::new()
        .with_interest("I'm unsure")
        .with_career_role("Frontend Developer");

    let Advice::Recommend(recommendation) = engine.recommend(&profile)? else {
        panic!("expected a recommendation");
    };

    assert_eq!(recommendation.course_name(), "Full Stack Development (MERN)");
    assert_eq!(recommendation.selection.top.score, 85);
    assert_eq!(recommendation.match_level, MatchLevel::Excellent);

    Ok(())
}

#[tokio::test]
async fn test_fully_undecided_learner_gets_discovery_menu() -> Result<()> {
    let catalog = fixture_catalog().await?;
    let engine = AdvisorEngine::new(&catalog);
    let profile = Profile::new()
        .with_interest("unsure")
        .with_career_role("unsure")
        .with_experience("advanced");

    assert!(needs_discovery(&profile));

    let Advice::Discover(options) = engine.recommend(&profile)? else {
        panic!("expected the discovery menu");
    };
    assert_eq!(options.len(), 5);
    assert!(options
        .iter()
        .all(|option| matches!(option.target, DiscoveryTarget::Interest(_))));

    let view = DiscoveryView::build(options, profile.experience());
    assert_eq!(view.question, "What type of work excites you more?");

    Ok(())
}

#[tokio::test]
async fn test_recommendation_is_deterministic() -> Result<()> {
    let catalog = fixture_catalog().await?;
    let engine = AdvisorEngine::new(&catalog);
    let profile = Profile::new()
        .with_interest("security")
        .with_experience("intermediate")
        .with_goal("career change");

    let first = serde_json::to_value(engine.recommend(&profile)?)?;
    let second = serde_json::to_value(engine.recommend(&profile)?)?;
    assert_eq!(first, second);
    assert_eq!(first["kind"], "recommend");
    assert_eq!(first["result"]["selection"]["top"]["course"]["name"], "Cyber Security");

    Ok(())
}

/// 同分時以目錄中較早的課程為準
#[test]
fn test_ties_keep_catalog_order() -> Result<()> {
    let csv = "course_name,suitable_for\nCyber Security,intermediate\nSDET,intermediate\n";
    let catalog = Catalog::from_csv_reader(csv.as_bytes())?;
    let engine = AdvisorEngine::new(&catalog);

    let Advice::Recommend(recommendation) =
        engine.recommend(&Profile::new().with_experience("intermediate"))?
    else {
        panic!("expected a recommendation");
    };

    assert_eq!(recommendation.course_name(), "Cyber Security");
    assert_eq!(
        recommendation.selection.top.score,
        recommendation.selection.runner_up.unwrap().score
    );

    Ok(())
}

#[tokio::test]
async fn test_scores_stay_within_bounds() -> Result<()> {
    let catalog = fixture_catalog().await?;
    let profiles = [
        Profile::new(),
        Profile::new()
            .with_interest("ai")
            .with_career_role("data scientist")
            .with_experience("advanced")
            .with_goal("skill upgrade"),
        Profile::new()
            .with_interest("unsure")
            .with_career_role("general")
            .with_experience("beginner")
            .with_goal("exploring"),
    ];

    for profile in &profiles {
        for course in catalog.courses() {
            assert!(scorer::score(course, profile) <= 100);
        }
    }

    let ai = catalog.require("artificial intelligence & machine learning")?;
    assert_eq!(scorer::score(ai, &profiles[1]), 100);

    Ok(())
}
