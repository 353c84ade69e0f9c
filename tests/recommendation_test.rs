use age_advisor::core::advisor::{normalize_gender, GENERIC_MEASUREMENTS_TIP};
use age_advisor::{recommend, AdvisorError, GenderBucket, LifeStage};
use anyhow::Result;

#[test]
fn test_female_adult_has_stage_and_tips() -> Result<()> {
    let rec = recommend(30, Some("female"))?;
    assert!(!rec.life_stage.label().is_empty());
    assert!(!rec.tips.is_empty());
    assert_eq!(rec.measurements.len(), 3);
    Ok(())
}

#[test]
fn test_gender_routing_ignores_case_and_whitespace() -> Result<()> {
    let male = recommend(45, Some("male"))?;
    for variant in ["MALE", " male ", "m", "M", "\tMale\n"] {
        assert_eq!(normalize_gender(Some(variant)), GenderBucket::Male, "{:?}", variant);
        assert_eq!(recommend(45, Some(variant))?, male, "{:?}", variant);
    }

    let female = recommend(45, Some("female"))?;
    for variant in ["Female", "  F", "f "] {
        assert_eq!(recommend(45, Some(variant))?, female, "{:?}", variant);
    }
    Ok(())
}

#[test]
fn test_unspecified_gender_gets_generic_note() -> Result<()> {
    for gender in [None, Some(""), Some("   "), Some("other")] {
        let rec = recommend(16, gender)?;
        assert_eq!(rec.life_stage, LifeStage::Teen);
        assert_eq!(rec.tips.len(), 2);
        assert_eq!(rec.tips[1], GENERIC_MEASUREMENTS_TIP);
    }
    Ok(())
}

#[test]
fn test_every_stage_has_its_own_tip() -> Result<()> {
    let ages = [5, 15, 25, 50, 70];
    let tips: Vec<String> = ages
        .iter()
        .map(|age| recommend(*age, Some("m")).map(|rec| rec.tips[0].clone()))
        .collect::<Result<_, _>>()?;
    for (i, tip) in tips.iter().enumerate() {
        assert!(!tip.is_empty());
        assert!(!tips[i + 1..].contains(tip), "duplicate tip {:?}", tip);
    }
    Ok(())
}

#[test]
fn test_control_characters_route_to_generic() -> Result<()> {
    for gender in ["ma\tle", "fe\u{0}male"] {
        assert_eq!(normalize_gender(Some(gender)), GenderBucket::Generic);
        let rec = recommend(30, Some(gender))?;
        assert_eq!(rec, recommend(30, None)?);
        assert!(rec.tips.iter().any(|tip| tip == GENERIC_MEASUREMENTS_TIP));
    }
    Ok(())
}

#[test]
fn test_malformed_inputs_are_rejected() {
    assert!(matches!(
        recommend(-5, None),
        Err(AdvisorError::InvalidArgument { .. })
    ));
    assert!(matches!(
        recommend(i64::MAX, None),
        Err(AdvisorError::InvalidArgument { .. })
    ));
}

#[test]
fn test_recommendation_serializes_like_the_form_output() -> Result<()> {
    let rec = recommend(50, Some("female"))?;
    let json = serde_json::to_value(&rec)?;
    assert_eq!(json["life_stage"], "Middle-aged");
    assert_eq!(json["measurements"]["Chest_cm"], "80-100 (varies by height)");
    assert!(json["tips"].is_array());
    Ok(())
}
