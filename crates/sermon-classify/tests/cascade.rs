//! End-to-end cascade behavior: the documented properties and scenarios
//! the review pipeline depends on.

use std::sync::Arc;

use async_trait::async_trait;
use sermon_classify::{Classifier, ClassifierConfig};
use sermon_face::{FaceError, FaceObservation, FaceResult, FaceVerifier, PrecomputedVerifier};
use sermon_models::{ContentType, Language, TrustLevel, VideoRecord};

fn unverified() -> FaceObservation {
    FaceObservation::unverified()
}

/// Verifier that always errors; the engine must treat it as not-verified.
struct FailingVerifier;

#[async_trait]
impl FaceVerifier for FailingVerifier {
    async fn verify(&self, _video: &VideoRecord) -> FaceResult<FaceObservation> {
        Err(FaceError::fetch_failed("connection reset"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }

    fn performs_recognition(&self) -> bool {
        true
    }
}

// --- Properties ---------------------------------------------------------

#[test]
fn purity_identical_inputs_identical_verdicts() {
    let engine = Classifier::new(ClassifierConfig::default()).unwrap();
    let video = VideoRecord::new("p1", "Pasteur Majila - culte du dimanche")
        .with_description("predication complete")
        .with_duration(2800);

    let first = engine.score(&video, unverified());
    let second = engine.score(&video, unverified());
    assert_eq!(first, second);
}

#[test]
fn verified_channel_always_auto_accepts() {
    let mut config = ClassifierConfig::default();
    config.trust_tiers.verified = vec!["majila ministries official".to_string()];
    let engine = Classifier::new(config).unwrap();

    let titles = [
        "Worship Medley - Official Video",
        "random clip",
        "Apostle Narcisse Majila - Sunday Sermon",
    ];
    for title in titles {
        let video = VideoRecord::new("p2", title)
            .with_channel("Majila Ministries Official")
            .with_duration(90);
        let result = engine.score(&video, unverified());
        assert_eq!(result.content_type, ContentType::Preaching, "{title}");
        assert_eq!(result.confidence_score, 0.95, "{title}");
        assert!(!result.needs_review, "{title}");
    }
}

#[test]
fn church_name_alone_never_yields_preaching() {
    let mut config = ClassifierConfig::default();
    config.trust_tiers.known = vec!["some local church".to_string()];
    config.strict_channels.clear();
    let engine = Classifier::new(config).unwrap();

    // Unknown channel: rejected by the unknown-channel gate.
    let video = VideoRecord::new("p3a", "Ramah Full Gospel teaching service")
        .with_duration(3600);
    let result = engine.score(&video, unverified());
    assert_eq!(result.content_type, ContentType::Unknown);
    assert_eq!(result.confidence_score, 0.20);
    assert!(!result.identity_matched);

    // Known (trust 1) channel: rejected by the personal-name gate.
    let video = VideoRecord::new("p3b", "Ramah Full Gospel teaching service")
        .with_channel("Some Local Church")
        .with_duration(3600);
    let result = engine.score(&video, unverified());
    assert_eq!(result.content_type, ContentType::Unknown);
    assert_eq!(result.confidence_score, 0.25);
    assert!(!result.identity_matched);
}

#[test]
fn verified_face_above_threshold_is_decisive() {
    let engine = Classifier::new(ClassifierConfig::default()).unwrap();
    let video = VideoRecord::new("p4", "untitled upload").with_duration(1200);

    let result = engine.score(&video, FaceObservation::verified(0.85));
    assert_eq!(result.content_type, ContentType::Preaching);
    assert_eq!(result.confidence_score, 0.98);
    assert!(result.face_verified);
    assert!(!result.needs_review);
}

#[test]
fn duration_never_hurts_as_it_grows() {
    let engine = Classifier::new(ClassifierConfig::default()).unwrap();
    // One representative per duration band, ascending.
    let bands = [50, 400, 900, 2000, 3600];

    let mut previous_confidence = 0.0_f64;
    for seconds in bands {
        let video = VideoRecord::new("p5", "Pasteur Majila priere").with_duration(seconds);
        let result = engine.score(&video, unverified());
        assert_eq!(result.content_type, ContentType::Preaching, "{seconds}s");
        assert!(
            result.confidence_score >= previous_confidence,
            "confidence dropped at {seconds}s: {} < {previous_confidence}",
            result.confidence_score
        );
        previous_confidence = result.confidence_score;
    }
}

#[test]
fn language_detection_is_independent_of_verdict() {
    let engine = Classifier::new(ClassifierConfig::default()).unwrap();
    let text = "culte du dimanche priere et delivrance";

    // Same text, three different verdict paths.
    let rejected = VideoRecord::new("p6a", text).with_duration(50);
    let accepted = VideoRecord::new("p6b", format!("Narcisse Majila {text}"))
        .with_duration(3600);
    let faced = VideoRecord::new("p6c", text).with_duration(50);

    let r1 = engine.score(&rejected, unverified());
    let r2 = engine.score(&accepted, unverified());
    let r3 = engine.score(&faced, FaceObservation::verified(0.9));

    assert_ne!(r1.content_type, r2.content_type);
    assert_eq!(r1.language_detected, Language::French);
    assert_eq!(r2.language_detected, Language::French);
    assert_eq!(r3.language_detected, Language::French);
}

// --- Scenarios ----------------------------------------------------------

#[test]
fn scenario_named_sermon_from_unknown_channel() {
    let engine = Classifier::new(ClassifierConfig::default()).unwrap();
    let video = VideoRecord::new("s1", "Apostle Narcisse Majila — Sunday Sermon Part 2")
        .with_duration(3600);

    let result = engine.score(&video, unverified());
    assert_eq!(result.content_type, ContentType::Preaching);
    assert!(result.confidence_score >= 0.55);
    assert!(result.identity_matched);
    assert_eq!(result.channel_trust_level, TrustLevel::Unknown);
}

#[test]
fn scenario_choir_video_from_trusted_church_channel() {
    let engine = Classifier::new(ClassifierConfig::default()).unwrap();
    let video = VideoRecord::new("s2", "Ramah Full Gospel Church Choir — Official Video")
        .with_channel("Ramah Full Gospel Church Pretoria")
        .with_duration(240);

    let result = engine.score(&video, unverified());
    // The strong-music short circuit fires before identity is even checked.
    assert_eq!(result.content_type, ContentType::Music);
    assert_eq!(result.confidence_score, 0.95);
    assert!(!result.needs_review);
    assert_eq!(result.channel_trust_level, TrustLevel::Trusted);
}

#[test]
fn scenario_bare_short_clip_from_unknown_channel() {
    let engine = Classifier::new(ClassifierConfig::default()).unwrap();
    let video = VideoRecord::new("s3", "VID 20240114").with_duration(50);

    let result = engine.score(&video, unverified());
    assert_eq!(result.content_type, ContentType::Unknown);
    assert_eq!(result.confidence_score, 0.20);
    assert!(result.needs_review);
}

#[test]
fn scenario_french_service_from_known_channel() {
    let mut config = ClassifierConfig::default();
    config.trust_tiers.known = vec!["maison de priere".to_string()];
    let engine = Classifier::new(config).unwrap();

    let video = VideoRecord::new("s4", "Pasteur Majila — culte du dimanche")
        .with_channel("Maison de Priere")
        .with_duration(2800);

    let result = engine.score(&video, unverified());
    assert_eq!(result.content_type, ContentType::Preaching);
    assert!(
        result.confidence_score >= 0.55 && result.confidence_score <= 0.90,
        "got {}",
        result.confidence_score
    );
    assert_eq!(result.channel_trust_level, TrustLevel::Known);
    assert_eq!(result.language_detected, Language::French);
}

#[test]
fn scenario_config_supplied_as_json_in_display_casing() {
    // Operators write marker tables and channel lists in their on-screen
    // casing; matching must behave exactly as with the normalized defaults.
    let config: ClassifierConfig = serde_json::from_str(
        r#"{
            "identity": {
                "required_names": ["Narcisse Majila"],
                "acceptable_names": ["Pasteur Majila"],
                "church_names": ["Ramah Full Gospel"]
            },
            "trust_tiers": {
                "verified": [],
                "trusted": ["Some Church"],
                "known": []
            },
            "strict_channels": []
        }"#,
    )
    .unwrap();
    let engine = Classifier::new(config).unwrap();

    let video = VideoRecord::new("j1", "Apostle Narcisse Majila - Sunday Sermon Part 2")
        .with_channel("Some Church")
        .with_duration(3600);
    let result = engine.score(&video, unverified());

    assert!(result.identity_matched);
    assert_eq!(result.channel_trust_level, TrustLevel::Trusted);
    assert_eq!(result.content_type, ContentType::Preaching);
    assert_eq!(result.confidence_score, 0.95);
}

// --- Verifier integration ----------------------------------------------

#[tokio::test]
async fn classify_uses_injected_verifier_outcomes() {
    let mut verifier = PrecomputedVerifier::default();
    verifier.insert("known", FaceObservation::verified(0.88));

    let engine =
        Classifier::with_verifier(ClassifierConfig::default(), Arc::new(verifier)).unwrap();

    let known = VideoRecord::new("known", "untitled upload").with_duration(1200);
    let result = engine.classify(&known).await;
    assert_eq!(result.content_type, ContentType::Preaching);
    assert_eq!(result.confidence_score, 0.98);

    let unknown = VideoRecord::new("other", "untitled upload").with_duration(1200);
    let result = engine.classify(&unknown).await;
    assert_eq!(result.content_type, ContentType::Unknown);
    assert!(!result.face_verified);
}

#[tokio::test]
async fn verifier_failure_is_treated_as_not_verified() {
    let engine =
        Classifier::with_verifier(ClassifierConfig::default(), Arc::new(FailingVerifier)).unwrap();

    let video = VideoRecord::new("f1", "Apostle Narcisse Majila — Sunday Sermon Part 2")
        .with_duration(3600);
    let result = engine.classify(&video).await;

    // Identical to the no-verifier path for this record.
    let expected = Classifier::new(ClassifierConfig::default())
        .unwrap()
        .score(&video, unverified());
    assert_eq!(result, expected);
}

#[tokio::test]
async fn batch_classification_preserves_input_order() {
    let engine = Classifier::new(ClassifierConfig::default()).unwrap();
    let videos = vec![
        VideoRecord::new("b1", "Apostle Narcisse Majila — Sunday Sermon Part 2")
            .with_duration(3600),
        VideoRecord::new("b2", "Choir — Official Video").with_duration(240),
        VideoRecord::new("b3", "VID 20240114").with_duration(50),
    ];

    let results = engine.classify_batch(&videos).await;
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].content_type, ContentType::Preaching);
    assert_eq!(results[1].content_type, ContentType::Music);
    assert_eq!(results[2].content_type, ContentType::Unknown);
}
