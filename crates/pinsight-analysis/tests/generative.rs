//! Generative text path tests using wiremock HTTP mocks.

use std::path::PathBuf;

use pinsight_analysis::{analyze_profile, synthesize, AnalyzeOptions, GenerativeSettings};
use pinsight_core::{AppConfig, RawProfile, TextSource};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(base_url: &str) -> GenerativeSettings {
    GenerativeSettings {
        api_key: None,
        model: "gpt-4o-mini".to_string(),
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

fn bakery_profile() -> RawProfile {
    serde_json::from_value(serde_json::json!({
        "username": "bia",
        "fullName": "Bia",
        "biography": "bolos bolos caseiros",
        "posts": [
            { "id": "p1", "caption": "bolos de festa", "timestamp": "2024-01-01T00:00:00Z" }
        ]
    }))
    .expect("valid profile json")
}

fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

fn good_reply() -> String {
    serde_json::json!({
        "toneOfVoice": "Doce e próximo",
        "themes": ["Confeitaria", "Bolos"],
        "headlineIdeas": ["Bolos que abraçam", "Festa com sabor de casa"],
        "primaryCta": "Peça seu bolo"
    })
    .to_string()
}

#[tokio::test]
async fn successful_reply_drives_text_insights() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&good_reply())))
        .expect(1)
        .mount(&server)
        .await;

    let insights = synthesize(&bakery_profile(), &settings(&server.uri()), Some("sk-test")).await;

    assert_eq!(insights.source, TextSource::Generative);
    assert_eq!(insights.tone_of_voice, "Doce e próximo");
    assert_eq!(
        insights.headline_ideas,
        vec!["Bolos que abraçam", "Festa com sabor de casa"]
    );
    assert_eq!(
        insights.keywords,
        vec!["Confeitaria", "Bolos", "caseiros", "festa"]
    );
    assert_eq!(
        insights.summary,
        "Conteúdo focado em Confeitaria, Bolos com tom de voz doce e próximo."
    );
    assert_eq!(insights.primary_cta.as_deref(), Some("Peça seu bolo"));
}

#[tokio::test]
async fn configured_key_is_used_without_override() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-configured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&good_reply())))
        .expect(1)
        .mount(&server)
        .await;

    let mut s = settings(&server.uri());
    s.api_key = Some("sk-configured".to_string());
    let insights = synthesize(&bakery_profile(), &s, None).await;
    assert_eq!(insights.source, TextSource::Generative);
}

#[tokio::test]
async fn keywords_are_capped_at_ten() {
    let server = MockServer::start().await;
    let reply = serde_json::json!({
        "toneOfVoice": "Leve",
        "themes": ["t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8", "t9"],
        "headlineIdeas": ["h"],
        "primaryCta": "c"
    })
    .to_string();
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&reply)))
        .mount(&server)
        .await;

    let insights = synthesize(&bakery_profile(), &settings(&server.uri()), Some("sk-test")).await;
    assert_eq!(insights.keywords.len(), 10);
    assert_eq!(insights.keywords[9], "bolos");
}

#[tokio::test]
async fn server_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let insights = synthesize(&bakery_profile(), &settings(&server.uri()), Some("sk-test")).await;
    assert_eq!(insights.source, TextSource::Fallback);
    assert_eq!(insights.keywords[0], "bolos");
    assert!(insights.primary_cta.is_none());
}

#[tokio::test]
async fn malformed_content_falls_back() {
    let server = MockServer::start().await;
    let reply = serde_json::json!({ "tone": "Leve", "ideas": [] }).to_string();
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&reply)))
        .mount(&server)
        .await;

    let insights = synthesize(&bakery_profile(), &settings(&server.uri()), Some("sk-test")).await;
    assert_eq!(insights.source, TextSource::Fallback);
}

#[tokio::test]
async fn empty_choices_fall_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
        )
        .mount(&server)
        .await;

    let insights = synthesize(&bakery_profile(), &settings(&server.uri()), Some("sk-test")).await;
    assert_eq!(insights.source, TextSource::Fallback);
}

#[tokio::test]
async fn pipeline_appends_generative_primary_cta() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&good_reply())))
        .mount(&server)
        .await;

    let config = AppConfig {
        fixtures_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures"),
        output_dir: PathBuf::from("unused"),
        log_level: "info".to_string(),
        openai_api_key: None,
        openai_model: "gpt-4o-mini".to_string(),
        openai_base_url: server.uri(),
        generative_timeout_secs: 5,
        instagram_access_token: None,
        instagram_account_id: None,
    };
    let options = AnalyzeOptions {
        api_key: Some("sk-test".to_string()),
        ..AnalyzeOptions::default()
    };

    let insight = analyze_profile(&config, "demo_quiet", &options)
        .await
        .unwrap()
        .insight;
    assert_eq!(insight.tone_of_voice, "Doce e próximo");
    assert_eq!(
        insight.ctas,
        vec!["Fale comigo pelo Instagram", "Peça seu bolo"]
    );
    assert_eq!(insight.headline_ideas[0], "Bolos que abraçam");
}
