use artbot::ai::config::AiConfig;
use artbot::tests::util::init_test_db;
use artbot::Command;
use teloxide::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_me() -> teloxide::types::Me {
    teloxide::types::Me {
        user: teloxide::types::User {
            id: teloxide::types::UserId(1),
            is_bot: true,
            first_name: "Test".into(),
            last_name: None,
            username: Some("testbot".into()),
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        },
        can_join_groups: true,
        can_read_all_group_messages: true,
        supports_inline_queries: false,
        can_connect_to_business: false,
    }
}

fn build_handler() -> teloxide::dispatching::UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(Update::filter_callback_query().endpoint(artbot::handlers::callback_handler))
        .branch(
            Update::filter_message()
                .branch(dptree::entry().filter_command::<Command>().endpoint(
                    |bot: Bot,
                     msg: Message,
                     cmd: Command,
                     db: artbot::db::Database,
                     met: artbot::met::MetClient| async move {
                        cmd.dispatch(bot, msg, db, met).await
                    },
                ))
                .branch(dptree::endpoint(artbot::handlers::handle_search_text)),
        )
}

#[tokio::test]
async fn help_command_sends_one_message() {
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"ok":true,"result":{"message_id":1,"date":0,"chat":{"id":1,"type":"private"}}}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&telegram)
        .await;

    let bot = Bot::new("TEST").set_api_url(reqwest::Url::parse(&telegram.uri()).unwrap());
    let db = init_test_db().await;
    let ai = AiConfig::default();
    let met = artbot::met::MetClient::new("http://unused.invalid");

    let help_update: Update = serde_json::from_str(
        r#"{"update_id":1,"message":{"message_id":1,"date":0,"chat":{"id":1,"type":"private"},"text":"/help","entities":[{"type":"bot_command","offset":0,"length":5}]}}"#,
    )
    .unwrap();

    let _ = build_handler()
        .dispatch(dptree::deps![help_update, bot, test_me(), db, ai, met])
        .await;

    telegram.verify().await;
}

#[tokio::test]
async fn text_search_reports_no_results_after_relaxation() {
    let telegram = MockServer::start().await;
    // One "searching" status message plus one "no artworks" reply.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"ok":true,"result":{"message_id":1,"date":0,"chat":{"id":1,"type":"private"}}}"#,
            "application/json",
        ))
        .expect(2)
        .mount(&telegram)
        .await;

    let services = MockServer::start().await;
    // Generation unavailable: local fallback yields two keywords, so the
    // museum sees two relaxation attempts.
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&services)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"objectIDs":[]}"#, "application/json"),
        )
        .expect(2)
        .mount(&services)
        .await;

    let bot = Bot::new("TEST").set_api_url(reqwest::Url::parse(&telegram.uri()).unwrap());
    let db = init_test_db().await;
    let ai = AiConfig {
        base_url: services.uri(),
        ..AiConfig::default()
    };
    let met = artbot::met::MetClient::new(services.uri());

    let text_update: Update = serde_json::from_str(
        r#"{"update_id":2,"message":{"message_id":2,"date":0,"chat":{"id":1,"type":"private"},"text":"bright sunflowers"}}"#,
    )
    .unwrap();

    let _ = build_handler()
        .dispatch(dptree::deps![text_update, bot, test_me(), db, ai, met])
        .await;

    telegram.verify().await;
    services.verify().await;
}

#[tokio::test]
async fn language_callback_stores_locale_and_shows_menu() {
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/EditMessageText"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"ok":true,"result":true}"#, "application/json"),
        )
        .expect(1)
        .mount(&telegram)
        .await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"ok":true,"result":{"message_id":3,"date":0,"chat":{"id":1,"type":"private"}}}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&telegram)
        .await;
    Mock::given(method("POST"))
        .and(path("/botTEST/AnswerCallbackQuery"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"ok":true,"result":true}"#, "application/json"),
        )
        .expect(1)
        .mount(&telegram)
        .await;

    let bot = Bot::new("TEST").set_api_url(reqwest::Url::parse(&telegram.uri()).unwrap());
    let db = init_test_db().await;
    let ai = AiConfig::default();
    let met = artbot::met::MetClient::new("http://unused.invalid");

    let callback_update: Update = serde_json::from_str(
        r#"{"update_id":3,"callback_query":{"id":"cb1","from":{"id":5,"is_bot":false,"first_name":"U"},"message":{"message_id":2,"date":0,"chat":{"id":1,"type":"private"}},"chat_instance":"ci","data":"lang_ru"}}"#,
    )
    .unwrap();

    let _ = build_handler()
        .dispatch(dptree::deps![callback_update, bot, test_me(), db.clone(), ai, met])
        .await;

    telegram.verify().await;
    assert_eq!(
        db.get_locale(teloxide::types::ChatId(1)).await.unwrap(),
        Some(artbot::lang::Locale::Ru)
    );
}
