use artbot::lang::Locale;
use artbot::tests::util::init_test_db;
use teloxide::types::ChatId;

#[tokio::test]
async fn new_chat_has_no_session_and_defaults_to_english() {
    let db = init_test_db().await;
    let chat = ChatId(100);

    assert_eq!(db.get_locale(chat).await.unwrap(), None);
    assert_eq!(db.locale_or_default(chat).await, Locale::En);
}

#[tokio::test]
async fn locale_persists_per_chat() {
    let db = init_test_db().await;
    let chat_a = ChatId(1);
    let chat_b = ChatId(2);

    db.set_locale(chat_a, Locale::Ru).await.unwrap();
    db.set_locale(chat_b, Locale::De).await.unwrap();

    assert_eq!(db.locale_or_default(chat_a).await, Locale::Ru);
    assert_eq!(db.locale_or_default(chat_b).await, Locale::De);
}

#[tokio::test]
async fn selecting_again_overwrites_the_locale() {
    let db = init_test_db().await;
    let chat = ChatId(7);

    db.set_locale(chat, Locale::Ru).await.unwrap();
    db.set_locale(chat, Locale::En).await.unwrap();

    assert_eq!(db.get_locale(chat).await.unwrap(), Some(Locale::En));
}

#[tokio::test]
async fn clearing_removes_the_session() {
    let db = init_test_db().await;
    let chat = ChatId(9);

    db.set_locale(chat, Locale::De).await.unwrap();
    db.clear_session(chat).await.unwrap();

    assert_eq!(db.get_locale(chat).await.unwrap(), None);
    assert_eq!(db.locale_or_default(chat).await, Locale::En);
}
