use crate::ai::mock::{MockBehavior, MockProvider, MOCK_REPLY};
use crate::chat::session::{submit_user_turn, ChatSession, ERROR_REPLY_PREFIX, GREETING};
use crate::chat::turn::{Role, Turn};
use crate::prompt::StylePreference;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

fn setup_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

fn roles(session: &ChatSession) -> Vec<Role> {
    session.turns().iter().map(|t| t.role).collect()
}

#[test]
fn test_new_session_seeds_greeting() {
    let session = ChatSession::new(StylePreference::default());

    assert_eq!(session.turns().len(), 1);
    assert_eq!(session.turns()[0].role, Role::Assistant);
    assert_eq!(session.turns()[0].content, GREETING);
    assert_eq!(session.style(), StylePreference::Comprehensive);
}

#[test]
fn test_turns_are_append_only_and_ordered() {
    let mut session = ChatSession::new(StylePreference::default());

    session.append(Turn::user("第一句"));
    session.append(Turn::assistant("first reply"));
    session.append(Turn::user("第二句"));

    let contents: Vec<&str> = session.turns().iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec![GREETING, "第一句", "first reply", "第二句"]);
    assert_eq!(
        roles(&session),
        vec![Role::Assistant, Role::User, Role::Assistant, Role::User]
    );
}

#[test]
fn test_set_style_reports_distinct_changes() {
    let mut session = ChatSession::new(StylePreference::Comprehensive);

    assert!(!session.set_style(StylePreference::Comprehensive));
    assert_eq!(session.style(), StylePreference::Comprehensive);

    assert!(session.set_style(StylePreference::Business));
    assert_eq!(session.style(), StylePreference::Business);

    assert!(!session.set_style(StylePreference::Business));
}

#[test]
fn test_clear_reseeds_greeting_and_keeps_style() {
    let mut session = ChatSession::new(StylePreference::Academic);
    session.append(Turn::user("随便写点"));
    session.append(Turn::assistant("whatever"));

    session.clear();

    assert_eq!(session.turns().len(), 1);
    assert_eq!(session.turns()[0].content, GREETING);
    assert_eq!(session.style(), StylePreference::Academic);
}

#[tokio::test]
async fn test_submit_appends_user_then_reply() {
    setup_tracing();
    let mut session = ChatSession::new(StylePreference::default());
    let provider = MockProvider::new(MockBehavior::ReplyWith {
        content: "Great weather today.".to_string(),
    });

    let outcome = submit_user_turn(&mut session, &provider, "今天天气很好").await;

    assert_eq!(
        roles(&session),
        vec![Role::Assistant, Role::User, Role::Assistant],
        "Expected greeting, user turn, assistant reply"
    );
    assert_eq!(session.turns()[1].content, "今天天气很好");
    assert_eq!(session.turns()[2].content, "Great weather today.");
    assert_eq!(outcome.reply.content, "Great weather today.");
    assert!(outcome.error.is_none());
    assert!(outcome.usage.is_some());
}

#[tokio::test]
async fn test_submit_sends_styled_two_part_prompt() {
    let mut session = ChatSession::new(StylePreference::Conversational);
    let provider = MockProvider::new(MockBehavior::Success);

    submit_user_turn(&mut session, &provider, "这个想法听起来很有创意。").await;

    let request = provider.get_last_captured_request().unwrap();
    assert_eq!(request.user_message, "这个想法听起来很有创意。");
    assert!(request
        .system_instruction
        .contains(StylePreference::Conversational.instruction()));
    assert!(
        !request.system_instruction.contains("{style_instruction}"),
        "Slot must be substituted before the request goes out"
    );
    assert_eq!(provider.get_call_count(), 1, "Exactly one call per turn");
}

#[tokio::test]
async fn test_submit_failure_appends_single_error_turn() {
    setup_tracing();
    let mut session = ChatSession::new(StylePreference::default());
    let provider = MockProvider::new(MockBehavior::ErrorWith {
        message: "connection refused".to_string(),
    });

    let before = session.turns().len();
    let outcome = submit_user_turn(&mut session, &provider, "今天天气很好").await;

    // One user turn plus exactly one synthesized assistant turn.
    assert_eq!(session.turns().len(), before + 2);
    let reply = session.turns().last().unwrap();
    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(
        reply.content,
        format!("{ERROR_REPLY_PREFIX}: connection refused")
    );
    assert!(reply.content.starts_with("生成表达时出现错误"));
    assert_eq!(outcome.error.as_deref(), Some("connection refused"));
    assert!(outcome.usage.is_none());
}

#[tokio::test]
async fn test_session_survives_failure_and_recovers() {
    let mut session = ChatSession::new(StylePreference::default());
    let provider = MockProvider::new(MockBehavior::AlwaysError);

    let failed = submit_user_turn(&mut session, &provider, "第一次").await;
    assert!(failed.error.is_some());

    provider.set_behavior(MockBehavior::ReplyWith {
        content: "second answer".to_string(),
    });
    let recovered = submit_user_turn(&mut session, &provider, "第二次").await;

    assert!(recovered.error.is_none());
    assert_eq!(recovered.reply.content, "second answer");
    assert_eq!(provider.get_call_count(), 2);
    assert_eq!(
        session.turns().len(),
        5,
        "greeting + 2 user turns + 2 assistant turns"
    );
}

#[tokio::test]
async fn test_style_change_applies_to_next_request_only() {
    let mut session = ChatSession::new(StylePreference::Comprehensive);
    let provider = MockProvider::new(MockBehavior::Success);

    submit_user_turn(&mut session, &provider, "今天的工作进展很顺利。").await;
    let first_reply = session.turns()[2].content.clone();

    assert!(session.set_style(StylePreference::Business));
    submit_user_turn(&mut session, &provider, "今天的工作进展很顺利。").await;

    let requests = provider.get_captured_requests();
    assert!(requests[0]
        .system_instruction
        .contains(StylePreference::Comprehensive.instruction()));
    assert!(requests[1]
        .system_instruction
        .contains(StylePreference::Business.instruction()));
    assert!(!requests[1]
        .system_instruction
        .contains(StylePreference::Comprehensive.instruction()));

    // The switch must not rewrite anything already in the transcript.
    assert_eq!(session.turns()[2].content, first_reply);
}

#[tokio::test]
async fn test_comprehensive_flow_returns_variants_and_recommendation() {
    setup_tracing();
    let mut session = ChatSession::new(StylePreference::Comprehensive);
    let provider = MockProvider::new(MockBehavior::Success);

    let outcome = submit_user_turn(&mut session, &provider, "今天天气很好").await;

    assert!(outcome.error.is_none());
    assert_eq!(outcome.reply.content, MOCK_REPLY);
    assert!(
        outcome.reply.content.matches('✅').count() >= 3,
        "Expected multiple labelled variants"
    );
    assert!(outcome.reply.content.contains("中文回译"));
    assert!(outcome.reply.content.contains("🪄 总结推荐"));
}
