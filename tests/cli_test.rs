mod common;

use common::SmartHelpTest;
use common::stub_gemini::StubGemini;
use serde_json::Value;

fn ticket_ids(json: &Value) -> Vec<String> {
    json["tickets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// ls
// ============================================================================

#[test]
fn test_ls_defaults_to_focus() {
    let smarthelp = SmartHelpTest::new();
    let json = smarthelp.run_json(&["ls", "--json"]);

    assert_eq!(json["filter"], "FOCUS");
    assert_eq!(ticket_ids(&json), ["T-1024", "T-1025"]);
    assert_eq!(
        json["counts"],
        serde_json::json!({"focus": 2, "review": 1, "escalated": 1, "snoozed": 1})
    );
}

#[test]
fn test_ls_each_bucket() {
    let smarthelp = SmartHelpTest::new();
    for (filter, expected) in [
        ("review", "T-1026"),
        ("escalated", "T-1027"),
        ("snoozed", "T-1028"),
    ] {
        let json = smarthelp.run_json(&["ls", "--filter", filter, "--json"]);
        assert_eq!(ticket_ids(&json), [expected], "bucket {filter}");
    }
}

#[test]
fn test_ls_all_and_search() {
    let smarthelp = SmartHelpTest::new();
    let all = smarthelp.run_json(&["ls", "--all", "--json"]);
    assert_eq!(all["filter"], "ALL");
    assert_eq!(ticket_ids(&all).len(), 5);

    let searched = smarthelp.run_json(&["ls", "--all", "--search", "refund", "--json"]);
    assert_eq!(ticket_ids(&searched), ["T-1026"]);
    assert_eq!(searched["search"], "refund");
}

#[test]
fn test_ls_table_output() {
    let smarthelp = SmartHelpTest::new();
    let stdout = smarthelp.run_success(&["ls"]);
    assert!(stdout.contains("Focus (2)"));
    assert!(stdout.contains("T-1024"));
    assert!(stdout.contains("CRITICAL"));
    assert!(stdout.contains("Sarah Chen (ENTERPRISE)"));
    assert!(!stdout.contains("T-1026"));
}

#[test]
fn test_ls_empty_search() {
    let smarthelp = SmartHelpTest::new();
    let stdout = smarthelp.run_success(&["ls", "--search", "zzzzzz"]);
    assert!(stdout.contains("No tickets."));
}

#[test]
fn test_ls_rejects_unknown_filter() {
    let smarthelp = SmartHelpTest::new();
    let stderr = smarthelp.run_failure(&["ls", "--filter", "urgent"]);
    assert!(stderr.contains("Invalid filter. Must be one of: focus, review, escalated, snoozed"));
}

// ============================================================================
// show
// ============================================================================

#[test]
fn test_show_by_partial_id() {
    let smarthelp = SmartHelpTest::new();
    let json = smarthelp.run_json(&["show", "1024", "--json"]);

    assert_eq!(json["id"], "T-1024");
    assert_eq!(json["status"], "OPEN");
    assert_eq!(json["priority"], "CRITICAL");
    assert_eq!(json["aiConfidence"], 94);
    assert_eq!(json["customer"]["name"], "Sarah Chen");
    assert_eq!(json["customer"]["tier"], "ENTERPRISE");
    assert_eq!(json["slaBreached"], false);
    assert!(json["minutesUntilSla"].as_i64().unwrap() > 0);
}

#[test]
fn test_show_text() {
    let smarthelp = SmartHelpTest::new();
    let stdout = smarthelp.run_success(&["show", "T-1026"]);
    assert!(stdout.contains("Refund request - extremely unhappy"));
    assert!(stdout.contains("Elena Rodriguez"));
    assert!(stdout.contains("Billing / Refund / Churn Risk"));
}

#[test]
fn test_show_unknown_ticket_fails() {
    let smarthelp = SmartHelpTest::new();
    let stderr = smarthelp.run_failure(&["show", "T-9999"]);
    assert!(stderr.contains("Error: ticket 'T-9999' not found"));
}

// ============================================================================
// draft / analyze (mock)
// ============================================================================

#[test]
fn test_draft_uses_mock_without_key() {
    let smarthelp = SmartHelpTest::new();
    let json = smarthelp.run_json(&[
        "draft",
        "1026",
        "--tone",
        "formal",
        "--instruction",
        "offer a refund",
        "--json",
    ]);

    assert_eq!(json["mode"], "mock");
    assert_eq!(json["tone"], "Formal");
    assert_eq!(json["instruction"], "offer a refund");
    insta::assert_snapshot!(json["draft"].as_str().unwrap(), @r#"
    [Mock AI (Formal)]: Based on your request to "offer a refund", here is a draft...

    Hi Elena Rodriguez,

    Thank you for reaching out regarding Refund request - extremely unhappy. We are looking into it.
    "#);
}

#[test]
fn test_draft_blank_instruction_means_reply() {
    let smarthelp = SmartHelpTest::new();
    let json = smarthelp.run_json(&["draft", "1025", "--tone", "direct", "--instruction", "", "--json"]);
    let draft = json["draft"].as_str().unwrap();
    assert!(draft.starts_with(r#"[Mock AI (Direct)]: Based on your request to "reply", here is a draft..."#));
}

#[test]
fn test_zero_timeout_in_config_file_is_rejected() {
    let smarthelp = SmartHelpTest::new();
    smarthelp.write_config("ai:\n  timeout: 0\n");
    let stderr = smarthelp.run_failure(&["config", "get", "ai.timeout"]);
    assert!(stderr.contains("YAML parse error"));
    assert!(stderr.contains("positive number of seconds"));
}

#[test]
fn test_draft_rejects_unknown_tone() {
    let smarthelp = SmartHelpTest::new();
    let stderr = smarthelp.run_failure(&["draft", "1026", "--tone", "casual"]);
    assert!(stderr.contains("Invalid tone. Must be one of: formal, empathetic, direct"));
}

#[test]
fn test_analyze_uses_mock_without_key() {
    let smarthelp = SmartHelpTest::new();
    let json = smarthelp.run_json(&["analyze", "1027", "--json"]);
    assert_eq!(
        json,
        serde_json::json!({
            "id": "T-1027",
            "mode": "mock",
            "reason": "Complex technical issue involving production infrastructure.",
            "recommendedTeam": "Level 3 - Engineering Support",
        })
    );
}

// ============================================================================
// draft / analyze (live, against a stub server)
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_draft_uses_configured_live_service() {
    let stub = StubGemini::with_parts(&["Hi Sarah, fixed."]).await;
    let smarthelp = SmartHelpTest::new();
    smarthelp.write_config(&format!(
        "ai:\n  api_key: file-key-123\n  model: gemini-test\n  base_url: {}\n",
        stub.base_url
    ));

    let json = smarthelp.run_json(&["draft", "1024", "--json"]);
    assert_eq!(json["mode"], "live");
    assert_eq!(json["draft"], "Hi Sarah, fixed.");

    let requests = stub.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].api_key.as_deref(), Some("file-key-123"));
    assert_eq!(requests[0].path, "/v1beta/models/gemini-test:generateContent");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_analyze_live_failure_falls_back() {
    let stub = StubGemini::start(500, "{}").await;
    let smarthelp = SmartHelpTest::new();
    smarthelp.write_config(&format!(
        "ai:\n  api_key: file-key-123\n  base_url: {}\n",
        stub.base_url
    ));

    let json = smarthelp.run_json(&["analyze", "1027", "--json"]);
    assert_eq!(json["mode"], "live");
    assert_eq!(json["reason"], "AI Analysis failed");
    assert_eq!(json["recommendedTeam"], "General Support");
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_set_then_get() {
    let smarthelp = SmartHelpTest::new();
    let stdout = smarthelp.run_success(&["config", "set", "ai.model", "gemini-pro"]);
    assert!(stdout.contains("gemini-pro"));

    assert_eq!(
        smarthelp.run_success(&["config", "get", "ai.model"]).trim(),
        "gemini-pro"
    );
    let saved = smarthelp.read_config().unwrap();
    assert!(saved.contains("model: gemini-pro"));
}

#[test]
fn test_config_get_unset_and_defaults() {
    let smarthelp = SmartHelpTest::new();
    assert_eq!(
        smarthelp.run_success(&["config", "get", "log_file"]).trim(),
        "(not set)"
    );
    assert_eq!(
        smarthelp
            .run_success(&["config", "get", "automation.escalation_threshold"])
            .trim(),
        "80"
    );

    let json = smarthelp.run_json(&["config", "get", "ai.api_key", "--json"]);
    assert_eq!(json["key"], "ai.api_key");
    assert!(json["value"].is_null());
}

#[test]
fn test_config_api_key_is_masked() {
    let smarthelp = SmartHelpTest::new();
    let stdout = smarthelp.run_success(&["config", "set", "ai.api_key", "supersecretkey"]);
    assert!(!stdout.contains("supersecretkey"));
    assert!(stdout.contains("su...ey"));

    let json = smarthelp.run_json(&["config", "show", "--json"]);
    assert_eq!(json["values"]["ai.api_key"], "su...ey (config)");
    assert_eq!(json["ai_key_source"], "config");
}

#[test]
fn test_config_set_validates() {
    let smarthelp = SmartHelpTest::new();
    let stderr = smarthelp.run_failure(&["config", "set", "automation.escalation_threshold", "150"]);
    assert!(stderr.contains("percentage must be between 0 and 100"));

    let stderr = smarthelp.run_failure(&["config", "set", "ai.timeout", "0"]);
    assert!(stderr.contains("positive number of seconds"));

    let stderr = smarthelp.run_failure(&["config", "set", "ai.colour", "blue"]);
    assert!(stderr.contains("unknown config key 'ai.colour'"));

    assert!(smarthelp.read_config().is_none());
}

#[test]
fn test_config_show_lists_every_key() {
    let smarthelp = SmartHelpTest::new();
    smarthelp.write_config(
        "team:\n  - name: Ana\n    role: Tier 2\n  - name: Ben\n    role: Billing\n",
    );
    let json = smarthelp.run_json(&["config", "show", "--json"]);

    let values = json["values"].as_object().unwrap();
    assert_eq!(values.len(), 8);
    assert_eq!(values["ai.model"], "gemini-3-flash-preview");
    assert_eq!(values["automation.auto_draft"], "true");
    assert_eq!(values["ai.api_key"], "(not set)");
    assert_eq!(json["team_size"], 2);
}

#[test]
fn test_malformed_config_is_an_error() {
    let smarthelp = SmartHelpTest::new();
    smarthelp.write_config("ai: [not, a, map\n");
    let stderr = smarthelp.run_failure(&["config", "show"]);
    assert!(stderr.contains("YAML parse error"));
}
