//! Tests for endpoint helpers.

use super::ScheduleBlast;
use super::mock::{MockClient, test_client};
use crate::params::Params;

fn only_request_method(mock: &MockClient) -> http::Method {
    mock.captured_requests()[0].method.clone()
}

fn only_request_path(mock: &MockClient) -> String {
    mock.captured_requests()[0].url.path().to_string()
}

mod send {
    use super::*;

    #[tokio::test]
    async fn posts_template_recipients_vars_and_options() {
        let client = test_client(MockClient::json(r#"{"send_id":"s1"}"#));

        let response = client
            .send(
                "Welcome",
                &["ann@example.com", "bob@example.com"],
                Params::new().with("name", "Ann"),
                Params::new().with("test", 1),
                None,
            )
            .await
            .unwrap();

        let mock = client.http_client();
        assert_eq!(response.get_str("send_id"), Some("s1"));
        assert_eq!(only_request_method(mock), http::Method::POST);
        assert_eq!(only_request_path(mock), "/send");

        let sent = mock.sent_params();
        assert_eq!(sent.get_str("template"), Some("Welcome"));
        assert_eq!(sent.get_str("email"), Some("ann@example.com,bob@example.com"));
        assert_eq!(sent.get_str("vars[name]"), Some("Ann"));
        assert_eq!(sent.get_str("options[test]"), Some("1"));
        assert!(!sent.contains_key("schedule_time"));
    }

    #[tokio::test]
    async fn includes_schedule_time_when_given() {
        let client = test_client(MockClient::json("{}"));

        client
            .send(
                "Reminder",
                &["ann@example.com".to_string()],
                Params::new(),
                Params::new(),
                Some("2026-11-01 09:00 UTC"),
            )
            .await
            .unwrap();

        assert_eq!(
            client.http_client().sent_params().get_str("schedule_time"),
            Some("2026-11-01 09:00 UTC")
        );
    }

    #[tokio::test]
    async fn get_send_uses_get() {
        let client = test_client(MockClient::json(r#"{"email":"ann@example.com"}"#));

        client.get_send("s1").await.unwrap();

        let mock = client.http_client();
        assert_eq!(only_request_method(mock), http::Method::GET);
        assert_eq!(mock.sent_params().get_str("send_id"), Some("s1"));
    }

    #[tokio::test]
    async fn cancel_send_uses_delete() {
        let client = test_client(MockClient::json("{}"));

        client.cancel_send("s1").await.unwrap();

        let mock = client.http_client();
        assert_eq!(only_request_method(mock), http::Method::DELETE);
        assert_eq!(only_request_path(mock), "/send");
        assert_eq!(mock.sent_params().get_str("send_id"), Some("s1"));
    }
}

mod email {
    use super::*;

    #[tokio::test]
    async fn get_email_uses_get() {
        let client = test_client(MockClient::json("{}"));

        client.get_email("ann@example.com").await.unwrap();

        let mock = client.http_client();
        assert_eq!(only_request_method(mock), http::Method::GET);
        assert_eq!(only_request_path(mock), "/email");
        assert_eq!(mock.sent_params().get_str("email"), Some("ann@example.com"));
    }

    #[tokio::test]
    async fn set_email_omits_empty_mappings() {
        let client = test_client(MockClient::json("{}"));

        client
            .set_email(
                "ann@example.com",
                Params::new(),
                Params::new().with("news", 1).with("deals", 0),
                Params::new(),
            )
            .await
            .unwrap();

        let sent = client.http_client().sent_params();
        assert_eq!(sent.get_str("lists[news]"), Some("1"));
        assert_eq!(sent.get_str("lists[deals]"), Some("0"));
        assert!(sent.iter().all(|(k, _)| !k.starts_with("vars")));
        assert!(sent.iter().all(|(k, _)| !k.starts_with("templates")));
    }

    #[tokio::test]
    async fn set_email_includes_all_non_empty_mappings() {
        let client = test_client(MockClient::json("{}"));

        client
            .set_email(
                "ann@example.com",
                Params::new().with("city", "Oslo"),
                Params::new().with("news", 1),
                Params::new().with("Welcome", 0),
            )
            .await
            .unwrap();

        let sent = client.http_client().sent_params();
        assert_eq!(sent.get_str("vars[city]"), Some("Oslo"));
        assert_eq!(sent.get_str("lists[news]"), Some("1"));
        assert_eq!(sent.get_str("templates[Welcome]"), Some("0"));
    }
}

mod blast {
    use super::*;

    fn blast() -> ScheduleBlast {
        ScheduleBlast {
            name: "November".to_string(),
            list: "news".to_string(),
            schedule_time: "2026-11-01 09:00 UTC".to_string(),
            from_name: "Example".to_string(),
            from_email: "news@example.com".to_string(),
            subject: "Hello".to_string(),
            content_html: "<p>Hi</p>".to_string(),
            content_text: "Hi".to_string(),
            options: Params::new(),
        }
    }

    #[tokio::test]
    async fn schedule_blast_posts_all_fields() {
        let client = test_client(MockClient::json(r#"{"blast_id":7}"#));

        let response = client.schedule_blast(blast()).await.unwrap();

        let sent = client.http_client().sent_params();
        assert_eq!(response.get("blast_id"), Some(&serde_json::json!(7)));
        assert_eq!(only_request_path(client.http_client()), "/blast");
        assert_eq!(sent.get_str("name"), Some("November"));
        assert_eq!(sent.get_str("list"), Some("news"));
        assert_eq!(sent.get_str("from_email"), Some("news@example.com"));
        assert_eq!(sent.get_str("content_html"), Some("<p>Hi</p>"));
        assert_eq!(sent.get_str("content_text"), Some("Hi"));
    }

    #[tokio::test]
    async fn schedule_blast_options_override_base_fields() {
        let client = test_client(MockClient::json("{}"));
        let blast = ScheduleBlast {
            options: Params::new()
                .with("subject", "Overridden")
                .with("replyto", "help@example.com"),
            ..blast()
        };

        client.schedule_blast(blast).await.unwrap();

        let sent = client.http_client().sent_params();
        assert_eq!(sent.get_str("subject"), Some("Overridden"));
        assert_eq!(sent.get_str("replyto"), Some("help@example.com"));
    }

    #[tokio::test]
    async fn get_blast_uses_get() {
        let client = test_client(MockClient::json("{}"));

        client.get_blast("7").await.unwrap();

        let mock = client.http_client();
        assert_eq!(only_request_method(mock), http::Method::GET);
        assert_eq!(mock.sent_params().get_str("blast_id"), Some("7"));
    }
}

mod contacts {
    use super::*;

    #[tokio::test]
    async fn import_contacts_without_names() {
        let client = test_client(MockClient::json("{}"));

        client
            .import_contacts("ann@example.com", "hunter2", false)
            .await
            .unwrap();

        let sent = client.http_client().sent_params();
        assert_eq!(only_request_path(client.http_client()), "/contacts");
        assert_eq!(sent.get_str("password"), Some("hunter2"));
        assert!(!sent.contains_key("names"));
    }

    #[tokio::test]
    async fn import_contacts_with_names() {
        let client = test_client(MockClient::json("{}"));

        client
            .import_contacts("ann@example.com", "hunter2", true)
            .await
            .unwrap();

        assert_eq!(
            client.http_client().sent_params().get_str("names"),
            Some("1")
        );
    }
}

mod template {
    use super::*;

    #[tokio::test]
    async fn get_template_uses_get() {
        let client = test_client(MockClient::json("{}"));

        client.get_template("Welcome").await.unwrap();

        let mock = client.http_client();
        assert_eq!(only_request_method(mock), http::Method::GET);
        assert_eq!(mock.sent_params().get_str("template"), Some("Welcome"));
    }

    #[tokio::test]
    async fn save_template_name_wins_over_fields() {
        let client = test_client(MockClient::json("{}"));

        client
            .save_template(
                "Welcome",
                Params::new()
                    .with("template", "Other")
                    .with("subject", "Hi {name}"),
            )
            .await
            .unwrap();

        let sent = client.http_client().sent_params();
        assert_eq!(only_request_method(client.http_client()), http::Method::POST);
        assert_eq!(sent.get_str("template"), Some("Welcome"));
        assert_eq!(sent.get_str("subject"), Some("Hi {name}"));
    }
}

mod horizon {
    use super::*;

    #[tokio::test]
    async fn horizon_hid_requests_hid_only() {
        let client = test_client(MockClient::json(r#"{"hid":"h-123"}"#));

        let hid = client.horizon_hid("ann@example.com").await.unwrap();

        let sent = client.http_client().sent_params();
        assert_eq!(hid.as_deref(), Some("h-123"));
        assert_eq!(only_request_path(client.http_client()), "/horizon");
        assert_eq!(sent.get_str("hid_only"), Some("1"));
    }

    #[tokio::test]
    async fn horizon_hid_accepts_numeric_hid() {
        let client = test_client(MockClient::json(r#"{"hid":81234567}"#));

        let hid = client.horizon_hid("ann@example.com").await.unwrap();

        assert_eq!(hid.as_deref(), Some("81234567"));
    }

    #[tokio::test]
    async fn horizon_hid_ignores_null_hid() {
        let client = test_client(MockClient::json(r#"{"hid":null}"#));

        assert_eq!(client.horizon_hid("ann@example.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn horizon_hid_is_none_without_hid() {
        let client = test_client(MockClient::json(r#"{"error":99,"errormsg":"nope"}"#));

        assert_eq!(client.horizon_hid("ann@example.com").await.unwrap(), None);
    }
}
