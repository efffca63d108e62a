mod error {
    pub use devfolio::error::*;
}

mod site {
    pub use devfolio::site::*;
}

mod endpoints {
    pub use devfolio::api::endpoints::*;
}

mod client_under_test {
    #![allow(dead_code)]

    include!("../src/api/client.rs");

    #[test]
    fn unwraps_site_config_envelope() {
        let envelope: SiteConfigEnvelope = serde_json::from_str(
            r##"{"siteConfig":{"name":"Jane Doe","title":"Engineer","description":"d","accentColor":"#000","aboutMe":"a","skills":["Rust"]}}"##,
        )
        .expect("envelope should parse");

        assert_eq!(envelope.site_config.name, "Jane Doe");
        assert_eq!(envelope.site_config.skills, ["Rust"]);
    }

    #[test]
    fn envelope_without_site_config_is_rejected() {
        let result = serde_json::from_str::<SiteConfigEnvelope>(r#"{"ok":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_error_body_gets_placeholder_message() {
        let error = map_api_error(StatusCode::INTERNAL_SERVER_ERROR, "   ");

        match error {
            AppError::Api(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("no error details in response body"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn error_envelope_with_only_blank_fields_is_ignored() {
        assert_eq!(parse_api_error_message(r#"{"error":" "}"#), None);
        assert_eq!(
            parse_api_error_message(r#"{"message":"portfolio is private"}"#).as_deref(),
            Some("portfolio is private")
        );
    }
}
