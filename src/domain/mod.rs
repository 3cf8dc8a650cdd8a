//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Action, AddOrder, AddOrderOptions, ParamValue, Params};
pub use response::{JsonKind, JsonList, JsonObject};
pub use validation::ValidationError;
pub use value::{ApiKey, Endpoint, OrderId, RefillId, ServiceId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_blank_and_keeps_value_verbatim() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
        assert_eq!(ApiKey::new(" abc ").unwrap().as_str(), " abc ");
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        assert!(!format!("{key:?}").contains("super-secret"));
    }

    #[test]
    fn endpoint_requires_http_url() {
        assert!(Endpoint::parse("https://panel.example/api/v2").is_ok());
        assert!(Endpoint::parse("http://127.0.0.1:8080/api").is_ok());
        assert!(matches!(
            Endpoint::parse("ftp://panel.example/api"),
            Err(ValidationError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            Endpoint::parse("not a url"),
            Err(ValidationError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            Endpoint::parse(""),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn ids_reject_empty_and_accept_numbers() {
        assert!(OrderId::new(" ").is_err());
        assert!(RefillId::new("").is_err());
        assert!(ServiceId::new("\t").is_err());
        assert_eq!(OrderId::from(23501).as_str(), "23501");
        assert_eq!(OrderId::new(" 42 ").unwrap().as_str(), "42");
    }

    #[test]
    fn ids_deserialize_through_validation() {
        let id: OrderId = serde_json::from_str("\"17\"").unwrap();
        assert_eq!(id.as_str(), "17");
        assert!(serde_json::from_str::<OrderId>("\"  \"").is_err());
    }

    #[test]
    fn add_order_requires_link() {
        let err = AddOrder::new(ServiceId::from(1), "  ", 100, AddOrderOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: AddOrder::LINK_FIELD
            }
        );
    }

    #[test]
    fn add_order_keeps_link_verbatim() {
        let request = AddOrder::new(
            ServiceId::from(1),
            " https://example.com/p ",
            100,
            AddOrderOptions::default(),
        )
        .unwrap();
        assert_eq!(request.link(), " https://example.com/p ");
    }

    #[test]
    fn params_skip_absent_values() {
        let params = Params::new()
            .with("quantity", 100u64)
            .with_optional("comments", None::<String>)
            .with("link", "http://example.com/test");

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("comments"), None);
        let present: Vec<_> = params.present().map(|(name, _)| name).collect();
        assert_eq!(present, ["link", "quantity"]);
    }

    #[test]
    fn param_values_use_plain_formatting() {
        assert_eq!(ParamValue::from(-5).to_string(), "-5");
        assert_eq!(ParamValue::from(100u64).to_string(), "100");
        assert_eq!(ParamValue::from(1.5).to_string(), "1.5");
        assert_eq!(ParamValue::from(100.0).to_string(), "100");
        assert_eq!(ParamValue::from("a b").to_string(), "a b");
    }

    #[test]
    fn action_names_match_panel_api() {
        assert_eq!(Action::RefillStatus.as_str(), "refill_status");
        assert_eq!(Action::Add.to_string(), "add");
    }

    #[test]
    fn json_kind_names_values() {
        assert_eq!(JsonKind::of(&serde_json::json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&serde_json::json!([1])).as_str(), "array");
        assert_eq!(JsonKind::of(&serde_json::json!("x")).to_string(), "string");
    }
}
