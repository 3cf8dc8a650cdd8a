use crate::domain::{Action, AddOrder, ApiKey, OrderId, Params, RefillId, ServiceId};

/// Build the form pairs for one panel call: `key`, `action`, then every present
/// parameter in name order.
///
/// Parameters named `key` or `action` never override the credential or the action;
/// they are dropped.
pub fn encode_form(api_key: &ApiKey, action: &str, params: &Params) -> Vec<(String, String)> {
    let mut form = vec![
        (ApiKey::FIELD.to_owned(), api_key.as_str().to_owned()),
        (Action::FIELD.to_owned(), action.to_owned()),
    ];
    for (name, value) in params.present() {
        if name == ApiKey::FIELD || name == Action::FIELD {
            log::warn!("dropping reserved parameter `{name}` from `{action}` request");
            continue;
        }
        form.push((name.to_owned(), value.to_string()));
    }
    form
}

pub fn encode_order_params(order: &OrderId) -> Params {
    Params::new().with(OrderId::FIELD, order.as_str())
}

pub fn encode_orders_params(orders: &[OrderId]) -> Params {
    Params::new().with(
        OrderId::LIST_FIELD,
        join_ids(orders.iter().map(OrderId::as_str)),
    )
}

pub fn encode_refill_params(refill: &RefillId) -> Params {
    Params::new().with(RefillId::FIELD, refill.as_str())
}

pub fn encode_refills_params(refills: &[RefillId]) -> Params {
    Params::new().with(
        RefillId::LIST_FIELD,
        join_ids(refills.iter().map(RefillId::as_str)),
    )
}

pub fn encode_add_order_params(request: &AddOrder) -> Params {
    let options = request.options();
    Params::new()
        .with(ServiceId::FIELD, request.service().as_str())
        .with(AddOrder::LINK_FIELD, request.link())
        .with(AddOrder::QUANTITY_FIELD, request.quantity())
        .with_optional(
            AddOrder::COMMENTS_FIELD,
            options
                .comments
                .as_deref()
                .filter(|comments| !comments.is_empty()),
        )
        .with_optional(AddOrder::RUNS_FIELD, options.runs.filter(|runs| *runs > 0))
        .with_optional(
            AddOrder::INTERVAL_FIELD,
            options.interval.filter(|interval| *interval > 0),
        )
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    ids.collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use crate::domain::{AddOrderOptions, ParamValue};

    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("secret").unwrap()
    }

    fn decode(form: &[(String, String)]) -> BTreeMap<String, String> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish();
        url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn form_starts_with_key_and_action() {
        let form = encode_form(&key(), "balance", &Params::new());
        assert_eq!(
            form,
            vec![
                ("key".to_owned(), "secret".to_owned()),
                ("action".to_owned(), "balance".to_owned()),
            ]
        );
    }

    #[test]
    fn form_round_trips_present_params_and_omits_absent() {
        let params = Params::new()
            .with("link", "https://example.com/p?a=1&b=ä ö")
            .with("quantity", 1000u64)
            .with("delta", -3i64)
            .with("rate", 0.25)
            .with_optional("comments", None::<String>)
            .with_optional("runs", Some(5u32));

        let decoded = decode(&encode_form(&key(), "add", &params));

        let mut expected = BTreeMap::new();
        expected.insert("key".to_owned(), "secret".to_owned());
        expected.insert("action".to_owned(), "add".to_owned());
        for (name, value) in params.present() {
            expected.insert(name.to_owned(), value.to_string());
        }
        assert_eq!(decoded, expected);
        assert!(!decoded.contains_key("comments"));
        assert_eq!(decoded["link"], "https://example.com/p?a=1&b=ä ö");
        assert_eq!(decoded["rate"], "0.25");
    }

    fn param_value() -> impl Strategy<Value = ParamValue> {
        prop_oneof![
            "\\PC*".prop_map(ParamValue::Text),
            any::<i64>().prop_map(ParamValue::Int),
            any::<u64>().prop_map(ParamValue::UInt),
            (-1.0e9..1.0e9f64).prop_map(ParamValue::Float),
        ]
    }

    proptest! {
        #[test]
        fn form_round_trip_holds_for_any_params(
            entries in proptest::collection::btree_map(
                "[a-z_]{1,12}",
                proptest::option::of(param_value()),
                0..8,
            )
        ) {
            let mut params = Params::new();
            for (name, value) in &entries {
                params.insert(name.clone(), value.clone());
            }

            let form = encode_form(&key(), "status", &params);
            prop_assert_eq!(&form[0], &("key".to_owned(), "secret".to_owned()));
            prop_assert_eq!(&form[1], &("action".to_owned(), "status".to_owned()));

            let decoded = decode(&form);
            let mut expected = BTreeMap::new();
            expected.insert("key".to_owned(), "secret".to_owned());
            expected.insert("action".to_owned(), "status".to_owned());
            for (name, value) in &entries {
                if let Some(value) = value {
                    if name != "key" && name != "action" {
                        expected.insert(name.clone(), value.to_string());
                    }
                }
            }
            prop_assert_eq!(&decoded, &expected);

            let reserved = [ApiKey::FIELD, Action::FIELD];
            for (name, value) in &entries {
                if value.is_none() && !reserved.contains(&name.as_str()) {
                    prop_assert!(!decoded.contains_key(name.as_str()));
                }
            }
        }
    }

    #[test]
    fn api_key_is_sent_verbatim() {
        let form = encode_form(&ApiKey::new(" secret ").unwrap(), "balance", &Params::new());
        assert_eq!(decode(&form)["key"], " secret ");
    }

    #[test]
    fn reserved_names_do_not_override_credential_or_action() {
        let params = Params::new()
            .with("key", "other")
            .with("action", "cancel")
            .with("order", 1u64);

        let form = encode_form(&key(), "status", &params);
        assert_eq!(form.len(), 3);
        let decoded = decode(&form);
        assert_eq!(decoded["key"], "secret");
        assert_eq!(decoded["action"], "status");
        assert_eq!(decoded["order"], "1");
    }

    #[test]
    fn id_lists_are_comma_joined() {
        let orders = [OrderId::from(1), OrderId::from(10), OrderId::from(100)];
        let params = encode_orders_params(&orders);
        assert_eq!(
            params.get("orders"),
            Some(&ParamValue::Text("1,10,100".to_owned()))
        );

        let refills = [RefillId::from(7)];
        let params = encode_refills_params(&refills);
        assert_eq!(params.get("refills"), Some(&ParamValue::Text("7".to_owned())));
    }

    #[test]
    fn add_order_sends_required_fields_only_by_default() {
        let request = AddOrder::new(
            ServiceId::from(1),
            "http://example.com/test",
            100,
            AddOrderOptions::default(),
        )
        .unwrap();

        let params = encode_add_order_params(&request);
        let present: Vec<_> = params.present().map(|(name, _)| name).collect();
        assert_eq!(present, ["link", "quantity", "service"]);
        assert_eq!(params.get("quantity"), Some(&ParamValue::UInt(100)));
    }

    #[test]
    fn add_order_skips_empty_comments_and_zero_drip_feed() {
        let request = AddOrder::new(
            ServiceId::from(1),
            "http://example.com/test",
            100,
            AddOrderOptions {
                comments: Some(String::new()),
                runs: Some(0),
                interval: Some(0),
            },
        )
        .unwrap();
        let params = encode_add_order_params(&request);
        assert_eq!(params.present().count(), 3);

        let request = AddOrder::new(
            ServiceId::from(1),
            "http://example.com/test",
            100,
            AddOrderOptions {
                comments: Some("good pic\ngreat photo".to_owned()),
                runs: Some(2),
                interval: Some(5),
            },
        )
        .unwrap();
        let params = encode_add_order_params(&request);
        assert_eq!(
            params.get("comments"),
            Some(&ParamValue::Text("good pic\ngreat photo".to_owned()))
        );
        assert_eq!(params.get("runs"), Some(&ParamValue::UInt(2)));
        assert_eq!(params.get("interval"), Some(&ParamValue::UInt(5)));
    }
}
