use {
    assert_json_diff::assert_json_eq,
    photo_share_testing::{build_app_service, call_graphql, setup::create_context, GraphQLCustomRequest},
    serde_json::json,
    test_case::test_case,
};

#[test_case("Tag", json!([{ "name": "photoID" }, { "name": "userID" }]); "tag")]
#[test_case(
    "AuthPayload",
    json!([{ "name": "token" }, { "name": "user" }]);
    "auth payload"
)]
#[actix_web::test]
async fn object_types_expose_fields(name: &str, fields: serde_json::Value) -> anyhow::Result<()> {
    let setup = create_context(false).await?;

    let query = r#"
      query Type($name: String!) {
        __type(name: $name) {
          fields { name }
        }
      }
    "#;

    let request_body = GraphQLCustomRequest {
        name: "__type",
        query,
        variables: json!({ "name": name }).as_object().unwrap().to_owned(),
    };

    let ty =
        call_graphql::<serde_json::Value>(build_app_service(setup.context), request_body, None)
            .await?;

    assert_json_eq!(ty.data, json!({ "fields": fields }));

    Ok(())
}

#[actix_web::test]
async fn photo_category_lists_every_value() -> anyhow::Result<()> {
    let setup = create_context(false).await?;

    let request_body = GraphQLCustomRequest {
        name: "__type",
        query: r#"query { __type(name: "PhotoCategory") { enumValues { name } } }"#,
        variables: Default::default(),
    };

    let ty =
        call_graphql::<serde_json::Value>(build_app_service(setup.context), request_body, None)
            .await?;

    assert_json_eq!(
        ty.data,
        json!({
            "enumValues": [
                { "name": "SELFIE" },
                { "name": "PORTRAIT" },
                { "name": "ACTION" },
                { "name": "LANDSCAPE" },
                { "name": "GRAPHIC" },
            ]
        })
    );

    Ok(())
}

#[actix_web::test]
async fn date_time_scalar_is_declared() -> anyhow::Result<()> {
    let setup = create_context(false).await?;

    let request_body = GraphQLCustomRequest {
        name: "__type",
        query: r#"query { __type(name: "DateTime") { kind description } }"#,
        variables: Default::default(),
    };

    let ty =
        call_graphql::<serde_json::Value>(build_app_service(setup.context), request_body, None)
            .await?;

    assert_json_eq!(
        ty.data,
        json!({ "kind": "SCALAR", "description": "A valid date time value" })
    );

    Ok(())
}
