use {
    assert_json_diff::assert_json_eq,
    assertor::*,
    photo_share_testing::{
        build_app_service, call_graphql, send_graphql,
        setup::{create_context, create_context_without_schema, seed_photo, seed_tag, seed_user},
        GraphQLCustomRequest,
    },
    serde_json::json,
    test_case::test_case,
};

const ME_QUERY: &str = r#"
  query {
    me {
      githubLogin
      name
    }
  }
"#;

#[test_case(Some("abc"), Some("gPlake"); "first token")]
#[test_case(Some("xyz"), Some("mHattrup"); "second token")]
#[test_case(Some("not-a-token"), None; "unknown token")]
#[test_case(Some(""), None; "empty header")]
#[test_case(None, None; "no header")]
#[actix_web::test]
async fn me_resolves_token_holder(
    authorization: Option<&str>,
    expected_login: Option<&str>,
) -> anyhow::Result<()> {
    let setup = create_context(false).await?;

    seed_user(setup.db(), "gPlake", "abc").await?;
    seed_user(setup.db(), "mHattrup", "xyz").await?;

    let request_body = GraphQLCustomRequest {
        name: "me",
        query: ME_QUERY,
        variables: Default::default(),
    };

    let response = call_graphql::<Option<serde_json::Value>>(
        build_app_service(setup.context),
        request_body,
        authorization,
    )
    .await?;

    let login = response
        .data
        .as_ref()
        .and_then(|me| me["githubLogin"].as_str());

    assert_that!(login).is_equal_to(expected_login);
    assert_that!(response.errors).is_empty();

    Ok(())
}

#[actix_web::test]
async fn all_users_are_counted_and_sorted() -> anyhow::Result<()> {
    let setup = create_context(false).await?;

    seed_user(setup.db(), "sSchmidt", "t1").await?;
    seed_user(setup.db(), "gPlake", "t2").await?;
    seed_user(setup.db(), "mHattrup", "t3").await?;

    let request_body = GraphQLCustomRequest {
        name: "allUsers",
        query: "query { allUsers { githubLogin } }",
        variables: Default::default(),
    };

    let app_ctx = setup.context.clone();

    let users =
        call_graphql::<serde_json::Value>(build_app_service(app_ctx), request_body, None).await?;

    assert_json_eq!(
        users.data,
        json!([
            { "githubLogin": "gPlake" },
            { "githubLogin": "mHattrup" },
            { "githubLogin": "sSchmidt" },
        ])
    );

    let request_body = GraphQLCustomRequest {
        name: "totalUsers",
        query: "query { totalUsers }",
        variables: Default::default(),
    };

    let total =
        call_graphql::<u64>(build_app_service(setup.context), request_body, None).await?;

    assert_that!(total.data).is_equal_to(3);

    Ok(())
}

#[actix_web::test]
async fn users_resolve_posted_and_tagged_photos() -> anyhow::Result<()> {
    let setup = create_context(false).await?;

    seed_user(setup.db(), "gPlake", "abc").await?;
    seed_user(setup.db(), "sSchmidt", "xyz").await?;

    let dog = seed_photo(setup.db(), "Dog", "gPlake", "1977-03-28T00:00:00").await?;
    let lake = seed_photo(setup.db(), "Lake", "gPlake", "1985-01-02T00:00:00").await?;
    seed_photo(setup.db(), "Beach", "sSchmidt", "2018-04-15T19:09:57").await?;

    seed_tag(setup.db(), dog.id, "sSchmidt").await?;
    seed_tag(setup.db(), lake.id, "sSchmidt").await?;
    seed_tag(setup.db(), lake.id, "gPlake").await?;

    let query = r#"
      query {
        allUsers {
          githubLogin
          postedPhotos { name }
          inPhotos { name }
        }
      }
    "#;

    let request_body = GraphQLCustomRequest {
        name: "allUsers",
        query,
        variables: Default::default(),
    };

    let users =
        call_graphql::<serde_json::Value>(build_app_service(setup.context), request_body, None)
            .await?;

    assert_json_eq!(
        users.data,
        json!([
            {
                "githubLogin": "gPlake",
                "postedPhotos": [{ "name": "Dog" }, { "name": "Lake" }],
                "inPhotos": [{ "name": "Lake" }],
            },
            {
                "githubLogin": "sSchmidt",
                "postedPhotos": [{ "name": "Beach" }],
                "inPhotos": [{ "name": "Dog" }, { "name": "Lake" }],
            },
        ])
    );

    Ok(())
}

#[actix_web::test]
async fn failed_caller_lookup_leaves_request_unauthenticated() -> anyhow::Result<()> {
    // No `users` table, so resolving the token errors out.
    let setup = create_context_without_schema().await?;

    let request_body = GraphQLCustomRequest {
        name: "me",
        query: ME_QUERY,
        variables: Default::default(),
    };

    let response = call_graphql::<Option<serde_json::Value>>(
        build_app_service(setup.context.clone()),
        request_body,
        Some("abc"),
    )
    .await?;

    assert_that!(response.data).is_none();
    assert_that!(response.errors).is_empty();

    let request_body = GraphQLCustomRequest {
        name: "postPhoto",
        query: "mutation { postPhoto(input: { name: \"Dog\" }) { id } }",
        variables: Default::default(),
    };

    let response =
        send_graphql(build_app_service(setup.context), &request_body, Some("abc")).await?;

    assert_that!(response.error_messages())
        .contains_exactly(vec!["only an authorized user can post a photo"]);

    Ok(())
}
