use {
    assertor::*,
    photo_share_sql::entity::users,
    photo_share_testing::{
        build_app_service, call_graphql, send_graphql,
        setup::{create_context, seed_user},
        GraphQLCustomRequest,
    },
    sea_orm::{EntityTrait, PaginatorTrait},
    serde_json::json,
    test_case::test_case,
};

const ADD_FAKE_USERS_MUTATION: &str = r#"
  mutation AddFakeUsers($count: Int!) {
    addFakeUsers(count: $count) {
      githubLogin
      name
    }
  }
"#;

const FAKE_USER_AUTH_MUTATION: &str = r#"
  mutation FakeUserAuth($githubLogin: ID!) {
    fakeUserAuth(githubLogin: $githubLogin) {
      token
      user { githubLogin }
    }
  }
"#;

fn add_fake_users_request(count: i32) -> GraphQLCustomRequest<'static> {
    GraphQLCustomRequest {
        name: "addFakeUsers",
        query: ADD_FAKE_USERS_MUTATION,
        variables: json!({ "count": count }).as_object().unwrap().to_owned(),
    }
}

fn fake_user_auth_request(github_login: &str) -> GraphQLCustomRequest<'static> {
    GraphQLCustomRequest {
        name: "fakeUserAuth",
        query: FAKE_USER_AUTH_MUTATION,
        variables: json!({ "githubLogin": github_login })
            .as_object()
            .unwrap()
            .to_owned(),
    }
}

#[test_case(add_fake_users_request(2); "add fake users")]
#[test_case(fake_user_auth_request("gPlake"); "fake user auth")]
#[actix_web::test]
async fn development_mutations_are_disabled_by_default(
    request_body: GraphQLCustomRequest<'static>,
) -> anyhow::Result<()> {
    let setup = create_context(false).await?;

    seed_user(setup.db(), "gPlake", "abc").await?;

    let response = send_graphql(build_app_service(setup.context), &request_body, None).await?;

    assert_that!(response.error_messages())
        .contains_exactly(vec!["development mutations are disabled"]);
    assert_that!(setup.profiles.calls()).is_equal_to(0);

    Ok(())
}

#[actix_web::test]
async fn add_fake_users_stores_generated_profiles() -> anyhow::Result<()> {
    let setup = create_context(true).await?;

    let created = call_graphql::<serde_json::Value>(
        build_app_service(setup.context.clone()),
        add_fake_users_request(3),
        None,
    )
    .await?;

    assert_that!(created.data.as_array().map(Vec::len)).is_equal_to(Some(3));
    assert_that!(setup.profiles.calls()).is_equal_to(1);

    let stored = users::Entity::find_by_id("fake-user-1").one(setup.db()).await?;

    assert_that!(stored.map(|user| user.github_token))
        .is_equal_to(Some("fake-token-1".to_string()));
    assert_that!(users::Entity::find().count(setup.db()).await?).is_equal_to(3);

    Ok(())
}

#[test_case(0; "zero")]
#[test_case(-3; "negative")]
#[actix_web::test]
async fn add_fake_users_ignores_non_positive_count(count: i32) -> anyhow::Result<()> {
    let setup = create_context(true).await?;

    let created = call_graphql::<serde_json::Value>(
        build_app_service(setup.context.clone()),
        add_fake_users_request(count),
        None,
    )
    .await?;

    assert_that!(created.data).is_equal_to(json!([]));
    assert_that!(setup.profiles.calls()).is_equal_to(0);
    assert_that!(users::Entity::find().count(setup.db()).await?).is_equal_to(0);

    Ok(())
}

#[actix_web::test]
async fn add_fake_users_defaults_to_one() -> anyhow::Result<()> {
    let setup = create_context(true).await?;

    let request_body = GraphQLCustomRequest {
        name: "addFakeUsers",
        query: "mutation { addFakeUsers { githubLogin } }",
        variables: Default::default(),
    };

    let created =
        call_graphql::<serde_json::Value>(build_app_service(setup.context), request_body, None)
            .await?;

    assert_that!(created.data).is_equal_to(json!([{ "githubLogin": "fake-user-0" }]));

    Ok(())
}

#[actix_web::test]
async fn fake_user_auth_returns_stored_token() -> anyhow::Result<()> {
    let setup = create_context(true).await?;

    seed_user(setup.db(), "gPlake", "abc").await?;

    let payload = call_graphql::<serde_json::Value>(
        build_app_service(setup.context),
        fake_user_auth_request("gPlake"),
        None,
    )
    .await?;

    assert_that!(payload.data).is_equal_to(json!({
        "token": "abc",
        "user": { "githubLogin": "gPlake" },
    }));

    Ok(())
}

#[actix_web::test]
async fn fake_user_auth_rejects_unknown_login() -> anyhow::Result<()> {
    let setup = create_context(true).await?;

    seed_user(setup.db(), "gPlake", "abc").await?;

    let before = users::Entity::find().all(setup.db()).await?;

    let response = send_graphql(
        build_app_service(setup.context.clone()),
        &fake_user_auth_request("nobody"),
        None,
    )
    .await?;

    assert_that!(response.error_messages())
        .contains_exactly(vec!["Cannot find user with githubLogin nobody"]);
    assert_that!(users::Entity::find().all(setup.db()).await?).contains_exactly(before);

    Ok(())
}

fn profile(github_login: &str, github_token: &str) -> users::Model {
    users::Model {
        github_login: github_login.to_string(),
        name: Some(format!("{github_login} name")),
        avatar: None,
        github_token: github_token.to_string(),
    }
}

#[actix_web::test]
async fn add_fake_users_never_overwrites_stored_users() -> anyhow::Result<()> {
    let setup = create_context(true).await?;

    let stored = seed_user(setup.db(), "gPlake", "abc").await?;

    setup.profiles.replay(vec![
        profile("gPlake", "sha-1"),
        profile("dup", "A"),
        profile("dup", "B"),
    ]);

    let created = call_graphql::<serde_json::Value>(
        build_app_service(setup.context.clone()),
        add_fake_users_request(3),
        None,
    )
    .await?;

    // Only the rows actually written come back.
    assert_that!(created.data).is_equal_to(json!([{ "githubLogin": "dup", "name": "dup name" }]));

    assert_that!(users::Entity::find().all(setup.db()).await?)
        .contains_exactly(vec![stored, profile("dup", "A")]);

    // The seeded user's session still authenticates.
    let me = GraphQLCustomRequest {
        name: "me",
        query: "query { me { githubLogin } }",
        variables: Default::default(),
    };

    let response = call_graphql::<Option<serde_json::Value>>(
        build_app_service(setup.context),
        me,
        Some("abc"),
    )
    .await?;

    assert_that!(response.data).is_equal_to(Some(json!({ "githubLogin": "gPlake" })));

    Ok(())
}
