use {
    actix_web::{
        body::MessageBody,
        dev::{ServiceFactory, ServiceRequest, ServiceResponse},
        http::{
            header::{
                HeaderMap, ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD,
                AUTHORIZATION, ORIGIN,
            },
            Method, StatusCode,
        },
        middleware::{Compress, Logger},
        test::{call_service, init_service, read_body, try_call_service, TestRequest},
        App,
    },
    anyhow::anyhow,
    photo_share_httpd::{
        config::HttpdConfig,
        context::Context,
        graphql::build_schema,
        server::{config_app, cors},
    },
    serde::{de::DeserializeOwned, Deserialize, Serialize},
    std::collections::HashMap,
};

pub mod fakes;
pub mod setup;

#[derive(Serialize, Debug)]
pub struct GraphQLCustomRequest<'a> {
    /// Top level field read back from `data`.
    #[serde(skip_serializing)]
    pub name: &'a str,
    pub query: &'a str,
    pub variables: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub struct GraphQLResponse {
    pub data: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

impl GraphQLResponse {
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|error| error.message.as_str()).collect()
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct GraphQLError {
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct GraphQLCustomResponse<R> {
    pub data: R,
    pub errors: Vec<GraphQLError>,
}

pub fn build_app_service(
    app_ctx: Context,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    build_app_service_with_httpd(app_ctx, &HttpdConfig::default())
}

/// Same as [`build_app_service`] with the CORS policy built from `httpd`.
pub fn build_app_service_with_httpd(
    app_ctx: Context,
    httpd: &HttpdConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    let graphql_schema = build_schema(app_ctx.clone());

    App::new()
        .wrap(Logger::default())
        .wrap(Compress::default())
        .wrap(cors(httpd))
        .configure(config_app(app_ctx, graphql_schema))
}

/// Post a GraphQL request, optionally as the holder of `authorization`, and
/// return the whole response.
pub async fn send_graphql(
    app: App<
        impl ServiceFactory<
                ServiceRequest,
                Response = ServiceResponse<impl MessageBody>,
                Config = (),
                InitError = (),
                Error = actix_web::Error,
            > + 'static,
    >,
    request_body: &GraphQLCustomRequest<'_>,
    authorization: Option<&str>,
) -> anyhow::Result<GraphQLResponse> {
    let app = init_service(app).await;

    let mut request = TestRequest::post().uri("/graphql").set_json(request_body);

    if let Some(authorization) = authorization {
        request = request.insert_header((AUTHORIZATION, authorization));
    }

    let response = call_service(&app, request.to_request()).await;
    let body = read_body(response).await;

    Ok(serde_json::from_slice(&body)?)
}

/// Post a GraphQL request and decode the field named by the request.
pub async fn call_graphql<R>(
    app: App<
        impl ServiceFactory<
                ServiceRequest,
                Response = ServiceResponse<impl MessageBody>,
                Config = (),
                InitError = (),
                Error = actix_web::Error,
            > + 'static,
    >,
    request_body: GraphQLCustomRequest<'_>,
    authorization: Option<&str>,
) -> anyhow::Result<GraphQLCustomResponse<R>>
where
    R: DeserializeOwned,
{
    let graphql_response = send_graphql(app, &request_body, authorization).await?;

    let data = graphql_response
        .data
        .and_then(|mut data| data.remove(request_body.name))
        .ok_or_else(|| {
            anyhow!(
                "can't find {} in response, errors: {:?}",
                request_body.name,
                graphql_response.errors
            )
        })?;

    Ok(GraphQLCustomResponse {
        data: serde_json::from_value(data)?,
        errors: graphql_response.errors,
    })
}

/// Issue a GET and return the status with the body as text.
pub async fn call_get(
    app: App<
        impl ServiceFactory<
                ServiceRequest,
                Response = ServiceResponse<impl MessageBody>,
                Config = (),
                InitError = (),
                Error = actix_web::Error,
            > + 'static,
    >,
    uri: &str,
) -> anyhow::Result<(StatusCode, String)> {
    let app = init_service(app).await;

    let request = TestRequest::get().uri(uri).to_request();

    let response = call_service(&app, request).await;
    let status = response.status();
    let body = read_body(response).await;

    Ok((status, String::from_utf8(body.to_vec())?))
}

/// Send a CORS preflight for `POST /graphql` from `origin` and return the
/// status with the response headers.
pub async fn call_preflight(
    app: App<
        impl ServiceFactory<
                ServiceRequest,
                Response = ServiceResponse<impl MessageBody>,
                Config = (),
                InitError = (),
                Error = actix_web::Error,
            > + 'static,
    >,
    origin: &str,
) -> anyhow::Result<(StatusCode, HeaderMap)> {
    let app = init_service(app).await;

    let request = TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/graphql")
        .insert_header((ORIGIN, origin))
        .insert_header((ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((ACCESS_CONTROL_REQUEST_HEADERS, "authorization, content-type"))
        .to_request();

    // A rejected preflight may surface as a service error instead of a response.
    match try_call_service(&app, request).await {
        Ok(response) => Ok((response.status(), response.headers().clone())),
        Err(error) => Ok((error.as_response_error().status_code(), HeaderMap::new())),
    }
}
