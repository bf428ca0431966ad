use {
    crate::{auth, context::Context, graphql::AppSchema},
    actix_web::{get, web, HttpRequest, HttpResponse, Resource},
    async_graphql::http::{playground_source, GraphQLPlaygroundConfig, GraphiQLSource},
    async_graphql_actix_web::{GraphQLBatchRequest, GraphQLResponse},
};

pub fn graphql_route() -> Resource {
    web::resource("/graphql")
        .route(web::post().to(graphql_index))
        .route(web::get().to(graphiql))
}

pub(crate) async fn graphql_index(
    schema: web::Data<AppSchema>,
    app_ctx: web::Data<Context>,
    req: HttpRequest,
    gql_request: GraphQLBatchRequest,
) -> GraphQLResponse {
    let current_user = auth::current_user(&app_ctx.db, req.headers()).await;

    schema
        .execute_batch(gql_request.into_inner().data(current_user))
        .await
        .into()
}

pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[get("/playground")]
pub async fn playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
