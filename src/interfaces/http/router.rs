//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::users::UserService;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::users::handlers::UserHandlerState;
use crate::interfaces::http::modules::{health, users};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::handlers::create_user,
        users::handlers::get_user,
        users::handlers::list_users,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            users::dto::UserDto,
            users::dto::CreateUserRequest,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Users", description = "User records with read-time quote enrichment"),
    ),
    info(
        title = "User Quotes Service API",
        version = "1.0.0",
        description = "REST API for user records enriched with quotes at read time",
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(users_service: Arc<UserService>) -> Router {
    let user_state = UserHandlerState {
        users: users_service,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let user_routes = Router::new()
        .route(
            "/",
            get(users::handlers::list_users).post(users::handlers::create_user),
        )
        .route("/{id}", get(users::handlers::get_user))
        .with_state(user_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Users
        .nest("/users", user_routes)
        // Middleware
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
