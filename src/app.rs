//! Schema bootstrap and router assembly.

use axum::Router;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use crate::entities::{
    aprendiz, aprendiz_program, enterprise, form, form_module, instructor, instructor_program,
    module, person, process, program, regional, rol, rol_form, user, user_rol,
};

type RouterFn = fn(&DatabaseConnection) -> OpenApiRouter;

/// Path segment and router of every entity, mounted as `{prefix}/{segment}`.
pub const RESOURCES: &[(&str, RouterFn)] = &[
    ("person", person::router),
    ("user", user::router),
    ("rol", rol::router),
    ("form", form::router),
    ("module", module::router),
    ("regional", regional::router),
    ("enterprise", enterprise::router),
    ("instructor", instructor::router),
    ("aprendiz", aprendiz::router),
    ("program", program::router),
    ("process", process::router),
    ("user_rol", user_rol::router),
    ("rol_form", rol_form::router),
    ("form_module", form_module::router),
    ("aprendiz_program", aprendiz_program::router),
    ("instructor_program", instructor_program::router),
];

#[derive(OpenApi)]
#[openapi(info(
    title = "Training Registry API",
    description = "CRUD endpoints for people, users, roles, forms, programs and their assignments."
))]
struct ApiDoc;

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;
    Ok(())
}

/// Create every table that does not exist yet, parents before the tables
/// that reference them.
///
/// # Errors
///
/// Returns the first `DbErr` raised by the store.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, person::Entity).await?;
    create_table(db, &schema, rol::Entity).await?;
    create_table(db, &schema, form::Entity).await?;
    create_table(db, &schema, module::Entity).await?;
    create_table(db, &schema, regional::Entity).await?;
    create_table(db, &schema, enterprise::Entity).await?;
    create_table(db, &schema, program::Entity).await?;
    create_table(db, &schema, process::Entity).await?;
    create_table(db, &schema, user::Entity).await?;
    create_table(db, &schema, instructor::Entity).await?;
    create_table(db, &schema, aprendiz::Entity).await?;
    create_table(db, &schema, user_rol::Entity).await?;
    create_table(db, &schema, rol_form::Entity).await?;
    create_table(db, &schema, form_module::Entity).await?;
    create_table(db, &schema, aprendiz_program::Entity).await?;
    create_table(db, &schema, instructor_program::Entity).await?;

    tracing::info!(tables = RESOURCES.len(), "Database schema ready");
    Ok(())
}

/// Every entity router nested under `api_prefix`, with the OpenAPI document.
#[must_use]
pub fn api_router(db: &DatabaseConnection, api_prefix: &str) -> OpenApiRouter {
    RESOURCES.iter().fold(
        OpenApiRouter::with_openapi(ApiDoc::openapi()),
        |router, (segment, resource_router)| {
            router.nest(&format!("{api_prefix}/{segment}"), resource_router(db))
        },
    )
}

/// The complete application: entity routes plus the Scalar UI at `/docs`.
#[must_use]
pub fn build_router(db: &DatabaseConnection, api_prefix: &str) -> Router {
    let (router, api) = api_router(db, api_prefix).split_for_parts();
    router.merge(Scalar::with_url("/docs", api))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    #[tokio::test]
    async fn test_create_tables_is_idempotent() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        create_tables(&db).await.unwrap();
        create_tables(&db).await.unwrap();

        let people = person::Entity::find().all(&db).await.unwrap();
        assert!(people.is_empty());
    }

    #[tokio::test]
    async fn test_openapi_lists_every_resource() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let (_, api) = api_router(&db, "/api").split_for_parts();

        for (segment, _) in RESOURCES {
            let item = format!("/api/{segment}/{{id}}");
            assert!(api.paths.paths.contains_key(&item), "missing {item}");
            let soft = format!("/api/{segment}/{{id}}/soft");
            assert!(api.paths.paths.contains_key(&soft), "missing {soft}");
        }
    }
}
