/// Generate the axum handlers and the `router` function for one entity module.
///
/// Every handler goes through a [`CrudOperations`](crate::operations::CrudOperations)
/// value built with `Default`, so business hooks apply to HTTP traffic too.
/// The four-argument form uses [`DefaultOperations`](crate::operations::DefaultOperations).
///
/// Routes (relative to where the router is nested):
///
/// | method | path          | handler               |
/// |--------|---------------|-----------------------|
/// | GET    | `/`           | `get_all_handler`     |
/// | GET    | `/{id}`       | `get_one_handler`     |
/// | POST   | `/`           | `create_one_handler`  |
/// | PUT    | `/{id}`       | `update_one_handler`  |
/// | PATCH  | `/{id}`       | `patch_one_handler`   |
/// | DELETE | `/{id}`       | `delete_one_handler`  |
/// | DELETE | `/{id}/soft`  | `soft_delete_handler` |
#[macro_export]
macro_rules! crud_handlers {
    ($resource:ty, $create_model:ty, $update_model:ty, $patch_model:ty) => {
        $crate::crud_handlers!(
            $resource,
            $create_model,
            $update_model,
            $patch_model,
            $crate::operations::DefaultOperations<$resource>
        );
    };

    ($resource:ty, $create_model:ty, $update_model:ty, $patch_model:ty, $ops:ty) => {
        #[utoipa::path(
            get,
            path = "/{id}",
            params(("id" = i32, Path, description = "Row id")),
            responses(
                (status = 200, description = "The requested resource", body = $resource),
                (status = 400, description = "Malformed id"),
                (status = 404, description = "Resource not found"),
                (status = 500, description = "Internal Server Error")
            ),
            operation_id = format!("get_one_{}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            summary = format!("Get one {}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            description = format!(
                "Retrieves one {} by its ID, including soft-deleted rows.\n\n{}",
                <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR,
                <$resource as $crate::core::CrudResource>::RESOURCE_DESCRIPTION
            )
        )]
        pub async fn get_one_handler(
            ::axum::extract::State(db): ::axum::extract::State<::sea_orm::DatabaseConnection>,
            ::axum::extract::Path(id): ::axum::extract::Path<i32>,
        ) -> Result<::axum::Json<$resource>, $crate::errors::ApiError> {
            let ops = <$ops>::default();
            $crate::operations::CrudOperations::get_one(&ops, &db, id)
                .await
                .map(::axum::Json)
        }

        #[utoipa::path(
            get,
            path = "/",
            params($crate::models::FilterOptions),
            responses(
                (status = 200, description = "List of resources, with a Content-Range header", body = [$resource]),
                (status = 500, description = "Internal Server Error")
            ),
            operation_id = format!("get_all_{}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_PLURAL),
            summary = format!("Get all {}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_PLURAL),
            description = format!(
                "Retrieves all {}.\n\n{}\n\nSortable columns: {}.\n\nFilterable columns: {}.",
                <$resource as $crate::core::CrudResource>::RESOURCE_NAME_PLURAL,
                <$resource as $crate::core::CrudResource>::RESOURCE_DESCRIPTION,
                <$resource as $crate::core::CrudResource>::sortable_columns()
                    .iter()
                    .map(|(name, _)| format!("\n- {name}"))
                    .collect::<String>(),
                <$resource as $crate::core::CrudResource>::filterable_columns()
                    .iter()
                    .map(|(name, _)| format!("\n- {name}"))
                    .collect::<String>()
            )
        )]
        pub async fn get_all_handler(
            ::axum::extract::Query(params): ::axum::extract::Query<$crate::models::FilterOptions>,
            ::axum::extract::State(db): ::axum::extract::State<::sea_orm::DatabaseConnection>,
        ) -> Result<(::hyper::HeaderMap, ::axum::Json<Vec<$resource>>), $crate::errors::ApiError> {
            let ops = <$ops>::default();
            let (offset, limit) = $crate::filtering::parse_pagination(&params);
            let condition = $crate::filtering::apply_filters::<$resource>(params.filter.as_deref());
            let (order_column, order_direction) = $crate::filtering::parse_sorting(
                &params,
                &<$resource as $crate::core::CrudResource>::sortable_columns(),
                <$resource as $crate::core::CrudResource>::default_index_column(),
            );
            let items = $crate::operations::CrudOperations::get_all(
                &ops,
                &db,
                &condition,
                order_column,
                order_direction,
                offset,
                limit,
            )
            .await?;
            let total_count = $crate::operations::CrudOperations::total_count(&ops, &db, &condition).await?;
            let headers = $crate::filtering::calculate_content_range(
                offset,
                limit,
                total_count,
                <$resource as $crate::core::CrudResource>::RESOURCE_NAME_PLURAL,
            );
            Ok((headers, ::axum::Json(items)))
        }

        #[utoipa::path(
            post,
            path = "/",
            request_body = $create_model,
            responses(
                (status = 201, description = "Resource created successfully", body = $resource),
                (status = 400, description = "Malformed body or rejected by a business rule"),
                (status = 409, description = "Duplicate record"),
                (status = 422, description = "Body does not match the model"),
                (status = 500, description = "Internal Server Error")
            ),
            operation_id = format!("create_one_{}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            summary = format!("Create one {}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            description = format!(
                "Creates a new {}.\n\n{}",
                <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR,
                <$resource as $crate::core::CrudResource>::RESOURCE_DESCRIPTION
            )
        )]
        pub async fn create_one_handler(
            ::axum::extract::State(db): ::axum::extract::State<::sea_orm::DatabaseConnection>,
            payload: Result<::axum::Json<$create_model>, ::axum::extract::rejection::JsonRejection>,
        ) -> Result<(::axum::http::StatusCode, ::axum::Json<$resource>), $crate::errors::ApiError> {
            let ::axum::Json(data) = payload?;
            let ops = <$ops>::default();
            $crate::operations::CrudOperations::create(&ops, &db, data)
                .await
                .map(|item| (::axum::http::StatusCode::CREATED, ::axum::Json(item)))
        }

        #[utoipa::path(
            put,
            path = "/{id}",
            params(("id" = i32, Path, description = "Row id")),
            request_body = $update_model,
            responses(
                (status = 200, description = "Resource replaced successfully", body = $resource),
                (status = 400, description = "Malformed id or body"),
                (status = 404, description = "Resource not found"),
                (status = 409, description = "Duplicate record"),
                (status = 422, description = "Body does not match the model"),
                (status = 500, description = "Internal Server Error")
            ),
            operation_id = format!("update_one_{}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            summary = format!("Replace one {}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            description = format!(
                "Replaces every writable field of one {}. Omitted nullable fields are cleared.\n\n{}",
                <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR,
                <$resource as $crate::core::CrudResource>::RESOURCE_DESCRIPTION
            )
        )]
        pub async fn update_one_handler(
            ::axum::extract::State(db): ::axum::extract::State<::sea_orm::DatabaseConnection>,
            ::axum::extract::Path(id): ::axum::extract::Path<i32>,
            payload: Result<::axum::Json<$update_model>, ::axum::extract::rejection::JsonRejection>,
        ) -> Result<::axum::Json<$resource>, $crate::errors::ApiError> {
            let ::axum::Json(data) = payload?;
            let ops = <$ops>::default();
            $crate::operations::CrudOperations::update(&ops, &db, id, data)
                .await
                .map(::axum::Json)
        }

        #[utoipa::path(
            patch,
            path = "/{id}",
            params(("id" = i32, Path, description = "Row id")),
            request_body = $patch_model,
            responses(
                (status = 200, description = "Resource updated successfully", body = $resource),
                (status = 400, description = "Malformed id or body"),
                (status = 404, description = "Resource not found"),
                (status = 409, description = "Duplicate record"),
                (status = 422, description = "Patch cannot be applied"),
                (status = 500, description = "Internal Server Error")
            ),
            operation_id = format!("patch_one_{}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            summary = format!("Patch one {}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            description = format!(
                "Partially updates one {}. Omitted fields are left alone, `null` clears a nullable field.\n\n{}",
                <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR,
                <$resource as $crate::core::CrudResource>::RESOURCE_DESCRIPTION
            )
        )]
        pub async fn patch_one_handler(
            ::axum::extract::State(db): ::axum::extract::State<::sea_orm::DatabaseConnection>,
            ::axum::extract::Path(id): ::axum::extract::Path<i32>,
            payload: Result<::axum::Json<$patch_model>, ::axum::extract::rejection::JsonRejection>,
        ) -> Result<::axum::Json<$resource>, $crate::errors::ApiError> {
            let ::axum::Json(data) = payload?;
            let ops = <$ops>::default();
            $crate::operations::CrudOperations::patch(&ops, &db, id, data)
                .await
                .map(::axum::Json)
        }

        #[utoipa::path(
            delete,
            path = "/{id}",
            params(("id" = i32, Path, description = "Row id")),
            responses(
                (status = 204, description = "Resource deleted"),
                (status = 404, description = "Resource not found"),
                (status = 500, description = "Internal Server Error")
            ),
            operation_id = format!("delete_one_{}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            summary = format!("Delete one {}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            description = format!(
                "Permanently removes one {}.\n\n{}",
                <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR,
                <$resource as $crate::core::CrudResource>::RESOURCE_DESCRIPTION
            )
        )]
        pub async fn delete_one_handler(
            ::axum::extract::State(db): ::axum::extract::State<::sea_orm::DatabaseConnection>,
            ::axum::extract::Path(id): ::axum::extract::Path<i32>,
        ) -> Result<::axum::http::StatusCode, $crate::errors::ApiError> {
            let ops = <$ops>::default();
            $crate::operations::CrudOperations::delete(&ops, &db, id).await?;
            Ok(::axum::http::StatusCode::NO_CONTENT)
        }

        #[utoipa::path(
            delete,
            path = "/{id}/soft",
            params(("id" = i32, Path, description = "Row id")),
            responses(
                (status = 204, description = "Resource deactivated"),
                (status = 404, description = "Resource not found"),
                (status = 500, description = "Internal Server Error")
            ),
            operation_id = format!("soft_delete_one_{}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            summary = format!("Soft delete one {}", <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR),
            description = format!(
                "Sets `active = false` and stamps `delete_date` on one {}. The row stays readable.\n\n{}",
                <$resource as $crate::core::CrudResource>::RESOURCE_NAME_SINGULAR,
                <$resource as $crate::core::CrudResource>::RESOURCE_DESCRIPTION
            )
        )]
        pub async fn soft_delete_handler(
            ::axum::extract::State(db): ::axum::extract::State<::sea_orm::DatabaseConnection>,
            ::axum::extract::Path(id): ::axum::extract::Path<i32>,
        ) -> Result<::axum::http::StatusCode, $crate::errors::ApiError> {
            let ops = <$ops>::default();
            $crate::operations::CrudOperations::soft_delete(&ops, &db, id).await?;
            Ok(::axum::http::StatusCode::NO_CONTENT)
        }

        pub fn router(db: &::sea_orm::DatabaseConnection) -> ::utoipa_axum::router::OpenApiRouter {
            ::utoipa_axum::router::OpenApiRouter::new()
                .routes(::utoipa_axum::routes!(get_all_handler))
                .routes(::utoipa_axum::routes!(create_one_handler))
                .routes(::utoipa_axum::routes!(get_one_handler))
                .routes(::utoipa_axum::routes!(update_one_handler))
                .routes(::utoipa_axum::routes!(patch_one_handler))
                .routes(::utoipa_axum::routes!(delete_one_handler))
                .routes(::utoipa_axum::routes!(soft_delete_handler))
                .with_state(db.clone())
        }
    };
}
