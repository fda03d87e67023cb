/// Generate the request models and the [`CrudResource`](crate::core::CrudResource)
/// impl for one entity module.
///
/// Invoke it inside the module holding the Sea-ORM `Model`, `ActiveModel`,
/// `Entity` and `Column`. Every entity carries `id`, `active`, `create_date`,
/// `update_date` and `delete_date`; only the domain fields are listed here.
///
/// ```rust,ignore
/// crate::crud_models! {
///     resource: Rol,
///     singular: "rol",
///     plural: "roles",
///     description: "Named permission sets assigned to users.",
///     create: RolCreate,
///     update: RolUpdate,
///     patch: RolPatch,
///     required { name: String }
///     nullable { description: String }
///     like [name, description]
/// }
/// ```
///
/// This yields:
/// - `RolCreate`: POST body, nullable fields may be omitted
/// - `RolUpdate`: PUT body, full replacement of the domain fields
/// - `RolPatch`: PATCH body, every field (plus `active`) wrapped in [`Patch`](crate::patch::Patch)
/// - `pub type Rol = Model;`
#[macro_export]
macro_rules! crud_models {
    (
        resource: $resource:ident,
        singular: $singular:literal,
        plural: $plural:literal,
        description: $description:literal,
        create: $create:ident,
        update: $update:ident,
        patch: $patch:ident,
        required { $( $req:ident : $req_ty:ty ),* $(,)? }
        nullable { $( $opt:ident : $opt_ty:ty ),* $(,)? }
        like [ $( $like:ident ),* $(,)? ]
    ) => {
        use $crate::patch::Patch;

        pub type $resource = Model;

        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize, ::utoipa::ToSchema)]
        pub struct $create {
            $( pub $req: $req_ty, )*
            $( pub $opt: Option<$opt_ty>, )*
        }

        impl From<$create> for ActiveModel {
            fn from(data: $create) -> Self {
                Self {
                    id: ::sea_orm::ActiveValue::NotSet,
                    $( $req: ::sea_orm::ActiveValue::Set(data.$req), )*
                    $( $opt: ::sea_orm::ActiveValue::Set(data.$opt), )*
                    active: ::sea_orm::ActiveValue::Set(true),
                    create_date: ::sea_orm::ActiveValue::Set(::chrono::Utc::now()),
                    update_date: ::sea_orm::ActiveValue::Set(None),
                    delete_date: ::sea_orm::ActiveValue::Set(None),
                }
            }
        }

        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize, ::utoipa::ToSchema)]
        pub struct $update {
            $( pub $req: $req_ty, )*
            $( pub $opt: Option<$opt_ty>, )*
        }

        impl $crate::core::MergeIntoActiveModel<ActiveModel> for $update {
            fn merge_into_activemodel(
                self,
                mut model: ActiveModel,
            ) -> Result<ActiveModel, $crate::errors::ApiError> {
                $( model.$req = ::sea_orm::ActiveValue::Set(self.$req); )*
                $( model.$opt = ::sea_orm::ActiveValue::Set(self.$opt); )*
                Ok(model)
            }
        }

        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize, ::utoipa::ToSchema)]
        pub struct $patch {
            $(
                #[serde(default, skip_serializing_if = "Patch::is_absent")]
                #[schema(value_type = Option<$req_ty>)]
                pub $req: Patch<$req_ty>,
            )*
            $(
                #[serde(default, skip_serializing_if = "Patch::is_absent")]
                #[schema(value_type = Option<$opt_ty>)]
                pub $opt: Patch<$opt_ty>,
            )*
            #[serde(default, skip_serializing_if = "Patch::is_absent")]
            #[schema(value_type = Option<bool>)]
            pub active: Patch<bool>,
        }

        impl $crate::core::MergeIntoActiveModel<ActiveModel> for $patch {
            fn merge_into_activemodel(
                self,
                mut model: ActiveModel,
            ) -> Result<ActiveModel, $crate::errors::ApiError> {
                $( self.$req.merge_required(&mut model.$req, stringify!($req))?; )*
                $( self.$opt.merge_nullable(&mut model.$opt); )*
                self.active.merge_required(&mut model.active, "active")?;
                Ok(model)
            }
        }

        impl $crate::core::CrudResource for Model {
            type EntityType = Entity;
            type ColumnType = Column;
            type ActiveModelType = ActiveModel;
            type CreateModel = $create;
            type UpdateModel = $update;
            type PatchModel = $patch;

            const ID_COLUMN: Column = Column::Id;
            const ACTIVE_COLUMN: Column = Column::Active;
            const UPDATE_DATE_COLUMN: Column = Column::UpdateDate;
            const DELETE_DATE_COLUMN: Column = Column::DeleteDate;
            const RESOURCE_NAME_SINGULAR: &'static str = $singular;
            const RESOURCE_NAME_PLURAL: &'static str = $plural;
            const RESOURCE_DESCRIPTION: &'static str = $description;

            fn sortable_columns() -> Vec<(&'static str, Column)> {
                $crate::core::named_columns(&[
                    "id",
                    $( stringify!($req), )*
                    $( stringify!($opt), )*
                    "active",
                    "create_date",
                    "update_date",
                ])
            }

            fn filterable_columns() -> Vec<(&'static str, Column)> {
                $crate::core::named_columns(&[
                    "id",
                    $( stringify!($req), )*
                    $( stringify!($opt), )*
                    "active",
                ])
            }

            fn like_filterable_columns() -> Vec<&'static str> {
                vec![$( stringify!($like) ),*]
            }
        }
    };
}
