use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    Select,
};
use uuid::Uuid;

use crate::{
    model::query::NameOrderBy,
    server::{
        data::audit,
        model::{
            audit::Visibility,
            category::{Category, CreateCategoryParams, UpdateCategoryParams},
            lookup::CategoryLookup,
            params::ListParams,
        },
    },
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new category stamped as created by `actor`.
    pub async fn create(
        &self,
        params: CreateCategoryParams,
        actor: Uuid,
    ) -> Result<Category, DbErr> {
        let mut category = entity::category::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            ..Default::default()
        };
        audit::stamp_created(&mut category, actor, Utc::now());

        let model = category.insert(self.db).await?;

        self.to_domain(model).await
    }

    /// Finds a single category by the given lookup.
    pub async fn find(
        &self,
        lookup: CategoryLookup,
        visibility: Visibility,
    ) -> Result<Option<Category>, DbErr> {
        match self.find_model(lookup, visibility).await? {
            Some(model) => Ok(Some(self.to_domain(model).await?)),
            None => Ok(None),
        }
    }

    /// Returns the id of the category matching the lookup, without resolving its audit trail.
    pub async fn find_id(
        &self,
        lookup: CategoryLookup,
        visibility: Visibility,
    ) -> Result<Option<Uuid>, DbErr> {
        Ok(self
            .find_model(lookup, visibility)
            .await?
            .map(|model| model.id))
    }

    /// Gets a page of categories.
    pub async fn list(&self, params: &ListParams<NameOrderBy>) -> Result<Vec<Category>, DbErr> {
        let column = match params.order_by {
            NameOrderBy::Name => entity::category::Column::Name,
            NameOrderBy::CreatedAt => entity::category::Column::CreatedAt,
            NameOrderBy::UpdatedAt => entity::category::Column::UpdatedAt,
        };

        let models = audit::paginate(entity::prelude::Category::find(), params, column)
            .all(self.db)
            .await?;

        self.to_domain_many(models).await
    }

    /// Applies a partial update to a category and stamps it as updated by `actor`.
    ///
    /// # Returns
    /// - `Ok(Category)` - Updated category
    /// - `Err(DbErr::RecordNotFound)` - No category with that id
    pub async fn update(
        &self,
        params: UpdateCategoryParams,
        actor: Uuid,
    ) -> Result<Category, DbErr> {
        let model = self.get_model(params.id).await?;

        let mut category: entity::category::ActiveModel = model.into();
        if let Some(name) = params.name {
            category.name = ActiveValue::Set(name);
        }
        audit::stamp_updated(&mut category, actor, Utc::now());

        let model = category.update(self.db).await?;

        self.to_domain(model).await
    }

    /// Soft-deletes a category, stamping it as deleted by `actor`.
    pub async fn soft_delete(&self, id: Uuid, actor: Uuid) -> Result<Category, DbErr> {
        let model = self.get_model(id).await?;

        let mut category: entity::category::ActiveModel = model.into();
        audit::stamp_deleted(&mut category, actor, Utc::now());

        let model = category.update(self.db).await?;

        self.to_domain(model).await
    }

    async fn find_model(
        &self,
        lookup: CategoryLookup,
        visibility: Visibility,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        audit::visible(Self::lookup_query(lookup), visibility)
            .one(self.db)
            .await
    }

    async fn get_model(&self, id: Uuid) -> Result<entity::category::Model, DbErr> {
        entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Category with id {} not found",
                id
            )))
    }

    fn lookup_query(lookup: CategoryLookup) -> Select<entity::category::Entity> {
        let select = entity::prelude::Category::find();
        match lookup {
            CategoryLookup::ById(id) => select.filter(entity::category::Column::Id.eq(id)),
            CategoryLookup::ByName(name) => select.filter(entity::category::Column::Name.eq(name)),
        }
    }

    async fn to_domain(&self, model: entity::category::Model) -> Result<Category, DbErr> {
        self.to_domain_many(vec![model])
            .await?
            .pop()
            .ok_or_else(|| DbErr::Custom("category conversion produced no rows".to_string()))
    }

    async fn to_domain_many(
        &self,
        models: Vec<entity::category::Model>,
    ) -> Result<Vec<Category>, DbErr> {
        let trails = audit::trails::<_, entity::category::Entity>(self.db, &models).await?;

        Ok(models
            .into_iter()
            .zip(trails)
            .map(|(model, trail)| Category::from_entity(model, trail))
            .collect())
    }
}
