use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    Select,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    model::query::BrandOrderBy,
    server::{
        data::audit,
        model::{
            audit::Visibility,
            brand::{Brand, CreateBrandParams, UpdateBrandParams},
            category::Reference,
            lookup::BrandLookup,
            params::BrandListParams,
        },
    },
};

pub struct BrandRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BrandRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new brand stamped as created by `actor`.
    ///
    /// The referenced category is not checked here; the service resolves it first.
    pub async fn create(&self, params: CreateBrandParams, actor: Uuid) -> Result<Brand, DbErr> {
        let mut brand = entity::brand::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            website: ActiveValue::Set(params.website),
            category_id: ActiveValue::Set(params.category_id),
            description: ActiveValue::Set(params.description),
            average_price: ActiveValue::Set(params.average_price),
            line_address_1: ActiveValue::Set(params.line_address_1),
            line_address_2: ActiveValue::Set(params.line_address_2),
            city: ActiveValue::Set(params.city),
            postal_code: ActiveValue::Set(params.postal_code),
            ..Default::default()
        };
        audit::stamp_created(&mut brand, actor, Utc::now());

        let model = brand.insert(self.db).await?;

        self.to_domain(model).await
    }

    /// Finds a single brand by the given lookup, with its category resolved.
    pub async fn find(
        &self,
        lookup: BrandLookup,
        visibility: Visibility,
    ) -> Result<Option<Brand>, DbErr> {
        match self.find_model(lookup, visibility).await? {
            Some(model) => Ok(Some(self.to_domain(model).await?)),
            None => Ok(None),
        }
    }

    /// Returns the id of the brand matching the lookup.
    pub async fn find_id(
        &self,
        lookup: BrandLookup,
        visibility: Visibility,
    ) -> Result<Option<Uuid>, DbErr> {
        Ok(self
            .find_model(lookup, visibility)
            .await?
            .map(|model| model.id))
    }

    /// Gets a page of brands, optionally restricted to one category.
    pub async fn list(&self, params: &BrandListParams) -> Result<Vec<Brand>, DbErr> {
        let column = match params.list.order_by {
            BrandOrderBy::Name => entity::brand::Column::Name,
            BrandOrderBy::AveragePrice => entity::brand::Column::AveragePrice,
            BrandOrderBy::CreatedAt => entity::brand::Column::CreatedAt,
            BrandOrderBy::UpdatedAt => entity::brand::Column::UpdatedAt,
        };

        let mut select = entity::prelude::Brand::find();
        if let Some(category_id) = params.category_id {
            select = select.filter(entity::brand::Column::CategoryId.eq(category_id));
        }

        let models = audit::paginate(select, &params.list, column)
            .all(self.db)
            .await?;

        self.to_domain_many(models).await
    }

    /// Applies a partial update to a brand and stamps it as updated by `actor`.
    ///
    /// # Returns
    /// - `Ok(Brand)` - Updated brand
    /// - `Err(DbErr::RecordNotFound)` - No brand with that id
    pub async fn update(&self, params: UpdateBrandParams, actor: Uuid) -> Result<Brand, DbErr> {
        let model = self.get_model(params.id).await?;

        let mut brand: entity::brand::ActiveModel = model.into();
        if let Some(name) = params.name {
            brand.name = ActiveValue::Set(name);
        }
        if let Some(website) = params.website {
            brand.website = ActiveValue::Set(Some(website));
        }
        if let Some(category_id) = params.category_id {
            brand.category_id = ActiveValue::Set(category_id);
        }
        if let Some(description) = params.description {
            brand.description = ActiveValue::Set(Some(description));
        }
        if let Some(average_price) = params.average_price {
            brand.average_price = ActiveValue::Set(Some(average_price));
        }
        if let Some(line_address_1) = params.line_address_1 {
            brand.line_address_1 = ActiveValue::Set(Some(line_address_1));
        }
        if let Some(line_address_2) = params.line_address_2 {
            brand.line_address_2 = ActiveValue::Set(Some(line_address_2));
        }
        if let Some(city) = params.city {
            brand.city = ActiveValue::Set(Some(city));
        }
        if let Some(postal_code) = params.postal_code {
            brand.postal_code = ActiveValue::Set(Some(postal_code));
        }
        audit::stamp_updated(&mut brand, actor, Utc::now());

        let model = brand.update(self.db).await?;

        self.to_domain(model).await
    }

    /// Soft-deletes a brand, stamping it as deleted by `actor`.
    pub async fn soft_delete(&self, id: Uuid, actor: Uuid) -> Result<Brand, DbErr> {
        let model = self.get_model(id).await?;

        let mut brand: entity::brand::ActiveModel = model.into();
        audit::stamp_deleted(&mut brand, actor, Utc::now());

        let model = brand.update(self.db).await?;

        self.to_domain(model).await
    }

    async fn find_model(
        &self,
        lookup: BrandLookup,
        visibility: Visibility,
    ) -> Result<Option<entity::brand::Model>, DbErr> {
        audit::visible(Self::lookup_query(lookup), visibility)
            .one(self.db)
            .await
    }

    async fn get_model(&self, id: Uuid) -> Result<entity::brand::Model, DbErr> {
        entity::prelude::Brand::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Brand with id {} not found",
                id
            )))
    }

    fn lookup_query(lookup: BrandLookup) -> Select<entity::brand::Entity> {
        let select = entity::prelude::Brand::find();
        match lookup {
            BrandLookup::ById(id) => select.filter(entity::brand::Column::Id.eq(id)),
            BrandLookup::ByName(name) => select.filter(entity::brand::Column::Name.eq(name)),
            BrandLookup::ByWebsite(website) => {
                select.filter(entity::brand::Column::Website.eq(website))
            }
        }
    }

    async fn to_domain(&self, model: entity::brand::Model) -> Result<Brand, DbErr> {
        self.to_domain_many(vec![model])
            .await?
            .pop()
            .ok_or_else(|| DbErr::Custom("brand conversion produced no rows".to_string()))
    }

    /// Converts rows to domain models, fetching categories and actors in one query each.
    async fn to_domain_many(
        &self,
        models: Vec<entity::brand::Model>,
    ) -> Result<Vec<Brand>, DbErr> {
        let category_ids: Vec<Uuid> = models.iter().map(|m| m.category_id).collect();

        // Categories are resolved regardless of deletion so old brands keep their names
        let categories_map: HashMap<Uuid, Reference> = if !category_ids.is_empty() {
            entity::prelude::Category::find()
                .filter(entity::category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| {
                    (
                        c.id,
                        Reference {
                            id: c.id,
                            name: c.name,
                        },
                    )
                })
                .collect()
        } else {
            HashMap::new()
        };

        let trails = audit::trails::<_, entity::brand::Entity>(self.db, &models).await?;

        models
            .into_iter()
            .zip(trails)
            .map(|(model, trail)| {
                let category = categories_map.get(&model.category_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Category {} of brand {} not found",
                        model.category_id, model.id
                    ))
                })?;
                Ok(Brand::from_entity(model, category, trail))
            })
            .collect()
    }
}
