use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    Select,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    model::query::BrandSocialOrderBy,
    server::{
        data::audit,
        model::{
            audit::Visibility,
            brand_social::{BrandSocial, CreateBrandSocialParams, UpdateBrandSocialParams},
            category::Reference,
            lookup::BrandSocialLookup,
            params::ListParams,
        },
    },
};

pub struct BrandSocialRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BrandSocialRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a brand to a social network, stamped as created by `actor`.
    pub async fn create(
        &self,
        params: CreateBrandSocialParams,
        actor: Uuid,
    ) -> Result<BrandSocial, DbErr> {
        let mut link = entity::brand_social::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            brand_id: ActiveValue::Set(params.brand_id),
            social_id: ActiveValue::Set(params.social_id),
            address: ActiveValue::Set(params.address),
            ..Default::default()
        };
        audit::stamp_created(&mut link, actor, Utc::now());

        let model = link.insert(self.db).await?;

        self.to_domain(model).await
    }

    /// Finds a single link by the given lookup, with brand and social resolved.
    pub async fn find(
        &self,
        lookup: BrandSocialLookup,
        visibility: Visibility,
    ) -> Result<Option<BrandSocial>, DbErr> {
        match self.find_model(lookup, visibility).await? {
            Some(model) => Ok(Some(self.to_domain(model).await?)),
            None => Ok(None),
        }
    }

    /// Returns the id of the link matching the lookup.
    pub async fn find_id(
        &self,
        lookup: BrandSocialLookup,
        visibility: Visibility,
    ) -> Result<Option<Uuid>, DbErr> {
        Ok(self
            .find_model(lookup, visibility)
            .await?
            .map(|model| model.id))
    }

    /// Gets a page of the social links of one brand.
    pub async fn list_by_brand(
        &self,
        brand_id: Uuid,
        params: &ListParams<BrandSocialOrderBy>,
    ) -> Result<Vec<BrandSocial>, DbErr> {
        let column = match params.order_by {
            BrandSocialOrderBy::Address => entity::brand_social::Column::Address,
            BrandSocialOrderBy::CreatedAt => entity::brand_social::Column::CreatedAt,
            BrandSocialOrderBy::UpdatedAt => entity::brand_social::Column::UpdatedAt,
        };

        let select = entity::prelude::BrandSocial::find()
            .filter(entity::brand_social::Column::BrandId.eq(brand_id));

        let models = audit::paginate(select, params, column)
            .all(self.db)
            .await?;

        self.to_domain_many(models).await
    }

    /// Applies a partial update to a link and stamps it as updated by `actor`.
    ///
    /// # Returns
    /// - `Ok(BrandSocial)` - Updated link
    /// - `Err(DbErr::RecordNotFound)` - No link with that id
    pub async fn update(
        &self,
        params: UpdateBrandSocialParams,
        actor: Uuid,
    ) -> Result<BrandSocial, DbErr> {
        let model = self.get_model(params.id).await?;

        let mut link: entity::brand_social::ActiveModel = model.into();
        if let Some(social_id) = params.social_id {
            link.social_id = ActiveValue::Set(social_id);
        }
        if let Some(address) = params.address {
            link.address = ActiveValue::Set(address);
        }
        audit::stamp_updated(&mut link, actor, Utc::now());

        let model = link.update(self.db).await?;

        self.to_domain(model).await
    }

    /// Soft-deletes a link, stamping it as deleted by `actor`.
    pub async fn soft_delete(&self, id: Uuid, actor: Uuid) -> Result<BrandSocial, DbErr> {
        let model = self.get_model(id).await?;

        let mut link: entity::brand_social::ActiveModel = model.into();
        audit::stamp_deleted(&mut link, actor, Utc::now());

        let model = link.update(self.db).await?;

        self.to_domain(model).await
    }

    async fn find_model(
        &self,
        lookup: BrandSocialLookup,
        visibility: Visibility,
    ) -> Result<Option<entity::brand_social::Model>, DbErr> {
        audit::visible(Self::lookup_query(lookup), visibility)
            .one(self.db)
            .await
    }

    async fn get_model(&self, id: Uuid) -> Result<entity::brand_social::Model, DbErr> {
        entity::prelude::BrandSocial::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Brand social with id {} not found",
                id
            )))
    }

    fn lookup_query(lookup: BrandSocialLookup) -> Select<entity::brand_social::Entity> {
        let select = entity::prelude::BrandSocial::find();
        match lookup {
            BrandSocialLookup::ById(id) => select.filter(entity::brand_social::Column::Id.eq(id)),
            BrandSocialLookup::ByAddress(address) => {
                select.filter(entity::brand_social::Column::Address.eq(address))
            }
        }
    }

    async fn to_domain(&self, model: entity::brand_social::Model) -> Result<BrandSocial, DbErr> {
        self.to_domain_many(vec![model])
            .await?
            .pop()
            .ok_or_else(|| DbErr::Custom("brand social conversion produced no rows".to_string()))
    }

    /// Converts rows to domain models, resolving brands, socials and actors in bulk.
    async fn to_domain_many(
        &self,
        models: Vec<entity::brand_social::Model>,
    ) -> Result<Vec<BrandSocial>, DbErr> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let brand_ids: Vec<Uuid> = models.iter().map(|m| m.brand_id).collect();
        let social_ids: Vec<Uuid> = models.iter().map(|m| m.social_id).collect();

        let brands_map: HashMap<Uuid, Reference> = entity::prelude::Brand::find()
            .filter(entity::brand::Column::Id.is_in(brand_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|b| (b.id, Reference { id: b.id, name: b.name }))
            .collect();

        let socials_map: HashMap<Uuid, Reference> = entity::prelude::Social::find()
            .filter(entity::social::Column::Id.is_in(social_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, Reference { id: s.id, name: s.name }))
            .collect();

        let trails = audit::trails::<_, entity::brand_social::Entity>(self.db, &models).await?;

        models
            .into_iter()
            .zip(trails)
            .map(|(model, trail)| {
                let brand = brands_map.get(&model.brand_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Brand {} not found", model.brand_id))
                })?;
                let social = socials_map.get(&model.social_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Social {} not found", model.social_id))
                })?;
                Ok(BrandSocial::from_entity(model, brand, social, trail))
            })
            .collect()
    }
}
