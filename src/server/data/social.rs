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
            lookup::SocialLookup,
            params::ListParams,
            social::{CreateSocialParams, Social, UpdateSocialParams},
        },
    },
};

pub struct SocialRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SocialRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new social network stamped as created by `actor`.
    pub async fn create(
        &self,
        params: CreateSocialParams,
        actor: Uuid,
    ) -> Result<Social, DbErr> {
        let mut social = entity::social::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            ..Default::default()
        };
        audit::stamp_created(&mut social, actor, Utc::now());

        let model = social.insert(self.db).await?;

        self.to_domain(model).await
    }

    /// Finds a single social by the given lookup.
    pub async fn find(
        &self,
        lookup: SocialLookup,
        visibility: Visibility,
    ) -> Result<Option<Social>, DbErr> {
        match self.find_model(lookup, visibility).await? {
            Some(model) => Ok(Some(self.to_domain(model).await?)),
            None => Ok(None),
        }
    }

    /// Returns the id of the social matching the lookup, without resolving its audit trail.
    pub async fn find_id(
        &self,
        lookup: SocialLookup,
        visibility: Visibility,
    ) -> Result<Option<Uuid>, DbErr> {
        Ok(self
            .find_model(lookup, visibility)
            .await?
            .map(|model| model.id))
    }

    /// Gets a page of socials.
    pub async fn list(&self, params: &ListParams<NameOrderBy>) -> Result<Vec<Social>, DbErr> {
        let column = match params.order_by {
            NameOrderBy::Name => entity::social::Column::Name,
            NameOrderBy::CreatedAt => entity::social::Column::CreatedAt,
            NameOrderBy::UpdatedAt => entity::social::Column::UpdatedAt,
        };

        let models = audit::paginate(entity::prelude::Social::find(), params, column)
            .all(self.db)
            .await?;

        self.to_domain_many(models).await
    }

    /// Applies a partial update to a social and stamps it as updated by `actor`.
    ///
    /// # Returns
    /// - `Ok(Social)` - Updated social
    /// - `Err(DbErr::RecordNotFound)` - No social with that id
    pub async fn update(
        &self,
        params: UpdateSocialParams,
        actor: Uuid,
    ) -> Result<Social, DbErr> {
        let model = self.get_model(params.id).await?;

        let mut social: entity::social::ActiveModel = model.into();
        if let Some(name) = params.name {
            social.name = ActiveValue::Set(name);
        }
        audit::stamp_updated(&mut social, actor, Utc::now());

        let model = social.update(self.db).await?;

        self.to_domain(model).await
    }

    /// Soft-deletes a social, stamping it as deleted by `actor`.
    pub async fn soft_delete(&self, id: Uuid, actor: Uuid) -> Result<Social, DbErr> {
        let model = self.get_model(id).await?;

        let mut social: entity::social::ActiveModel = model.into();
        audit::stamp_deleted(&mut social, actor, Utc::now());

        let model = social.update(self.db).await?;

        self.to_domain(model).await
    }

    async fn find_model(
        &self,
        lookup: SocialLookup,
        visibility: Visibility,
    ) -> Result<Option<entity::social::Model>, DbErr> {
        audit::visible(Self::lookup_query(lookup), visibility)
            .one(self.db)
            .await
    }

    async fn get_model(&self, id: Uuid) -> Result<entity::social::Model, DbErr> {
        entity::prelude::Social::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Social with id {} not found",
                id
            )))
    }

    fn lookup_query(lookup: SocialLookup) -> Select<entity::social::Entity> {
        let select = entity::prelude::Social::find();
        match lookup {
            SocialLookup::ById(id) => select.filter(entity::social::Column::Id.eq(id)),
            SocialLookup::ByName(name) => select.filter(entity::social::Column::Name.eq(name)),
        }
    }

    async fn to_domain(&self, model: entity::social::Model) -> Result<Social, DbErr> {
        self.to_domain_many(vec![model])
            .await?
            .pop()
            .ok_or_else(|| DbErr::Custom("social conversion produced no rows".to_string()))
    }

    async fn to_domain_many(
        &self,
        models: Vec<entity::social::Model>,
    ) -> Result<Vec<Social>, DbErr> {
        let trails = audit::trails::<_, entity::social::Entity>(self.db, &models).await?;

        Ok(models
            .into_iter()
            .zip(trails)
            .map(|(model, trail)| Social::from_entity(model, trail))
            .collect())
    }
}
