use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    Select,
};
use uuid::Uuid;

use crate::{
    model::query::UserOrderBy,
    server::{
        data::audit,
        model::{
            audit::Visibility,
            lookup::UserLookup,
            params::ListParams,
            user::{CreateUserParams, Credentials, UpdateUserParams, User},
        },
    },
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user through signup.
    ///
    /// There is no acting user yet, so `created_by` references the new user itself.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let id = Uuid::new_v4();
        let mut user = entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_digest),
            ..Default::default()
        };
        audit::stamp_created(&mut user, id, Utc::now());

        let model = user.insert(self.db).await?;

        self.to_domain(model).await
    }

    /// Finds a single user by the given lookup.
    pub async fn find(
        &self,
        lookup: UserLookup,
        visibility: Visibility,
    ) -> Result<Option<User>, DbErr> {
        match self.find_model(lookup, visibility).await? {
            Some(model) => Ok(Some(self.to_domain(model).await?)),
            None => Ok(None),
        }
    }

    /// Returns the id of the user matching the lookup.
    pub async fn find_id(
        &self,
        lookup: UserLookup,
        visibility: Visibility,
    ) -> Result<Option<Uuid>, DbErr> {
        Ok(self
            .find_model(lookup, visibility)
            .await?
            .map(|model| model.id))
    }

    /// Gets the stored credentials of an active user for login.
    ///
    /// Soft-deleted users have no credentials.
    pub async fn find_credentials(&self, username: &str) -> Result<Option<Credentials>, DbErr> {
        Ok(self
            .find_model(UserLookup::ByUsername(username.to_string()), Visibility::Active)
            .await?
            .map(|model| Credentials {
                id: model.id,
                password_digest: model.password,
            }))
    }

    /// Gets a page of users.
    pub async fn list(&self, params: &ListParams<UserOrderBy>) -> Result<Vec<User>, DbErr> {
        let column = match params.order_by {
            UserOrderBy::Username => entity::user::Column::Username,
            UserOrderBy::Email => entity::user::Column::Email,
            UserOrderBy::CreatedAt => entity::user::Column::CreatedAt,
            UserOrderBy::UpdatedAt => entity::user::Column::UpdatedAt,
        };

        let models = audit::paginate(entity::prelude::User::find(), params, column)
            .all(self.db)
            .await?;

        self.to_domain_many(models).await
    }

    /// Applies a partial update to a user and stamps it as updated by `actor`.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    pub async fn update(&self, params: UpdateUserParams, actor: Uuid) -> Result<User, DbErr> {
        let model = self.get_model(params.id).await?;

        let mut user: entity::user::ActiveModel = model.into();
        if let Some(email) = params.email {
            user.email = ActiveValue::Set(Some(email));
        }
        if let Some(password_digest) = params.password_digest {
            user.password = ActiveValue::Set(password_digest);
        }
        audit::stamp_updated(&mut user, actor, Utc::now());

        let model = user.update(self.db).await?;

        self.to_domain(model).await
    }

    /// Soft-deletes a user, stamping it as deleted by `actor`.
    pub async fn soft_delete(&self, id: Uuid, actor: Uuid) -> Result<User, DbErr> {
        let model = self.get_model(id).await?;

        let mut user: entity::user::ActiveModel = model.into();
        audit::stamp_deleted(&mut user, actor, Utc::now());

        let model = user.update(self.db).await?;

        self.to_domain(model).await
    }

    async fn find_model(
        &self,
        lookup: UserLookup,
        visibility: Visibility,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        audit::visible(Self::lookup_query(lookup), visibility)
            .one(self.db)
            .await
    }

    async fn get_model(&self, id: Uuid) -> Result<entity::user::Model, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {} not found", id)))
    }

    fn lookup_query(lookup: UserLookup) -> Select<entity::user::Entity> {
        let select = entity::prelude::User::find();
        match lookup {
            UserLookup::ById(id) => select.filter(entity::user::Column::Id.eq(id)),
            UserLookup::ByUsername(username) => {
                select.filter(entity::user::Column::Username.eq(username))
            }
            UserLookup::ByEmail(email) => select.filter(entity::user::Column::Email.eq(email)),
        }
    }

    async fn to_domain(&self, model: entity::user::Model) -> Result<User, DbErr> {
        self.to_domain_many(vec![model])
            .await?
            .pop()
            .ok_or_else(|| DbErr::Custom("user conversion produced no rows".to_string()))
    }

    async fn to_domain_many(&self, models: Vec<entity::user::Model>) -> Result<Vec<User>, DbErr> {
        let trails = audit::trails::<_, entity::user::Entity>(self.db, &models).await?;

        Ok(models
            .into_iter()
            .zip(trails)
            .map(|(model, trail)| User::from_entity(model, trail))
            .collect())
    }
}
