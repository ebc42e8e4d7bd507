pub use super::brand::Entity as Brand;
pub use super::brand_social::Entity as BrandSocial;
pub use super::category::Entity as Category;
pub use super::social::Entity as Social;
pub use super::user::Entity as User;
