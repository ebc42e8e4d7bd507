pub mod auth;
pub mod brand;
pub mod brand_social;
pub mod category;
pub mod social;
pub mod user;

#[cfg(test)]
mod test;
