mod audit;
mod brand;
mod brand_social;
mod category;
mod social;
mod user;
