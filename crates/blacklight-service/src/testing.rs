//! Fixtures shared by the service tests.

use rust_decimal::Decimal;
use uuid::Uuid;

use blacklight_database::Stores;
use blacklight_entity::product::{CreateProduct, Product, ProductCategory};
use blacklight_entity::room::{CreateRoom, Room, RoomType};
use blacklight_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

pub async fn user(stores: &Stores, email: &str, role: UserRole) -> User {
    stores
        .users
        .create(&CreateUser {
            name: email.split('@').next().unwrap_or(email).to_string(),
            email: email.to_string(),
            password_hash: "unused".into(),
            role,
            phone_number: None,
            location: Some("Nasr City".into()),
            image: None,
        })
        .await
        .unwrap()
}

pub fn ctx(user: &User) -> RequestContext {
    RequestContext::new(user.id, user.role, user.email.clone(), user.name.clone())
}

pub async fn customer(stores: &Stores, email: &str) -> RequestContext {
    ctx(&user(stores, email, UserRole::Customer).await)
}

pub async fn admin(stores: &Stores) -> RequestContext {
    ctx(&user(stores, "admin@blacklight.test", UserRole::Admin).await)
}

pub async fn room(stores: &Stores, rate: i64) -> Room {
    stores
        .rooms
        .create(&CreateRoom {
            name: format!("Room {}", Uuid::new_v4().simple()),
            description: None,
            image: None,
            room_type: RoomType::Vip,
            hourly_rate: Decimal::from(rate),
            ps_model: "PS5".into(),
            is_available: true,
        })
        .await
        .unwrap()
}

pub async fn product(stores: &Stores, name: &str, price: i64, stock: i32) -> Product {
    stores
        .products
        .create(&CreateProduct {
            name: name.into(),
            description: None,
            image: None,
            category: ProductCategory::Drink,
            price: Decimal::from(price),
            stock,
        })
        .await
        .unwrap()
}
