//! Rooms, products and ads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_entity::ad::{Ad, CreateAd};
use blacklight_entity::product::{CreateProduct, Product, ProductCategory, UpdateProduct};
use blacklight_entity::room::{CreateRoom, Room, UpdateRoom};

use super::MemoryStore;
use crate::store::{AdStore, ProductStore, RoomStore};

#[async_trait]
impl RoomStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        Ok(self.state.lock().await.rooms.get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Room>> {
        let state = self.state.lock().await;
        let mut rooms: Vec<Room> = state.rooms.values().cloned().collect();
        rooms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rooms)
    }

    async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        let now = Utc::now();
        let room = Room {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            description: data.description.clone(),
            image: data.image.clone(),
            room_type: data.room_type,
            hourly_rate: data.hourly_rate,
            ps_model: data.ps_model.clone(),
            is_available: data.is_available,
            created_at: now,
            updated_at: now,
        };
        self.state.lock().await.rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn update(&self, id: Uuid, data: &UpdateRoom) -> AppResult<Option<Room>> {
        let mut state = self.state.lock().await;
        Ok(state.rooms.get_mut(&id).map(|room| {
            data.apply_to(room);
            room.updated_at = Utc::now();
            room.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        if state.bookings.iter().any(|b| b.room_id == id) {
            return Err(AppError::conflict(
                "Failed to delete room: record is still referenced",
            ));
        }
        Ok(state.rooms.remove(&id).is_some())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.state.lock().await.products.get(&id).cloned())
    }

    async fn list(&self, category: Option<ProductCategory>) -> AppResult<Vec<Product>> {
        let state = self.state.lock().await;
        let mut products: Vec<Product> = state
            .products
            .values()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .cloned()
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn create(&self, data: &CreateProduct) -> AppResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            description: data.description.clone(),
            image: data.image.clone(),
            category: data.category,
            price: data.price,
            stock: data.stock,
            created_at: now,
            updated_at: now,
        };
        self.state
            .lock()
            .await
            .products
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: Uuid, data: &UpdateProduct) -> AppResult<Option<Product>> {
        let mut state = self.state.lock().await;
        Ok(state.products.get_mut(&id).map(|product| {
            data.apply_to(product);
            product.updated_at = Utc::now();
            product.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let referenced = state
            .orders
            .iter()
            .flat_map(|o| o.items.iter())
            .any(|item| item.product_id == id);
        if referenced {
            return Err(AppError::conflict(
                "Failed to delete product: record is still referenced",
            ));
        }
        Ok(state.products.remove(&id).is_some())
    }
}

#[async_trait]
impl AdStore for MemoryStore {
    async fn list_active(&self, now: DateTime<Utc>) -> AppResult<Vec<Ad>> {
        let state = self.state.lock().await;
        Ok(state
            .ads
            .iter()
            .rev()
            .filter(|ad| ad.is_active(now))
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateAd) -> AppResult<Ad> {
        let ad = Ad {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            description: data.description.clone(),
            image: data.image.clone(),
            link: data.link.clone(),
            is_permanent: data.is_permanent,
            expires_at: data.expires_at,
            created_at: Utc::now(),
        };
        self.state.lock().await.ads.push(ad.clone());
        Ok(ad)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.ads.len();
        state.ads.retain(|ad| ad.id != id);
        Ok(state.ads.len() < before)
    }
}
