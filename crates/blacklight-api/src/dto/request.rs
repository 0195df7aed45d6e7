//! Request DTOs with validation.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use blacklight_entity::ad::CreateAd;
use blacklight_entity::booking::BookingStatus;
use blacklight_entity::order::{OrderLine, OrderStatus, OrderType};
use blacklight_entity::product::{CreateProduct, ProductCategory, UpdateProduct};
use blacklight_entity::room::{CreateRoom, RoomType, UpdateRoom};
use blacklight_entity::user::UpdateProfile;
use blacklight_service::booking::ProposeBooking;
use blacklight_service::order::PlaceOrder;
use blacklight_service::user::{Credentials, Registration};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid e-mail address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            phone_number: req.phone_number,
            location: req.location,
            image: req.image,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "E-mail is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<LoginRequest> for Credentials {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfile {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            phone_number: req.phone_number,
            location: req.location,
            image: req.image,
        }
    }
}

fn default_ps_model() -> String {
    "PS5".to_string()
}

fn default_true() -> bool {
    true
}

/// Create room request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(alias = "type")]
    pub room_type: RoomType,
    pub hourly_rate: Decimal,
    #[serde(default = "default_ps_model")]
    pub ps_model: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

impl From<CreateRoomRequest> for CreateRoom {
    fn from(req: CreateRoomRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            image: req.image,
            room_type: req.room_type,
            hourly_rate: req.hourly_rate,
            ps_model: req.ps_model,
            is_available: req.is_available,
        }
    }
}

/// Partial room update (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(alias = "type")]
    pub room_type: Option<RoomType>,
    pub hourly_rate: Option<Decimal>,
    pub ps_model: Option<String>,
    pub is_available: Option<bool>,
}

impl From<UpdateRoomRequest> for UpdateRoom {
    fn from(req: UpdateRoomRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            image: req.image,
            room_type: req.room_type,
            hourly_rate: req.hourly_rate,
            ps_model: req.ps_model,
            is_available: req.is_available,
        }
    }
}

/// `?date=YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
}

/// Booking request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub room_id: Uuid,
    pub date: NaiveDate,
    #[validate(length(max = 256, message = "Too many hours selected"))]
    pub hours: Vec<i32>,
}

impl From<CreateBookingRequest> for ProposeBooking {
    fn from(req: CreateBookingRequest) -> Self {
        Self {
            room_id: req.room_id,
            date: req.date,
            hours: req.hours,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

/// `?category=Drink`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<ProductCategory>,
}

/// Create product request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: ProductCategory,
    pub price: Decimal,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,
}

impl From<CreateProductRequest> for CreateProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            image: req.image,
            category: req.category,
            price: req.price,
            stock: req.stock,
        }
    }
}

/// Partial product update (admin). Setting `stock` restocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<ProductCategory>,
    pub price: Option<Decimal>,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,
}

impl From<UpdateProductRequest> for UpdateProduct {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            image: req.image,
            category: req.category,
            price: req.price,
            stock: req.stock,
        }
    }
}

/// Checkout request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[validate(length(min = 1, message = "An order needs at least one item"))]
    pub items: Vec<OrderLine>,
    pub order_type: OrderType,
    pub location: Option<String>,
    pub phone_number: Option<String>,
}

impl From<PlaceOrderRequest> for PlaceOrder {
    fn from(req: PlaceOrderRequest) -> Self {
        Self {
            items: req.items,
            order_type: req.order_type,
            location: req.location,
            phone_number: req.phone_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// Create ad request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[validate(url)]
    pub link: Option<String>,
    #[serde(default)]
    pub is_permanent: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<CreateAdRequest> for CreateAd {
    fn from(req: CreateAdRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            image: req.image,
            link: req.link,
            is_permanent: req.is_permanent,
            expires_at: req.expires_at,
        }
    }
}
