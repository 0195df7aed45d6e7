//! Booking operations.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use blacklight_core::error::{AppError, ErrorKind};
use blacklight_core::result::AppResult;
use blacklight_core::types::{PageRequest, PageResponse};
use blacklight_database::store::{BookingStore, RoomStore};
use blacklight_entity::booking::{Booking, BookingStatus, NewBooking};

use super::policy::BookingPolicy;
use crate::context::RequestContext;

/// A customer's request for a block of hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeBooking {
    pub room_id: Uuid,
    pub date: NaiveDate,
    /// Requested hours; treated as a set.
    pub hours: Vec<i32>,
}

/// Occupancy of one hour of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    Free,
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourSlot {
    pub hour: i32,
    pub state: SlotState,
}

/// Hour-by-hour availability of a room on a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailability {
    pub room_id: Uuid,
    pub date: NaiveDate,
    pub hours: Vec<HourSlot>,
}

#[derive(Clone)]
pub struct BookingService {
    rooms: Arc<dyn RoomStore>,
    bookings: Arc<dyn BookingStore>,
    policy: BookingPolicy,
}

impl BookingService {
    pub fn new(
        rooms: Arc<dyn RoomStore>,
        bookings: Arc<dyn BookingStore>,
        policy: BookingPolicy,
    ) -> Self {
        Self {
            rooms,
            bookings,
            policy,
        }
    }

    /// Validate the requested hours, price them, and create a pending booking
    /// if no active booking on the same room and date overlaps them.
    pub async fn propose_booking(
        &self,
        ctx: &RequestContext,
        req: ProposeBooking,
    ) -> AppResult<Booking> {
        let window = self.policy.select(&req.hours)?;

        let room = self
            .rooms
            .find_by_id(req.room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {} not found", req.room_id)))?;
        if !room.is_available {
            return Err(AppError::validation(format!(
                "Room '{}' is not accepting bookings",
                room.name
            )));
        }

        let quote = self.policy.quote(room.hourly_rate, &window);
        let booking = self
            .bookings
            .create_if_free(&NewBooking {
                room_id: room.id,
                customer_id: ctx.user_id,
                booking_date: req.date,
                window,
                total_price: quote.total_price,
                deposit_amount: quote.deposit_amount,
            })
            .await
            .inspect_err(|e| {
                if e.is(ErrorKind::SlotConflict) {
                    warn!(room_id = %room.id, date = %req.date, hours = %window, "Booking rejected: slot taken");
                }
            })?;

        info!(
            booking_id = %booking.id,
            room_id = %room.id,
            customer_id = %ctx.user_id,
            date = %booking.booking_date,
            hours = %window,
            total = %booking.total_price,
            deposit = %booking.deposit_amount,
            "Booking created"
        );
        Ok(booking)
    }

    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Booking> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
        ctx.ensure_can_access(booking.customer_id, "booking")?;
        Ok(booking)
    }

    /// Admins see every booking, customers only their own.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        self.bookings.list(ctx.owner_filter(), page).await
    }

    /// Hour-by-hour occupancy of a room over the operating window.
    pub async fn availability(&self, room_id: Uuid, date: NaiveDate) -> AppResult<RoomAvailability> {
        if self.rooms.find_by_id(room_id).await?.is_none() {
            return Err(AppError::not_found(format!("Room {room_id} not found")));
        }
        let active = self.bookings.find_active_for_room(room_id, date).await?;

        let hours = self
            .policy
            .operating_hours()
            .map(|hour| {
                let state = active
                    .iter()
                    .find(|b| b.window().contains(hour))
                    .map(|b| match b.status {
                        BookingStatus::Confirmed => SlotState::Confirmed,
                        _ => SlotState::Pending,
                    })
                    .unwrap_or(SlotState::Free);
                HourSlot { hour, state }
            })
            .collect();

        Ok(RoomAvailability {
            room_id,
            date,
            hours,
        })
    }

    /// Admin status change following the booking transition table.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        next: BookingStatus,
    ) -> AppResult<Booking> {
        let booking = self.bookings.update_status(id, next).await?;
        info!(
            booking_id = %id,
            status = %booking.status,
            by = %ctx.user_id,
            "Booking status changed"
        );
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use rust_decimal::Decimal;
    use blacklight_database::Stores;

    fn service(stores: &Stores) -> BookingService {
        BookingService::new(
            stores.rooms.clone(),
            stores.bookings.clone(),
            BookingPolicy::default(),
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
    }

    fn request(room_id: Uuid, hours: &[i32]) -> ProposeBooking {
        ProposeBooking {
            room_id,
            date: date(),
            hours: hours.to_vec(),
        }
    }

    #[tokio::test]
    async fn test_prices_three_hours_with_rounded_deposit() {
        let stores = Stores::memory();
        let ctx = testing::customer(&stores, "ali@example.com").await;
        let room = testing::room(&stores, 100).await;

        let booking = service(&stores)
            .propose_booking(&ctx, request(room.id, &[14, 15, 16]))
            .await
            .unwrap();

        assert_eq!(booking.start_hour, 14);
        assert_eq!(booking.duration_hours, 3);
        assert_eq!(booking.total_price, Decimal::from(300));
        assert_eq!(booking.deposit_amount, Decimal::from(60));
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(!booking.payment_status.is_paid());
        assert_eq!(booking.customer_id, ctx.user_id);
    }

    #[tokio::test]
    async fn test_non_contiguous_hours_rejected() {
        let stores = Stores::memory();
        let ctx = testing::customer(&stores, "ali@example.com").await;
        let room = testing::room(&stores, 100).await;

        let err = service(&stores)
            .propose_booking(&ctx, request(room.id, &[10, 12]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSlotSelection);
    }

    #[tokio::test]
    async fn test_overlap_with_confirmed_rejected_adjacent_accepted() {
        let stores = Stores::memory();
        let admin = testing::admin(&stores).await;
        let ctx = testing::customer(&stores, "ali@example.com").await;
        let room = testing::room(&stores, 100).await;
        let svc = service(&stores);

        let first = svc
            .propose_booking(&ctx, request(room.id, &[14, 15]))
            .await
            .unwrap();
        svc.update_status(&admin, first.id, BookingStatus::Confirmed)
            .await
            .unwrap();

        let err = svc
            .propose_booking(&ctx, request(room.id, &[15, 16]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::SlotConflict);

        assert!(svc.propose_booking(&ctx, request(room.id, &[16, 17])).await.is_ok());
    }

    #[tokio::test]
    async fn test_same_hours_other_room_or_date_are_independent() {
        let stores = Stores::memory();
        let ctx = testing::customer(&stores, "ali@example.com").await;
        let a = testing::room(&stores, 100).await;
        let b = testing::room(&stores, 100).await;
        let svc = service(&stores);

        svc.propose_booking(&ctx, request(a.id, &[20])).await.unwrap();
        svc.propose_booking(&ctx, request(b.id, &[20])).await.unwrap();
        let mut next_day = request(a.id, &[20]);
        next_day.date = date().succ_opt().unwrap();
        svc.propose_booking(&ctx, next_day).await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_identical_requests_exactly_one_wins() {
        let stores = Stores::memory();
        let room = testing::room(&stores, 100).await;
        let svc = service(&stores);
        let c1 = testing::customer(&stores, "one@example.com").await;
        let c2 = testing::customer(&stores, "two@example.com").await;

        let (s1, s2) = (svc.clone(), svc.clone());
        let (r1, r2) = (request(room.id, &[18, 19]), request(room.id, &[18, 19]));
        let h1 = tokio::spawn(async move { s1.propose_booking(&c1, r1).await });
        let h2 = tokio::spawn(async move { s2.propose_booking(&c2, r2).await });
        let results = [h1.await.unwrap(), h2.await.unwrap()];

        let ok = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(e) if e.kind == ErrorKind::SlotConflict))
            .count();
        assert_eq!((ok, conflicts), (1, 1));
    }

    #[tokio::test]
    async fn test_status_transitions() {
        let stores = Stores::memory();
        let admin = testing::admin(&stores).await;
        let ctx = testing::customer(&stores, "ali@example.com").await;
        let room = testing::room(&stores, 100).await;
        let svc = service(&stores);

        let b = svc.propose_booking(&ctx, request(room.id, &[9])).await.unwrap();
        svc.update_status(&admin, b.id, BookingStatus::Confirmed).await.unwrap();
        svc.update_status(&admin, b.id, BookingStatus::Completed).await.unwrap();

        let err = svc
            .update_status(&admin, b.id, BookingStatus::Confirmed)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidStatusTransition);
    }

    #[tokio::test]
    async fn test_rejection_frees_hours() {
        let stores = Stores::memory();
        let admin = testing::admin(&stores).await;
        let ctx = testing::customer(&stores, "ali@example.com").await;
        let room = testing::room(&stores, 100).await;
        let svc = service(&stores);

        let b = svc.propose_booking(&ctx, request(room.id, &[12, 13])).await.unwrap();
        svc.update_status(&admin, b.id, BookingStatus::Rejected).await.unwrap();
        assert!(svc.propose_booking(&ctx, request(room.id, &[12, 13])).await.is_ok());
    }

    #[tokio::test]
    async fn test_unavailable_room_rejected() {
        let stores = Stores::memory();
        let ctx = testing::customer(&stores, "ali@example.com").await;
        let room = testing::room(&stores, 100).await;
        stores
            .rooms
            .update(
                room.id,
                &blacklight_entity::room::UpdateRoom {
                    is_available: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let err = service(&stores)
            .propose_booking(&ctx, request(room.id, &[10]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_availability_marks_pending_and_confirmed() {
        let stores = Stores::memory();
        let admin = testing::admin(&stores).await;
        let ctx = testing::customer(&stores, "ali@example.com").await;
        let room = testing::room(&stores, 100).await;
        let svc = service(&stores);

        let b = svc.propose_booking(&ctx, request(room.id, &[10, 11])).await.unwrap();
        svc.update_status(&admin, b.id, BookingStatus::Confirmed).await.unwrap();
        svc.propose_booking(&ctx, request(room.id, &[15])).await.unwrap();

        let avail = svc.availability(room.id, date()).await.unwrap();
        assert_eq!(avail.hours.len(), 15);
        let state = |h: i32| avail.hours.iter().find(|s| s.hour == h).unwrap().state;
        assert_eq!(state(9), SlotState::Free);
        assert_eq!(state(10), SlotState::Confirmed);
        assert_eq!(state(11), SlotState::Confirmed);
        assert_eq!(state(12), SlotState::Free);
        assert_eq!(state(15), SlotState::Pending);
    }

    #[tokio::test]
    async fn test_customers_only_see_their_own() {
        let stores = Stores::memory();
        let admin = testing::admin(&stores).await;
        let c1 = testing::customer(&stores, "one@example.com").await;
        let c2 = testing::customer(&stores, "two@example.com").await;
        let room = testing::room(&stores, 100).await;
        let svc = service(&stores);

        let b1 = svc.propose_booking(&c1, request(room.id, &[9])).await.unwrap();
        svc.propose_booking(&c2, request(room.id, &[10])).await.unwrap();

        let page = PageRequest::default();
        assert_eq!(svc.list(&c1, &page).await.unwrap().total_items, 1);
        assert_eq!(svc.list(&admin, &page).await.unwrap().total_items, 2);
        assert_eq!(
            svc.get(&c2, b1.id).await.unwrap_err().kind,
            ErrorKind::Forbidden
        );
    }
}
