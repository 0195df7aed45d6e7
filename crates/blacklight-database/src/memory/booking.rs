//! Bookings.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_core::types::{PageRequest, PageResponse};
use blacklight_entity::booking::{Booking, BookingStatus, NewBooking};
use blacklight_entity::payment::PaymentStatus;
use blacklight_entity::report::BookingTotals;

use super::MemoryStore;
use crate::store::BookingStore;

#[async_trait]
impl BookingStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        let state = self.state.lock().await;
        Ok(state.bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn list(
        &self,
        customer_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        let state = self.state.lock().await;
        let matching: Vec<Booking> = state
            .bookings
            .iter()
            .rev()
            .filter(|b| customer_id.is_none_or(|c| b.customer_id == c))
            .cloned()
            .collect();
        let total = matching.len() as u64;
        Ok(PageResponse::new(page.slice(&matching), page, total))
    }

    async fn find_active_for_room(
        &self,
        room_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        let state = self.state.lock().await;
        let mut active: Vec<Booking> = state
            .bookings
            .iter()
            .filter(|b| b.room_id == room_id && b.booking_date == date && b.status.is_active())
            .cloned()
            .collect();
        active.sort_by_key(|b| b.start_hour);
        Ok(active)
    }

    async fn create_if_free(&self, booking: &NewBooking) -> AppResult<Booking> {
        let mut state = self.state.lock().await;
        if !state.rooms.contains_key(&booking.room_id) {
            return Err(AppError::not_found(format!(
                "Room {} not found",
                booking.room_id
            )));
        }

        let clash = state.bookings.iter().find(|b| {
            b.room_id == booking.room_id
                && b.booking_date == booking.booking_date
                && b.blocks(&booking.window)
        });
        if let Some(existing) = clash {
            return Err(AppError::slot_conflict(format!(
                "{} on {} overlaps an existing booking ({})",
                booking.window,
                booking.booking_date,
                existing.window()
            )));
        }

        let now = Utc::now();
        let created = Booking {
            id: Uuid::new_v4(),
            room_id: booking.room_id,
            customer_id: booking.customer_id,
            booking_date: booking.booking_date,
            start_hour: booking.window.start,
            duration_hours: booking.window.duration(),
            total_price: booking.total_price,
            deposit_amount: booking.deposit_amount,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            created_at: now,
            updated_at: now,
        };
        state.bookings.push(created.clone());
        Ok(created)
    }

    async fn update_status(&self, id: Uuid, next: BookingStatus) -> AppResult<Booking> {
        let mut state = self.state.lock().await;
        let booking = state
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
        if !booking.status.can_transition_to(next) {
            return Err(AppError::invalid_status_transition(booking.status, next));
        }
        booking.status = next;
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }

    async fn mark_paid(&self, id: Uuid) -> AppResult<Booking> {
        let mut state = self.state.lock().await;
        let booking = state
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
        if !booking.payment_status.is_paid() {
            booking.payment_status = PaymentStatus::Paid;
            booking.updated_at = Utc::now();
        }
        Ok(booking.clone())
    }

    async fn totals(&self, day: NaiveDate) -> AppResult<BookingTotals> {
        let state = self.state.lock().await;
        Ok(BookingTotals::tally(&state.bookings, day))
    }
}
